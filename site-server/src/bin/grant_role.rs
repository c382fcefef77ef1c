//! Grant a role to an existing account
//!
//! ```text
//! grant-role <username> [role]
//! ```
//!
//! `role` defaults to `manager`. Uses the same `DATABASE_PATH` / `WORK_DIR`
//! settings as the server.

use shared::models::MANAGER_ROLE;
use site_server::db::DbService;
use site_server::services::accounts;
use site_server::{Config, init_logger};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    init_logger();

    let mut args = std::env::args().skip(1);
    let Some(username) = args.next() else {
        eprintln!("usage: grant-role <username> [role]");
        std::process::exit(2);
    };
    let role = args.next().unwrap_or_else(|| MANAGER_ROLE.to_string());

    let config = Config::from_env();
    config.ensure_work_dir_structure()?;
    let db = DbService::new(&config.database_path).await?;

    let account = accounts::grant_role(&db.pool, &username, &role).await?;
    println!("granted '{role}' to {} (id {})", account.username, account.id);
    Ok(())
}
