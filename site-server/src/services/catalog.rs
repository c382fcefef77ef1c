//! Main page
//!
//! Assembles the public landing page from catalog reads and the startup
//! settings.

use shared::models::{MainPage, SiteSettings, UserFlags};
use shared::util::now_millis;
use sqlx::SqlitePool;

use crate::auth::CurrentUser;
use crate::db::repository::catalog;
use crate::utils::AppResult;

/// Login and manager flags for page contexts
pub fn user_flags(user: Option<&CurrentUser>) -> UserFlags {
    UserFlags {
        user_auth: user.is_some(),
        user_manager: user.is_some_and(CurrentUser::is_manager),
    }
}

pub async fn main_page(
    pool: &SqlitePool,
    settings: &SiteSettings,
    user: Option<&CurrentUser>,
) -> AppResult<MainPage> {
    Ok(MainPage {
        user: user_flags(user),
        categories: catalog::visible_categories(pool).await?,
        dishes: catalog::visible_dishes(pool).await?,
        specials: catalog::specials(pool).await?,
        about_us: settings.about_us.clone(),
        info_blocks: catalog::info_blocks(pool).await?,
        events: catalog::upcoming_events(pool, now_millis()).await?,
        gallery: catalog::gallery(pool).await?,
        crew: catalog::crew(pool).await?,
        testimonials: catalog::visible_testimonials(pool).await?,
        hero: catalog::hero_sections(pool).await?,
        contact_info: settings.contact_info.clone(),
        footer: settings.footer.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_pool;
    use crate::services::settings::load_site_settings;
    use std::collections::BTreeSet;

    fn user(roles: &[&str]) -> CurrentUser {
        CurrentUser {
            account_id: 1,
            username: "u".to_string(),
            session_id: "s".to_string(),
            roles: roles.iter().map(|r| r.to_string()).collect::<BTreeSet<_>>(),
        }
    }

    #[test]
    fn test_user_flags() {
        assert_eq!(user_flags(None), UserFlags::default());
        let plain = user(&[]);
        assert_eq!(
            user_flags(Some(&plain)),
            UserFlags {
                user_auth: true,
                user_manager: false
            }
        );
        let boss = user(&["manager"]);
        assert!(user_flags(Some(&boss)).user_manager);
    }

    #[tokio::test]
    async fn test_main_page_on_empty_catalog() {
        let pool = test_pool().await;
        let settings = load_site_settings(&pool).await.unwrap();
        let page = main_page(&pool, &settings, None).await.unwrap();
        assert!(page.dishes.is_empty());
        assert!(!page.user.user_auth);
        assert_eq!(page.contact_info.header, "Contact");
    }
}
