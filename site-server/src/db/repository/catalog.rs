//! Catalog Repository
//!
//! Read side of the main page content.

use super::RepoResult;
use shared::models::{
    Category, CrewMember, Dish, Event, GalleryPhoto, HeroSection, InfoBlock, Testimonial,
};
use shared::util::slugify;
use sqlx::SqlitePool;

const DISH_COLUMNS: &str = "id, name, position, price, description, ingredients, is_visible, special, photo, category_id";

fn with_slugs(mut dishes: Vec<Dish>) -> Vec<Dish> {
    for dish in &mut dishes {
        dish.slug = slugify(&dish.name);
    }
    dishes
}

/// Visible categories by position
pub async fn visible_categories(pool: &SqlitePool) -> RepoResult<Vec<Category>> {
    let rows = sqlx::query_as::<_, Category>(
        "SELECT id, name, position, is_visible FROM category WHERE is_visible = 1 ORDER BY position",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Visible dishes by position, then price
pub async fn visible_dishes(pool: &SqlitePool) -> RepoResult<Vec<Dish>> {
    let sql = format!("SELECT {DISH_COLUMNS} FROM dish WHERE is_visible = 1 ORDER BY position, price");
    let rows = sqlx::query_as::<_, Dish>(&sql).fetch_all(pool).await?;
    Ok(with_slugs(rows))
}

/// Dishes flagged special, visible or not, by position then price
pub async fn specials(pool: &SqlitePool) -> RepoResult<Vec<Dish>> {
    let sql = format!("SELECT {DISH_COLUMNS} FROM dish WHERE special = 1 ORDER BY position, price");
    let rows = sqlx::query_as::<_, Dish>(&sql).fetch_all(pool).await?;
    Ok(with_slugs(rows))
}

/// Events starting strictly after `now`, soonest first
pub async fn upcoming_events(pool: &SqlitePool, now: i64) -> RepoResult<Vec<Event>> {
    let rows = sqlx::query_as::<_, Event>(
        "SELECT id, title, description, starts_at, price, photo, is_visible FROM event \
         WHERE starts_at > ? ORDER BY starts_at",
    )
    .bind(now)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// All gallery photos, hidden ones first
pub async fn gallery(pool: &SqlitePool) -> RepoResult<Vec<GalleryPhoto>> {
    let rows = sqlx::query_as::<_, GalleryPhoto>(
        "SELECT id, photo, is_visible FROM gallery_photo ORDER BY is_visible, id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn crew(pool: &SqlitePool) -> RepoResult<Vec<CrewMember>> {
    let rows = sqlx::query_as::<_, CrewMember>(
        "SELECT id, name, description, photo, twitter, facebook, instagram, linkedin \
         FROM crew_member ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn visible_testimonials(pool: &SqlitePool) -> RepoResult<Vec<Testimonial>> {
    let rows = sqlx::query_as::<_, Testimonial>(
        "SELECT id, customer_name, position, comment, photo, is_visible FROM testimonial \
         WHERE is_visible = 1 ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn hero_sections(pool: &SqlitePool) -> RepoResult<Vec<HeroSection>> {
    let rows = sqlx::query_as::<_, HeroSection>(
        "SELECT id, photo, title, description FROM hero_section ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn info_blocks(pool: &SqlitePool) -> RepoResult<Vec<InfoBlock>> {
    let rows = sqlx::query_as::<_, InfoBlock>(
        "SELECT id, block_number, title, text FROM info_block ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_pool;

    async fn seed(pool: &SqlitePool) {
        sqlx::query(
            "INSERT INTO category (id, name, position, is_visible) VALUES \
             (1, 'Starters', 2, 1), (2, 'Mains', 1, 1), (3, 'Secret', 3, 0)",
        )
        .execute(pool)
        .await
        .unwrap();
        sqlx::query(
            "INSERT INTO dish (name, position, price, is_visible, special, category_id) VALUES \
             ('Soup of the Day', 1, 900, 1, 0, 1), \
             ('Bread', 1, 300, 1, 0, 1), \
             ('Steak', 2, 2500, 1, 1, 2), \
             ('Hidden Special', 3, 1500, 0, 1, 2)",
        )
        .execute(pool)
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_categories_visible_by_position() {
        let pool = test_pool().await;
        seed(&pool).await;
        let names: Vec<String> = visible_categories(&pool)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Mains", "Starters"]);
    }

    #[tokio::test]
    async fn test_dishes_ordered_and_slugged() {
        let pool = test_pool().await;
        seed(&pool).await;
        let dishes = visible_dishes(&pool).await.unwrap();
        let names: Vec<&str> = dishes.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Bread", "Soup of the Day", "Steak"]);
        assert_eq!(dishes[1].slug, "soup-of-the-day");
    }

    #[tokio::test]
    async fn test_specials_ignore_visibility() {
        let pool = test_pool().await;
        seed(&pool).await;
        let names: Vec<String> = specials(&pool)
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, vec!["Steak", "Hidden Special"]);
    }

    #[tokio::test]
    async fn test_specials_same_position_cheapest_first() {
        let pool = test_pool().await;
        sqlx::query("INSERT INTO category (id, name, position, is_visible) VALUES (1, 'Mains', 1, 1)")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query(
            "INSERT INTO dish (id, name, position, price, is_visible, special, category_id) VALUES \
             (1, 'Lobster', 1, 3000, 1, 1, 1), (2, 'Bruschetta', 1, 500, 1, 1, 1)",
        )
        .execute(&pool)
        .await
        .unwrap();
        let names: Vec<String> = specials(&pool)
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, vec!["Bruschetta", "Lobster"]);
    }

    #[tokio::test]
    async fn test_upcoming_events_strictly_future() {
        let pool = test_pool().await;
        sqlx::query(
            "INSERT INTO event (title, starts_at, is_visible) VALUES \
             ('Past', 50, 1), ('Now', 100, 1), ('Later', 300, 0), ('Soon', 200, 1)",
        )
        .execute(&pool)
        .await
        .unwrap();
        let titles: Vec<String> = upcoming_events(&pool, 100)
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(titles, vec!["Soon", "Later"]);
    }

    #[tokio::test]
    async fn test_gallery_and_testimonials() {
        let pool = test_pool().await;
        sqlx::query(
            "INSERT INTO gallery_photo (id, photo, is_visible) VALUES (1, 'a.jpg', 1), (2, 'b.jpg', 0)",
        )
        .execute(&pool)
        .await
        .unwrap();
        sqlx::query(
            "INSERT INTO testimonial (customer_name, is_visible) VALUES ('Ana', 1), ('Bob', 0)",
        )
        .execute(&pool)
        .await
        .unwrap();

        let ids: Vec<i64> = gallery(&pool).await.unwrap().iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![2, 1]);
        let quotes = visible_testimonials(&pool).await.unwrap();
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].customer_name, "Ana");
    }

    #[tokio::test]
    async fn test_empty_tables() {
        let pool = test_pool().await;
        assert!(crew(&pool).await.unwrap().is_empty());
        assert!(hero_sections(&pool).await.unwrap().is_empty());
        assert!(info_blocks(&pool).await.unwrap().is_empty());
    }
}
