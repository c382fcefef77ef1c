//! Catalog Models
//!
//! Read-only content shown on the main page. Rows are maintained outside
//! the site (seed scripts / admin tooling); the site only reads them.

use serde::{Deserialize, Serialize};

/// Menu category (菜单分类)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Category {
    pub id: i64,
    pub name: String,
    /// Unique sort key
    pub position: i64,
    pub is_visible: bool,
}

/// Dish on the menu
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Dish {
    pub id: i64,
    pub name: String,
    /// Derived from `name` when read
    #[cfg_attr(feature = "db", sqlx(skip))]
    #[serde(default)]
    pub slug: String,
    pub position: i64,
    /// Price in cents
    pub price: i64,
    pub description: String,
    pub ingredients: String,
    pub is_visible: bool,
    pub special: bool,
    pub photo: Option<String>,
    pub category_id: i64,
}

/// Upcoming event
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Start time (epoch millis)
    pub starts_at: i64,
    /// Ticket price in whole currency units
    pub price: i64,
    pub photo: Option<String>,
    pub is_visible: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct GalleryPhoto {
    pub id: i64,
    pub photo: String,
    pub is_visible: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct CrewMember {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub photo: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
}

/// Customer feedback quote
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Testimonial {
    pub id: i64,
    pub customer_name: String,
    /// Customer's job title
    pub position: String,
    pub comment: String,
    pub photo: Option<String>,
    pub is_visible: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct HeroSection {
    pub id: i64,
    pub photo: Option<String>,
    pub title: String,
    pub description: String,
}

/// Numbered highlight block under "about us"
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct InfoBlock {
    pub id: i64,
    pub block_number: i64,
    pub title: String,
    pub text: String,
}
