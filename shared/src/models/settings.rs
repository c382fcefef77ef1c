//! Site Settings Models
//!
//! Each table holds exactly one row. The rows are loaded once at startup
//! into [`SiteSettings`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct AboutUs {
    pub id: i64,
    pub header: String,
    pub heading_text: String,
    pub photo: Option<String>,
    pub video_url: Option<String>,
}

/// Contact block plus the top-bar phone/hours
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ContactInfo {
    pub id: i64,
    pub header: String,
    pub heading_text: String,
    pub location: String,
    pub open_hours: String,
    pub email: String,
    pub call: String,
    pub phone_for_top_bar: String,
    pub open_hours_for_top_bar: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Footer {
    pub id: i64,
    pub header: String,
    pub heading_text: String,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub skype: Option<String>,
    pub linkedin: Option<String>,
    pub site_owner: String,
}

/// All singleton settings, immutable after startup
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteSettings {
    pub about_us: AboutUs,
    pub contact_info: ContactInfo,
    pub footer: Footer,
}
