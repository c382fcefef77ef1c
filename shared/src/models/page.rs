//! Page contexts
//!
//! The JSON documents the site's templates are rendered from. Every page
//! carries the contact block and footer; public pages also carry the
//! visitor's login/manager flags.

use serde::{Deserialize, Serialize};

use super::catalog::{
    Category, CrewMember, Dish, Event, GalleryPhoto, HeroSection, InfoBlock, Testimonial,
};
use super::contact::ContactRequest;
use super::reservation::ReservationRequest;
use super::settings::{AboutUs, ContactInfo, Footer};

/// Who is looking at the page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFlags {
    pub user_auth: bool,
    pub user_manager: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MainPage {
    #[serde(flatten)]
    pub user: UserFlags,
    pub categories: Vec<Category>,
    pub dishes: Vec<Dish>,
    pub specials: Vec<Dish>,
    pub about_us: AboutUs,
    pub info_blocks: Vec<InfoBlock>,
    pub events: Vec<Event>,
    pub gallery: Vec<GalleryPhoto>,
    pub crew: Vec<CrewMember>,
    pub testimonials: Vec<Testimonial>,
    pub hero: Vec<HeroSection>,
    pub contact_info: ContactInfo,
    pub footer: Footer,
}

/// Login and registration pages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthPage {
    #[serde(flatten)]
    pub user: UserFlags,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    pub contact_info: ContactInfo,
    pub footer: Footer,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManagerDashboard {
    pub pending_reservations: i64,
    pub pending_contacts: i64,
    pub contact_info: ContactInfo,
    pub footer: Footer,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationListPage {
    pub reservations: Vec<ReservationRequest>,
    pub contact_info: ContactInfo,
    pub footer: Footer,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactListPage {
    pub contacts: Vec<ContactRequest>,
    pub contact_info: ContactInfo,
    pub footer: Footer,
}
