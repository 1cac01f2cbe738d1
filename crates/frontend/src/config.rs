//! Frontend configuration constants

pub use wee_core::pagination::ITEMS_PER_PAGE;

pub struct AppConfig;

impl AppConfig {
    /// Path the REST API is mounted under on the serving origin
    pub const API_PREFIX: &'static str = "/api";

    /// Delay before redirecting after a successful login or registration
    pub const LOGIN_REDIRECT_DELAY_MS: u32 = 1_500;

    /// Delay before leaving an admin view the user may not see
    pub const ADMIN_REDIRECT_DELAY_MS: u32 = 2_000;

    /// How long the shortener keeps its result message
    pub const SHORTENER_MESSAGE_MS: u32 = 7_000;

    /// How long table notices stay visible
    pub const NOTICE_MS: u32 = 3_000;
}
