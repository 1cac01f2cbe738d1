mod admin;
mod dashboard;
mod help;
mod home;
mod not_found;
mod support;

pub use admin::{AdminPage, AdminSupportPage, AdminUserLinksPage};
pub use dashboard::DashboardPage;
pub use help::HelpPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use support::SupportPage;
