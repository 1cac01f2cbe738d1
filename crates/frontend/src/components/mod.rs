pub mod admin_guard;
pub mod auth_modal;
pub mod generation;
pub mod links_table;
pub mod notice;
pub mod pagination;
pub mod shortener;
pub mod spinner;
pub mod tickets_table;
pub mod user_menu;
pub mod users_table;

pub use admin_guard::{use_admin_guard, AdminCheck, ErrorPanel};
pub use auth_modal::{AuthModal, AuthMode};
pub use generation::{use_generation, Generation};
pub use links_table::{LinkScope, LinksTable};
pub use notice::{use_timed_notice, Notice, NoticeBanner};
pub use pagination::PaginationControls;
pub use shortener::Shortener;
pub use spinner::LoadingSpinner;
pub use tickets_table::TicketsTable;
pub use user_menu::UserMenu;
pub use users_table::UsersTable;
