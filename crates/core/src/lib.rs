//! Wee core types and client-side logic
//!
//! Everything in here is platform independent so it can run both in the
//! browser (wasm32) and natively under `cargo test`.

pub mod error;
pub mod models;
pub mod navigation;
pub mod oauth;
pub mod pagination;
pub mod session;
pub mod shortcode;

#[cfg(all(feature = "tracing", not(target_arch = "wasm32")))]
pub mod tracing;

pub use error::{CoreError, CoreResult};
pub use models::{Link, NewLink, SupportTicket, TicketPriority, TicketStatus, User};
pub use navigation::{NavLink, Navigation};
pub use pagination::{ITEMS_PER_PAGE, Identified, Paginated, page_window};
pub use session::{
    MemoryStorage, Role, Session, SessionStorage, SessionStore, SessionUser,
};
pub use shortcode::{SHORT_CODE_LEN, generate_short_code, short_url};
