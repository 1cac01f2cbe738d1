pub mod context;
pub mod error_handler;

pub use context::{use_session, SessionAction, SessionContext, SessionProvider, SessionState};
