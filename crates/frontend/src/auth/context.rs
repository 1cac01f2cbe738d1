//! Global session context and provider

use crate::client::session_client;
use std::rc::Rc;
use tracing::{info, warn};
use web_sys::window;
use wee_core::oauth;
use wee_core::session::{now_ms, Session};
use yew::prelude::*;

/// Session as seen by the component tree
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SessionState {
    pub session: Option<Session>,
    /// False until storage and any OAuth callback have been processed
    pub ready: bool,
}

impl SessionState {
    pub fn is_admin(&self) -> bool {
        self.session.as_ref().is_some_and(Session::is_admin)
    }
}

pub enum SessionAction {
    /// Re-read the persisted session
    Reload,
    /// A session was just established
    Established(Session),
    /// The session is gone
    Cleared,
}

pub type SessionContext = UseReducerHandle<SessionState>;

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let session = match action {
            SessionAction::Reload => {
                session_client().ok().and_then(|client| client.current_session())
            }
            SessionAction::Established(session) => Some(session),
            SessionAction::Cleared => None,
        };
        Rc::new(Self {
            session,
            ready: true,
        })
    }
}

/// Access the session context
#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("use_session must be used within SessionProvider")
}

/// Persist the session carried by an OAuth redirect, if this page load is one.
/// Returns true when the query string held a callback payload.
fn consume_oauth_callback() -> bool {
    let Some(window) = window() else {
        return false;
    };
    let query = window.location().search().unwrap_or_default();
    if query.is_empty() {
        return false;
    }

    let session = match oauth::session_from_query(&query, now_ms()) {
        Ok(Some(session)) => session,
        Ok(None) => return false,
        Err(e) => {
            warn!("Ignoring malformed OAuth callback: {e}");
            return false;
        }
    };

    match session_client() {
        Ok(client) => {
            if let Err(e) = client.store().save(&session) {
                warn!("Failed to persist OAuth session: {e}");
                return false;
            }
            info!("Signed in through Google");
        }
        Err(e) => {
            warn!("Client unavailable for OAuth callback: {e}");
            return false;
        }
    }

    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some("/"));
    }
    true
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let state = use_reducer(SessionState::default);

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            consume_oauth_callback();
            state.dispatch(SessionAction::Reload);
        });
    }

    html! {
        <ContextProvider<SessionContext> context={state}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}
