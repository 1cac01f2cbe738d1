//! Server-side admin check shared by the admin tables

use crate::app::Route;
use crate::client::session_client;
use crate::config::AppConfig;
use gloo::timers::callback::Timeout;
use tracing::warn;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AdminCheck {
    Pending,
    Allowed,
    Denied(String),
}

/// Ask `/auth/me` whether the user is an admin. On refusal or failure the
/// page is left for `/` after [`AppConfig::ADMIN_REDIRECT_DELAY_MS`]. A 401
/// is left to the client, which already sent the user to the login route.
#[hook]
pub fn use_admin_guard() -> AdminCheck {
    let check = use_state(|| AdminCheck::Pending);
    let navigator = use_navigator();

    {
        let check = check.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let result = match session_client() {
                    Ok(client) => client.me().await,
                    Err(e) => Err(e),
                };
                let message = match result {
                    Ok(user) if user.is_admin() => {
                        check.set(AdminCheck::Allowed);
                        return;
                    }
                    Ok(_) => "Administrator access required".to_string(),
                    Err(e) if e.is_unauthorized() => {
                        check.set(AdminCheck::Denied("Session expired".to_string()));
                        return;
                    }
                    Err(e) => e.user_message("Could not verify permissions"),
                };
                warn!("Admin view refused: {message}");
                check.set(AdminCheck::Denied(message));
                redirect_home_later(navigator);
            });
        });
    }

    (*check).clone()
}

/// Leave an admin view for `/` after the standard delay
pub fn redirect_home_later(navigator: Option<Navigator>) {
    if let Some(navigator) = navigator {
        Timeout::new(AppConfig::ADMIN_REDIRECT_DELAY_MS, move || {
            navigator.push(&Route::Home)
        })
        .forget();
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorPanelProps {
    pub message: String,
}

#[function_component(ErrorPanel)]
pub fn error_panel(props: &ErrorPanelProps) -> Html {
    html! {
        <div class="p-4 bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800 rounded-md">
            <p class="text-red-700 dark:text-red-300">{&props.message}</p>
        </div>
    }
}
