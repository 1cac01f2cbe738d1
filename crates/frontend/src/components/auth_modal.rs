//! Login, registration and password recovery modal

use crate::app::{route_for, Route};
use crate::auth::{use_session, SessionAction};
use crate::client::{navigate_hard, session_client, ClientError};
use crate::components::notice::{Notice, NoticeBanner};
use crate::config::AppConfig;
use gloo::timers::callback::Timeout;
use tracing::info;
use web_sys::HtmlInputElement;
use wee_core::models::{Credentials, RegisterRequest};
use wee_core::session::Session;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
    Forgot,
}

impl AuthMode {
    fn title(self) -> &'static str {
        match self {
            Self::Login => "Log in",
            Self::Register => "Create an account",
            Self::Forgot => "Recover your password",
        }
    }

    fn submit_label(self) -> &'static str {
        match self {
            Self::Login => "Log in",
            Self::Register => "Register",
            Self::Forgot => "Send recovery email",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct AuthForm {
    username: String,
    email: String,
    password: String,
}

impl AuthForm {
    /// First missing field for `mode`, if any
    fn missing_field(&self, mode: AuthMode) -> Option<&'static str> {
        let blank = |value: &str| value.trim().is_empty();
        match mode {
            AuthMode::Login if blank(&self.username) => Some("Enter your username"),
            AuthMode::Login if self.password.is_empty() => Some("Enter your password"),
            AuthMode::Register if blank(&self.username) => Some("Choose a username"),
            AuthMode::Register if blank(&self.email) => Some("Enter your email"),
            AuthMode::Register if self.password.is_empty() => Some("Choose a password"),
            AuthMode::Forgot if blank(&self.email) => Some("Enter your email"),
            _ => None,
        }
    }
}

enum Outcome {
    SignedIn(Session),
    Sent(String),
    Failed(String),
}

fn signed_in(result: Result<Option<Session>, ClientError>, fallback: &str) -> Outcome {
    match result {
        Ok(Some(session)) => Outcome::SignedIn(session),
        Ok(None) => Outcome::Failed("The server did not return a session".to_string()),
        Err(e) => Outcome::Failed(e.user_message(fallback)),
    }
}

async fn submit(mode: AuthMode, form: AuthForm) -> Outcome {
    let client = match session_client() {
        Ok(client) => client,
        Err(e) => return Outcome::Failed(e.user_message("Service unavailable")),
    };

    match mode {
        AuthMode::Login => {
            let credentials = Credentials {
                username: form.username.trim().to_string(),
                password: form.password,
            };
            signed_in(client.login(&credentials).await, "Login failed")
        }
        AuthMode::Register => {
            let fields = RegisterRequest {
                username: form.username.trim().to_string(),
                email: form.email.trim().to_string(),
                password: form.password,
            };
            signed_in(client.register(&fields).await, "Registration failed")
        }
        AuthMode::Forgot => match client.forgot_password(form.email.trim()).await {
            Ok(response) => Outcome::Sent(response.message.unwrap_or_else(|| {
                "If the address is registered, a recovery email is on its way".to_string()
            })),
            Err(e) => Outcome::Failed(e.user_message("Could not send the recovery email")),
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthModalProps {
    #[prop_or_default]
    pub initial_mode: AuthMode,
    pub on_close: Callback<()>,
}

#[function_component(AuthModal)]
pub fn auth_modal(props: &AuthModalProps) -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let mode = use_state(|| props.initial_mode);
    let form = use_state(AuthForm::default);
    let is_loading = use_state(|| false);
    let notice = use_state(|| None::<Notice>);

    let switch_mode = |next: AuthMode| {
        let mode = mode.clone();
        let notice = notice.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            notice.set(None);
            mode.set(next);
        })
    };

    let field_input = |update: fn(&mut AuthForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            update(&mut next, input.value());
            form.set(next);
        })
    };

    let on_submit = {
        let mode = mode.clone();
        let form = form.clone();
        let is_loading = is_loading.clone();
        let notice = notice.clone();
        let session = session.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_loading {
                return;
            }
            let current_mode = *mode;
            if let Some(problem) = form.missing_field(current_mode) {
                notice.set(Some(Notice::Error(problem.to_string())));
                return;
            }

            let values = (*form).clone();
            let is_loading = is_loading.clone();
            let notice = notice.clone();
            let session = session.clone();
            let navigator = navigator.clone();
            let on_close = on_close.clone();
            wasm_bindgen_futures::spawn_local(async move {
                is_loading.set(true);
                notice.set(None);
                match submit(current_mode, values).await {
                    Outcome::SignedIn(established) => {
                        info!("Signed in as {}", established.display_name());
                        let target = route_for(established.landing_route()).unwrap_or(Route::Dashboard);
                        notice.set(Some(Notice::Success("Welcome! Redirecting...".to_string())));
                        session.dispatch(SessionAction::Established(established));
                        Timeout::new(AppConfig::LOGIN_REDIRECT_DELAY_MS, move || {
                            on_close.emit(());
                            if let Some(navigator) = navigator {
                                navigator.push(&target);
                            }
                        })
                        .forget();
                    }
                    Outcome::Sent(message) => {
                        notice.set(Some(Notice::Success(message)));
                    }
                    Outcome::Failed(message) => {
                        notice.set(Some(Notice::Error(message)));
                    }
                }
                is_loading.set(false);
            });
        })
    };

    let on_google = Callback::from(|_: MouseEvent| {
        if let Ok(client) = session_client() {
            navigate_hard(&client.google_login_url());
        }
    });

    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let input_class = "w-full px-3 py-2 border border-gray-300 dark:border-gray-600 rounded-md bg-white dark:bg-gray-700 text-gray-900 dark:text-gray-100 focus:outline-none focus:ring-2 focus:ring-indigo-500";
    let current = *mode;

    html! {
        <div class="fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50">
            <div class="absolute inset-0" onclick={on_backdrop.clone()}></div>
            <div class="relative bg-white dark:bg-gray-800 rounded-lg p-6 max-w-md w-full mx-4 shadow-xl">
                <div class="flex items-center justify-between mb-4">
                    <h2 class="text-xl font-bold text-gray-900 dark:text-white">{current.title()}</h2>
                    <button onclick={on_backdrop} class="text-gray-400 hover:text-gray-600" aria-label="Close">{"×"}</button>
                </div>

                <NoticeBanner notice={(*notice).clone()} />

                <form onsubmit={on_submit} class="space-y-4">
                    if current != AuthMode::Forgot {
                        <input
                            type="text"
                            class={input_class}
                            placeholder="Username"
                            autocomplete="username"
                            value={form.username.clone()}
                            oninput={field_input(|f, v| f.username = v)}
                            disabled={*is_loading}
                        />
                    }
                    if current != AuthMode::Login {
                        <input
                            type="email"
                            class={input_class}
                            placeholder="Email"
                            autocomplete="email"
                            value={form.email.clone()}
                            oninput={field_input(|f, v| f.email = v)}
                            disabled={*is_loading}
                        />
                    }
                    if current != AuthMode::Forgot {
                        <input
                            type="password"
                            class={input_class}
                            placeholder="Password"
                            autocomplete={if current == AuthMode::Register { "new-password" } else { "current-password" }}
                            value={form.password.clone()}
                            oninput={field_input(|f, v| f.password = v)}
                            disabled={*is_loading}
                        />
                    }
                    <button
                        type="submit"
                        disabled={*is_loading}
                        class="w-full bg-indigo-600 hover:bg-indigo-700 disabled:bg-gray-400 text-white font-medium py-2 px-4 rounded-md transition-colors"
                    >
                        {if *is_loading { "Please wait..." } else { current.submit_label() }}
                    </button>
                </form>

                if current != AuthMode::Forgot {
                    <button
                        onclick={on_google}
                        disabled={*is_loading}
                        class="mt-3 w-full border border-gray-300 dark:border-gray-600 text-gray-700 dark:text-gray-200 py-2 px-4 rounded-md hover:bg-gray-50 dark:hover:bg-gray-700"
                    >
                        {"Continue with Google"}
                    </button>
                }

                <div class="mt-4 flex justify-between text-sm text-indigo-600 dark:text-indigo-400">
                    {match current {
                        AuthMode::Login => html! {
                            <>
                                <a href="#" onclick={switch_mode(AuthMode::Register)}>{"Create an account"}</a>
                                <a href="#" onclick={switch_mode(AuthMode::Forgot)}>{"Forgot password?"}</a>
                            </>
                        },
                        AuthMode::Register | AuthMode::Forgot => html! {
                            <a href="#" onclick={switch_mode(AuthMode::Login)}>{"Back to login"}</a>
                        },
                    }}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(username: &str, email: &str, password: &str) -> AuthForm {
        AuthForm {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    #[test]
    fn login_needs_username_and_password() {
        assert_eq!(
            form(" ", "", "pw").missing_field(AuthMode::Login),
            Some("Enter your username")
        );
        assert_eq!(
            form("ana", "", "").missing_field(AuthMode::Login),
            Some("Enter your password")
        );
        assert_eq!(form("ana", "", "pw").missing_field(AuthMode::Login), None);
    }

    #[test]
    fn register_needs_every_field() {
        assert_eq!(
            form("ana", "", "pw").missing_field(AuthMode::Register),
            Some("Enter your email")
        );
        assert_eq!(
            form("ana", "ana@example.com", "pw").missing_field(AuthMode::Register),
            None
        );
    }

    #[test]
    fn recovery_only_needs_email() {
        assert_eq!(form("", "", "").missing_field(AuthMode::Forgot), Some("Enter your email"));
        assert_eq!(form("", "a@b.c", "").missing_field(AuthMode::Forgot), None);
    }
}
