//! Header menu: a login button, or the role's links plus logout

use crate::app::{route_for, Route};
use crate::auth::{use_session, SessionAction};
use crate::client::session_client;
use crate::components::auth_modal::{AuthMode, AuthModal};
use tracing::warn;
use wee_core::navigation::Navigation;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(UserMenu)]
pub fn user_menu() -> Html {
    let session = use_session();
    let show_modal = use_state(|| false);
    let menu_open = use_state(|| false);

    let open_modal = {
        let show_modal = show_modal.clone();
        Callback::from(move |_: MouseEvent| show_modal.set(true))
    };

    let close_modal = {
        let show_modal = show_modal.clone();
        Callback::from(move |_: ()| show_modal.set(false))
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let on_logout = {
        let session = session.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            match session_client() {
                Ok(client) => client.logout(),
                Err(e) => warn!("Logout without a client: {e}"),
            }
            menu_open.set(false);
            session.dispatch(SessionAction::Cleared);
        })
    };

    if !session.ready {
        return html! {};
    }

    match Navigation::for_session(session.session.as_ref()) {
        Navigation::LoginTrigger => html! {
            <>
                <button
                    onclick={open_modal}
                    class="px-4 py-2 bg-indigo-600 text-white rounded-md hover:bg-indigo-700"
                >
                    {"Log in"}
                </button>
                if *show_modal {
                    <AuthModal initial_mode={AuthMode::Login} on_close={close_modal} />
                }
            </>
        },
        Navigation::Menu {
            display_name,
            initial,
            admin,
            links,
        } => {
            let close_menu = {
                let menu_open = menu_open.clone();
                Callback::from(move |_: MouseEvent| menu_open.set(false))
            };
            html! {
                <div class="relative">
                    <button onclick={toggle_menu} class="flex items-center gap-2 text-gray-700 dark:text-gray-200">
                        <span class="w-8 h-8 rounded-full bg-indigo-600 text-white flex items-center justify-center font-semibold">
                            {initial}
                        </span>
                        <span class="hidden sm:inline">{display_name}</span>
                        if admin {
                            <span class="text-xs px-2 py-0.5 rounded-full bg-purple-100 text-purple-800 dark:bg-purple-900 dark:text-purple-200">{"admin"}</span>
                        }
                    </button>
                    if *menu_open {
                        <div class="absolute right-0 mt-2 w-48 bg-white dark:bg-gray-800 rounded-md shadow-lg py-1 z-40" onclick={close_menu}>
                            {links.iter().filter_map(|link| {
                                let route = route_for(link.route)?;
                                Some(html! {
                                    <Link<Route> to={route} classes="block px-4 py-2 text-sm text-gray-700 dark:text-gray-200 hover:bg-gray-100 dark:hover:bg-gray-700">
                                        {link.label}
                                    </Link<Route>>
                                })
                            }).collect::<Html>()}
                            <button onclick={on_logout} class="block w-full text-left px-4 py-2 text-sm text-red-600 hover:bg-gray-100 dark:hover:bg-gray-700">
                                {"Log out"}
                            </button>
                        </div>
                    }
                </div>
            }
        }
    }
}
