use crate::app::Route;
use crate::auth::use_session;
use crate::components::{use_generation, LinkScope, LinksTable, LoadingSpinner, Shortener};
use wee_core::models::NewLink;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let session = use_session();
    let refresh = use_generation();

    let on_created = {
        let refresh = refresh.clone();
        Callback::from(move |_: NewLink| refresh.dispatch(()))
    };

    if !session.ready {
        return html! { <LoadingSpinner /> };
    }

    let Some(current) = session.session.as_ref() else {
        return html! {
            <div class="text-center py-12 space-y-4">
                <p class="text-gray-600 dark:text-gray-400">{"Log in to see your links."}</p>
                <Link<Route> to={Route::Login} classes="text-indigo-600 dark:text-indigo-400">{"Log in"}</Link<Route>>
            </div>
        };
    };

    html! {
        <div class="space-y-8">
            <div>
                <h1 class="text-2xl font-bold text-gray-900 dark:text-white">
                    {format!("Hello, {}", current.display_name())}
                </h1>
                if let Some(email) = current.email() {
                    <p class="text-sm text-gray-500 dark:text-gray-400">{email}</p>
                }
            </div>
            <Shortener {on_created} />
            <LinksTable scope={LinkScope::Own} refresh={refresh.0} />
        </div>
    }
}
