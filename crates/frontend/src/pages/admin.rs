//! Admin-only views. Each table checks the role with the server itself.

use crate::app::Route;
use crate::components::{LinkScope, LinksTable, TicketsTable, UsersTable};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(AdminPage)]
pub fn admin_page() -> Html {
    html! { <UsersTable /> }
}

#[derive(Properties, PartialEq)]
pub struct AdminUserLinksProps {
    pub id: i64,
}

#[function_component(AdminUserLinksPage)]
pub fn admin_user_links_page(props: &AdminUserLinksProps) -> Html {
    html! {
        <div class="space-y-4">
            <Link<Route> to={Route::Admin} classes="text-sm text-indigo-600 dark:text-indigo-400">
                {"← Back to users"}
            </Link<Route>>
            <LinksTable scope={LinkScope::User(props.id)} />
        </div>
    }
}

#[function_component(AdminSupportPage)]
pub fn admin_support_page() -> Html {
    html! { <TicketsTable /> }
}
