use crate::auth::error_handler;
use crate::auth::{use_session, SessionAction, SessionProvider};
use crate::client::navigate_hard;
use crate::components::UserMenu;
use crate::pages::{
    AdminPage, AdminSupportPage, AdminUserLinksPage, DashboardPage, HelpPage, HomePage,
    NotFoundPage, SupportPage,
};
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/dashboard")]
    Dashboard,
    #[at("/admin")]
    Admin,
    #[at("/admin/usuarios/:id")]
    AdminUserLinks { id: i64 },
    #[at("/admin/soporte")]
    AdminSupport,
    #[at("/ayuda")]
    Help,
    #[at("/soporte")]
    Support,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Typed route for a path such as `/admin`
pub fn route_for(path: &str) -> Option<Route> {
    Route::recognize(path).filter(|route| *route != Route::NotFound)
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Login => html! { <HomePage login=true /> },
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Admin => html! { <AdminPage /> },
        Route::AdminUserLinks { id } => html! { <AdminUserLinksPage {id} /> },
        Route::AdminSupport => html! { <AdminSupportPage /> },
        Route::Help => html! { <HelpPage /> },
        Route::Support => html! { <SupportPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

/// Lets the HTTP client's navigator drive the router and refresh the session
#[function_component(RouterBridge)]
fn router_bridge() -> Html {
    let session = use_session();
    let navigator = use_navigator();

    use_effect_with((), move |_| {
        let callback: Rc<dyn Fn(&str)> = Rc::new(move |path: &str| {
            session.dispatch(SessionAction::Reload);
            match (route_for(path), navigator.as_ref()) {
                (Some(route), Some(navigator)) => navigator.push(&route),
                _ => navigate_hard(path),
            }
        });
        error_handler::set_navigate_callback(callback);
        error_handler::clear_navigate_callback
    });

    html! {}
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <SessionProvider>
            <BrowserRouter>
                <RouterBridge />
                <div class="min-h-screen flex flex-col bg-gray-50 dark:bg-gray-900">
                    <header class="flex items-center justify-between p-4 bg-white dark:bg-gray-800 shadow-sm">
                        <Link<Route> to={Route::Home} classes="text-2xl font-bold text-indigo-600 dark:text-indigo-400">
                            {"Wee"}
                        </Link<Route>>
                        <UserMenu />
                    </header>
                    <main class="flex-1 p-6">
                        <div class="max-w-6xl mx-auto">
                            <Switch<Route> render={switch} />
                        </div>
                    </main>
                </div>
            </BrowserRouter>
        </SessionProvider>
    }
}
