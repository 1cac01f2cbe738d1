use crate::app::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="text-center py-16">
            <h1 class="text-4xl font-bold text-gray-900 dark:text-white">{"404"}</h1>
            <p class="mt-2 text-gray-600 dark:text-gray-400">{"This page does not exist."}</p>
            <Link<Route> to={Route::Home} classes="mt-4 inline-block text-indigo-600 dark:text-indigo-400">{"Go home"}</Link<Route>>
        </div>
    }
}
