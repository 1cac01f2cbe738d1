use crate::app::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(SupportPage)]
pub fn support_page() -> Html {
    html! {
        <div class="bg-white dark:bg-gray-800 rounded-lg shadow p-6 space-y-3">
            <h1 class="text-2xl font-bold text-gray-900 dark:text-white">{"Support"}</h1>
            <p class="text-gray-600 dark:text-gray-400">
                {"Something not working? Most questions are answered on the help page. Tickets raised with the team are tracked by the administrators until resolved."}
            </p>
            <Link<Route> to={Route::Help} classes="text-indigo-600 dark:text-indigo-400">{"Read the help page"}</Link<Route>>
        </div>
    }
}
