use crate::app::Route;
use crate::components::{AuthModal, AuthMode, Shortener};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    /// Open the auth modal on arrival, as the `/login` route does
    #[prop_or_default]
    pub login: bool,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let navigator = use_navigator();

    let on_close = Callback::from(move |_: ()| {
        if let Some(navigator) = &navigator {
            navigator.replace(&Route::Home);
        }
    });

    html! {
        <div class="py-12 space-y-8 text-center">
            <div>
                <h1 class="text-4xl font-bold bg-gradient-to-r from-indigo-600 to-purple-600 bg-clip-text text-transparent">
                    {"Make long links wee"}
                </h1>
                <p class="mt-3 text-gray-600 dark:text-gray-400">
                    {"Paste a URL and get a short link you can share anywhere."}
                </p>
            </div>
            <Shortener />
            if props.login {
                <AuthModal initial_mode={AuthMode::Login} {on_close} />
            }
        </div>
    }
}
