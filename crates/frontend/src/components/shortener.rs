//! Long URL input that registers a generated short code

use crate::client::{origin, session_client};
use crate::components::notice::{use_timed_notice, Notice, NoticeBanner};
use crate::config::AppConfig;
use web_sys::HtmlInputElement;
use wee_core::models::NewLink;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ShortenerProps {
    /// Fired after the API accepted a new link
    #[prop_or_default]
    pub on_created: Callback<NewLink>,
}

#[function_component(Shortener)]
pub fn shortener(props: &ShortenerProps) -> Html {
    let url = use_state(String::new);
    let is_loading = use_state(|| false);
    let notice = use_timed_notice(AppConfig::SHORTENER_MESSAGE_MS);

    let on_input = {
        let url = url.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            url.set(input.value());
        })
    };

    let on_submit = {
        let url = url.clone();
        let is_loading = is_loading.clone();
        let notice = notice.clone();
        let on_created = props.on_created.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if url.trim().is_empty() || *is_loading {
                return;
            }

            let url = url.clone();
            let is_loading = is_loading.clone();
            let notice = notice.clone();
            let on_created = on_created.clone();
            let original = (*url).clone();
            wasm_bindgen_futures::spawn_local(async move {
                is_loading.set(true);
                let result = match session_client() {
                    Ok(client) => client.shorten(&original, &origin()).await,
                    Err(e) => Err(e),
                };
                match result {
                    Ok(Some(link)) => {
                        notice.set(Some(Notice::Success(format!(
                            "Short link ready: {}",
                            link.short_url
                        ))));
                        url.set(String::new());
                        on_created.emit(link);
                    }
                    Ok(None) => {}
                    Err(e) => {
                        notice.set(Some(Notice::Error(
                            e.user_message("Could not shorten the link"),
                        )));
                    }
                }
                is_loading.set(false);
            });
        })
    };

    html! {
        <div class="w-full max-w-2xl mx-auto">
            <form onsubmit={on_submit} class="flex flex-col sm:flex-row gap-3">
                <input
                    type="url"
                    class="flex-1 px-4 py-3 border border-gray-300 dark:border-gray-600 rounded-md bg-white dark:bg-gray-800 text-gray-900 dark:text-gray-100 focus:outline-none focus:ring-2 focus:ring-indigo-500"
                    placeholder="Paste a long URL"
                    value={(*url).clone()}
                    oninput={on_input}
                />
                <button
                    type="submit"
                    class="px-6 py-3 bg-indigo-600 text-white rounded-md hover:bg-indigo-700 disabled:opacity-50"
                    disabled={*is_loading}
                >
                    {if *is_loading { "Shortening..." } else { "Shorten" }}
                </button>
            </form>
            <div class="mt-4">
                <NoticeBanner notice={(*notice).clone()} />
            </div>
        </div>
    }
}
