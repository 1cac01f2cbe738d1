//! Paginated table of shortened links, for the owner or for an admin viewing a user

use crate::client::{origin, session_client, ClientError};
use crate::components::admin_guard::ErrorPanel;
use crate::components::notice::{use_timed_notice, Notice, NoticeBanner};
use crate::components::pagination::{PaginationControls, TableAction, TableState};
use crate::components::spinner::LoadingSpinner;
use crate::config::AppConfig;
use tracing::warn;
use web_sys::window;
use wee_core::models::{format_date, Link, UserLinks};
use wee_core::shortcode::short_url;
use yew::prelude::*;

/// Whose links the table lists
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkScope {
    /// The logged-in user's links
    Own,
    /// Another user's links, as seen by an admin
    User(i64),
}

#[derive(Properties, PartialEq)]
pub struct LinksTableProps {
    pub scope: LinkScope,
    /// Bump to re-fetch, e.g. after a link was created elsewhere on the page
    #[prop_or_default]
    pub refresh: u32,
}

async fn fetch_links(scope: LinkScope) -> Result<(Option<String>, UserLinks), ClientError> {
    let client = session_client()?;
    match scope {
        LinkScope::Own => Ok((None, client.own_links().await?)),
        LinkScope::User(user_id) => {
            let owner = client
                .user_profile(user_id)
                .await
                .map(|profile| profile.username)
                .ok();
            Ok((owner, client.user_links(user_id).await?))
        }
    }
}

async fn copy_to_clipboard(text: &str) -> bool {
    let Some(window) = window() else {
        return false;
    };
    let promise = window.navigator().clipboard().write_text(text);
    match wasm_bindgen_futures::JsFuture::from(promise).await {
        Ok(_) => true,
        Err(e) => {
            warn!("Clipboard write failed: {e:?}");
            false
        }
    }
}

fn confirm(message: &str) -> bool {
    window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[function_component(LinksTable)]
pub fn links_table(props: &LinksTableProps) -> Html {
    let table = use_reducer(TableState::<Link>::default);
    let owner = use_state(|| None::<String>);
    let is_loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let notice = use_timed_notice(AppConfig::NOTICE_MS);

    {
        let table = table.clone();
        let owner = owner.clone();
        let is_loading = is_loading.clone();
        let error = error.clone();
        use_effect_with((props.scope, props.refresh), move |(scope, refresh)| {
            let scope = *scope;
            let first_load = *refresh == 0;
            wasm_bindgen_futures::spawn_local(async move {
                if first_load {
                    is_loading.set(true);
                }
                match fetch_links(scope).await {
                    Ok((name, response)) => {
                        owner.set(name);
                        table.dispatch(TableAction::Replace(response.links));
                        error.set(None);
                    }
                    Err(e) => {
                        error.set(Some(e.user_message("Could not load links")));
                    }
                }
                is_loading.set(false);
            });
        });
    }

    let on_page_change = {
        let table = table.clone();
        Callback::from(move |page: usize| table.dispatch(TableAction::SetPage(page)))
    };

    let on_delete = {
        let table = table.clone();
        let notice = notice.clone();
        Callback::from(move |id: i64| {
            if !confirm("Delete this link?") {
                return;
            }
            let table = table.clone();
            let notice = notice.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = match session_client() {
                    Ok(client) => client.delete_link(id).await,
                    Err(e) => Err(e),
                };
                match result {
                    Ok(_) => {
                        table.dispatch(TableAction::Remove(id));
                        notice.set(Some(Notice::Success("Link deleted".to_string())));
                    }
                    Err(e) => {
                        notice.set(Some(Notice::Error(
                            e.user_message("Could not delete the link"),
                        )));
                    }
                }
            });
        })
    };

    let on_copy = {
        let notice = notice.clone();
        Callback::from(move |code: String| {
            let notice = notice.clone();
            let url = short_url(&origin(), &code);
            wasm_bindgen_futures::spawn_local(async move {
                if copy_to_clipboard(&url).await {
                    notice.set(Some(Notice::Success(format!("Copied {url}"))));
                } else {
                    notice.set(Some(Notice::Error("Could not copy the link".to_string())));
                }
            });
        })
    };

    if *is_loading {
        return html! { <LoadingSpinner text={Some("Loading links...".to_string())} /> };
    }

    if let Some(err) = (*error).as_ref() {
        return html! { <ErrorPanel message={err.clone()} /> };
    }

    let rows = &table.rows;
    let title = match (props.scope, (*owner).as_ref()) {
        (LinkScope::User(_), Some(name)) => format!("Links of {name}"),
        (LinkScope::User(id), None) => format!("Links of user #{id}"),
        (LinkScope::Own, _) => "My links".to_string(),
    };

    html! {
        <div class="space-y-4">
            <h2 class="text-xl font-semibold text-gray-900 dark:text-gray-100">{title}</h2>
            <NoticeBanner notice={(*notice).clone()} />
            if rows.is_empty() {
                <p class="text-gray-500 dark:text-gray-400">{"No links yet."}</p>
            } else {
                <div class="bg-white dark:bg-gray-800 shadow overflow-hidden rounded-lg">
                    <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                        <thead class="bg-gray-50 dark:bg-gray-900">
                            <tr>
                                <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">{"Original URL"}</th>
                                <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">{"Short URL"}</th>
                                <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">{"Created"}</th>
                                <th scope="col" class="relative px-6 py-3"><span class="sr-only">{"Actions"}</span></th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                            {rows.page_items().iter().map(|link| {
                                let id = link.id;
                                let code = link.code().to_string();
                                let on_delete = {
                                    let on_delete = on_delete.clone();
                                    Callback::from(move |_| on_delete.emit(id))
                                };
                                let on_copy = {
                                    let on_copy = on_copy.clone();
                                    let code = code.clone();
                                    Callback::from(move |_| on_copy.emit(code.clone()))
                                };
                                html! {
                                    <tr key={id}>
                                        <td class="px-6 py-4 max-w-xs truncate text-sm text-gray-900 dark:text-gray-100" title={link.original_url.clone()}>
                                            <a href={link.original_url.clone()} target="_blank" rel="noopener noreferrer">{&link.original_url}</a>
                                        </td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-indigo-600 dark:text-indigo-400">
                                            <a href={link.short_url.clone()} target="_blank" rel="noopener noreferrer">{&code}</a>
                                        </td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500 dark:text-gray-400">
                                            {format_date(&link.created_at)}
                                        </td>
                                        <td class="px-6 py-4 whitespace-nowrap text-right text-sm font-medium space-x-2">
                                            <button onclick={on_copy} class="text-indigo-600 hover:text-indigo-900 dark:text-indigo-400">{"Copy"}</button>
                                            <span class="text-gray-300 dark:text-gray-600">{"|"}</span>
                                            <button onclick={on_delete} class="text-red-600 hover:text-red-900 dark:text-red-400">{"Delete"}</button>
                                        </td>
                                    </tr>
                                }
                            }).collect::<Html>()}
                        </tbody>
                    </table>
                    <PaginationControls
                        current_page={rows.current_page()}
                        total_pages={rows.total_pages()}
                        total_items={rows.len()}
                        on_page_change={on_page_change}
                    />
                </div>
            }
        </div>
    }
}
