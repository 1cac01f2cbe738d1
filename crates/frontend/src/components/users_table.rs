//! Admin user management table with search

use crate::app::Route;
use crate::client::session_client;
use crate::components::admin_guard::{redirect_home_later, use_admin_guard, AdminCheck, ErrorPanel};
use crate::components::notice::{use_timed_notice, Notice, NoticeBanner};
use crate::components::pagination::{PaginationControls, TableAction, TableState};
use crate::components::spinner::LoadingSpinner;
use crate::config::AppConfig;
use web_sys::{window, HtmlInputElement};
use wee_core::models::{format_date, User};
use wee_core::pagination::Paginated;
use yew::prelude::*;
use yew_router::prelude::*;

/// Users whose name or email contains `term`, ignoring case
pub fn filter_users(users: &[User], term: &str) -> Vec<User> {
    let term = term.trim();
    users.iter().filter(|user| user.matches(term)).cloned().collect()
}

/// Filtered view on `page`, or on page 1 when `page` is past the end
fn filtered_page(users: &[User], term: &str, page: usize) -> Paginated<User> {
    let mut view = Paginated::new(filter_users(users, term));
    if !view.set_page(page) {
        view.set_page(1);
    }
    view
}

/// Same rule as [`Paginated::set_page`]: only `1..=total_pages` moves the page
fn page_in_range(page: usize, total_pages: usize) -> bool {
    (1..=total_pages).contains(&page)
}

fn role_badge(user: &User) -> Html {
    let class = if user.is_admin() {
        "px-2 inline-flex text-xs leading-5 font-semibold rounded-full bg-purple-100 text-purple-800 dark:bg-purple-900 dark:text-purple-200"
    } else {
        "px-2 inline-flex text-xs leading-5 font-semibold rounded-full bg-gray-100 text-gray-800 dark:bg-gray-700 dark:text-gray-200"
    };
    html! { <span class={class}>{&user.role}</span> }
}

#[function_component(UsersTable)]
pub fn users_table() -> Html {
    let check = use_admin_guard();
    let navigator = use_navigator();
    let table = use_reducer(TableState::<User>::default);
    let search = use_state(String::new);
    let page = use_state(|| 1usize);
    let is_loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let notice = use_timed_notice(AppConfig::NOTICE_MS);

    {
        let table = table.clone();
        let is_loading = is_loading.clone();
        let error = error.clone();
        let allowed = check == AdminCheck::Allowed;
        use_effect_with(allowed, move |allowed| {
            if *allowed {
                wasm_bindgen_futures::spawn_local(async move {
                    is_loading.set(true);
                    let result = match session_client() {
                        Ok(client) => client.list_users().await,
                        Err(e) => Err(e),
                    };
                    match result {
                        Ok(users) => {
                            table.dispatch(TableAction::Replace(users));
                            error.set(None);
                        }
                        Err(e) => {
                            error.set(Some(e.user_message("Could not load users")));
                            if !e.is_unauthorized() {
                                redirect_home_later(navigator);
                            }
                        }
                    }
                    is_loading.set(false);
                });
            }
        });
    }

    let on_search = {
        let search = search.clone();
        let page = page.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
            page.set(1);
        })
    };

    let view = filtered_page(table.rows.items(), &search, *page);

    let on_page_change = {
        let page = page.clone();
        let total_pages = view.total_pages();
        Callback::from(move |next: usize| {
            if page_in_range(next, total_pages) {
                page.set(next);
            }
        })
    };

    let on_delete = {
        let table = table.clone();
        let notice = notice.clone();
        Callback::from(move |(id, username): (i64, String)| {
            let confirmed = window()
                .and_then(|w| {
                    w.confirm_with_message(&format!("Delete user {username}?"))
                        .ok()
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let table = table.clone();
            let notice = notice.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = match session_client() {
                    Ok(client) => client.delete_user(id).await,
                    Err(e) => Err(e),
                };
                match result {
                    Ok(_) => {
                        table.dispatch(TableAction::Remove(id));
                        notice.set(Some(Notice::Success(format!("User {username} deleted"))));
                    }
                    Err(e) => {
                        notice.set(Some(Notice::Error(
                            e.user_message("Could not delete the user"),
                        )));
                    }
                }
            });
        })
    };

    match &check {
        AdminCheck::Pending => {
            return html! { <LoadingSpinner text={Some("Checking permissions...".to_string())} /> };
        }
        AdminCheck::Denied(message) => {
            return html! { <ErrorPanel message={message.clone()} /> };
        }
        AdminCheck::Allowed => {}
    }

    if *is_loading {
        return html! { <LoadingSpinner text={Some("Loading users...".to_string())} /> };
    }

    if let Some(err) = (*error).as_ref() {
        return html! { <ErrorPanel message={err.clone()} /> };
    }

    html! {
        <div class="space-y-4">
            <div class="flex items-center justify-between">
                <h2 class="text-xl font-semibold text-gray-900 dark:text-gray-100">{"User management"}</h2>
                <input
                    type="search"
                    class="px-3 py-2 border border-gray-300 dark:border-gray-600 rounded-md bg-white dark:bg-gray-800 text-sm"
                    placeholder="Search by name or email"
                    value={(*search).clone()}
                    oninput={on_search}
                />
            </div>
            <NoticeBanner notice={(*notice).clone()} />
            if view.is_empty() {
                <p class="text-gray-500 dark:text-gray-400">{"No users found."}</p>
            } else {
                <div class="bg-white dark:bg-gray-800 shadow overflow-hidden rounded-lg">
                    <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                        <thead class="bg-gray-50 dark:bg-gray-900">
                            <tr>
                                <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">{"User"}</th>
                                <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">{"Email"}</th>
                                <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">{"Role"}</th>
                                <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">{"Joined"}</th>
                                <th scope="col" class="relative px-6 py-3"><span class="sr-only">{"Actions"}</span></th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                            {view.page_items().iter().map(|user| {
                                let on_delete = {
                                    let on_delete = on_delete.clone();
                                    let target = (user.id, user.username.clone());
                                    Callback::from(move |_| on_delete.emit(target.clone()))
                                };
                                html! {
                                    <tr key={user.id}>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900 dark:text-gray-100">{&user.username}</td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500 dark:text-gray-400">{&user.email}</td>
                                        <td class="px-6 py-4 whitespace-nowrap">{role_badge(user)}</td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500 dark:text-gray-400">{format_date(&user.created_at)}</td>
                                        <td class="px-6 py-4 whitespace-nowrap text-right text-sm font-medium space-x-2">
                                            <Link<Route> to={Route::AdminUserLinks { id: user.id }} classes="text-indigo-600 hover:text-indigo-900 dark:text-indigo-400">
                                                {"Links"}
                                            </Link<Route>>
                                            <span class="text-gray-300 dark:text-gray-600">{"|"}</span>
                                            <button onclick={on_delete} class="text-red-600 hover:text-red-900 dark:text-red-400">{"Delete"}</button>
                                        </td>
                                    </tr>
                                }
                            }).collect::<Html>()}
                        </tbody>
                    </table>
                    <PaginationControls
                        current_page={view.current_page()}
                        total_pages={view.total_pages()}
                        total_items={view.len()}
                        on_page_change={on_page_change}
                    />
                </div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, username: &str, email: &str) -> User {
        User {
            id,
            username: username.to_string(),
            email: email.to_string(),
            role: "user".to_string(),
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    fn sample() -> Vec<User> {
        (1..=25)
            .map(|i| user(i, &format!("user{i}"), &format!("user{i}@example.com")))
            .chain([user(26, "Marta", "marta@wee.dev")])
            .collect()
    }

    #[test]
    fn search_matches_name_or_email_ignoring_case() {
        let users = sample();
        assert_eq!(filter_users(&users, "MARTA").len(), 1);
        assert_eq!(filter_users(&users, "wee.dev")[0].id, 26);
        assert_eq!(filter_users(&users, "").len(), 26);
        assert_eq!(filter_users(&users, "  ").len(), 26);
        assert!(filter_users(&users, "nobody").is_empty());
    }

    #[test]
    fn out_of_range_page_requests_are_ignored() {
        let view = filtered_page(&sample(), "", 1);
        let total = view.total_pages();
        assert_eq!(total, 3);
        assert!(page_in_range(1, total));
        assert!(page_in_range(3, total));
        assert!(!page_in_range(0, total));
        assert!(!page_in_range(4, total));
        assert!(!page_in_range(1, 0));
    }

    #[test]
    fn page_past_filtered_total_falls_back_to_first() {
        let users = sample();
        let view = filtered_page(&users, "", 3);
        assert_eq!(view.current_page(), 3);
        assert_eq!(view.page_items().len(), 6);

        let narrowed = filtered_page(&users, "user1", 3);
        assert_eq!(narrowed.current_page(), 1);
        assert_eq!(narrowed.total_pages(), 2);
    }
}
