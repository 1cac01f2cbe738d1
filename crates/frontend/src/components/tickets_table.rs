//! Admin support ticket table

use crate::client::{session_client, ClientError};
use crate::components::admin_guard::{redirect_home_later, use_admin_guard, AdminCheck, ErrorPanel};
use crate::components::generation::use_generation;
use crate::components::notice::{use_timed_notice, Notice, NoticeBanner};
use crate::components::pagination::{PaginationControls, TableAction, TableState};
use crate::components::spinner::LoadingSpinner;
use crate::config::AppConfig;
use web_sys::HtmlSelectElement;
use wee_core::models::{format_date, SupportTicket, TicketPriority, TicketStatus};
use yew::prelude::*;
use yew_router::prelude::*;

fn priority_class(priority: TicketPriority) -> &'static str {
    match priority {
        TicketPriority::Low => "bg-gray-100 text-gray-800 dark:bg-gray-700 dark:text-gray-200",
        TicketPriority::Medium => "bg-blue-100 text-blue-800 dark:bg-blue-900 dark:text-blue-200",
        TicketPriority::High => "bg-yellow-100 text-yellow-800 dark:bg-yellow-900 dark:text-yellow-200",
        TicketPriority::Urgent => "bg-red-100 text-red-800 dark:bg-red-900 dark:text-red-200",
    }
}

async fn load_tickets() -> Result<Vec<SupportTicket>, ClientError> {
    session_client()?.list_tickets().await
}

#[function_component(TicketsTable)]
pub fn tickets_table() -> Html {
    let check = use_admin_guard();
    let navigator = use_navigator();
    let table = use_reducer(TableState::<SupportTicket>::default);
    // Bumped after a status change to re-fetch the list
    let generation = use_generation();
    let is_loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let notice = use_timed_notice(AppConfig::NOTICE_MS);

    {
        let table = table.clone();
        let is_loading = is_loading.clone();
        let error = error.clone();
        let allowed = check == AdminCheck::Allowed;
        use_effect_with((allowed, *generation), move |(allowed, generation)| {
            let first_load = generation.is_initial();
            if *allowed {
                wasm_bindgen_futures::spawn_local(async move {
                    if first_load {
                        is_loading.set(true);
                    }
                    match load_tickets().await {
                        Ok(tickets) => {
                            table.dispatch(TableAction::Replace(tickets));
                            error.set(None);
                        }
                        Err(e) => {
                            error.set(Some(e.user_message("Could not load tickets")));
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

    let on_page_change = {
        let table = table.clone();
        Callback::from(move |page: usize| table.dispatch(TableAction::SetPage(page)))
    };

    let on_status_change = {
        let generation = generation.clone();
        let notice = notice.clone();
        Callback::from(move |(id, status): (i64, TicketStatus)| {
            let generation = generation.clone();
            let notice = notice.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = match session_client() {
                    Ok(client) => client.update_ticket_status(id, status).await,
                    Err(e) => Err(e),
                };
                match result {
                    Ok(response) => {
                        let text = response.message.unwrap_or_else(|| {
                            format!("Ticket #{id} marked {}", status.label())
                        });
                        notice.set(Some(Notice::Success(text)));
                        generation.dispatch(());
                    }
                    Err(e) => {
                        notice.set(Some(Notice::Error(
                            e.user_message("Could not update the ticket"),
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
        return html! { <LoadingSpinner text={Some("Loading tickets...".to_string())} /> };
    }

    if let Some(err) = (*error).as_ref() {
        return html! { <ErrorPanel message={err.clone()} /> };
    }

    let rows = &table.rows;

    html! {
        <div class="space-y-4">
            <h2 class="text-xl font-semibold text-gray-900 dark:text-gray-100">{"Support tickets"}</h2>
            <NoticeBanner notice={(*notice).clone()} />
            if rows.is_empty() {
                <p class="text-gray-500 dark:text-gray-400">{"No tickets."}</p>
            } else {
                <div class="bg-white dark:bg-gray-800 shadow overflow-hidden rounded-lg">
                    <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                        <thead class="bg-gray-50 dark:bg-gray-900">
                            <tr>
                                <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">{"Subject"}</th>
                                <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">{"From"}</th>
                                <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">{"Priority"}</th>
                                <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">{"Status"}</th>
                                <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">{"Created"}</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                            {rows.page_items().iter().map(|ticket| {
                                let id = ticket.id;
                                let onchange = {
                                    let on_status_change = on_status_change.clone();
                                    Callback::from(move |e: Event| {
                                        let select: HtmlSelectElement = e.target_unchecked_into();
                                        if let Some(status) = TicketStatus::parse(&select.value()) {
                                            on_status_change.emit((id, status));
                                        }
                                    })
                                };
                                let sender = ticket
                                    .email
                                    .clone()
                                    .or_else(|| ticket.user_email.clone())
                                    .unwrap_or_default();
                                html! {
                                    <tr key={id}>
                                        <td class="px-6 py-4 text-sm text-gray-900 dark:text-gray-100">
                                            <p class="font-medium">
                                                {&ticket.subject}
                                                if ticket.was_updated() {
                                                    <span class="ml-2 text-xs text-indigo-600 dark:text-indigo-400">{"(updated)"}</span>
                                                }
                                            </p>
                                            <p class="text-gray-500 dark:text-gray-400 max-w-md truncate" title={ticket.message.clone()}>{&ticket.message}</p>
                                        </td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500 dark:text-gray-400">
                                            {ticket.name.clone().unwrap_or_default()}
                                            <br />
                                            {sender}
                                        </td>
                                        <td class="px-6 py-4 whitespace-nowrap">
                                            <span class={classes!("px-2", "inline-flex", "text-xs", "leading-5", "font-semibold", "rounded-full", priority_class(ticket.priority))}>
                                                {ticket.priority.label()}
                                            </span>
                                        </td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm">
                                            <select
                                                class="px-2 py-1 border border-gray-300 dark:border-gray-600 rounded-md bg-white dark:bg-gray-800"
                                                onchange={onchange}
                                            >
                                                {TicketStatus::ALL.into_iter().map(|status| html! {
                                                    <option value={status.as_str()} selected={status == ticket.status}>
                                                        {status.label()}
                                                    </option>
                                                }).collect::<Html>()}
                                            </select>
                                        </td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500 dark:text-gray-400">
                                            {format_date(&ticket.created_at)}
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
