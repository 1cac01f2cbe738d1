//! Prev/next and numbered page controls shared by every table

use std::rc::Rc;

use wee_core::pagination::{page_window, Identified, Paginated, ITEMS_PER_PAGE};
use yew::prelude::*;

/// Reducer state for a fully fetched, client-side paginated table
#[derive(Clone, Debug, PartialEq)]
pub struct TableState<T> {
    pub rows: Paginated<T>,
}

impl<T> Default for TableState<T> {
    fn default() -> Self {
        Self {
            rows: Paginated::default(),
        }
    }
}

pub enum TableAction<T> {
    /// A fresh fetch; back to page 1
    Replace(Vec<T>),
    SetPage(usize),
    Remove(i64),
}

impl<T: Identified + Clone> Reducible for TableState<T> {
    type Action = TableAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut rows = self.rows.clone();
        let changed = match action {
            TableAction::Replace(items) => {
                rows.replace(items);
                true
            }
            TableAction::SetPage(page) => rows.set_page(page),
            TableAction::Remove(id) => rows.remove_by_id(id).is_some(),
        };
        if changed {
            Rc::new(Self { rows })
        } else {
            self
        }
    }
}

/// "Showing `start` to `end` of `total`" for a 1-based page
pub fn range_label(current_page: usize, total_items: usize) -> String {
    let start = current_page.saturating_sub(1) * ITEMS_PER_PAGE + 1;
    let end = (current_page * ITEMS_PER_PAGE).min(total_items);
    format!("Showing {start} to {end} of {total_items}")
}

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub on_page_change: Callback<usize>,
}

#[function_component(PaginationControls)]
pub fn pagination_controls(props: &PaginationProps) -> Html {
    if props.total_pages == 0 {
        return html! {};
    }

    let current = props.current_page;
    let go_to = |page: usize| {
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |_: MouseEvent| on_page_change.emit(page))
    };

    let nav_button = "px-3 py-1 rounded-md border border-gray-300 dark:border-gray-600 text-sm disabled:opacity-50 disabled:cursor-not-allowed";

    html! {
        <div class="flex items-center justify-between px-4 py-3 text-sm text-gray-600 dark:text-gray-400">
            <p>{range_label(current, props.total_items)}</p>
            <nav class="flex items-center space-x-1" aria-label="Pagination">
                <button
                    class={nav_button}
                    disabled={current <= 1}
                    onclick={go_to(current.saturating_sub(1))}
                >
                    {"Previous"}
                </button>
                {page_window(current, props.total_pages).into_iter().map(|page| {
                    let class = if page == current {
                        "px-3 py-1 rounded-md bg-indigo-600 text-white text-sm"
                    } else {
                        "px-3 py-1 rounded-md border border-gray-300 dark:border-gray-600 text-sm hover:bg-gray-100 dark:hover:bg-gray-800"
                    };
                    html! {
                        <button key={page} class={class} onclick={go_to(page)}>
                            {page}
                        </button>
                    }
                }).collect::<Html>()}
                <button
                    class={nav_button}
                    disabled={current >= props.total_pages}
                    onclick={go_to(current + 1)}
                >
                    {"Next"}
                </button>
            </nav>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row(i64);

    impl Identified for Row {
        fn id(&self) -> i64 {
            self.0
        }
    }

    #[test]
    fn test_table_reducer() {
        let state = Rc::new(TableState::default());
        let state = state.reduce(TableAction::Replace((1..=15).map(Row).collect()));
        assert_eq!(state.rows.total_pages(), 2);

        let state = state.reduce(TableAction::SetPage(2));
        assert_eq!(state.rows.page_items().len(), 5);

        let unchanged = state.clone().reduce(TableAction::SetPage(9));
        assert!(Rc::ptr_eq(&state, &unchanged));

        let state = state.reduce(TableAction::Remove(15));
        assert_eq!(state.rows.len(), 14);
        assert_eq!(state.rows.current_page(), 2);
    }

    #[test]
    fn test_range_label() {
        assert_eq!(range_label(1, 25), "Showing 1 to 10 of 25");
        assert_eq!(range_label(3, 25), "Showing 21 to 25 of 25");
        assert_eq!(range_label(1, 4), "Showing 1 to 4 of 4");
    }

    #[test]
    fn test_range_label_past_end() {
        // A removal can leave the current page beyond the last one
        assert_eq!(range_label(2, 10), "Showing 11 to 10 of 10");
    }
}
