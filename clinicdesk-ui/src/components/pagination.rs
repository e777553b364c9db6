//! Pagination Controls

use clinicdesk::Page;
use leptos::*;

/// Position within a paginated list, detached from the items
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PageSummary {
    pub page: usize,
    pub total_pages: usize,
    pub first: usize,
    pub last: usize,
    pub total: usize,
}

impl<T> From<&Page<T>> for PageSummary {
    fn from(page: &Page<T>) -> Self {
        Self {
            page: page.page,
            total_pages: page.total_pages,
            first: page.first_index(),
            last: page.last_index(),
            total: page.total_items,
        }
    }
}

/// "Showing x to y of z" plus previous / numbered / next buttons.
/// Hidden when everything fits on one page.
#[component]
pub fn Pagination(
    #[prop(into)]
    summary: Signal<PageSummary>,
    #[prop(into)]
    on_change: Callback<usize>,
) -> impl IntoView {
    move || {
        let current = summary.get();
        if current.total_pages <= 1 {
            return view! {}.into_view();
        }

        view! {
            <div class="flex flex-col sm:flex-row items-center justify-between gap-3 px-4 py-3 border-t border-gray-200">
                <p class="text-sm text-gray-600">
                    {format!("Showing {} to {} of {} results", current.first, current.last, current.total)}
                </p>
                <div class="flex items-center space-x-1">
                    <button
                        class="px-3 py-1 rounded border border-gray-300 text-sm disabled:opacity-50"
                        disabled=current.page <= 1
                        on:click=move |_| on_change.call(current.page.saturating_sub(1))
                    >
                        "Previous"
                    </button>
                    {(1..=current.total_pages).map(|number| {
                        let class = if number == current.page {
                            "px-3 py-1 rounded text-sm bg-blue-600 text-white"
                        } else {
                            "px-3 py-1 rounded text-sm border border-gray-300 hover:bg-gray-100"
                        };
                        view! {
                            <button class=class on:click=move |_| on_change.call(number)>
                                {number}
                            </button>
                        }
                    }).collect_view()}
                    <button
                        class="px-3 py-1 rounded border border-gray-300 text-sm disabled:opacity-50"
                        disabled=current.page >= current.total_pages
                        on:click=move |_| on_change.call(current.page + 1)
                    >
                        "Next"
                    </button>
                </div>
            </div>
        }
        .into_view()
    }
}
