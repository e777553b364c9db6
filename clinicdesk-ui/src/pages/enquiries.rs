//! Enquiries Page
//!
//! Contact-form submissions, searchable, five per page.

use clinicdesk::format::enquiry_cell;
use clinicdesk::listing::{enquiry_columns, ENQUIRIES_PER_PAGE};
use clinicdesk::{filter_by_term, paginate, Enquiry};
use leptos::*;

use crate::api;
use crate::components::pagination::PageSummary;
use crate::components::{ListSkeleton, Pagination};
use crate::state::global::use_global_state;

#[component]
pub fn Enquiries() -> impl IntoView {
    let state = use_global_state();
    let (enquiries, set_enquiries) = create_signal(Vec::<Enquiry>::new());
    let (search, set_search) = create_signal(String::new());
    let (page, set_page) = create_signal(1usize);
    let (loading, set_loading) = create_signal(true);

    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_enquiries().await {
                Ok(list) => set_enquiries.set(list),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch enquiries: {}", e).into());
                    set_enquiries.set(Vec::new());
                    state.show_error(&e.user_message("Failed to fetch enquiries"));
                }
            }
            set_loading.set(false);
        });
    });

    let columns = create_memo(move |_| enquiries.with(|list| enquiry_columns(list)));
    let filtered = create_memo(move |_| enquiries.with(|list| filter_by_term(list, &search.get())));
    let visible = create_memo(move |_| {
        filtered.with(|list| paginate(list, page.get(), ENQUIRIES_PER_PAGE))
    });

    view! {
        <div>
            <h2 class="text-xl font-bold mb-4">"Contact Submissions"</h2>

            <div class="flex flex-col sm:flex-row sm:items-center sm:justify-between mb-4">
                <p class="text-gray-600 font-medium mb-2 sm:mb-0">
                    "Total Forms Received: "
                    <span class="font-semibold">{move || filtered.with(Vec::len)}</span>
                </p>
                <input
                    type="text"
                    placeholder="Search..."
                    class="border border-gray-300 rounded px-3 py-1 w-full sm:w-64"
                    prop:value=move || search.get()
                    on:input=move |ev| {
                        set_search.set(event_target_value(&ev));
                        set_page.set(1);
                    }
                />
            </div>

            {move || {
                if loading.get() {
                    return view! { <ListSkeleton count=5 /> }.into_view();
                }
                if filtered.with(Vec::is_empty) {
                    return view! {
                        <p class="text-gray-500 font-semibold">"No Data Available"</p>
                    }.into_view();
                }

                let headers = columns.get();
                view! {
                    <div class="overflow-x-auto bg-white rounded-lg shadow-sm">
                        <table class="min-w-full divide-y divide-gray-200">
                            <thead class="bg-gray-100 whitespace-nowrap">
                                <tr>
                                    {headers.iter().map(|key| view! {
                                        <th class="px-4 py-4 text-left text-xs font-semibold text-slate-900 uppercase tracking-wider">
                                            {key.clone()}
                                        </th>
                                    }).collect_view()}
                                </tr>
                            </thead>
                            <tbody class="bg-white divide-y divide-gray-200 whitespace-nowrap">
                                {visible.get().items.into_iter().map(|enquiry| view! {
                                    <tr>
                                        {headers.iter().map(|key| view! {
                                            <td class="px-4 py-4 text-sm text-slate-900 font-medium">
                                                {enquiry_cell(&enquiry, key)}
                                            </td>
                                        }).collect_view()}
                                    </tr>
                                }).collect_view()}
                            </tbody>
                        </table>
                        <Pagination
                            summary=Signal::derive(move || visible.with(|p| PageSummary::from(p)))
                            on_change=move |number| set_page.set(number)
                        />
                    </div>
                }.into_view()
            }}
        </div>
    }
}
