//! Doctor Management Page
//!
//! Directory of every doctor with search, pagination, edit and delete.
//! A delete is followed by a fresh fetch of the whole list.

use clinicdesk::guard::AppRoute;
use clinicdesk::listing::doctor_page;
use clinicdesk::{Doctor, DoctorStatus, RecordId};
use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::pagination::PageSummary;
use crate::components::Pagination;
use crate::state::global::use_global_state;

/// Browser confirmation prompt; a blocked dialog counts as "no".
pub(crate) fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[component]
pub fn Doctors() -> impl IntoView {
    let state = use_global_state();
    let navigate = use_navigate();
    let (doctors, set_doctors) = create_signal(Vec::<Doctor>::new());
    let (search, set_search) = create_signal(String::new());
    let (page, set_page) = create_signal(1usize);
    let (loading, set_loading) = create_signal(true);
    let (reload, set_reload) = create_signal(0u32);

    create_effect(move |_| {
        reload.track();
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_doctors().await {
                Ok(list) => set_doctors.set(list),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch doctors: {}", e).into());
                    set_doctors.set(Vec::new());
                    state.show_error(&e.user_message("Failed to fetch doctors"));
                }
            }
            set_loading.set(false);
        });
    });

    let visible = create_memo(move |_| {
        doctors.with(|list| search.with(|term| doctor_page(list, term, page.get())))
    });

    let handle_delete = move |id: RecordId| {
        if !confirm("Are you sure you want to delete this doctor?") {
            return;
        }
        spawn_local(async move {
            match api::delete_doctor(&id).await {
                Ok(_) => {
                    state.show_success("Doctor deleted successfully");
                    set_reload.update(|n| *n += 1);
                }
                Err(e) => state.show_error(&e.user_message("Failed to delete doctor")),
            }
        });
    };

    let go_create = {
        let navigate = navigate.clone();
        move |_| navigate(&AppRoute::CreateDoctor.path(), Default::default())
    };

    view! {
        <div class="space-y-6">
            <div class="flex flex-col sm:flex-row justify-between items-start sm:items-center gap-4">
                <div>
                    <h1 class="text-2xl font-bold text-gray-900">"Doctor Management"</h1>
                    <p class="text-gray-600">"Manage all doctors in the system"</p>
                </div>
                <button
                    class="bg-blue-600 text-white px-4 py-2 rounded-lg hover:bg-blue-700"
                    on:click=go_create
                >
                    "+ Add Doctor"
                </button>
            </div>

            <div class="bg-white rounded-lg shadow p-6">
                <div class="flex flex-col sm:flex-row justify-between items-start sm:items-center gap-4 mb-6">
                    <input
                        type="text"
                        placeholder="Search doctors by name, email, specialization..."
                        class="flex-1 max-w-md w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500"
                        prop:value=move || search.get()
                        on:input=move |ev| {
                            set_search.set(event_target_value(&ev));
                            set_page.set(1);
                        }
                    />
                    <div class="text-sm text-gray-600">
                        {move || format!("{} of {} doctors", visible.with(|p| p.total_items), doctors.with(Vec::len))}
                    </div>
                </div>

                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-gray-200">
                        <thead class="bg-gray-50">
                            <tr>
                                {["Name", "Email", "Specialization", "Phone", "Status", "Actions"].into_iter().map(|label| view! {
                                    <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">
                                        {label}
                                    </th>
                                }).collect_view()}
                            </tr>
                        </thead>
                        <tbody class="bg-white divide-y divide-gray-200">
                            {
                                let navigate = navigate.clone();
                                move || {
                                    if loading.get() {
                                        return message_row("Loading doctors...");
                                    }
                                    let current = visible.get();
                                    if current.items.is_empty() {
                                        return message_row(if search.with(String::is_empty) {
                                            "No doctors found"
                                        } else {
                                            "No doctors found matching your search"
                                        });
                                    }
                                    current.items.into_iter().map(|doctor| {
                                        let edit_path = AppRoute::EditDoctor(doctor.id.clone()).path();
                                        let delete_id = doctor.id.clone();
                                        let navigate = navigate.clone();
                                        let badge = if doctor.status_kind() == DoctorStatus::Active {
                                            "bg-green-100 text-green-800"
                                        } else {
                                            "bg-red-100 text-red-800"
                                        };
                                        view! {
                                            <tr class="hover:bg-gray-50">
                                                <td class="px-6 py-4 whitespace-nowrap">
                                                    <div class="text-sm font-medium text-gray-900">{doctor.full_name.clone()}</div>
                                                    <div class="text-sm text-gray-500">{doctor.qualification.clone()}</div>
                                                </td>
                                                <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{doctor.email.clone()}</td>
                                                <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{doctor.specialization.clone()}</td>
                                                <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{doctor.phone.clone()}</td>
                                                <td class="px-6 py-4 whitespace-nowrap">
                                                    <span class=format!("inline-flex px-2 py-1 text-xs font-semibold rounded-full {}", badge)>
                                                        {doctor.status.clone()}
                                                    </span>
                                                </td>
                                                <td class="px-6 py-4 whitespace-nowrap text-sm font-medium space-x-3">
                                                    <button
                                                        class="text-blue-600 hover:text-blue-800"
                                                        on:click=move |_| navigate(&edit_path, Default::default())
                                                    >
                                                        "Edit"
                                                    </button>
                                                    <button
                                                        class="text-red-600 hover:text-red-800"
                                                        on:click=move |_| handle_delete(delete_id.clone())
                                                    >
                                                        "Delete"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    }).collect_view()
                                }
                            }
                        </tbody>
                    </table>
                </div>

                <Pagination
                    summary=Signal::derive(move || visible.with(|p| PageSummary::from(p)))
                    on_change=move |number| set_page.set(number)
                />
            </div>
        </div>
    }
}

fn message_row(message: &'static str) -> View {
    view! {
        <tr>
            <td colspan="6" class="px-6 py-4 text-center text-gray-500">{message}</td>
        </tr>
    }
    .into_view()
}
