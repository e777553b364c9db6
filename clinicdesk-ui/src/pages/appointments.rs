//! Appointments Page
//!
//! Admins manage every appointment: filter, review, delete, inspect.
//! Doctors see their own and confirm or reject pending ones. Every change
//! re-fetches the list.

use clinicdesk::format::{format_long_date, format_short_date, format_time_12h};
use clinicdesk::listing::doctor_name;
use clinicdesk::{Appointment, AppointmentFilter, AppointmentStats, AppointmentStatus, Doctor, RecordId, Role};
use leptos::*;

use super::dashboard::StatCard;
use super::doctors::confirm;
use crate::api;
use crate::components::{ListSkeleton, Modal, StatusBadge};
use crate::state::auth::use_auth;
use crate::state::global::{use_global_state, GlobalState};

const FILTER_CLASS: &str = "px-3 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500";

#[component]
pub fn Appointments() -> impl IntoView {
    let auth = use_auth();

    move || match auth.role() {
        Some(Role::Doctor) => view! { <DoctorAppointments /> }.into_view(),
        _ => view! { <AdminAppointments /> }.into_view(),
    }
}

/// `"all"` or empty means no status filter.
fn status_filter(value: &str) -> Option<AppointmentStatus> {
    match value.trim() {
        "" | "all" => None,
        other => Some(AppointmentStatus::from(other)),
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Send a status change, toast the outcome and ask for a re-fetch.
fn change_status(
    state: GlobalState,
    id: RecordId,
    status: AppointmentStatus,
    reload: WriteSignal<u32>,
) {
    spawn_local(async move {
        match api::update_appointment_status(&id, &status).await {
            Ok(_) => {
                state.show_success(&format!(
                    "Appointment {} successfully",
                    status.as_str().to_lowercase()
                ));
                reload.update(|n| *n += 1);
            }
            Err(e) => state.show_error(&e.user_message("Failed to update appointment")),
        }
    });
}

#[component]
fn StatusSelect(filter: RwSignal<AppointmentFilter>) -> impl IntoView {
    view! {
        <select
            class=FILTER_CLASS
            on:change=move |ev| {
                let value = event_target_value(&ev);
                filter.update(|f| f.status = status_filter(&value));
            }
        >
            <option value="all">"All Status"</option>
            {AppointmentStatus::KNOWN.into_iter().map(|status| {
                let value = status.as_str().to_string();
                view! { <option value=value.clone()>{value}</option> }
            }).collect_view()}
        </select>
    }
}

#[component]
fn DateFilter(filter: RwSignal<AppointmentFilter>) -> impl IntoView {
    view! {
        <input
            type="date"
            class=FILTER_CLASS
            prop:value=move || filter.with(|f| f.date.clone().unwrap_or_default())
            on:input=move |ev| {
                let value = event_target_value(&ev);
                filter.update(|f| f.date = non_empty(value));
            }
        />
    }
}

#[component]
fn StatsRow(#[prop(into)] stats: Signal<AppointmentStats>) -> impl IntoView {
    move || {
        let current = stats.get();
        view! {
            <div class="grid grid-cols-2 lg:grid-cols-5 gap-4 mb-6">
                <StatCard label="Total" value=current.total />
                <StatCard label="Pending" value=current.pending accent="text-yellow-600" />
                <StatCard label="Confirmed" value=current.confirmed accent="text-green-600" />
                <StatCard label="Cancelled" value=current.cancelled accent="text-gray-600" />
                <StatCard label="Rejected" value=current.rejected accent="text-red-600" />
            </div>
        }
    }
}

#[component]
fn AdminAppointments() -> impl IntoView {
    let state = use_global_state();
    let (appointments, set_appointments) = create_signal(Vec::<Appointment>::new());
    let (doctors, set_doctors) = create_signal(Vec::<Doctor>::new());
    let (loading, set_loading) = create_signal(true);
    let (reload, set_reload) = create_signal(0u32);
    let (selected, set_selected) = create_signal(None::<Appointment>);
    let filter = create_rw_signal(AppointmentFilter::default());

    create_effect(move |_| {
        reload.track();
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_appointments().await {
                Ok(list) => set_appointments.set(list),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch appointments: {}", e).into());
                    set_appointments.set(Vec::new());
                    state.show_error(&e.user_message("Error fetching appointments"));
                }
            }
            set_loading.set(false);
        });
    });

    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_doctors().await {
                Ok(list) => set_doctors.set(list),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch doctors: {}", e).into())
                }
            }
        });
    });

    let shown = create_memo(move |_| filter.with(|f| appointments.with(|list| f.summarize(list))));
    let stats = Signal::derive(move || shown.with(|s| s.stats));

    let handle_delete = move |id: RecordId| {
        if !confirm("Are you sure you want to delete this appointment?") {
            return;
        }
        spawn_local(async move {
            match api::delete_appointment(&id).await {
                Ok(_) => {
                    state.show_success("Appointment deleted successfully");
                    set_reload.update(|n| *n += 1);
                }
                Err(e) => state.show_error(&e.user_message("Error deleting appointment")),
            }
        });
    };

    view! {
        <div>
            <div class="mb-6">
                <h1 class="text-2xl font-bold text-gray-900">"Appointment Management"</h1>
                <p class="text-gray-600">"Manage all patient appointments"</p>
            </div>

            <StatsRow stats=stats />

            <div class="bg-white rounded-lg shadow p-4 mb-6 grid grid-cols-1 md:grid-cols-4 gap-4">
                <input
                    type="text"
                    placeholder="Search patient name, email, phone..."
                    class=FILTER_CLASS
                    prop:value=move || filter.with(|f| f.search.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        filter.update(|f| f.search = value);
                    }
                />
                <StatusSelect filter=filter />
                <select
                    class=FILTER_CLASS
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        filter.update(|f| f.doctor_id = non_empty(value).map(RecordId::from));
                    }
                >
                    <option value="">"All Doctors"</option>
                    {move || doctors.get().into_iter().map(|doctor| view! {
                        <option value=doctor.id.to_string()>{doctor.full_name}</option>
                    }).collect_view()}
                </select>
                <DateFilter filter=filter />
            </div>

            <div class="bg-white rounded-lg shadow overflow-x-auto">
                {move || {
                    if loading.get() {
                        return view! { <div class="p-6"><ListSkeleton count=5 /></div> }.into_view();
                    }
                    let list = shown.with(|s| s.items.clone());
                    if list.is_empty() {
                        return view! {
                            <p class="p-6 text-center text-gray-500">"No appointments found"</p>
                        }.into_view();
                    }
                    let directory = doctors.get();
                    view! {
                        <table class="min-w-full divide-y divide-gray-200">
                            <thead class="bg-gray-50">
                                <tr>
                                    {["Patient", "Doctor", "Date & Time", "Status", "Actions"].into_iter().map(|label| view! {
                                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{label}</th>
                                    }).collect_view()}
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-gray-200">
                                {list.into_iter().map(|apt| {
                                    let doctor = doctor_name(&directory, &apt.doctor_id);
                                    let id = apt.id.clone();
                                    let reviewable = apt.status.is_reviewable();
                                    let details = apt.clone();
                                    let (confirm_id, reject_id, delete_id) = (id.clone(), id.clone(), id);
                                    view! {
                                        <tr class="hover:bg-gray-50">
                                            <td class="px-6 py-4 whitespace-nowrap">
                                                <div class="text-sm font-medium text-gray-900">{apt.patient_name.clone()}</div>
                                                <div class="text-sm text-gray-500">{apt.patient_email.clone().unwrap_or_default()}</div>
                                                <div class="text-sm text-gray-500">{apt.patient_phone.clone().unwrap_or_default()}</div>
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{format!("Dr. {}", doctor)}</td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">
                                                <div>{format_short_date(&apt.appointment_date)}</div>
                                                <div class="text-gray-500">{format_time_12h(&apt.appointment_time)}</div>
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap"><StatusBadge status=apt.status.clone() /></td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm space-x-2">
                                                <button class="text-blue-600 hover:text-blue-800" on:click=move |_| set_selected.set(Some(details.clone()))>
                                                    "View"
                                                </button>
                                                {reviewable.then(|| view! {
                                                    <button class="text-green-600 hover:text-green-800" on:click=move |_| change_status(state, confirm_id.clone(), AppointmentStatus::Confirmed, set_reload)>
                                                        "Confirm"
                                                    </button>
                                                    <button class="text-orange-600 hover:text-orange-800" on:click=move |_| change_status(state, reject_id.clone(), AppointmentStatus::Rejected, set_reload)>
                                                        "Reject"
                                                    </button>
                                                })}
                                                <button class="text-red-600 hover:text-red-800" on:click=move |_| handle_delete(delete_id.clone())>
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    }.into_view()
                }}
            </div>

            {move || selected.get().map(|apt| {
                let doctor = doctors.with(|list| doctor_name(list, &apt.doctor_id));
                view! {
                    <Modal title="Appointment Details" on_close=move |_| set_selected.set(None)>
                        <AppointmentDetails appointment=apt.clone() doctor=doctor.clone() />
                    </Modal>
                }
            })}
        </div>
    }
}

#[component]
fn AppointmentDetails(appointment: Appointment, doctor: String) -> impl IntoView {
    let rows = [
        ("Patient", appointment.patient_name.clone()),
        ("Email", appointment.patient_email.clone().unwrap_or_default()),
        ("Phone", appointment.patient_phone.clone().unwrap_or_default()),
        ("Doctor", format!("Dr. {}", doctor)),
        ("Date", format_long_date(&appointment.appointment_date)),
        ("Time", format_time_12h(&appointment.appointment_time)),
        ("Reason", appointment.reason.clone().unwrap_or_default()),
    ];

    view! {
        <dl class="space-y-3">
            {rows.into_iter().map(|(label, value)| view! {
                <div class="flex justify-between gap-4">
                    <dt class="text-sm text-gray-500">{label}</dt>
                    <dd class="text-sm font-medium text-gray-900 text-right">
                        {if value.trim().is_empty() { "—".to_string() } else { value }}
                    </dd>
                </div>
            }).collect_view()}
            <div class="flex justify-between gap-4">
                <dt class="text-sm text-gray-500">"Status"</dt>
                <dd><StatusBadge status=appointment.status.clone() /></dd>
            </div>
        </dl>
    }
}

#[component]
fn DoctorAppointments() -> impl IntoView {
    let state = use_global_state();
    let auth = use_auth();
    let doctor_id = auth.identity().and_then(|identity| identity.id());

    let (appointments, set_appointments) = create_signal(Vec::<Appointment>::new());
    let (loading, set_loading) = create_signal(true);
    let (reload, set_reload) = create_signal(0u32);
    let filter = create_rw_signal(AppointmentFilter::default());

    create_effect(move |_| {
        reload.track();
        let Some(doctor_id) = doctor_id.clone() else {
            set_loading.set(false);
            return;
        };
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_doctor_appointments(&doctor_id).await {
                Ok(list) => set_appointments.set(list),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch appointments: {}", e).into());
                    set_appointments.set(Vec::new());
                    state.show_error(&e.user_message("Failed to fetch appointments"));
                }
            }
            set_loading.set(false);
        });
    });

    let shown = create_memo(move |_| filter.with(|f| appointments.with(|list| f.summarize(list))));
    let stats = Signal::derive(move || shown.with(|s| s.stats));

    view! {
        <div>
            <div class="mb-6">
                <h1 class="text-2xl font-bold text-gray-900">"My Appointments"</h1>
                <p class="text-gray-600">"Review and respond to your patient bookings"</p>
            </div>

            <StatsRow stats=stats />

            <div class="bg-white rounded-lg shadow p-4 mb-6 flex flex-col sm:flex-row gap-4">
                <StatusSelect filter=filter />
                <DateFilter filter=filter />
            </div>

            {move || {
                if loading.get() {
                    return view! { <ListSkeleton count=4 /> }.into_view();
                }
                let list = shown.with(|s| s.items.clone());
                if list.is_empty() {
                    return view! {
                        <p class="bg-white rounded-lg shadow p-6 text-center text-gray-500">"No appointments found"</p>
                    }.into_view();
                }
                view! {
                    <div class="space-y-4">
                        {list.into_iter().map(|apt| {
                            let reviewable = apt.status.is_reviewable();
                            let (confirm_id, reject_id) = (apt.id.clone(), apt.id.clone());
                            view! {
                                <div class="bg-white rounded-lg shadow p-4 flex flex-col md:flex-row md:items-center md:justify-between gap-4">
                                    <div class="space-y-1">
                                        <div class="flex items-center gap-3">
                                            <h3 class="font-semibold text-gray-900">{apt.patient_name.clone()}</h3>
                                            <StatusBadge status=apt.status.clone() />
                                        </div>
                                        <p class="text-sm text-gray-600">
                                            {format!("{} at {}", format_long_date(&apt.appointment_date), format_time_12h(&apt.appointment_time))}
                                        </p>
                                        <p class="text-sm text-gray-500">
                                            {[apt.patient_email.clone(), apt.patient_phone.clone()]
                                                .into_iter()
                                                .flatten()
                                                .filter(|s| !s.trim().is_empty())
                                                .collect::<Vec<_>>()
                                                .join(" · ")}
                                        </p>
                                        {apt.reason.clone().filter(|r| !r.trim().is_empty()).map(|reason| view! {
                                            <p class="text-sm text-gray-700">{format!("Reason: {}", reason)}</p>
                                        })}
                                    </div>
                                    {reviewable.then(|| view! {
                                        <div class="flex gap-2">
                                            <button
                                                class="px-4 py-2 rounded-lg bg-green-600 text-white hover:bg-green-700"
                                                on:click=move |_| change_status(state, confirm_id.clone(), AppointmentStatus::Confirmed, set_reload)
                                            >
                                                "Confirm"
                                            </button>
                                            <button
                                                class="px-4 py-2 rounded-lg bg-red-600 text-white hover:bg-red-700"
                                                on:click=move |_| change_status(state, reject_id.clone(), AppointmentStatus::Rejected, set_reload)
                                            >
                                                "Reject"
                                            </button>
                                        </div>
                                    })}
                                </div>
                            }
                        }).collect_view()}
                    </div>
                }.into_view()
            }}
        </div>
    }
}
