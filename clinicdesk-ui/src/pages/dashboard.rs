//! Dashboard Page
//!
//! Admins see account and enquiry totals; doctors see their appointments
//! counted by status.

use clinicdesk::{AppointmentStats, Role};
use leptos::*;

use crate::api;
use crate::components::Loading;
use crate::state::auth::use_auth;
use crate::state::global::use_global_state;

#[component]
pub fn Dashboard() -> impl IntoView {
    let auth = use_auth();

    move || match auth.role() {
        Some(Role::Doctor) => view! { <DoctorDashboard /> }.into_view(),
        _ => view! { <AdminDashboard /> }.into_view(),
    }
}

#[component]
fn AdminDashboard() -> impl IntoView {
    let state = use_global_state();
    let (admins, set_admins) = create_signal(0usize);
    let (enquiries, set_enquiries) = create_signal(0usize);
    let (loading, set_loading) = create_signal(true);

    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_enquiries().await {
                Ok(list) => set_enquiries.set(list.len()),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch enquiries: {}", e).into());
                    set_enquiries.set(0);
                    state.show_error(&e.user_message("Failed to fetch dashboard data"));
                }
            }
            match api::fetch_admins().await {
                Ok(list) => set_admins.set(list.len()),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch admins: {}", e).into());
                    set_admins.set(0);
                    state.show_error(&e.user_message("Failed to fetch dashboard data"));
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div>
            <h2 class="text-2xl font-bold mb-6">"Dashboard"</h2>
            {move || if loading.get() {
                view! { <Loading /> }.into_view()
            } else {
                view! {
                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-6 max-w-2xl">
                        <StatCard label="Total Admin Users" value=admins.get() accent="text-blue-600" />
                        <StatCard label="Total Enquiries" value=enquiries.get() accent="text-purple-600" />
                    </div>
                }.into_view()
            }}
        </div>
    }
}

#[component]
fn DoctorDashboard() -> impl IntoView {
    let auth = use_auth();
    let state = use_global_state();
    let (stats, set_stats) = create_signal(AppointmentStats::default());
    let (loading, set_loading) = create_signal(true);
    let doctor_id = auth.identity().and_then(|identity| identity.id());
    let name = auth
        .identity()
        .map(|identity| identity.display_name())
        .unwrap_or_default();

    create_effect(move |_| {
        let Some(doctor_id) = doctor_id.clone() else {
            set_loading.set(false);
            return;
        };
        spawn_local(async move {
            match api::fetch_doctor_appointments(&doctor_id).await {
                Ok(list) => set_stats.set(AppointmentStats::from_appointments(&list)),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch appointments: {}", e).into());
                    state.show_error(&e.user_message("Failed to fetch appointments"));
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div>
            <h2 class="text-2xl font-bold mb-1">"Dashboard"</h2>
            <p class="text-gray-600 mb-6">{format!("Welcome back, Dr. {}", name)}</p>
            {move || if loading.get() {
                view! { <Loading /> }.into_view()
            } else {
                let current = stats.get();
                view! {
                    <div class="grid grid-cols-2 lg:grid-cols-5 gap-4">
                        <StatCard label="Total" value=current.total accent="text-gray-900" />
                        <StatCard label="Pending" value=current.pending accent="text-yellow-600" />
                        <StatCard label="Confirmed" value=current.confirmed accent="text-green-600" />
                        <StatCard label="Cancelled" value=current.cancelled accent="text-gray-600" />
                        <StatCard label="Rejected" value=current.rejected accent="text-red-600" />
                    </div>
                }.into_view()
            }}
        </div>
    }
}

/// Labelled count
#[component]
pub fn StatCard(
    label: &'static str,
    value: usize,
    #[prop(default = "text-gray-900")]
    accent: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow-sm border border-gray-200 p-6 flex flex-col items-center">
            <h3 class="text-sm font-medium text-gray-500">{label}</h3>
            <p class=format!("text-3xl font-semibold mt-2 {}", accent)>{value}</p>
        </div>
    }
}
