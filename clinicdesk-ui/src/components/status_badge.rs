//! Appointment status pill

use clinicdesk::AppointmentStatus;
use leptos::*;

#[component]
pub fn StatusBadge(status: AppointmentStatus) -> impl IntoView {
    let color = match status {
        AppointmentStatus::Pending => "bg-yellow-100 text-yellow-800",
        AppointmentStatus::Confirmed => "bg-green-100 text-green-800",
        AppointmentStatus::Cancelled => "bg-gray-100 text-gray-800",
        AppointmentStatus::Rejected => "bg-red-100 text-red-800",
        AppointmentStatus::Other(_) => "bg-blue-100 text-blue-800",
    };

    view! {
        <span class=format!("px-2 py-1 rounded-full text-xs font-medium capitalize {}", color)>
            {status.to_string()}
        </span>
    }
}
