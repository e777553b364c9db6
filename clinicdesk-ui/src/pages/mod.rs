//! Page Components
//!
//! One component per route.

pub mod appointments;
pub mod availability;
pub mod book_appointment;
pub mod contact;
pub mod dashboard;
pub mod doctor_form;
pub mod doctors;
pub mod enquiries;
pub mod login;
pub mod profile;

pub use appointments::Appointments;
pub use availability::Availability;
pub use book_appointment::BookAppointment;
pub use contact::Contact;
pub use dashboard::Dashboard;
pub use doctor_form::DoctorFormPage;
pub use doctors::Doctors;
pub use enquiries::Enquiries;
pub use login::Login;
pub use profile::Profile;

/// Today's date in the browser's time zone
pub(crate) fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

pub(crate) const INPUT_CLASS: &str = "w-full py-2.5 px-4 text-slate-800 bg-gray-100 border border-gray-200 \
     rounded-md focus:border-slate-900 focus:bg-white text-sm outline-0 transition-all";

pub(crate) const LABEL_CLASS: &str = "text-sm text-slate-900 font-medium mb-2 block";
