//! App Root Component
//!
//! Router, session and notification providers. Every page is wrapped in
//! [`Guarded`], which applies the route's access rule and chrome.

use clinicdesk::guard::PUBLIC_LANDING_PATH;
use leptos::*;
use leptos_router::*;

use crate::components::{Guarded, Toast};
use crate::pages::{
    Appointments, Availability, BookAppointment, Contact, Dashboard, DoctorFormPage, Doctors,
    Enquiries, Login, Profile,
};
use crate::state::{provide_auth, provide_global_state};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();
    provide_auth();

    view! {
        <Router>
            <Routes>
                <Route path="/" view=ToLanding />
                <Route path="/contact-us" view=|| view! { <Guarded><Contact /></Guarded> } />
                <Route path="/book-appointment" view=|| view! { <Guarded><BookAppointment /></Guarded> } />
                <Route path="/login" view=|| view! { <Guarded><Login /></Guarded> } />
                <Route path="/dashboard" view=|| view! { <Guarded><Dashboard /></Guarded> } />
                <Route path="/enquiries" view=|| view! { <Guarded><Enquiries /></Guarded> } />
                <Route path="/doctors" view=|| view! { <Guarded><Doctors /></Guarded> } />
                <Route path="/doctors/create" view=|| view! { <Guarded><DoctorFormPage /></Guarded> } />
                <Route path="/doctors/edit/:id" view=|| view! { <Guarded><DoctorFormPage /></Guarded> } />
                <Route path="/appointments" view=|| view! { <Guarded><Appointments /></Guarded> } />
                <Route path="/availability" view=|| view! { <Guarded><Availability /></Guarded> } />
                <Route path="/profile" view=|| view! { <Guarded><Profile /></Guarded> } />
                <Route path="/*any" view=ToLanding />
            </Routes>

            // Toast notifications
            <Toast />
        </Router>
    }
}

/// `/` and unknown paths land on the contact page
#[component]
fn ToLanding() -> impl IntoView {
    view! {
        <Redirect
            path=PUBLIC_LANDING_PATH
            options=NavigateOptions { replace: true, ..Default::default() }
        />
    }
}
