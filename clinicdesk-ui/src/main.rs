//! ClinicDesk Console
//!
//! Browser front end for the clinic API built with Leptos (WASM).
//!
//! # Features
//!
//! - Public contact form and appointment booking
//! - Admin and doctor sign-in with a persisted session
//! - Enquiry, doctor and appointment management for admins
//! - Appointment review, availability and profile for doctors
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Records, validation and routing rules come from the
//! `clinicdesk` core crate; calls go to `/api/*` on the serving origin
//! unless an API base is set in local storage.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
