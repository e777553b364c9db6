//! Navigation Component
//!
//! Header bar for the public pages. Shows a dashboard link instead of
//! "Login" once someone is signed in.

use leptos::*;
use leptos_router::*;

use crate::state::auth::use_auth;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let auth = use_auth();
    let (menu_open, set_menu_open) = create_signal(false);

    view! {
        <nav class="bg-white border-b border-gray-200 shadow-sm">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/contact-us" class="flex items-center space-x-3">
                        <span class="text-2xl">"🏥"</span>
                        <span class="text-xl font-bold text-blue-600">"ClinicDesk"</span>
                    </A>

                    <button
                        class="md:hidden p-2 rounded hover:bg-gray-100"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>

                    // Navigation links
                    <div class=move || {
                        if menu_open.get() {
                            "absolute top-16 left-0 right-0 bg-white border-b border-gray-200 flex flex-col p-2 md:static md:flex md:flex-row md:items-center md:space-x-1 md:border-0 md:p-0"
                        } else {
                            "hidden md:flex md:items-center md:space-x-1"
                        }
                    }>
                        <NavLink href="/contact-us" label="Contact Us" />
                        <NavLink href="/book-appointment" label="Book Appointment" />
                        {move || {
                            if auth.is_authenticated() {
                                view! { <NavLink href="/dashboard" label="Dashboard" /> }.into_view()
                            } else {
                                view! { <NavLink href="/login" label="Login" /> }.into_view()
                            }
                        }}
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-600 hover:text-blue-600 hover:bg-gray-100 transition-colors"
            active_class="bg-blue-50 text-blue-700"
        >
            {label}
        </A>
    }
}
