//! Dashboard Chrome
//!
//! Sidebar with the role's menu, and the shell that frames every signed-in
//! page with it.

use clinicdesk::guard::{menu_for, PUBLIC_LANDING_PATH};
use leptos::*;
use leptos_router::*;

use crate::state::auth::use_auth;
use crate::state::global::use_global_state;

/// Sidebar for the signed-in role
#[component]
pub fn Sidebar(
    #[prop(into)]
    open: Signal<bool>,
    #[prop(into)]
    on_close: Callback<()>,
) -> impl IntoView {
    let auth = use_auth();
    let session = auth.session;
    let state = use_global_state();
    let navigate = use_navigate();

    let handle_logout = move |_| {
        auth.logout();
        state.show_success("Logged out successfully");
        navigate(PUBLIC_LANDING_PATH, Default::default());
    };

    view! {
        // Overlay for small screens
        {move || open.get().then(|| view! {
            <div class="fixed inset-0 top-16 bg-black/50 z-40 lg:hidden" on:click=move |_| on_close.call(()) />
        })}

        <aside class=move || format!(
            "fixed top-16 left-0 h-[calc(100vh-64px)] w-64 bg-white shadow-lg z-50 transform transition-transform duration-300 \
             lg:translate-x-0 lg:static lg:z-auto {}",
            if open.get() { "translate-x-0" } else { "-translate-x-full" }
        )>
            <div class="flex flex-col h-full">
                {move || session.get().map(|current| {
                    let name = current.identity.display_name();
                    view! {
                        <div class="p-4 border-b border-gray-200">
                            <h1 class="text-xl font-bold text-blue-600">{current.role.panel_title()}</h1>
                            <p class="text-sm text-gray-600 mt-1">
                                {format!("Welcome back {}, {}", name, current.role.label())}
                            </p>
                        </div>

                        <nav class="flex-1 p-3">
                            <ul class="space-y-1">
                                {menu_for(current.role).iter().map(|item| view! {
                                    <li on:click=move |_| on_close.call(())>
                                        <A
                                            href=item.path
                                            exact=true
                                            class="flex items-center px-3 py-2 rounded-lg text-sm text-gray-700 hover:bg-gray-100 hover:text-gray-900 transition-colors"
                                            active_class="bg-blue-100 text-blue-700 border-l-4 border-blue-600"
                                        >
                                            {item.label}
                                        </A>
                                    </li>
                                }).collect_view()}
                            </ul>
                        </nav>
                    }
                })}

                <div class="p-3 border-t border-gray-200 space-y-3">
                    <button
                        class="w-full flex items-center gap-3 px-3 py-2 text-red-600 hover:bg-red-50 rounded-lg transition-colors"
                        on:click=handle_logout
                    >
                        "Logout"
                    </button>
                    <p class="text-xs text-gray-500">"© ClinicDesk Medical System"</p>
                </div>
            </div>
        </aside>
    }
}

/// Top bar plus sidebar around a signed-in page
#[component]
pub fn DashboardShell(children: Children) -> impl IntoView {
    let auth = use_auth();
    let session = auth.session;
    let (sidebar_open, set_sidebar_open) = create_signal(false);

    view! {
        <div class="min-h-screen bg-gray-50">
            <header class="fixed top-0 left-0 right-0 h-16 bg-white border-b border-gray-200 z-50">
                <div class="h-full px-4 flex items-center justify-between">
                    <div class="flex items-center space-x-3">
                        <button
                            class="lg:hidden p-2 rounded hover:bg-gray-100"
                            on:click=move |_| set_sidebar_open.update(|open| *open = !*open)
                        >
                            "☰"
                        </button>
                        <A href="/dashboard" class="text-xl font-bold text-blue-600">"ClinicDesk"</A>
                    </div>
                    {move || session.get().map(|current| view! {
                        <div class="flex items-center gap-3">
                            <div class="w-10 h-10 bg-gradient-to-r from-blue-500 to-purple-600 rounded-full flex items-center justify-center text-white font-bold">
                                {current.identity.initial().to_string()}
                            </div>
                            <div class="hidden sm:block">
                                <p class="font-medium text-gray-900">{current.identity.display_name()}</p>
                                <p class="text-sm text-gray-500 capitalize">{current.role.to_string()}</p>
                            </div>
                        </div>
                    })}
                </div>
            </header>

            <div class="flex pt-16">
                <Sidebar open=sidebar_open on_close=move |_| set_sidebar_open.set(false) />
                <main class="flex-1 min-w-0 p-4 md:p-6">
                    {children()}
                </main>
            </div>
        </div>
    }
}
