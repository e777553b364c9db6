//! Route Guard Component
//!
//! Every routed page is wrapped in [`Guarded`]. It resolves the current path
//! to an [`AppRoute`], checks the session against the route's requirement,
//! and either renders the page in the right chrome or redirects.

use clinicdesk::{authorize, Access, AppRoute};
use leptos::*;
use leptos_router::*;

use super::sidebar::DashboardShell;
use super::Nav;
use crate::state::auth::use_auth;
use crate::state::global::use_global_state;

#[component]
pub fn Guarded(children: Children) -> impl IntoView {
    let auth = use_auth();
    let state = use_global_state();
    let route = AppRoute::from_path(&use_location().pathname.get_untracked());

    // Checked once per navigation; logout navigates away on its own.
    let access = auth
        .session
        .with_untracked(|session| authorize(session.as_ref(), route.requirement()));

    match access {
        Access::Granted if route.uses_dashboard_shell() => view! {
            <DashboardShell>{children()}</DashboardShell>
        }
        .into_view(),
        Access::Granted => view! {
            <div class="min-h-screen bg-gray-50">
                <Nav />
                <main>{children()}</main>
            </div>
        }
        .into_view(),
        Access::Redirect { to, notice } => {
            if let Some(notice) = notice {
                state.show_error(notice);
            }
            view! {
                <Redirect
                    path=to
                    options=NavigateOptions { replace: true, ..Default::default() }
                />
            }
            .into_view()
        }
    }
}
