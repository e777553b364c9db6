//! Login Page
//!
//! One form for both roles; the selected role picks the login endpoint and
//! the storage key the session is kept under.

use clinicdesk::forms::LoginForm;
use clinicdesk::guard::DASHBOARD_PATH;
use clinicdesk::Role;
use leptos::*;
use leptos_router::*;

use super::{INPUT_CLASS, LABEL_CLASS};
use crate::api;
use crate::state::auth::use_auth;
use crate::state::global::use_global_state;

#[component]
pub fn Login() -> impl IntoView {
    let state = use_global_state();
    let auth = use_auth();
    let navigate = use_navigate();
    let form = create_rw_signal(LoginForm::default());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = form.get_untracked();
        let auth = auth.clone();
        let navigate = navigate.clone();
        set_submitting.set(true);

        spawn_local(async move {
            match api::login(&current).await {
                Ok((identity, message)) => match auth.login(identity, current.role) {
                    Ok(()) => {
                        state.show_success(&message);
                        navigate(DASHBOARD_PATH, NavigateOptions {
                            replace: true,
                            ..Default::default()
                        });
                    }
                    Err(e) => state.show_error(&e.to_string()),
                },
                Err(e) => state.show_error(&e.user_message("Login failed. Please try again.")),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="min-h-[calc(100vh-64px)] flex flex-col items-center justify-center py-6 px-4">
            <div class="max-w-[480px] w-full p-6 sm:p-8 rounded-2xl bg-white border border-gray-200 shadow-sm">
                <h1 class="text-slate-900 text-center text-3xl font-semibold">"Sign in"</h1>
                <form class="mt-12 space-y-6" on:submit=on_submit>
                    <div>
                        <label class=LABEL_CLASS>"Sign in as"</label>
                        <div class="grid grid-cols-2 gap-2">
                            {Role::ALL.into_iter().map(|role| view! {
                                <button
                                    type="button"
                                    class=move || if form.with(|f| f.role == role) {
                                        "py-2 rounded-md border border-blue-600 bg-blue-50 text-blue-700 font-medium"
                                    } else {
                                        "py-2 rounded-md border border-gray-300 text-gray-700 hover:bg-gray-50"
                                    }
                                    on:click=move |_| form.update(|f| f.role = role)
                                >
                                    {role.label()}
                                </button>
                            }).collect_view()}
                        </div>
                    </div>
                    <div>
                        <label class=LABEL_CLASS>"Email"</label>
                        <input
                            type="email"
                            placeholder="Enter your email"
                            class=INPUT_CLASS
                            disabled=move || submitting.get()
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class=LABEL_CLASS>"Password"</label>
                        <input
                            type="password"
                            placeholder="Enter password"
                            class=INPUT_CLASS
                            disabled=move || submitting.get()
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        />
                    </div>
                    <button
                        type="submit"
                        class="w-full py-2 px-4 text-[15px] font-medium rounded-md text-white bg-blue-600 hover:bg-blue-700 disabled:bg-gray-400 disabled:cursor-not-allowed"
                        disabled=move || submitting.get()
                    >
                        {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
