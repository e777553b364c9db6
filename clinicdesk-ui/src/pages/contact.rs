//! Contact Page
//!
//! Public enquiry form.

use clinicdesk::forms::ContactForm;
use leptos::*;

use super::{INPUT_CLASS, LABEL_CLASS};
use crate::api;
use crate::state::global::use_global_state;

#[component]
pub fn Contact() -> impl IntoView {
    let state = use_global_state();
    let form = create_rw_signal(ContactForm::default());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = form.get_untracked();
        set_submitting.set(true);

        spawn_local(async move {
            match api::submit_enquiry(&current).await {
                Ok(_) => {
                    state.show_success("Form submitted successfully");
                    form.set(ContactForm::default());
                }
                Err(e) => {
                    if !e.is_validation() {
                        web_sys::console::error_1(&format!("Enquiry failed: {}", e).into());
                    }
                    state.show_error(&e.user_message("Submission failed"));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="p-4 mx-auto max-w-xl bg-white mt-8 rounded-lg shadow-sm">
            <h2 class="text-3xl text-slate-900 font-bold">"Contact us"</h2>
            <form class="mt-8 space-y-5" on:submit=on_submit>
                <div>
                    <label class=LABEL_CLASS>"Name"</label>
                    <input
                        type="text"
                        placeholder="Enter Name"
                        class=INPUT_CLASS
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class=LABEL_CLASS>"Email"</label>
                    <input
                        type="email"
                        placeholder="Enter Email"
                        class=INPUT_CLASS
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class=LABEL_CLASS>"Subject"</label>
                    <input
                        type="text"
                        placeholder="Enter Subject"
                        class=INPUT_CLASS
                        prop:value=move || form.with(|f| f.subject.clone())
                        on:input=move |ev| form.update(|f| f.subject = event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class=LABEL_CLASS>"Message"</label>
                    <textarea
                        rows="6"
                        placeholder="Enter Message"
                        class=INPUT_CLASS
                        prop:value=move || form.with(|f| f.message.clone())
                        on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                    />
                </div>
                <button
                    type="submit"
                    class="w-full py-2.5 px-4 rounded-md text-white bg-slate-900 hover:bg-slate-800 disabled:bg-gray-400 disabled:cursor-not-allowed"
                    disabled=move || submitting.get()
                >
                    {move || if submitting.get() { "Sending..." } else { "Send message" }}
                </button>
            </form>
        </div>
    }
}
