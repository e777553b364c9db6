//! Doctor Profile Page
//!
//! The signed-in doctor's own record, read-only until "Edit Profile".
//! Saves go out as a multipart form so a new profile image can ride along.

use clinicdesk::format::{format_fee, format_short_date};
use clinicdesk::forms::DoctorForm;
use clinicdesk::Doctor;
use leptos::*;

use super::doctor_form::DoctorFields;
use crate::api;
use crate::components::Loading;
use crate::state::auth::use_auth;
use crate::state::global::use_global_state;

const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/150?text=No+Image";

#[component]
pub fn Profile() -> impl IntoView {
    let state = use_global_state();
    let auth = use_auth();
    let doctor_id = auth.identity().unwrap_or_default().require_id();

    let (doctor, set_doctor) = create_signal(None::<Doctor>);
    let form = create_rw_signal(DoctorForm::default());
    let (editing, set_editing) = create_signal(false);
    let (loading, set_loading) = create_signal(true);
    let (saving, set_saving) = create_signal(false);
    let (reload, set_reload) = create_signal(0u32);
    let image = create_rw_signal(None::<web_sys::File>);
    let (preview, set_preview) = create_signal(None::<String>);

    let on_image = move |ev: ev::Event| {
        let file = event_target::<web_sys::HtmlInputElement>(&ev)
            .files()
            .and_then(|files| files.get(0));
        set_preview.set(
            file.as_ref()
                .and_then(|file| web_sys::Url::create_object_url_with_blob(file).ok()),
        );
        image.set(file);
    };

    let load_id = doctor_id.clone().ok();
    create_effect(move |_| {
        reload.track();
        let Some(id) = load_id.clone() else {
            set_loading.set(false);
            return;
        };
        spawn_local(async move {
            match api::fetch_doctor(&id).await {
                Ok(record) => {
                    form.set(DoctorForm::from_doctor(&record));
                    set_doctor.set(Some(record));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch profile: {}", e).into());
                    state.show_error(&e.user_message("Failed to fetch doctor details"));
                }
            }
            set_loading.set(false);
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let id = match doctor_id.clone() {
            Ok(id) => id,
            Err(e) => {
                state.show_error(&e.to_string());
                return;
            }
        };
        let current = form.get_untracked();
        let file = image.get_untracked();
        set_saving.set(true);

        spawn_local(async move {
            match api::update_profile(&id, &current, file.as_ref()).await {
                Ok(_) => {
                    state.show_success("Profile updated successfully");
                    set_editing.set(false);
                    image.set(None);
                    set_preview.set(None);
                    set_reload.update(|n| *n += 1);
                }
                Err(e) => state.show_error(&e.user_message("Failed to update profile")),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div>
            {move || {
                if loading.get() {
                    return view! { <Loading label="Loading profile..." /> }.into_view();
                }
                let Some(record) = doctor.get() else {
                    return view! { <p class="text-gray-500">"Profile not available"</p> }.into_view();
                };
                let experience = if record.experience_years.trim().is_empty() {
                    String::new()
                } else {
                    format!("{} years", record.experience_years.trim())
                };
                let image = preview.get().unwrap_or_else(|| {
                    if record.profile_image.trim().is_empty() {
                        PLACEHOLDER_IMAGE.to_string()
                    } else {
                        record.profile_image.clone()
                    }
                });

                view! {
                    <div class="bg-white rounded-lg shadow p-6 mb-6 flex flex-col sm:flex-row justify-between items-start gap-4">
                        <div class="flex items-center gap-4">
                            <img src=image alt="Doctor" class="w-24 h-24 rounded-full object-cover border" />
                            <div>
                                <h2 class="text-2xl font-bold text-gray-900">{record.full_name.clone()}</h2>
                                <p class="text-gray-600">{record.specialization.clone()}</p>
                                <p class="text-sm text-gray-500">{record.email.clone()}</p>
                            </div>
                        </div>
                        <button
                            class="bg-blue-600 text-white px-4 py-2 rounded-lg hover:bg-blue-700"
                            on:click=move |_| set_editing.update(|e| *e = !*e)
                        >
                            {move || if editing.get() { "Cancel" } else { "Edit Profile" }}
                        </button>
                    </div>
                    <div class="bg-white rounded-lg shadow p-6 grid grid-cols-1 md:grid-cols-2 gap-4">
                        <Detail label="Phone" value=record.phone.clone() />
                        <Detail label="Gender" value=record.gender.clone() />
                        <Detail label="Date of Birth" value=format_short_date(&record.dob) />
                        <Detail label="Qualification" value=record.qualification.clone() />
                        <Detail label="Experience" value=experience />
                        <Detail label="Consultation Fee" value=format_fee(&record.consultation_fee) />
                        <Detail label="Available Days" value=record.available_days.clone() />
                        <Detail label="Available Time" value=record.available_time.clone() />
                        <Detail label="Status" value=record.status.clone() />
                        <Detail label="Bio" value=record.bio.clone() />
                    </div>
                }.into_view()
            }}

            {move || editing.get().then(|| view! {
                <form class="bg-white rounded-lg shadow p-6 mt-6" on:submit=on_submit.clone()>
                    <h3 class="text-lg font-semibold mb-4">"Edit Profile"</h3>
                    <DoctorFields form=form with_status=false with_image_url=false />
                    <div class="mt-6">
                        <label class="block text-sm font-medium text-gray-700 mb-2">"Profile Image"</label>
                        <input type="file" accept="image/*" class="text-sm" on:change=on_image />
                    </div>
                    <div class="flex justify-end mt-6">
                        <button
                            type="submit"
                            class="bg-blue-600 text-white px-6 py-2 rounded-lg hover:bg-blue-700 disabled:bg-gray-400"
                            disabled=move || saving.get()
                        >
                            {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                        </button>
                    </div>
                </form>
            })}
        </div>
    }
}

#[component]
fn Detail(label: &'static str, #[prop(into)] value: String) -> impl IntoView {
    let value = if value.trim().is_empty() { "—".to_string() } else { value };
    view! {
        <div>
            <p class="text-sm text-gray-500">{label}</p>
            <p class="font-medium text-gray-900">{value}</p>
        </div>
    }
}
