//! Doctor Form Page
//!
//! `/doctors/create` and `/doctors/edit/:id`. The edit variant loads the
//! record first and never shows or sends the password.

use clinicdesk::forms::{DoctorForm, GENDER_OPTIONS};
use clinicdesk::RecordId;
use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::Loading;
use crate::state::auth::use_auth;
use crate::state::global::use_global_state;

const DOCTORS_PATH: &str = "/doctors";

const FIELD_CLASS: &str = "w-full px-3 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent";

type Getter = fn(&DoctorForm) -> &String;
type Setter = fn(&mut DoctorForm, String);

/// Labelled single-line input bound to one form field
fn text_field(
    form: RwSignal<DoctorForm>,
    label: &'static str,
    kind: &'static str,
    placeholder: &'static str,
    get: Getter,
    set: Setter,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-medium text-gray-700 mb-2">{label}</label>
            <input
                type=kind
                placeholder=placeholder
                class=FIELD_CLASS
                prop:value=move || form.with(|f| get(f).clone())
                on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
            />
        </div>
    }
}

/// Every doctor input. Shared with the doctor's own profile page.
#[component]
pub fn DoctorFields(
    form: RwSignal<DoctorForm>,
    /// Show the password input (create only)
    #[prop(default = false)]
    with_password: bool,
    /// Show the status select (admin only)
    #[prop(default = true)]
    with_status: bool,
    /// Edit the image as a URL; the profile page uploads a file instead
    #[prop(default = true)]
    with_image_url: bool,
) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
            {text_field(form, "Full Name *", "text", "Dr. Jane Doe", |f| &f.full_name, |f, v| f.full_name = v)}
            {text_field(form, "Email *", "email", "doctor@example.com", |f| &f.email, |f, v| f.email = v)}
            {with_password.then(|| text_field(form, "Password *", "password", "Set a password", |f| &f.password, |f, v| f.password = v))}
            {text_field(form, "Phone", "tel", "Phone number", |f| &f.phone, |f, v| f.phone = v)}
            <div>
                <label class="block text-sm font-medium text-gray-700 mb-2">"Gender"</label>
                <select
                    class=FIELD_CLASS
                    prop:value=move || form.with(|f| f.gender.clone())
                    on:change=move |ev| form.update(|f| f.gender = event_target_value(&ev))
                >
                    <option value="">"Select Gender"</option>
                    {GENDER_OPTIONS.into_iter().map(|gender| view! {
                        <option value=gender selected=move || form.with(|f| f.gender == gender)>{gender}</option>
                    }).collect_view()}
                </select>
            </div>
            {text_field(form, "Date of Birth", "date", "", |f| &f.dob, |f, v| f.dob = v)}
            {text_field(form, "Specialization *", "text", "e.g., Cardiology, Neurology", |f| &f.specialization, |f, v| f.specialization = v)}
            {text_field(form, "Qualification *", "text", "e.g., MBBS, MD", |f| &f.qualification, |f, v| f.qualification = v)}
            {text_field(form, "Experience (Years)", "number", "0-50", |f| &f.experience_years, |f, v| f.experience_years = v)}
            {text_field(form, "Consultation Fee (₹)", "number", "500", |f| &f.consultation_fee, |f, v| f.consultation_fee = v)}
            {text_field(form, "Available Days", "text", "e.g., Monday-Friday", |f| &f.available_days, |f, v| f.available_days = v)}
            {text_field(form, "Available Time", "text", "e.g., 9:00 AM - 5:00 PM", |f| &f.available_time, |f, v| f.available_time = v)}
            {with_image_url.then(|| text_field(form, "Profile Image URL", "url", "https://...", |f| &f.profile_image, |f, v| f.profile_image = v))}
            {with_status.then(|| view! {
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-2">"Status"</label>
                    <select
                        class=FIELD_CLASS
                        prop:value=move || form.with(|f| f.status.clone())
                        on:change=move |ev| form.update(|f| f.status = event_target_value(&ev))
                    >
                        <option value="Active" selected=move || form.with(|f| f.status != "Inactive")>"Active"</option>
                        <option value="Inactive" selected=move || form.with(|f| f.status == "Inactive")>"Inactive"</option>
                    </select>
                </div>
            })}
        </div>
        <div class="mt-6">
            <label class="block text-sm font-medium text-gray-700 mb-2">"Bio"</label>
            <textarea
                rows="4"
                placeholder="Brief description about the doctor"
                class=FIELD_CLASS
                prop:value=move || form.with(|f| f.bio.clone())
                on:input=move |ev| form.update(|f| f.bio = event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn DoctorFormPage() -> impl IntoView {
    let state = use_global_state();
    let auth = use_auth();
    let navigate = use_navigate();
    let params = use_params_map();

    let doctor_id = move || {
        params
            .with(|p| p.get("id").cloned())
            .filter(|id| !id.is_empty())
            .map(RecordId::from)
    };
    let is_edit = move || doctor_id().is_some();

    let form = create_rw_signal(DoctorForm {
        status: "Active".to_string(),
        created_by: auth.identity().and_then(|identity| identity.id()),
        ..Default::default()
    });
    let (loading, set_loading) = create_signal(false);
    let (submitting, set_submitting) = create_signal(false);

    {
        let navigate = navigate.clone();
        create_effect(move |_| {
            let Some(id) = doctor_id() else { return };
            let navigate = navigate.clone();
            set_loading.set(true);
            spawn_local(async move {
                match api::fetch_doctor(&id).await {
                    Ok(doctor) => form.set(DoctorForm::from_doctor(&doctor)),
                    Err(e) => {
                        state.show_error(&e.user_message("Failed to load doctor data"));
                        navigate(DOCTORS_PATH, Default::default());
                    }
                }
                set_loading.set(false);
            });
        });
    }

    let on_submit = {
        let navigate = navigate.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let id = doctor_id();
            let current = form.get_untracked();
            let navigate = navigate.clone();
            set_submitting.set(true);

            spawn_local(async move {
                match api::save_doctor(id.as_ref(), &current).await {
                    Ok(_) => {
                        let verb = if id.is_some() { "updated" } else { "created" };
                        state.show_success(&format!("Doctor {} successfully", verb));
                        navigate(DOCTORS_PATH, Default::default());
                    }
                    Err(e) => state.show_error(&e.user_message("Something went wrong")),
                }
                set_submitting.set(false);
            });
        }
    };

    let go_back = move |_| navigate(DOCTORS_PATH, Default::default());

    view! {
        <div class="space-y-6">
            <div class="flex items-center gap-4">
                <button class="text-gray-600 hover:text-gray-900" on:click=go_back>
                    "← Back to Doctors"
                </button>
                <div>
                    <h1 class="text-2xl font-bold text-gray-900">
                        {move || if is_edit() { "Edit Doctor" } else { "Add New Doctor" }}
                    </h1>
                    <p class="text-gray-600">
                        {move || if is_edit() { "Update doctor information" } else { "Create a new doctor profile" }}
                    </p>
                </div>
            </div>

            {move || if loading.get() {
                view! { <Loading label="Loading doctor data..." /> }.into_view()
            } else {
                view! {
                    <form class="bg-white rounded-lg shadow p-6" on:submit=on_submit.clone()>
                        <DoctorFields form=form with_password=!is_edit() />
                        <div class="flex justify-end mt-6">
                            <button
                                type="submit"
                                class="bg-blue-600 text-white px-6 py-2 rounded-lg hover:bg-blue-700 disabled:bg-gray-400"
                                disabled=move || submitting.get()
                            >
                                {move || match (submitting.get(), is_edit()) {
                                    (true, _) => "Saving...",
                                    (false, true) => "Update Doctor",
                                    (false, false) => "Create Doctor",
                                }}
                            </button>
                        </div>
                    </form>
                }.into_view()
            }}
        </div>
    }
}
