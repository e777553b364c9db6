//! Availability Page
//!
//! A doctor's working days: create, edit and delete schedule entries.
//! Saving or deleting re-fetches the list.

use clinicdesk::format::{format_long_date, format_time_12h};
use clinicdesk::forms::{schedule_time_options, ScheduleForm};
use clinicdesk::{RecordId, Schedule};
use leptos::*;

use super::doctors::confirm;
use crate::api;
use crate::components::Loading;
use crate::state::auth::use_auth;
use crate::state::global::use_global_state;

const FIELD_CLASS: &str = "w-full px-3 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500";

type Getter = fn(&ScheduleForm) -> &String;
type Setter = fn(&mut ScheduleForm, String);

/// Time picker over the fixed quarter-hour options
fn time_select(
    form: RwSignal<ScheduleForm>,
    label: &'static str,
    placeholder: &'static str,
    get: Getter,
    set: Setter,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-medium text-gray-700 mb-2">{label}</label>
            <select
                class=FIELD_CLASS
                on:change=move |ev| form.update(|f| set(f, event_target_value(&ev)))
            >
                <option value="" selected=move || form.with(|f| get(f).is_empty())>{placeholder}</option>
                {schedule_time_options().into_iter().map(|time| {
                    let value = time.clone();
                    view! {
                        <option
                            value=time.clone()
                            selected=move || form.with(|f| get(f) == &value)
                        >
                            {format_time_12h(&time)}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

#[component]
pub fn Availability() -> impl IntoView {
    let state = use_global_state();
    let auth = use_auth();
    let doctor_id = auth.identity().unwrap_or_default().require_id();

    let (schedules, set_schedules) = create_signal(Vec::<Schedule>::new());
    let (loading, set_loading) = create_signal(true);
    let (reload, set_reload) = create_signal(0u32);
    let (show_form, set_show_form) = create_signal(false);
    let (editing, set_editing) = create_signal(None::<RecordId>);
    let (saving, set_saving) = create_signal(false);
    let form = create_rw_signal(ScheduleForm::default());

    let load_id = doctor_id.clone().ok();
    create_effect(move |_| {
        reload.track();
        let Some(id) = load_id.clone() else {
            set_loading.set(false);
            return;
        };
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_schedules(&id).await {
                Ok(list) => set_schedules.set(list),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch schedules: {}", e).into());
                    set_schedules.set(Vec::new());
                    state.show_error(&e.user_message("Error fetching schedules"));
                }
            }
            set_loading.set(false);
        });
    });

    let close_form = move || {
        set_show_form.set(false);
        set_editing.set(None);
        form.set(ScheduleForm::default());
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let doctor_id = match doctor_id.clone() {
            Ok(id) => id,
            Err(e) => {
                state.show_error(&e.to_string());
                return;
            }
        };
        let schedule_id = editing.get_untracked();
        let current = form.get_untracked();
        set_saving.set(true);

        spawn_local(async move {
            match api::save_schedule(schedule_id.as_ref(), &doctor_id, &current).await {
                Ok(_) => {
                    state.show_success(if schedule_id.is_some() {
                        "Schedule updated"
                    } else {
                        "Schedule created"
                    });
                    close_form();
                    set_reload.update(|n| *n += 1);
                }
                Err(e) => state.show_error(&e.user_message("Failed to save schedule")),
            }
            set_saving.set(false);
        });
    };

    let handle_edit = move |schedule: Schedule| {
        form.set(ScheduleForm::from_schedule(&schedule));
        set_editing.set(Some(schedule.id));
        set_show_form.set(true);
    };

    let handle_delete = move |id: RecordId| {
        if !confirm("Are you sure you want to delete this schedule?") {
            return;
        }
        spawn_local(async move {
            match api::delete_schedule(&id).await {
                Ok(_) => {
                    state.show_success("Schedule deleted");
                    set_reload.update(|n| *n += 1);
                }
                Err(e) => state.show_error(&e.user_message("Could not delete schedule")),
            }
        });
    };

    view! {
        <div class="space-y-6">
            <div class="flex flex-col sm:flex-row justify-between items-start sm:items-center gap-4">
                <div>
                    <h1 class="text-2xl font-bold text-gray-900">"My Availability"</h1>
                    <p class="text-gray-600">"Manage your working days and hours"</p>
                </div>
                <button
                    class="bg-blue-600 text-white px-4 py-2 rounded-lg hover:bg-blue-700"
                    on:click=move |_| {
                        close_form();
                        set_show_form.set(true);
                    }
                >
                    "+ Add Schedule"
                </button>
            </div>

            {move || show_form.get().then(|| view! {
                <form class="bg-white rounded-lg shadow p-6" on:submit=on_submit.clone()>
                    <h3 class="text-lg font-semibold mb-4">
                        {move || if editing.with(Option::is_some) { "Edit Schedule" } else { "New Schedule" }}
                    </h3>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-5 gap-4">
                        <div>
                            <label class="block text-sm font-medium text-gray-700 mb-2">"Date *"</label>
                            <input
                                type="date"
                                class=FIELD_CLASS
                                prop:value=move || form.with(|f| f.available_date.clone())
                                on:input=move |ev| form.update(|f| f.available_date = event_target_value(&ev))
                            />
                        </div>
                        {time_select(form, "Start Time *", "Select start", |f| &f.start_time, |f, v| f.start_time = v)}
                        {time_select(form, "End Time *", "Select end", |f| &f.end_time, |f, v| f.end_time = v)}
                        {time_select(form, "Break Start", "No break", |f| &f.break_start, |f, v| f.break_start = v)}
                        {time_select(form, "Break End", "No break", |f| &f.break_end, |f, v| f.break_end = v)}
                    </div>
                    <div class="flex justify-end gap-3 mt-6">
                        <button
                            type="button"
                            class="px-4 py-2 rounded-lg border border-gray-300 hover:bg-gray-50"
                            on:click=move |_| close_form()
                        >
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            class="px-4 py-2 rounded-lg bg-blue-600 text-white hover:bg-blue-700 disabled:bg-gray-400"
                            disabled=move || saving.get()
                        >
                            {move || if saving.get() { "Saving..." } else { "Save Schedule" }}
                        </button>
                    </div>
                </form>
            })}

            {move || {
                if loading.get() {
                    return view! { <Loading label="Loading schedules..." /> }.into_view();
                }
                let list = schedules.get();
                if list.is_empty() {
                    return view! {
                        <p class="bg-white rounded-lg shadow p-6 text-center text-gray-500">
                            "No schedules yet. Add your first working day."
                        </p>
                    }.into_view();
                }
                view! {
                    <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-4">
                        {list.into_iter().map(|schedule| {
                            let hours = format!(
                                "{} - {}",
                                format_time_12h(&schedule.start_time),
                                format_time_12h(&schedule.end_time)
                            );
                            let break_text = schedule.break_window().map(|(start, end)| {
                                format!("Break: {} - {}", format_time_12h(start), format_time_12h(end))
                            });
                            let date = format_long_date(&schedule.available_date);
                            let delete_id = schedule.id.clone();
                            view! {
                                <div class="bg-white rounded-lg shadow p-4 space-y-2">
                                    <h3 class="font-semibold text-gray-900">{date}</h3>
                                    <p class="text-sm text-gray-700">{hours}</p>
                                    {break_text.map(|text| view! { <p class="text-sm text-gray-500">{text}</p> })}
                                    <div class="flex gap-3 pt-2">
                                        <button
                                            class="text-blue-600 hover:text-blue-800 text-sm"
                                            on:click=move |_| handle_edit(schedule.clone())
                                        >
                                            "Edit"
                                        </button>
                                        <button
                                            class="text-red-600 hover:text-red-800 text-sm"
                                            on:click=move |_| handle_delete(delete_id.clone())
                                        >
                                            "Delete"
                                        </button>
                                    </div>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                }.into_view()
            }}
        </div>
    }
}
