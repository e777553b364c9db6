//! Book Appointment Page
//!
//! Public booking flow: pick an active doctor, a date inside the booking
//! window, then one of the slots the API reports as available.

use clinicdesk::format::{format_fee, format_time_12h};
use clinicdesk::forms::{booking_date_range, BookingForm};
use clinicdesk::listing::active_doctors;
use clinicdesk::slots::NO_SLOTS_MESSAGE;
use clinicdesk::{Doctor, SlotView};
use leptos::*;
use leptos_router::*;

use super::{today, INPUT_CLASS, LABEL_CLASS};
use crate::api;
use crate::components::{InlineLoading, Loading};
use crate::state::global::use_global_state;

#[component]
pub fn BookAppointment() -> impl IntoView {
    let state = use_global_state();
    let navigate = use_navigate();
    let (doctors, set_doctors) = create_signal(Vec::<Doctor>::new());
    let (loading, set_loading) = create_signal(true);
    let (submitting, set_submitting) = create_signal(false);
    let (slots, set_slots) = create_signal(SlotView::Idle);
    let form = create_rw_signal(BookingForm::default());

    let (min_date, max_date) = booking_date_range(today());
    let (min_date, max_date) = (
        min_date.format("%Y-%m-%d").to_string(),
        max_date.format("%Y-%m-%d").to_string(),
    );

    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_doctors().await {
                Ok(list) => set_doctors.set(active_doctors(&list)),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch doctors: {}", e).into());
                    state.show_error(&e.user_message("Error fetching doctors"));
                }
            }
            set_loading.set(false);
        });
    });

    // Re-query slots whenever the doctor or the date changes.
    let slot_query = create_memo(move |_| {
        form.with(|f| {
            f.ready_for_slots()
                .then(|| (f.doctor_id.clone(), f.appointment_date.clone()))
        })
    });
    create_effect(move |_| {
        form.update(|f| f.appointment_time.clear());
        let Some((Some(doctor_id), date)) = slot_query.get() else {
            set_slots.set(SlotView::Idle);
            return;
        };
        set_slots.set(SlotView::Loading);
        spawn_local(async move {
            let lookup = api::fetch_slots(&doctor_id, &date).await;
            if let Some(message) = &lookup.error {
                state.show_error(message);
            }
            set_slots.set(lookup.view);
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = form.get_untracked();
        let navigate = navigate.clone();
        set_submitting.set(true);

        spawn_local(async move {
            match api::book_appointment(&current, today()).await {
                Ok(envelope) => {
                    let message = envelope
                        .message()
                        .unwrap_or_else(|| "Appointment booked successfully!".to_string());
                    state.show_success(&message);
                    form.set(BookingForm::default());
                    navigate("/contact-us", Default::default());
                }
                Err(e) => state.show_error(&e.user_message("Failed to book appointment")),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="container mx-auto px-4 py-6 max-w-7xl">
            <div class="mb-6">
                <A href="/contact-us" class="text-blue-600 hover:text-blue-700 mb-4 inline-block">
                    "← Back to Contact"
                </A>
                <h1 class="text-2xl md:text-3xl font-bold text-gray-900 mb-2">"Book an Appointment"</h1>
                <p class="text-gray-600">"Select a doctor and book your appointment"</p>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                // Doctor list
                <div class="bg-white rounded-lg shadow p-4 lg:col-span-1">
                    <h2 class="text-lg font-semibold mb-4">"Select Doctor"</h2>
                    {move || {
                        if loading.get() {
                            return view! { <Loading label="Loading doctors..." /> }.into_view();
                        }
                        let list = doctors.get();
                        if list.is_empty() {
                            return view! { <p class="text-gray-500">"No doctors available"</p> }.into_view();
                        }
                        list.into_iter().map(|doctor| {
                            let id = doctor.id.clone();
                            let selected_id = doctor.id.clone();
                            let is_selected = move || form.with(|f| f.doctor_id.as_ref() == Some(&selected_id));
                            view! {
                                <button
                                    type="button"
                                    class=move || if is_selected() {
                                        "w-full text-left p-3 mb-2 rounded-lg border-2 border-blue-600 bg-blue-50"
                                    } else {
                                        "w-full text-left p-3 mb-2 rounded-lg border border-gray-200 hover:border-blue-300"
                                    }
                                    on:click=move |_| form.update(|f| f.doctor_id = Some(id.clone()))
                                >
                                    <div class="font-medium text-gray-900">{format!("Dr. {}", doctor.full_name)}</div>
                                    <div class="text-sm text-gray-600">{doctor.specialization.clone()}</div>
                                    <div class="text-sm text-gray-500">{format_fee(&doctor.consultation_fee)}</div>
                                </button>
                            }
                        }).collect_view()
                    }}
                </div>

                // Booking form
                <form class="bg-white rounded-lg shadow p-6 lg:col-span-2 space-y-5" on:submit=on_submit>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <div>
                            <label class=LABEL_CLASS>"Patient Name *"</label>
                            <input
                                type="text"
                                class=INPUT_CLASS
                                prop:value=move || form.with(|f| f.patient_name.clone())
                                on:input=move |ev| form.update(|f| f.patient_name = event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label class=LABEL_CLASS>"Email"</label>
                            <input
                                type="email"
                                class=INPUT_CLASS
                                prop:value=move || form.with(|f| f.patient_email.clone())
                                on:input=move |ev| form.update(|f| f.patient_email = event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label class=LABEL_CLASS>"Phone"</label>
                            <input
                                type="tel"
                                class=INPUT_CLASS
                                prop:value=move || form.with(|f| f.patient_phone.clone())
                                on:input=move |ev| form.update(|f| f.patient_phone = event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label class=LABEL_CLASS>"Appointment Date *"</label>
                            <input
                                type="date"
                                class=INPUT_CLASS
                                min=min_date
                                max=max_date
                                prop:value=move || form.with(|f| f.appointment_date.clone())
                                on:input=move |ev| form.update(|f| f.appointment_date = event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <div>
                        <label class=LABEL_CLASS>"Available Time Slots *"</label>
                        <SlotPicker slots=slots form=form />
                    </div>

                    <div>
                        <label class=LABEL_CLASS>"Reason for Visit"</label>
                        <textarea
                            rows="3"
                            class=INPUT_CLASS
                            prop:value=move || form.with(|f| f.reason.clone())
                            on:input=move |ev| form.update(|f| f.reason = event_target_value(&ev))
                        />
                    </div>

                    <button
                        type="submit"
                        class="w-full py-3 rounded-lg text-white bg-blue-600 hover:bg-blue-700 disabled:bg-gray-400 disabled:cursor-not-allowed"
                        disabled=move || submitting.get()
                    >
                        {move || if submitting.get() { "Booking..." } else { "Book Appointment" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

/// Slot grid. Only available slots can be picked; a day without slots
/// says so instead of showing an empty grid.
#[component]
fn SlotPicker(slots: ReadSignal<SlotView>, form: RwSignal<BookingForm>) -> impl IntoView {
    move || match slots.get() {
        SlotView::Idle => view! {
            <p class="text-sm text-gray-500">"Select a doctor and a date to see available times"</p>
        }
        .into_view(),
        SlotView::Loading => view! {
            <p class="text-sm text-gray-500 flex items-center gap-2"><InlineLoading />"Loading slots..."</p>
        }
        .into_view(),
        SlotView::NoSlots => view! {
            <p class="text-sm font-medium text-orange-600 bg-orange-50 rounded p-3">{NO_SLOTS_MESSAGE}</p>
        }
        .into_view(),
        SlotView::Slots(list) => view! {
            <div class="grid grid-cols-3 sm:grid-cols-4 md:grid-cols-6 gap-2">
                {list.into_iter().map(|slot| {
                    let available = slot.is_available();
                    let time = slot.time.clone();
                    let chosen = slot.time.clone();
                    let is_chosen = move || form.with(|f| f.appointment_time == chosen);
                    view! {
                        <button
                            type="button"
                            disabled=!available
                            title=slot.status.label()
                            class=move || {
                                if !available {
                                    "px-2 py-2 rounded text-sm bg-gray-100 text-gray-400 line-through cursor-not-allowed"
                                } else if is_chosen() {
                                    "px-2 py-2 rounded text-sm bg-blue-600 text-white"
                                } else {
                                    "px-2 py-2 rounded text-sm border border-gray-300 hover:border-blue-500"
                                }
                            }
                            on:click=move |_| {
                                if available {
                                    form.update(|f| f.appointment_time = time.clone());
                                }
                            }
                        >
                            {format_time_12h(&slot.time)}
                        </button>
                    }
                }).collect_view()}
            </div>
        }
        .into_view(),
    }
}
