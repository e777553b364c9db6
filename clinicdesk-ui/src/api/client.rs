//! HTTP API Client
//!
//! One function per remote call. Each builds the request from the
//! [`ApiRoute`] catalog, decodes the JSON envelope and returns the payload,
//! or a [`ClientError`] whose message is ready for a toast.

use chrono::NaiveDate;
use clinicdesk::forms::{
    status_payload, BookingForm, ContactForm, DoctorForm, LoginForm, ScheduleForm,
};
use clinicdesk::listing::decode_doctors;
use clinicdesk::routes::Method;
use clinicdesk::slots::SLOT_LOOKUP_FAILED;
use clinicdesk::{
    ApiRoute, Appointment, AppointmentStatus, ClientError, ClientResult, Doctor, Enquiry, Envelope,
    Identity, RecordId, Role, Schedule, SlotLookup,
};
use gloo_net::http::Request;
use serde_json::Value;

/// Default API base URL: same origin, served through the gateway
pub const DEFAULT_API_BASE: &str = "";

const API_BASE_KEY: &str = "clinicdesk_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_BASE_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Issue one call and decode its envelope. `fallback` is the message used
/// when the server gives none.
async fn call(route: ApiRoute, body: Option<Value>, fallback: &str) -> ClientResult<Envelope> {
    let url = route.url(&get_api_base());

    let builder = match route.method() {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Put => Request::put(&url),
        Method::Delete => Request::delete(&url),
    };
    let request = match &body {
        Some(body) => builder.json(body),
        None => builder.build(),
    }
    .map_err(|e| ClientError::Request(e.to_string()))?;

    send(request, fallback).await
}

/// Send a built request and decode its envelope.
async fn send(request: Request, fallback: &str) -> ClientResult<Envelope> {
    let response = request
        .send()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;

    let ok = response.ok();
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;

    // Error pages without a JSON body still report the HTTP failure.
    let envelope = match Envelope::parse(&text) {
        Ok(envelope) => envelope,
        Err(_) if !ok => Envelope::default(),
        Err(e) => return Err(e),
    };
    envelope.into_result(ok, status, fallback)
}

// ============ Enquiries ============

/// Submit the contact form. Validation failures never reach the network.
pub async fn submit_enquiry(form: &ContactForm) -> ClientResult<Envelope> {
    form.validate()?;
    call(
        ApiRoute::SubmitEnquiry,
        Some(form.to_payload()),
        "Failed to send message",
    )
    .await
}

pub async fn fetch_enquiries() -> ClientResult<Vec<Enquiry>> {
    let envelope = call(ApiRoute::ListEnquiries, None, "Failed to fetch enquiries").await?;
    list_under(&envelope, "contacts")
}

/// Admin accounts, only counted on the dashboard
pub async fn fetch_admins() -> ClientResult<Vec<Value>> {
    let envelope = call(ApiRoute::ListAdmins, None, "Failed to fetch admins").await?;
    list_under(&envelope, "admins")
}

/// A named list, falling back to `data`
fn list_under<T: serde::de::DeserializeOwned>(envelope: &Envelope, key: &str) -> ClientResult<Vec<T>> {
    if envelope.get(key).is_some() {
        envelope.list(Some(key))
    } else {
        envelope.list(None)
    }
}

// ============ Auth ============

/// Sign in with the role chosen on the form. Returns the identity to store
/// and the server's message.
pub async fn login(form: &LoginForm) -> ClientResult<(Identity, String)> {
    form.validate()?;
    let (route, keys): (ApiRoute, &[&str]) = match form.role {
        Role::Admin => (ApiRoute::AdminLogin, &["admin"]),
        Role::Doctor => (ApiRoute::DoctorLogin, &["doctor", "user"]),
    };

    let envelope = call(route, Some(form.to_payload()), "Login failed. Please try again.").await?;
    let identity: Value = envelope.record(keys)?;
    let message = envelope
        .message()
        .unwrap_or_else(|| "Login successful".to_string());

    Ok((Identity::from_json(identity), message))
}

// ============ Doctors ============

pub async fn fetch_doctors() -> ClientResult<Vec<Doctor>> {
    let envelope = call(ApiRoute::ListDoctors, None, "Failed to fetch doctors").await?;
    decode_doctors(&envelope)
}

pub async fn fetch_doctor(id: &RecordId) -> ClientResult<Doctor> {
    let envelope = call(
        ApiRoute::GetDoctor(id.clone()),
        None,
        "Failed to fetch doctor details",
    )
    .await?;
    envelope.record(&["doctor"])
}

/// Create (`id == None`) or update a doctor.
pub async fn save_doctor(id: Option<&RecordId>, form: &DoctorForm) -> ClientResult<Envelope> {
    let is_edit = id.is_some();
    form.validate(is_edit)?;
    let route = match id {
        Some(id) => ApiRoute::UpdateDoctor(id.clone()),
        None => ApiRoute::CreateDoctor,
    };
    call(route, Some(form.to_payload(is_edit)), "Error saving doctor").await
}

/// Save the doctor's own profile as `multipart/form-data`. A picked image
/// file is sent in place of the `profile_image` text.
pub async fn update_profile(
    id: &RecordId,
    form: &DoctorForm,
    image: Option<&web_sys::File>,
) -> ClientResult<Envelope> {
    form.validate_profile()?;

    let to_request_error = |e: wasm_bindgen::JsValue| ClientError::Request(format!("{:?}", e));
    let data = web_sys::FormData::new().map_err(to_request_error)?;
    for (key, value) in form.to_profile_fields() {
        data.append_with_str(&key, &value).map_err(to_request_error)?;
    }
    if let Some(file) = image {
        data.set_with_blob_and_filename("profile_image", file, &file.name())
            .map_err(to_request_error)?;
    }

    // The browser sets the multipart boundary header itself.
    let route = ApiRoute::UpdateDoctor(id.clone());
    let request = Request::put(&route.url(&get_api_base()))
        .body(data)
        .map_err(|e| ClientError::Request(e.to_string()))?;
    send(request, "Failed to update profile").await
}

pub async fn delete_doctor(id: &RecordId) -> ClientResult<Envelope> {
    call(
        ApiRoute::DeleteDoctor(id.clone()),
        None,
        "Failed to delete doctor",
    )
    .await
}

// ============ Booking ============

/// Slots for a doctor on a date. A failed lookup renders as an empty day
/// and carries the message to show.
pub async fn fetch_slots(doctor_id: &RecordId, date: &str) -> SlotLookup {
    let result = call(
        ApiRoute::AvailableSlots(doctor_id.clone(), date.to_string()),
        None,
        SLOT_LOOKUP_FAILED,
    )
    .await;
    if let Err(e) = &result {
        web_sys::console::error_1(&format!("Failed to fetch slots: {}", e).into());
    }
    SlotLookup::from_result(result)
}

pub async fn book_appointment(form: &BookingForm, today: NaiveDate) -> ClientResult<Envelope> {
    form.validate(today)?;
    call(
        ApiRoute::BookAppointment,
        Some(form.to_payload()),
        "Failed to book appointment",
    )
    .await
}

// ============ Appointments ============

pub async fn fetch_appointments() -> ClientResult<Vec<Appointment>> {
    let envelope = call(
        ApiRoute::ListAppointments,
        None,
        "Failed to fetch appointments",
    )
    .await?;
    envelope.list(None)
}

pub async fn fetch_doctor_appointments(doctor_id: &RecordId) -> ClientResult<Vec<Appointment>> {
    let envelope = call(
        ApiRoute::DoctorAppointments(doctor_id.clone()),
        None,
        "Failed to fetch appointments",
    )
    .await?;
    envelope.list(None)
}

pub async fn update_appointment_status(
    id: &RecordId,
    status: &AppointmentStatus,
) -> ClientResult<Envelope> {
    call(
        ApiRoute::UpdateAppointment(id.clone()),
        Some(status_payload(status)),
        "Failed to update appointment status",
    )
    .await
}

pub async fn delete_appointment(id: &RecordId) -> ClientResult<Envelope> {
    call(
        ApiRoute::DeleteAppointment(id.clone()),
        None,
        "Failed to delete appointment",
    )
    .await
}

// ============ Availability ============

pub async fn fetch_schedules(doctor_id: &RecordId) -> ClientResult<Vec<Schedule>> {
    let envelope = call(
        ApiRoute::DoctorSchedules(doctor_id.clone()),
        None,
        "Failed to fetch schedules",
    )
    .await?;
    envelope.list(None)
}

/// Create (`id == None`) or update a schedule for `doctor_id`.
pub async fn save_schedule(
    id: Option<&RecordId>,
    doctor_id: &RecordId,
    form: &ScheduleForm,
) -> ClientResult<Envelope> {
    form.validate()?;
    let route = match id {
        Some(id) => ApiRoute::UpdateSchedule(id.clone()),
        None => ApiRoute::CreateSchedule,
    };
    call(route, Some(form.to_payload(doctor_id)), "Failed to save schedule").await
}

pub async fn delete_schedule(id: &RecordId) -> ClientResult<Envelope> {
    call(
        ApiRoute::DeleteSchedule(id.clone()),
        None,
        "Failed to delete schedule",
    )
    .await
}
