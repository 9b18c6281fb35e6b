use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::{
    error::ApiError,
    models::catalog_models::ApiResponse,
    models::contact_models::{Contact, ContactCreated, ContactRequest, NewContact},
    AppState,
};

pub const CONTACT_THANKS: &str = "Thank you for contacting us! We'll get back to you soon.";

pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<ContactCreated>>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!("Contact body rejected: {}", rejection);
        ApiError::InvalidBody
    })?;

    if request.has_empty_field() {
        return Err(ApiError::MissingFields);
    }

    let new_contact = NewContact::from(request);
    let id = state
        .contact_store
        .insert_contact(&new_contact)
        .map_err(ApiError::SaveFailed)?;

    tracing::info!("New contact saved (ID: {}) from {} <{}>", id, new_contact.name, new_contact.email);

    Ok(Json(ApiResponse::message_with_data(CONTACT_THANKS, ContactCreated { id })))
}

pub async fn list_contacts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<Contact>>>, ApiError> {
    let contacts = state
        .contact_store
        .list_contacts()
        .map_err(ApiError::FetchFailed)?;
    Ok(Json(ApiResponse::data(contacts)))
}
