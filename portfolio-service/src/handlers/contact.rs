use axum::{extract::State, Json};
use serde::Serialize;
use validator::Validate;

use crate::models::{ContactMessage, ContactRecord};
use crate::startup::AppState;
use service_core::error::AppError;

pub const CONTACT_COLLECTION: &str = "contactmessage";

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub status: String,
}

/// Persist a contact-form submission with a server-assigned UTC timestamp.
#[tracing::instrument(skip(state, request))]
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(request): Json<ContactMessage>,
) -> Result<Json<ContactResponse>, AppError> {
    request.validate()?;

    let record = ContactRecord::new(request);
    state.db.create_document(CONTACT_COLLECTION, &record).await?;

    tracing::info!(email = %record.email, "Contact message stored");

    Ok(Json(ContactResponse {
        status: "ok".to_string(),
    }))
}
