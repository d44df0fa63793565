use axum::{extract::State, Json};
use mongodb::bson::{Bson, Document};
use serde::Serialize;
use serde_json::Value;

use crate::models::seed_projects;
use crate::startup::AppState;
use service_core::error::AppError;

pub const PROJECT_COLLECTION: &str = "project";

#[derive(Debug, Serialize)]
pub struct ProjectListResponse {
    pub projects: Vec<Value>,
}

/// Return portfolio projects from the store, seeding it on first use.
///
/// The empty-check-then-seed sequence is not atomic; concurrent first
/// requests can each observe an empty collection and double-insert the
/// seed set. Accepted limitation for this low-stakes backend.
#[tracing::instrument(skip(state))]
pub async fn list_projects(
    State(state): State<AppState>,
) -> Result<Json<ProjectListResponse>, AppError> {
    let mut docs = state.db.get_documents(PROJECT_COLLECTION).await?;

    if docs.is_empty() {
        tracing::info!("Project collection empty, inserting seed records");
        for project in seed_projects() {
            state.db.create_document(PROJECT_COLLECTION, &project).await?;
        }
        docs = state.db.get_documents(PROJECT_COLLECTION).await?;
    }

    let projects = docs.into_iter().map(normalize_document).collect();
    Ok(Json(ProjectListResponse { projects }))
}

/// Replace the store-assigned `_id` field with a public string `id`.
fn normalize_document(mut doc: Document) -> Value {
    if let Some(raw_id) = doc.remove("_id") {
        doc.insert("id", id_to_string(&raw_id));
    }
    Bson::Document(doc).into_relaxed_extjson()
}

fn id_to_string(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}
