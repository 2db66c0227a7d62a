/// Project REST API endpoints
///
/// Five handlers, one storage call each. Every storage outcome is mapped
/// to a status code plus a fixed message body at this boundary; storage
/// errors never propagate past a handler.

use crate::project::{Project, ProjectPayload, ProjectStore};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, post, put},
    Router,
};
use serde_json::{json, Value};

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Project storage for persistence
    pub store: ProjectStore,
}

// Fixed response messages, kept verbatim from the service contract.
const MSG_NOT_FOUND: &str = "Proyecto no encontrado.";
const MSG_LIST_FAILED: &str = "Error al obtener los proyectos.";
const MSG_GET_FAILED: &str = "Error al obtener el proyecto.";
const MSG_CREATE_FAILED: &str = "Error al crear el proyecto.";
const MSG_UPDATE_FAILED: &str = "Error al actualizar el proyecto.";
const MSG_DELETE_FAILED: &str = "Error al eliminar el proyecto.";

/// Status + `{"message": ...}` body, the only error shape this API emits
type MessageResponse = (StatusCode, Json<Value>);

fn message_response(status: StatusCode, message: &str) -> MessageResponse {
    (status, Json(json!({ "message": message })))
}

/// Create project management routes
///
/// Sets up the REST API endpoints for project CRUD operations. All
/// endpoints use the shared application state for storage access.
pub fn create_project_routes() -> Router<AppState> {
    Router::new()
        .route("/proyectos", get(list_projects))
        .route("/proyectos", post(create_project))
        .route("/proyectos/{id}", get(get_project))
        .route("/proyectos/{id}", put(update_project))
        .route("/proyectos/{id}", delete(delete_project))
}

/// List all projects
///
/// GET /proyectos
/// Returns: 200 with the full project array (possibly empty)
async fn list_projects(
    State(state): State<AppState>,
) -> Result<Json<Vec<Project>>, MessageResponse> {
    match state.store.list_all().await {
        Ok(projects) => Ok(Json(projects)),
        Err(e) => {
            tracing::error!("Failed to list projects: {}", e);
            Err(message_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                MSG_LIST_FAILED,
            ))
        }
    }
}

/// Get a specific project by id
///
/// GET /proyectos/{id}
/// Returns: 200 with the record, 404 if no row matches
async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Project>, MessageResponse> {
    match state.store.find_by_id(id).await {
        Ok(Some(project)) => Ok(Json(project)),
        Ok(None) => Err(message_response(StatusCode::NOT_FOUND, MSG_NOT_FOUND)),
        Err(e) => {
            tracing::error!("Failed to get project {}: {}", id, e);
            Err(message_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                MSG_GET_FAILED,
            ))
        }
    }
}

/// Create a new project
///
/// POST /proyectos
/// Returns: 201 with the stored record, including the assigned id.
/// A payload violating a schema constraint (e.g. missing name) surfaces
/// as a storage error and maps to 500.
async fn create_project(
    State(state): State<AppState>,
    Json(payload): Json<ProjectPayload>,
) -> Result<(StatusCode, Json<Project>), MessageResponse> {
    match state.store.insert(&payload).await {
        Ok(project) => {
            tracing::info!("Created project {}", project.id);
            Ok((StatusCode::CREATED, Json(project)))
        }
        Err(e) => {
            tracing::error!("Failed to create project: {}", e);
            Err(message_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                MSG_CREATE_FAILED,
            ))
        }
    }
}

/// Update an existing project
///
/// PUT /proyectos/{id}
/// Two-phase: apply the update, then re-fetch the row and return its
/// current state. The affected-row count from the update is the only
/// found/not-found signal; if the row vanishes between the two steps the
/// re-fetch reports 404 rather than an error.
async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ProjectPayload>,
) -> Result<Json<Project>, MessageResponse> {
    match state.store.update_by_id(id, &payload).await {
        Ok(true) => match state.store.find_by_id(id).await {
            Ok(Some(project)) => Ok(Json(project)),
            Ok(None) => Err(message_response(StatusCode::NOT_FOUND, MSG_NOT_FOUND)),
            Err(e) => {
                tracing::error!("Failed to re-fetch project {} after update: {}", id, e);
                Err(message_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    MSG_UPDATE_FAILED,
                ))
            }
        },
        Ok(false) => Err(message_response(StatusCode::NOT_FOUND, MSG_NOT_FOUND)),
        Err(e) => {
            tracing::error!("Failed to update project {}: {}", id, e);
            Err(message_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                MSG_UPDATE_FAILED,
            ))
        }
    }
}

/// Delete a project
///
/// DELETE /proyectos/{id}
/// Returns: 204 with empty body, 404 if no row matches
async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, MessageResponse> {
    match state.store.delete_by_id(id).await {
        Ok(true) => {
            tracing::info!("Deleted project {}", id);
            Ok(StatusCode::NO_CONTENT)
        }
        Ok(false) => Err(message_response(StatusCode::NOT_FOUND, MSG_NOT_FOUND)),
        Err(e) => {
            tracing::error!("Failed to delete project {}: {}", id, e);
            Err(message_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                MSG_DELETE_FAILED,
            ))
        }
    }
}
