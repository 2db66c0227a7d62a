/// HTTP API layer
///
/// REST endpoints for project management: list, get, create, update,
/// delete, each mapping one storage call to one HTTP response.

// Project management endpoints (GET/POST/PUT/DELETE)
pub mod projects;

// Re-export router builder
pub use projects::create_project_routes;
