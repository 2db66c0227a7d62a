/// SQLite persistence layer for project storage
///
/// Owns every SQL statement touching the `projects` table and exposes the
/// row-level operations the HTTP handlers are built on: list, lookup,
/// insert, partial update, delete.

use crate::project::types::{Project, ProjectPayload};
use anyhow::Result;
use sqlx::sqlite::SqlitePool;

/// SQLite-based project storage
///
/// Thin wrapper over a connection pool. "Not found" is reported as
/// `Ok(None)` / `Ok(false)`; `Err` always means the storage call itself
/// failed.
#[derive(Debug, Clone)]
pub struct ProjectStore {
    /// SQLite connection pool for the projects database
    pool: SqlitePool,
}

impl ProjectStore {
    /// Create new storage instance with database connection
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Initialize the projects schema
    ///
    /// Safe to call multiple times (uses IF NOT EXISTS).
    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS projects (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                area TEXT,
                description TEXT,
                start_date TEXT NOT NULL,
                end_date TEXT,
                completion_percentage REAL NOT NULL,
                comments TEXT,
                owner TEXT
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Fetch all projects
    pub async fn list_all(&self) -> Result<Vec<Project>> {
        let projects = sqlx::query_as::<_, Project>("SELECT * FROM projects ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(projects)
    }

    /// Fetch a single project by id
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Project>> {
        let project = sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(project)
    }

    /// Insert a new project and return the stored row
    ///
    /// The database assigns the id. Absent payload fields bind NULL, so a
    /// payload missing a required column fails the NOT NULL constraint and
    /// surfaces as a storage error.
    pub async fn insert(&self, payload: &ProjectPayload) -> Result<Project> {
        let project = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects
                (name, area, description, start_date, end_date,
                 completion_percentage, comments, owner)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&payload.name)
        .bind(&payload.area)
        .bind(&payload.description)
        .bind(payload.start_date)
        .bind(payload.end_date)
        .bind(payload.completion_percentage)
        .bind(&payload.comments)
        .bind(&payload.owner)
        .fetch_one(&self.pool)
        .await?;

        Ok(project)
    }

    /// Apply a partial update to the project with the given id
    ///
    /// Absent payload fields keep their stored values (COALESCE). Returns
    /// whether a row matched the id; a false return is the only not-found
    /// signal, there is no separate existence check.
    pub async fn update_by_id(&self, id: i64, payload: &ProjectPayload) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE projects SET
                name = COALESCE(?, name),
                area = COALESCE(?, area),
                description = COALESCE(?, description),
                start_date = COALESCE(?, start_date),
                end_date = COALESCE(?, end_date),
                completion_percentage = COALESCE(?, completion_percentage),
                comments = COALESCE(?, comments),
                owner = COALESCE(?, owner)
            WHERE id = ?
            "#,
        )
        .bind(&payload.name)
        .bind(&payload.area)
        .bind(&payload.description)
        .bind(payload.start_date)
        .bind(payload.end_date)
        .bind(payload.completion_percentage)
        .bind(&payload.comments)
        .bind(&payload.owner)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete the project with the given id
    ///
    /// Returns whether a row was removed.
    pub async fn delete_by_id(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use sqlx::sqlite::SqlitePoolOptions;

    async fn setup_store() -> ProjectStore {
        // Single connection: each in-memory SQLite connection is its own
        // database, so the pool must not hand out a second one.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(":memory:")
            .await
            .unwrap();

        let store = ProjectStore::new(pool);
        store.init_schema().await.unwrap();
        store
    }

    fn sample_payload() -> ProjectPayload {
        ProjectPayload {
            name: Some("Migración ERP".to_string()),
            area: Some("TI".to_string()),
            description: Some("Migración del ERP corporativo".to_string()),
            start_date: Some(Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap()),
            end_date: None,
            completion_percentage: Some(25.0),
            comments: None,
            owner: Some("Laura Díaz".to_string()),
        }
    }

    #[tokio::test]
    async fn insert_assigns_id_and_returns_row() {
        let store = setup_store().await;

        let first = store.insert(&sample_payload()).await.unwrap();
        let second = store.insert(&sample_payload()).await.unwrap();

        assert_eq!(first.name, "Migración ERP");
        assert_eq!(first.area.as_deref(), Some("TI"));
        assert_eq!(first.completion_percentage, 25.0);
        assert_eq!(first.end_date, None);
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn insert_without_name_is_rejected_by_schema() {
        let store = setup_store().await;

        let payload = ProjectPayload {
            name: None,
            ..sample_payload()
        };

        assert!(store.insert(&payload).await.is_err());
    }

    #[tokio::test]
    async fn find_by_id_roundtrips_all_fields() {
        let store = setup_store().await;

        let mut payload = sample_payload();
        payload.end_date = Some(Utc.with_ymd_and_hms(2024, 6, 30, 0, 0, 0).unwrap());
        payload.comments = Some("En curso".to_string());

        let inserted = store.insert(&payload).await.unwrap();
        let fetched = store.find_by_id(inserted.id).await.unwrap().unwrap();

        assert_eq!(fetched, inserted);
    }

    #[tokio::test]
    async fn find_by_id_missing_returns_none() {
        let store = setup_store().await;

        assert_eq!(store.find_by_id(42).await.unwrap(), None);
    }

    #[tokio::test]
    async fn list_all_on_empty_table_returns_empty_vec() {
        let store = setup_store().await;

        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_all_returns_rows_in_id_order() {
        let store = setup_store().await;

        let a = store.insert(&sample_payload()).await.unwrap();
        let b = store.insert(&sample_payload()).await.unwrap();

        let all = store.list_all().await.unwrap();
        assert_eq!(all, vec![a, b]);
    }

    #[tokio::test]
    async fn update_by_id_patches_only_provided_fields() {
        let store = setup_store().await;
        let inserted = store.insert(&sample_payload()).await.unwrap();

        let patch = ProjectPayload {
            name: Some("Migración ERP v2".to_string()),
            completion_percentage: Some(60.0),
            ..Default::default()
        };

        assert!(store.update_by_id(inserted.id, &patch).await.unwrap());

        let updated = store.find_by_id(inserted.id).await.unwrap().unwrap();
        assert_eq!(updated.name, "Migración ERP v2");
        assert_eq!(updated.completion_percentage, 60.0);
        // Untouched fields keep their stored values
        assert_eq!(updated.area, inserted.area);
        assert_eq!(updated.start_date, inserted.start_date);
        assert_eq!(updated.owner, inserted.owner);
    }

    #[tokio::test]
    async fn update_by_id_missing_returns_false() {
        let store = setup_store().await;

        let patch = ProjectPayload {
            name: Some("No importa".to_string()),
            ..Default::default()
        };

        assert!(!store.update_by_id(99, &patch).await.unwrap());
    }

    #[tokio::test]
    async fn delete_by_id_reports_removal_then_absence() {
        let store = setup_store().await;
        let inserted = store.insert(&sample_payload()).await.unwrap();

        assert!(store.delete_by_id(inserted.id).await.unwrap());
        assert!(!store.delete_by_id(inserted.id).await.unwrap());
        assert_eq!(store.find_by_id(inserted.id).await.unwrap(), None);
    }
}
