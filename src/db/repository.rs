//! Database repository for CRUD operations.
//!
//! Uses prepared statements for data integrity. Timestamps are stored as
//! RFC 3339 text and attendance as its canonical lowercase spelling; rows
//! written by older revisions may carry `unsure`, which reads back as `maybe`.

use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

use crate::errors::AppError;
use crate::models::{
    Attendance, CreateEventRequest, CreateRecipeRequest, CreateRsvpRequest,
    CreateSharedContentRequest, Event, Recipe, Rsvp, SharedContent,
};

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ==================== EVENT OPERATIONS ====================

    /// List all events, soonest first.
    pub async fn list_events(&self) -> Result<Vec<Event>, AppError> {
        let rows = sqlx::query("SELECT id, name, date FROM events ORDER BY date")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(event_from_row).collect()
    }

    /// Get an event by ID.
    pub async fn get_event(&self, id: &str) -> Result<Option<Event>, AppError> {
        let row = sqlx::query("SELECT id, name, date FROM events WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(event_from_row).transpose()
    }

    /// Create a new event.
    pub async fn create_event(&self, request: &CreateEventRequest) -> Result<Event, AppError> {
        let id = uuid::Uuid::new_v4().to_string();

        sqlx::query("INSERT INTO events (id, name, date) VALUES (?, ?, ?)")
            .bind(&id)
            .bind(&request.name)
            .bind(request.date.to_rfc3339())
            .execute(&self.pool)
            .await?;

        Ok(Event {
            id,
            name: request.name.clone(),
            date: request.date,
        })
    }

    /// Delete an event. Its RSVPs are removed by the cascade.
    pub async fn delete_event(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM events WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Event {} not found", id)));
        }

        Ok(())
    }

    // ==================== RSVP OPERATIONS ====================

    /// List all RSVPs, newest first.
    pub async fn list_rsvps(&self) -> Result<Vec<Rsvp>, AppError> {
        let rows = sqlx::query(
            "SELECT id, event_id, name, food, content, attendance, created_at FROM rsvps ORDER BY created_at DESC"
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(rsvp_from_row).collect()
    }

    /// Create a new RSVP. The referenced event must exist.
    pub async fn create_rsvp(&self, request: &CreateRsvpRequest) -> Result<Rsvp, AppError> {
        let event = self.get_event(&request.event_id).await?;
        if event.is_none() {
            return Err(AppError::NotFound(format!(
                "Event {} not found",
                request.event_id
            )));
        }

        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now();

        sqlx::query(
            "INSERT INTO rsvps (id, event_id, name, food, content, attendance, created_at) VALUES (?, ?, ?, ?, ?, ?, ?)"
        )
        .bind(&id)
        .bind(&request.event_id)
        .bind(&request.name)
        .bind(&request.food)
        .bind(&request.content)
        .bind(request.attendance.as_str())
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(Rsvp {
            id,
            event_id: request.event_id.clone(),
            name: request.name.clone(),
            food: request.food.clone(),
            content: request.content.clone(),
            attendance: request.attendance,
            created_at: now,
        })
    }

    /// Delete an RSVP.
    pub async fn delete_rsvp(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM rsvps WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("RSVP {} not found", id)));
        }

        Ok(())
    }

    // ==================== RECIPE OPERATIONS ====================

    /// List recipe metadata, newest upload first.
    pub async fn list_recipes(&self) -> Result<Vec<Recipe>, AppError> {
        let rows = sqlx::query(
            "SELECT id, name, file_name, uploaded_at FROM recipes ORDER BY uploaded_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(recipe_from_row).collect()
    }

    /// Create a new recipe with its file bytes.
    pub async fn create_recipe(
        &self,
        request: &CreateRecipeRequest,
        file_data: &[u8],
    ) -> Result<Recipe, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now();

        sqlx::query(
            "INSERT INTO recipes (id, name, file_name, file_data, uploaded_at) VALUES (?, ?, ?, ?, ?)"
        )
        .bind(&id)
        .bind(&request.name)
        .bind(&request.file_name)
        .bind(file_data)
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(Recipe {
            id,
            name: request.name.clone(),
            file_name: request.file_name.clone(),
            uploaded_at: now,
        })
    }

    /// Get a recipe's file name and bytes.
    pub async fn get_recipe_file(&self, id: &str) -> Result<Option<(String, Vec<u8>)>, AppError> {
        let row = sqlx::query("SELECT file_name, file_data FROM recipes WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|r| (r.get("file_name"), r.get("file_data"))))
    }

    /// Delete a recipe.
    pub async fn delete_recipe(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Recipe {} not found", id)));
        }

        Ok(())
    }

    // ==================== SHARED CONTENT OPERATIONS ====================

    /// List shared content metadata, newest upload first.
    pub async fn list_shared_content(&self) -> Result<Vec<SharedContent>, AppError> {
        let rows = sqlx::query(
            "SELECT id, title, description, file_name, uploaded_at FROM shared_content ORDER BY uploaded_at DESC"
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(shared_content_from_row).collect()
    }

    /// Create a new shared content entry with its file bytes.
    pub async fn create_shared_content(
        &self,
        request: &CreateSharedContentRequest,
        file_data: &[u8],
    ) -> Result<SharedContent, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now();

        sqlx::query(
            "INSERT INTO shared_content (id, title, description, file_name, file_data, uploaded_at) VALUES (?, ?, ?, ?, ?, ?)"
        )
        .bind(&id)
        .bind(&request.title)
        .bind(&request.description)
        .bind(&request.file_name)
        .bind(file_data)
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(SharedContent {
            id,
            title: request.title.clone(),
            description: request.description.clone(),
            file_name: request.file_name.clone(),
            uploaded_at: now,
        })
    }

    /// Get a shared content entry's file name and bytes.
    pub async fn get_shared_content_file(
        &self,
        id: &str,
    ) -> Result<Option<(String, Vec<u8>)>, AppError> {
        let row = sqlx::query("SELECT file_name, file_data FROM shared_content WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|r| (r.get("file_name"), r.get("file_data"))))
    }

    /// Delete a shared content entry.
    pub async fn delete_shared_content(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM shared_content WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Shared content {} not found",
                id
            )));
        }

        Ok(())
    }
}

// ==================== ROW MAPPING HELPERS ====================

fn parse_timestamp(raw: &str, column: &str) -> Result<DateTime<Utc>, AppError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| AppError::Database(format!("Invalid {} timestamp '{}': {}", column, raw, e)))
}

fn event_from_row(row: &SqliteRow) -> Result<Event, AppError> {
    let date: String = row.get("date");
    Ok(Event {
        id: row.get("id"),
        name: row.get("name"),
        date: parse_timestamp(&date, "date")?,
    })
}

fn rsvp_from_row(row: &SqliteRow) -> Result<Rsvp, AppError> {
    let attendance: String = row.get("attendance");
    let created_at: String = row.get("created_at");
    Ok(Rsvp {
        id: row.get("id"),
        event_id: row.get("event_id"),
        name: row.get("name"),
        food: row.get("food"),
        content: row.get("content"),
        attendance: Attendance::from_str(&attendance).ok_or_else(|| {
            AppError::Database(format!("Invalid attendance value '{}'", attendance))
        })?,
        created_at: parse_timestamp(&created_at, "created_at")?,
    })
}

fn recipe_from_row(row: &SqliteRow) -> Result<Recipe, AppError> {
    let uploaded_at: String = row.get("uploaded_at");
    Ok(Recipe {
        id: row.get("id"),
        name: row.get("name"),
        file_name: row.get("file_name"),
        uploaded_at: parse_timestamp(&uploaded_at, "uploaded_at")?,
    })
}

fn shared_content_from_row(row: &SqliteRow) -> Result<SharedContent, AppError> {
    let uploaded_at: String = row.get("uploaded_at");
    Ok(SharedContent {
        id: row.get("id"),
        title: row.get("title"),
        description: row.get("description"),
        file_name: row.get("file_name"),
        uploaded_at: parse_timestamp(&uploaded_at, "uploaded_at")?,
    })
}
