//! REST API endpoint handlers for the student resource.
//!
//! All handlers work against the in-memory [`StudentStore`] held in the
//! shared [`AppState`]. Each request is independent; the only shared
//! state is the store itself.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `POST` | `/students` | Create a student |
//! | `GET` | `/students` | List all students |
//! | `GET` | `/students/{id}` | Get a single student |
//! | `PUT` | `/students/{id}` | Replace a student |
//! | `DELETE` | `/students/{id}` | Delete a student |
//! | `GET` | `/students/{id}/summary` | One-sentence summary |
//!
//! [`StudentStore`]: crate::store::StudentStore

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use roster_types::{Student, StudentId};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /students -- create
// ---------------------------------------------------------------------------

/// Validate and store a new student. Any `id` in the body is ignored.
pub async fn create_student(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let student = decode_student(&body)?;
    check_valid(&student)?;

    let created = state
        .store
        .create(student)
        .await
        .ok_or(ApiError::IdsExhausted)?;
    info!(id = %created.id, "student created");

    Ok((StatusCode::CREATED, Json(created)))
}

// ---------------------------------------------------------------------------
// GET /students -- list
// ---------------------------------------------------------------------------

/// Return every stored student as a JSON array (possibly empty).
pub async fn list_students(State(state): State<Arc<AppState>>) -> Json<Vec<Student>> {
    Json(state.store.get_all().await)
}

// ---------------------------------------------------------------------------
// GET /students/{id} -- single student
// ---------------------------------------------------------------------------

/// Return one student by id.
pub async fn get_student(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
) -> Result<Json<Student>, ApiError> {
    let id = parse_id(&id_str)?;
    let student = state.store.get(id).await.ok_or(ApiError::NotFound(id))?;
    Ok(Json(student))
}

// ---------------------------------------------------------------------------
// PUT /students/{id} -- full replace
// ---------------------------------------------------------------------------

/// Replace the student stored under `id` with the request body.
///
/// Checks run in order: id, body, validation, existence. An invalid body
/// for an unknown id is therefore a 400, not a 404.
pub async fn update_student(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
    body: Bytes,
) -> Result<Json<Student>, ApiError> {
    let id = parse_id(&id_str)?;
    let student = decode_student(&body)?;
    check_valid(&student)?;

    let updated = state
        .store
        .update(id, student)
        .await
        .ok_or(ApiError::NotFound(id))?;
    info!(%id, "student updated");

    Ok(Json(updated))
}

// ---------------------------------------------------------------------------
// DELETE /students/{id}
// ---------------------------------------------------------------------------

/// Remove the student stored under `id`.
pub async fn delete_student(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id_str)?;
    if !state.store.delete(id).await {
        return Err(ApiError::NotFound(id));
    }
    info!(%id, "student deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// GET /students/{id}/summary
// ---------------------------------------------------------------------------

/// Return `{"summary": "Student {name} is {age} years old with email {email}."}`.
pub async fn get_student_summary(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id_str)?;
    let student = state.store.get(id).await.ok_or(ApiError::NotFound(id))?;
    Ok(Json(student.summary()))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a student id from a path segment.
fn parse_id(s: &str) -> Result<StudentId, ApiError> {
    s.parse::<StudentId>().map_err(|e| {
        debug!(id = s, error = %e, "rejected non-integer id");
        ApiError::InvalidId(format!("{s}: {e}"))
    })
}

/// Decode a request body as a student.
///
/// Decoded from raw bytes so that a missing or unusual `Content-Type`
/// header does not by itself reject the request. Only the first JSON
/// value is read; anything after it is ignored. A `null` body decodes to
/// an empty record, which then fails validation. An empty body, or one
/// whose first value is not a student, is malformed.
fn decode_student(body: &[u8]) -> Result<Student, ApiError> {
    let first = serde_json::Deserializer::from_slice(body)
        .into_iter::<Option<Student>>()
        .next();

    match first {
        Some(Ok(student)) => Ok(student.unwrap_or_default()),
        Some(Err(e)) => Err(invalid_body(&e.to_string())),
        None => Err(invalid_body("empty body")),
    }
}

fn invalid_body(reason: &str) -> ApiError {
    debug!(error = reason, "rejected request body");
    ApiError::InvalidBody(reason.to_owned())
}

/// Turn a non-empty validation result into an error.
fn check_valid(student: &Student) -> Result<(), ApiError> {
    let errors = student.validate();
    if errors.is_empty() {
        Ok(())
    } else {
        debug!(count = errors.len(), "student failed validation");
        Err(ApiError::Validation(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_first_value_and_ignores_the_rest() {
        let student = decode_student(br#"{"name":"Ann","age":20,"email":"a@b.com"} x"#);
        assert_eq!(student.ok(), Some(Student::new("Ann", 20, "a@b.com")));
    }

    #[test]
    fn null_decodes_to_empty_record() {
        assert_eq!(decode_student(b"null").ok(), Some(Student::default()));
    }

    #[test]
    fn empty_and_malformed_bodies_are_rejected() {
        assert!(matches!(decode_student(b""), Err(ApiError::InvalidBody(_))));
        assert!(matches!(decode_student(b"   "), Err(ApiError::InvalidBody(_))));
        assert!(matches!(decode_student(b"{not json"), Err(ApiError::InvalidBody(_))));
        assert!(matches!(decode_student(b"[1, 2]"), Err(ApiError::InvalidBody(_))));
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let result = decode_student(br#"{"name":"A","name":"B","age":1,"email":"e"}"#);
        assert!(matches!(result, Err(ApiError::InvalidBody(_))));
    }
}
