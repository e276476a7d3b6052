/// Attendance endpoints
///
/// # Endpoints
///
/// - `POST /api/attendance/mark` - Batch-mark attendance for students
/// - `GET /api/attendance/subject/:subject_id?date=ISO` - Rows for a subject on a date
/// - `GET /api/attendance/status/:subject_id` - Whether attendance was submitted today
/// - `GET /api/attendance/student/:student_id` - All rows for a student
/// - `GET /api/attendance/subject/:subject_id/dates` - Distinct conducted dates

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use rollcall_shared::{
    models::attendance::{Attendance, AttendanceStatus},
    services::attendance::AttendanceError,
};
use serde::{Deserialize, Serialize};

/// One entry of the batch mark request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkAttendanceRequest {
    pub subject_id: i64,
    pub student_id: i32,
    pub status: AttendanceStatus,

    /// Optional, e.g. the reason for an absence
    #[serde(default)]
    pub comment: Option<String>,
}

/// Query parameters for the by-subject-and-date endpoint
#[derive(Debug, Deserialize)]
pub struct DateQuery {
    /// ISO calendar date, e.g. 2025-03-14
    pub date: NaiveDate,
}

/// Response for the attendance-submitted check
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceStatusResponse {
    pub attendance_submitted: bool,
}

/// Batch-mark attendance
///
/// Accepts a list of per-student requests and returns the created records
/// in the same order, each with a freshly generated id and today's date.
/// Fails with 404 if any referenced subject or student does not exist;
/// entries before the failing one are already persisted, since each mark
/// runs in its own implicit transaction.
pub async fn mark_attendance(
    State(state): State<AppState>,
    Json(requests): Json<Vec<MarkAttendanceRequest>>,
) -> ApiResult<Json<Vec<Attendance>>> {
    let mut records = Vec::with_capacity(requests.len());

    for request in requests {
        let record = state
            .attendance
            .mark_attendance(
                request.subject_id,
                request.student_id,
                request.status,
                request.comment,
            )
            .await?;
        records.push(record);
    }

    Ok(Json(records))
}

/// Attendance rows for a subject on a given date
pub async fn attendance_by_subject_and_date(
    State(state): State<AppState>,
    Path(subject_id): Path<i64>,
    Query(query): Query<DateQuery>,
) -> ApiResult<Json<Vec<Attendance>>> {
    let records = state
        .attendance
        .attendance_by_subject_and_date(subject_id, query.date)
        .await?;

    Ok(Json(records))
}

/// Whether attendance has been submitted for the subject today
pub async fn attendance_status(
    State(state): State<AppState>,
    Path(subject_id): Path<i64>,
) -> ApiResult<Json<AttendanceStatusResponse>> {
    let submitted = state.attendance.has_attendance_for_today(subject_id).await?;

    Ok(Json(AttendanceStatusResponse {
        attendance_submitted: submitted,
    }))
}

/// All attendance rows for a student
pub async fn attendance_by_student(
    State(state): State<AppState>,
    Path(student_id): Path<i32>,
) -> ApiResult<Json<Vec<Attendance>>> {
    let records = state.attendance.attendance_by_student(student_id).await?;

    Ok(Json(records))
}

/// Distinct dates on which the subject had attendance recorded, ascending
///
/// This endpoint's documented contract is 400 (not 404) for a missing
/// subject, so the NotFound case is mapped explicitly here.
pub async fn conducted_dates(
    State(state): State<AppState>,
    Path(subject_id): Path<i64>,
) -> ApiResult<Json<Vec<NaiveDate>>> {
    let dates = state
        .attendance
        .conducted_dates_by_subject(subject_id)
        .await
        .map_err(|e| match e {
            AttendanceError::SubjectNotFound(id) => {
                ApiError::BadRequest(format!("Subject not found: {}", id))
            }
            other => ApiError::from(other),
        })?;

    Ok(Json(dates))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_request_camel_case() {
        let req: MarkAttendanceRequest = serde_json::from_str(
            r#"{"subjectId": 1, "studentId": 2, "status": "PRESENT"}"#,
        )
        .unwrap();

        assert_eq!(req.subject_id, 1);
        assert_eq!(req.student_id, 2);
        assert_eq!(req.status, AttendanceStatus::Present);
        assert!(req.comment.is_none());
    }

    #[test]
    fn test_mark_request_with_comment() {
        let req: MarkAttendanceRequest = serde_json::from_str(
            r#"{"subjectId": 3, "studentId": 4, "status": "ABSENT", "comment": "sick"}"#,
        )
        .unwrap();

        assert_eq!(req.status, AttendanceStatus::Absent);
        assert_eq!(req.comment.as_deref(), Some("sick"));
    }

    #[test]
    fn test_status_response_wire_shape() {
        let resp = AttendanceStatusResponse {
            attendance_submitted: true,
        };

        assert_eq!(
            serde_json::to_string(&resp).unwrap(),
            r#"{"attendanceSubmitted":true}"#
        );
    }

    #[test]
    fn test_date_query_parses_iso_date() {
        let query: DateQuery = serde_json::from_str(r#"{"date": "2025-03-14"}"#).unwrap();
        assert_eq!(query.date, NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
    }
}
