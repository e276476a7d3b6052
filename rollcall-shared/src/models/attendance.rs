/// Attendance model and database operations
///
/// One attendance row is a single (subject, student, date) observation with
/// a PRESENT/ABSENT status and an optional free-text comment (typically the
/// reason for an absence). Associations are plain foreign-key columns;
/// callers resolve the referenced subject/student explicitly.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE attendance (
///     id BIGSERIAL PRIMARY KEY,
///     date DATE NOT NULL,
///     subject_id BIGINT NOT NULL REFERENCES subjects(id) ON DELETE CASCADE,
///     student_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
///     status VARCHAR(16) NOT NULL CHECK (status IN ('PRESENT', 'ABSENT')),
///     comment TEXT,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```
///
/// Nothing enforces uniqueness of (subject_id, student_id, date); two
/// concurrent marks for the same triple will both insert.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Attendance status for a single observation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "VARCHAR", rename_all = "UPPERCASE")]
pub enum AttendanceStatus {
    Present,
    Absent,
}

/// An attendance record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    /// Unique record ID
    pub id: i64,

    /// Calendar date the observation is for
    pub date: NaiveDate,

    /// Subject the class was held for
    pub subject_id: i64,

    /// Student the observation is about
    pub student_id: i32,

    /// PRESENT or ABSENT
    pub status: AttendanceStatus,

    /// Optional comment, e.g. the reason for an absence
    pub comment: Option<String>,

    /// When the row was inserted
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new attendance record
#[derive(Debug, Clone)]
pub struct CreateAttendance {
    pub date: NaiveDate,
    pub subject_id: i64,
    pub student_id: i32,
    pub status: AttendanceStatus,
    pub comment: Option<String>,
}

impl Attendance {
    /// Inserts a new attendance record and returns it with its generated ID
    pub async fn create(pool: &PgPool, data: CreateAttendance) -> Result<Self, sqlx::Error> {
        let record = sqlx::query_as::<_, Attendance>(
            r#"
            INSERT INTO attendance (date, subject_id, student_id, status, comment)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, date, subject_id, student_id, status, comment, created_at
            "#,
        )
        .bind(data.date)
        .bind(data.subject_id)
        .bind(data.student_id)
        .bind(data.status)
        .bind(data.comment)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// All attendance rows for a (subject, date) pair, order unspecified
    pub async fn find_by_subject_and_date(
        pool: &PgPool,
        subject_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<Self>, sqlx::Error> {
        let records = sqlx::query_as::<_, Attendance>(
            r#"
            SELECT id, date, subject_id, student_id, status, comment, created_at
            FROM attendance
            WHERE subject_id = $1 AND date = $2
            "#,
        )
        .bind(subject_id)
        .bind(date)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// All attendance rows for a student, across subjects and dates
    pub async fn find_by_student(pool: &PgPool, student_id: i32) -> Result<Vec<Self>, sqlx::Error> {
        let records = sqlx::query_as::<_, Attendance>(
            r#"
            SELECT id, date, subject_id, student_id, status, comment, created_at
            FROM attendance
            WHERE student_id = $1
            "#,
        )
        .bind(student_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Distinct dates on which any attendance was recorded for a subject,
    /// ascending
    pub async fn distinct_dates_by_subject(
        pool: &PgPool,
        subject_id: i64,
    ) -> Result<Vec<NaiveDate>, sqlx::Error> {
        let dates: Vec<NaiveDate> = sqlx::query_scalar(
            r#"
            SELECT DISTINCT date
            FROM attendance
            WHERE subject_id = $1
            ORDER BY date ASC
            "#,
        )
        .bind(subject_id)
        .fetch_all(pool)
        .await?;

        Ok(dates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::Present).unwrap(),
            "\"PRESENT\""
        );
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::Absent).unwrap(),
            "\"ABSENT\""
        );
    }

    #[test]
    fn test_status_deserializes_uppercase() {
        let status: AttendanceStatus = serde_json::from_str("\"ABSENT\"").unwrap();
        assert_eq!(status, AttendanceStatus::Absent);

        // Lowercase is not part of the wire contract
        assert!(serde_json::from_str::<AttendanceStatus>("\"present\"").is_err());
    }

    #[test]
    fn test_attendance_wire_shape() {
        let record = Attendance {
            id: 7,
            date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            subject_id: 1,
            student_id: 2,
            status: AttendanceStatus::Present,
            comment: None,
            created_at: Utc::now(),
        };

        let json: serde_json::Value = serde_json::to_value(&record).unwrap();
        assert_eq!(json["subjectId"], 1);
        assert_eq!(json["studentId"], 2);
        assert_eq!(json["status"], "PRESENT");
        assert_eq!(json["date"], "2025-03-14");
        assert!(json["comment"].is_null());
    }
}
