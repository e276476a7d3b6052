/// Attendance service
///
/// Every operation is a single validate-then-persist-or-read sequence:
/// resolve the referenced subject/student, short-circuit with a NotFound
/// error if either is missing, then delegate to the persistence gateway.
/// There are no retries and no multi-statement transactions; each statement
/// runs in its own implicit transaction.
///
/// # Example
///
/// ```no_run
/// use rollcall_shared::services::attendance::AttendanceService;
/// use rollcall_shared::models::attendance::AttendanceStatus;
/// # async fn example(pool: sqlx::PgPool) -> anyhow::Result<()> {
/// let service = AttendanceService::new(pool);
/// let record = service
///     .mark_attendance(1, 2, AttendanceStatus::Present, None)
///     .await?;
/// assert_eq!(record.subject_id, 1);
/// # Ok(())
/// # }
/// ```

use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use tracing::debug;

use crate::models::{
    attendance::{Attendance, AttendanceStatus, CreateAttendance},
    subject::Subject,
    user::User,
};

/// Errors produced by attendance operations
#[derive(Debug, thiserror::Error)]
pub enum AttendanceError {
    /// Referenced subject does not exist
    #[error("Subject not found: {0}")]
    SubjectNotFound(i64),

    /// Referenced student does not exist
    #[error("Student not found: {0}")]
    StudentNotFound(i32),

    /// Underlying database failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Attendance business logic over a constructor-passed pool
#[derive(Clone)]
pub struct AttendanceService {
    pool: PgPool,
}

impl AttendanceService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Marks attendance for one student in one subject, dated today
    ///
    /// Validates both foreign keys, then inserts a row stamped with the
    /// current UTC date and returns the stored record with its generated ID.
    ///
    /// # Errors
    ///
    /// `SubjectNotFound` / `StudentNotFound` if either reference fails to
    /// resolve; nothing is written in that case.
    pub async fn mark_attendance(
        &self,
        subject_id: i64,
        student_id: i32,
        status: AttendanceStatus,
        comment: Option<String>,
    ) -> Result<Attendance, AttendanceError> {
        let subject = self.require_subject(subject_id).await?;
        let student = self.require_student(student_id).await?;

        debug!(
            subject = %subject.name,
            student = %student.full_name,
            ?status,
            "Marking attendance"
        );

        let record = Attendance::create(
            &self.pool,
            CreateAttendance {
                date: Utc::now().date_naive(),
                subject_id,
                student_id,
                status,
                comment,
            },
        )
        .await?;

        Ok(record)
    }

    /// All attendance rows for a subject on a given date, order unspecified
    pub async fn attendance_by_subject_and_date(
        &self,
        subject_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<Attendance>, AttendanceError> {
        self.require_subject(subject_id).await?;

        let records = Attendance::find_by_subject_and_date(&self.pool, subject_id, date).await?;
        Ok(records)
    }

    /// All attendance rows for a student across subjects and dates
    pub async fn attendance_by_student(
        &self,
        student_id: i32,
    ) -> Result<Vec<Attendance>, AttendanceError> {
        self.require_student(student_id).await?;

        let records = Attendance::find_by_student(&self.pool, student_id).await?;
        Ok(records)
    }

    /// Whether any attendance has been submitted for the subject today
    pub async fn has_attendance_for_today(
        &self,
        subject_id: i64,
    ) -> Result<bool, AttendanceError> {
        self.require_subject(subject_id).await?;

        let today = Utc::now().date_naive();
        let records = Attendance::find_by_subject_and_date(&self.pool, subject_id, today).await?;
        Ok(!records.is_empty())
    }

    /// Distinct dates on which the subject had any attendance recorded,
    /// ascending with no duplicates
    pub async fn conducted_dates_by_subject(
        &self,
        subject_id: i64,
    ) -> Result<Vec<NaiveDate>, AttendanceError> {
        self.require_subject(subject_id).await?;

        let dates = Attendance::distinct_dates_by_subject(&self.pool, subject_id).await?;
        Ok(dates)
    }

    async fn require_subject(&self, subject_id: i64) -> Result<Subject, AttendanceError> {
        Subject::find_by_id(&self.pool, subject_id)
            .await?
            .ok_or(AttendanceError::SubjectNotFound(subject_id))
    }

    async fn require_student(&self, student_id: i32) -> Result<User, AttendanceError> {
        User::find_by_id(&self.pool, student_id)
            .await?
            .ok_or(AttendanceError::StudentNotFound(student_id))
    }
}
