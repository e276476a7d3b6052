/// Database models
///
/// The persistence gateway: typed finders and save operations over the
/// relational store.
///
/// # Models
///
/// - `user`: User accounts (students, teachers, the principal)
/// - `subject`: Taught subjects, referenced by attendance records
/// - `attendance`: One (subject, student, date) observation per row

pub mod attendance;
pub mod subject;
pub mod user;
