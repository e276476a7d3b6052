/// API route handlers
///
/// - `health`: Health check endpoint
/// - `auth`: Authentication endpoints (signup, login, delete)
/// - `attendance`: Attendance marking and query endpoints

pub mod attendance;
pub mod auth;
pub mod health;
