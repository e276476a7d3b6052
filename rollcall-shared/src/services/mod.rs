/// Business-logic services
///
/// - `attendance`: validates referenced entities, stamps dates, and
///   persists/queries attendance records

pub mod attendance;
