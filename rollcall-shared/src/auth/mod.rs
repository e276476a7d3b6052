/// Authentication utilities
///
/// # Modules
///
/// - [`password`]: Argon2id password hashing and verification
/// - [`jwt`]: Signed bearer token issuing and validation (the token issuer)
///
/// Passwords use Argon2id with 64 MB memory and 3 iterations; tokens are
/// HS256-signed and embed the user's role, full name and id as claims.

pub mod jwt;
pub mod password;
