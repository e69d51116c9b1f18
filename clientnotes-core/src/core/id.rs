//! Session-unique identifier generation.

use uuid::Uuid;

/// Returns a fresh string identifier.
///
/// Folder and note ids are drawn from this one namespace-free generator;
/// uniqueness is probabilistic (UUID v4), which is collision-free in
/// practice for the lifetime of a session.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}
