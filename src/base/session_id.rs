//! Analysis session identity.

use std::fmt;

use uuid::Uuid;

/// Identifies one analysis session.
///
/// Adapters remember the session that created them so a query made through
/// a different session can be rejected instead of answering from stale caches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Generate a fresh, globally unique id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
