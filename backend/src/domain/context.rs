//! Caller identity handed explicitly to owner-scoped operations.

use super::UserId;

/// Authenticated caller of a use-case.
///
/// Inbound adapters build this from the session; services never look the
/// caller up from ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestContext {
    user_id: UserId,
}

impl RequestContext {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }
}
