//! User-visible notices for purchase flow outcomes
//!
//! Every terminal flow failure becomes exactly one dismissible notice;
//! "you cancelled" and "the transaction failed" are distinct kinds so the
//! presentation can stay neutral for the former.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How long the UI keeps a notice before auto-dismissing it
pub const NOTICE_DISMISS_SECS: u64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Info,
    /// The user declined; neutral, non-alarming presentation
    Cancelled,
    /// Something else went wrong; carries the provider message if any
    Error,
}

/// A dismissible, auto-expiring notification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notice {
    pub id: Uuid,
    pub kind: NoticeKind,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub dismiss_after_secs: u64,
}

impl Notice {
    fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
            created_at: Utc::now(),
            dismiss_after_secs: NOTICE_DISMISS_SECS,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Info, message)
    }

    pub fn cancelled(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Cancelled, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_and_dismissal() {
        let cancelled = Notice::cancelled("Transaction cancelled by user");
        assert_eq!(cancelled.kind, NoticeKind::Cancelled);
        assert_eq!(cancelled.dismiss_after_secs, NOTICE_DISMISS_SECS);

        let failed = Notice::error("insufficient funds");
        assert_eq!(failed.kind, NoticeKind::Error);
        assert_ne!(cancelled.id, failed.id);
    }
}
