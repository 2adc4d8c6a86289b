use serde::{Deserialize, Serialize};

/// The single user-facing toast slot. At most one notification is live at
/// a time; a new one preempts whatever is currently showing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub visible: bool,
}
