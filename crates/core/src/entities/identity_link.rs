use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Well-known identity link types.
pub mod identity_link_types {
    /// The user the task is assigned to.
    pub const ASSIGNEE: &str = "assignee";
    /// The user owning the task.
    pub const OWNER: &str = "owner";
    /// A user or group that may claim the task.
    pub const CANDIDATE: &str = "candidate";
    /// A user that started the process instance.
    pub const STARTER: &str = "starter";
    /// A user that took part in the process instance.
    pub const PARTICIPANT: &str = "participant";
}

/// Association between a task or process instance and a user or group.
///
/// `id` is `None` for links synthesized from a task's assignee or owner
/// rather than read from storage.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HistoricIdentityLink {
    pub id: Option<String>,
    pub link_type: String,
    pub user_id: Option<String>,
    pub group_id: Option<String>,
    pub task_id: Option<String>,
    pub process_instance_id: Option<String>,
    pub create_time: Option<DateTime<Utc>>,
}

impl HistoricIdentityLink {
    /// A user link on a task.
    pub fn for_task_user(task_id: &str, link_type: &str, user_id: &str) -> Self {
        Self {
            link_type: link_type.to_string(),
            user_id: Some(user_id.to_string()),
            task_id: Some(task_id.to_string()),
            ..Default::default()
        }
    }

    /// Whether the link targets a user, as opposed to a group.
    pub fn is_user_link(&self) -> bool {
        self.user_id.is_some()
    }
}
