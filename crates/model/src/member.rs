use serde::{Deserialize, Serialize};

/// Read-only snapshot of a guild member, fetched once per validation run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Member {
    /// User id (snowflake as text).
    pub user_id: String,

    /// Display name shown in the guild (nickname, falling back to the
    /// account username).
    pub display_name: String,

    /// Ids of the roles assigned to the member.
    #[serde(default)]
    pub role_ids: Vec<String>,
}

/// A guild role. The rank level is encoded in the name as `"<level> | …"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Role {
    pub id: String,
    pub name: String,
}

impl Role {
    /// Whether this role represents the given rank level, i.e. its name
    /// starts with `"<level> |"` (case-insensitive).
    #[must_use]
    pub fn grants_level(&self, level: &str) -> bool {
        let prefix = format!("{level} |");
        self.name.to_lowercase().starts_with(&prefix.to_lowercase())
    }
}
