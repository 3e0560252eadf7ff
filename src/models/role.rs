use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
pub enum Role {
    Owner,
    Manager,
    #[default]
    Staff,
}

impl Role {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Role::Owner => "Owner",
            Role::Manager => "Manager",
            Role::Staff => "Staff",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Owner" => Some(Role::Owner),
            "Manager" => Some(Role::Manager),
            "Staff" => Some(Role::Staff),
            _ => None,
        }
    }

    /// Helper: convert input code from CLI (any case)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "owner" => Some(Role::Owner),
            "manager" => Some(Role::Manager),
            "staff" => Some(Role::Staff),
            _ => None,
        }
    }
}
