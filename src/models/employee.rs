use crate::models::role::Role;
use crate::models::status::PresenceStatus;
use serde::Serialize;

/// Reserved id of the seeded system-owner record.
pub const OWNER_ID: i64 = 9999;

#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub role: Role,
    /// 0 = unassigned / system-wide.
    pub shop_id: i64,
    /// Manager-role flag granting owner-equivalent visibility. Carried as
    /// plain data; authorization itself lives outside this tool.
    pub full_access: bool,
    pub status: PresenceStatus,
}

impl Employee {
    pub fn is_owner(&self) -> bool {
        self.id == OWNER_ID || self.role == Role::Owner
    }
}
