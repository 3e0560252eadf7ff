use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Shop {
    pub id: i64,
    pub name: String,
    /// 0 = unassigned.
    pub manager_id: i64,
}
