use crate::models::employee::Employee;
use crate::models::shop::Shop;
use std::collections::HashMap;

/// Read-only name lookups used when formatting report and dashboard rows.
/// Built from a roster snapshot; the engine treats ids as opaque keys and
/// never validates existence, it only resolves display names.
#[derive(Debug, Default)]
pub struct Directory {
    employees: HashMap<i64, String>,
    shops: HashMap<i64, String>,
}

impl Directory {
    pub fn new(employees: &[Employee], shops: &[Shop]) -> Self {
        Self {
            employees: employees.iter().map(|e| (e.id, e.name.clone())).collect(),
            shops: shops.iter().map(|s| (s.id, s.name.clone())).collect(),
        }
    }

    pub fn employee_name(&self, id: i64) -> String {
        self.employees.get(&id).cloned().unwrap_or_else(|| "N/A".into())
    }

    pub fn shop_name(&self, id: i64) -> String {
        if id == 0 {
            return "System-Wide".into();
        }
        self.shops
            .get(&id)
            .cloned()
            .unwrap_or_else(|| "Unassigned".into())
    }
}
