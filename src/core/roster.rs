//! Employee and shop roster maintenance.

use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{
    delete_employee, delete_shop, insert_employee, insert_shop, load_employee, load_shop,
    next_employee_id, next_shop_id, unassign_shop_employees,
};
use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use crate::models::role::Role;
use crate::models::shop::Shop;
use crate::models::status::PresenceStatus;

pub struct EmployeeLogic;

impl EmployeeLogic {
    pub fn add(
        pool: &mut DbPool,
        name: &str,
        role: Role,
        shop_id: i64,
        full_access: bool,
    ) -> AppResult<Employee> {
        // Shop 0 means unassigned; any other id must exist
        if shop_id != 0 {
            load_shop(&pool.conn, shop_id)?;
        }

        let emp = Employee {
            id: next_employee_id(&pool.conn)?,
            name: name.to_string(),
            role,
            shop_id,
            full_access,
            status: PresenceStatus::Absent,
        };

        insert_employee(&pool.conn, &emp)?;

        ttlog(
            &pool.conn,
            "add",
            &emp.id.to_string(),
            &format!("Employee {} ({})", emp.name, emp.role.to_db_str()),
        )?;

        Ok(emp)
    }

    pub fn remove(pool: &mut DbPool, id: i64) -> AppResult<Employee> {
        let emp = load_employee(&pool.conn, id)?;

        if emp.is_owner() {
            return Err(AppError::OwnerProtected);
        }

        delete_employee(&pool.conn, id)?;

        ttlog(
            &pool.conn,
            "del",
            &id.to_string(),
            &format!("Employee {} deleted", emp.name),
        )?;

        Ok(emp)
    }
}

pub struct ShopLogic;

impl ShopLogic {
    pub fn add(pool: &mut DbPool, name: &str, manager_id: i64) -> AppResult<Shop> {
        // 0 = unassigned; otherwise the manager must exist and hold the role
        if manager_id != 0 {
            let manager = load_employee(&pool.conn, manager_id)?;
            if manager.role != Role::Manager {
                return Err(AppError::InvalidRole(format!(
                    "{} is not a manager",
                    manager.name
                )));
            }
        }

        let shop = Shop {
            id: next_shop_id(&pool.conn)?,
            name: name.to_string(),
            manager_id,
        };

        insert_shop(&pool.conn, &shop)?;

        ttlog(
            &pool.conn,
            "add",
            &shop.id.to_string(),
            &format!("Shop {}", shop.name),
        )?;

        Ok(shop)
    }

    /// Delete a shop; its employees fall back to "unassigned".
    /// Returns the deleted shop and how many employees were unassigned.
    pub fn remove(pool: &mut DbPool, id: i64) -> AppResult<(Shop, usize)> {
        let shop = load_shop(&pool.conn, id)?;

        let unassigned = unassign_shop_employees(&pool.conn, id)?;
        delete_shop(&pool.conn, id)?;

        ttlog(
            &pool.conn,
            "del",
            &id.to_string(),
            &format!("Shop {} deleted ({} employees unassigned)", shop.name, unassigned),
        )?;

        Ok((shop, unassigned))
    }
}
