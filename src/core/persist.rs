//! Roster persistence: a JSON blob under a single key.

use crate::db::pool::DbPool;
use crate::db::store;
use crate::errors::AppResult;
use crate::models::employee::Employee;
use crate::models::roster::Roster;
use crate::ui::messages::warning;

pub const ROSTER_KEY: &str = "employeeData";

pub fn serialize_roster(roster: &Roster) -> AppResult<String> {
    Ok(serde_json::to_string(roster.employees())?)
}

/// Rebuild a roster from its stored blob.
///
/// Absent, empty or unreadable storage gives an empty roster.
pub fn hydrate_roster(blob: Option<&str>) -> Roster {
    let Some(raw) = blob.map(str::trim).filter(|s| !s.is_empty()) else {
        return Roster::new();
    };

    match serde_json::from_str::<Vec<Employee>>(raw) {
        Ok(employees) => {
            let mut roster = Roster::from_employees(employees);
            roster.refresh_derived();
            roster
        }
        Err(e) => {
            warning(format!("Saved roster is unreadable, starting empty ({e})"));
            Roster::new()
        }
    }
}

pub fn load(pool: &DbPool) -> AppResult<Roster> {
    let blob = store::get(&pool.conn, ROSTER_KEY)?;
    Ok(hydrate_roster(blob.as_deref()))
}

pub fn save(pool: &DbPool, roster: &Roster) -> AppResult<()> {
    let blob = serialize_roster(roster)?;
    store::set(&pool.conn, ROSTER_KEY, &blob)
}

pub fn clear(pool: &DbPool) -> AppResult<()> {
    store::remove(&pool.conn, ROSTER_KEY)
}
