use crate::core::persist;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::import::{ImportReport, import_file};
use crate::models::roster::Roster;
use crate::ui::messages::{success, warning};
use std::path::Path;

pub struct ImportLogic;

impl ImportLogic {
    /// Replace the stored roster with the rows of `path`.
    pub fn apply(pool: &DbPool, path: &Path) -> AppResult<ImportReport> {
        let mut report = import_file(path)?;

        for bad in &report.rejected {
            warning(format!("Skipped {bad}"));
        }
        for emp in &report.employees {
            if emp.start_shift >= emp.end_shift {
                warning(format!(
                    "{}: shift ends before it starts ({})",
                    emp.name,
                    emp.shift_window()
                ));
            }
        }

        let mut roster = Roster::new();
        roster.replace(std::mem::take(&mut report.employees));
        roster.refresh_derived();
        roster.sort_for_display();
        persist::save(pool, &roster)?;

        let msg = format!(
            "Imported {} employees from {} ({} rows skipped)",
            roster.len(),
            path.display(),
            report.rejected.len()
        );
        ttlog(&pool.conn, "import", &path.display().to_string(), &msg)?;
        success(msg);

        report.employees = roster.employees().to_vec();
        Ok(report)
    }
}
