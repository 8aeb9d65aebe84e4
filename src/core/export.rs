use crate::core::board::board_rows;
use crate::core::persist;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::{BoardExport, ExportFormat, ensure_writable, export_csv, export_json};
use crate::utils::path::expand_tilde;
use chrono::NaiveDateTime;

pub struct ExportLogic;

impl ExportLogic {
    pub fn export(
        pool: &DbPool,
        format: &ExportFormat,
        file: &str,
        force: bool,
        now: NaiveDateTime,
    ) -> AppResult<usize> {
        if file.trim().is_empty() {
            return Err(AppError::Export("missing output file".into()));
        }
        let path = expand_tilde(file);

        ensure_writable(&path, force)?;

        let mut roster = persist::load(pool)?;
        roster.sort_for_display();

        let rows: Vec<BoardExport> = board_rows(&roster, now)
            .iter()
            .map(BoardExport::from)
            .collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
        }

        ttlog(
            &pool.conn,
            "export",
            &path.display().to_string(),
            &format!("{} rows as {}", rows.len(), format.as_str()),
        )?;

        Ok(rows.len())
    }
}
