//! Roster import from the first sheet of a workbook, or a sheet saved as CSV.
//!
//! Row 0 is the header and is discarded. Every other row is positional:
//! `name, start date, start time, end date, end time, planned break hours`.

use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use crate::utils::time::{Cell, decode_spreadsheet_datetime};
use calamine::{Data, Reader, open_workbook_auto};
use std::fmt;
use std::io::Read;
use std::path::Path;

const COLUMNS: usize = 6;
const NAME_COLUMN: usize = 0;

const WORKBOOK_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// A rejected row, numbered as in the sheet (header = row 1).
#[derive(Debug, Clone, PartialEq)]
pub struct RowError {
    pub row: usize,
    pub reason: String,
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}: {}", self.row, self.reason)
    }
}

#[derive(Debug, Default)]
pub struct ImportReport {
    pub employees: Vec<Employee>,
    pub rejected: Vec<RowError>,
}

/// Workbooks are read through their first sheet, anything else as CSV.
pub fn read_sheet_file(path: &Path) -> AppResult<Vec<Vec<Cell>>> {
    let is_workbook = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| WORKBOOK_EXTENSIONS.iter().any(|w| w.eq_ignore_ascii_case(ext)));

    if is_workbook {
        return read_workbook(path);
    }

    let file = std::fs::File::open(path)?;
    read_sheet(file)
}

/// First sheet of a workbook, with numeric cells kept numeric.
pub fn read_workbook(path: &Path) -> AppResult<Vec<Vec<Cell>>> {
    let import_err = |e: calamine::Error| AppError::Import(format!("{}: {e}", path.display()));

    let mut workbook = open_workbook_auto(path).map_err(import_err)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::Import(format!("'{}' has no sheets", path.display())))?
        .map_err(import_err)?;

    Ok(range
        .rows()
        .map(|row| row.iter().map(cell_from_data).collect())
        .collect())
}

fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Float(f) => Cell::Number(*f),
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::text(s),
        Data::Bool(b) => Cell::Text(b.to_string()),
        Data::Error(e) => Cell::Text(e.to_string()),
        Data::Empty => Cell::Empty,
    }
}

/// Read every record as cells, header included.
pub fn read_sheet<R: Read>(reader: R) -> AppResult<Vec<Vec<Cell>>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        // names stay verbatim: "007" is not a number
        rows.push(
            record
                .iter()
                .enumerate()
                .map(|(i, raw)| {
                    if i == NAME_COLUMN {
                        Cell::text(raw)
                    } else {
                        Cell::from_raw(raw)
                    }
                })
                .collect(),
        );
    }
    Ok(rows)
}

/// Convert sheet rows into employees, collecting row-level errors.
pub fn import_rows(rows: &[Vec<Cell>]) -> ImportReport {
    let mut report = ImportReport::default();

    for (i, row) in rows.iter().enumerate().skip(1) {
        if row.iter().all(|c| *c == Cell::Empty) {
            continue;
        }

        match employee_from_row(row) {
            Ok(emp) => report.employees.push(emp),
            Err(reason) => report.rejected.push(RowError { row: i + 1, reason }),
        }
    }

    report
}

fn cell(row: &[Cell], idx: usize) -> &Cell {
    row.get(idx).unwrap_or(&Cell::Empty)
}

fn employee_from_row(row: &[Cell]) -> Result<Employee, String> {
    if row.len() < COLUMNS {
        return Err(format!("expected {COLUMNS} columns, found {}", row.len()));
    }

    let name = cell(row, NAME_COLUMN).as_text();
    if name.trim().is_empty() {
        return Err("missing name".into());
    }

    let start_shift = decode_spreadsheet_datetime(cell(row, 1), cell(row, 2))
        .map_err(|e| format!("shift start: {e}"))?;
    let end_shift = decode_spreadsheet_datetime(cell(row, 3), cell(row, 4))
        .map_err(|e| format!("shift end: {e}"))?;

    let planned = planned_break_minutes(cell(row, 5))?;

    Ok(Employee::new(name.trim(), start_shift, end_shift, planned))
}

/// Decimal hours → whole minutes.
fn planned_break_minutes(c: &Cell) -> Result<i64, String> {
    match c {
        Cell::Number(hours) if hours.is_finite() && *hours >= 0.0 => Ok((hours * 60.0).round() as i64),
        Cell::Number(hours) => Err(format!("invalid planned break hours '{hours}'")),
        Cell::Text(s) => Err(format!("planned break hours '{s}' is not a number")),
        Cell::Empty => Err("missing planned break hours".into()),
    }
}

/// Read and convert a whole file. Fails only when nothing usable is found.
pub fn import_file(path: &Path) -> AppResult<ImportReport> {
    let rows = read_sheet_file(path)?;
    if rows.len() < 2 {
        return Err(AppError::Import(format!(
            "'{}' has no rows after the header",
            path.display()
        )));
    }

    let report = import_rows(&rows);
    if report.employees.is_empty() {
        let reasons: Vec<String> = report.rejected.iter().map(|r| r.to_string()).collect();
        return Err(AppError::Import(format!(
            "no valid rows in '{}': {}",
            path.display(),
            reasons.join("; ")
        )));
    }

    Ok(report)
}
