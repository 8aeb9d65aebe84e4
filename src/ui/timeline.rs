//! Text timeline: one bar per employee over a fixed window of the day.
//!
//! `─` planned shift, `━` elapsed part of a running shift, `▒` breaks,
//! `┃` projected end.

use crate::core::projector;
use crate::models::employee::Employee;
use crate::models::roster::Roster;
use crate::utils::table::visible_width;
use chrono::{NaiveDateTime, NaiveTime, Timelike};

pub const DEFAULT_WIDTH: usize = 64;

/// Visible hours, `start_hour..=end_hour`.
#[derive(Debug, Clone, Copy)]
pub struct Window {
    pub start_hour: u32,
    pub end_hour: u32,
    pub width: usize,
}

impl Window {
    pub fn new(start_hour: u32, end_hour: u32, width: usize) -> Self {
        let start_hour = start_hour.min(23);
        let end_hour = end_hour.clamp(start_hour + 1, 24);
        Self {
            start_hour,
            end_hour,
            width: width.max(8),
        }
    }

    fn total_hours(&self) -> f64 {
        (self.end_hour - self.start_hour) as f64
    }

    /// Column for a time of day, or `None` outside the window.
    pub fn column(&self, t: NaiveTime) -> Option<usize> {
        let frac = (hours_of_day(t) - self.start_hour as f64) / self.total_hours();
        if !(0.0..=1.0).contains(&frac) {
            return None;
        }
        Some(((frac * (self.width - 1) as f64).round() as usize).min(self.width - 1))
    }

    /// Clamped span `[from, to]`; a `to` before `from` runs to the edge.
    fn span(&self, from: NaiveTime, to: NaiveTime) -> Option<(usize, usize)> {
        let clamp = |t: NaiveTime| {
            let frac = (hours_of_day(t) - self.start_hour as f64) / self.total_hours();
            (frac.clamp(0.0, 1.0) * (self.width - 1) as f64).round() as usize
        };
        let a = clamp(from);
        let b = if to < from { self.width - 1 } else { clamp(to) };
        if b < a { None } else { Some((a, b)) }
    }
}

fn hours_of_day(t: NaiveTime) -> f64 {
    t.hour() as f64 + t.minute() as f64 / 60.0
}

fn fill(bar: &mut [char], span: Option<(usize, usize)>, ch: char) {
    if let Some((a, b)) = span {
        for c in bar.iter_mut().take(b + 1).skip(a) {
            *c = ch;
        }
    }
}

pub fn employee_bar(emp: &Employee, now: NaiveDateTime, window: &Window) -> String {
    let mut bar = vec![' '; window.width];

    for h in window.start_hour..=window.end_hour {
        if let Some(col) = NaiveTime::from_hms_opt(h % 24, 0, 0).and_then(|t| window.column(t)) {
            bar[col] = '·';
        }
    }

    let start = emp.start_shift.time();
    let end = emp.end_shift.time();
    fill(&mut bar, window.span(start, end), '─');

    if now >= emp.start_shift && now <= emp.end_shift {
        fill(&mut bar, window.span(start, now.time()), '━');
    }

    for b in &emp.breaks {
        fill(&mut bar, window.span(b.start, b.end), '▒');
    }
    if let Some(open) = emp.break_start_time() {
        fill(&mut bar, window.span(open.time(), now.time()), '▒');
    }

    let projected = emp
        .derived
        .calculated_end_time
        .unwrap_or_else(|| projector::projected_end_time(emp));
    if let Some(col) = window.column(projected.time()) {
        bar[col] = '┃';
    }

    bar.into_iter().collect()
}

fn axis(window: &Window) -> String {
    let mut line = vec![' '; window.width + 2];
    for h in (window.start_hour..=window.end_hour).step_by(2) {
        if let Some(col) = NaiveTime::from_hms_opt(h % 24, 0, 0).and_then(|t| window.column(t)) {
            for (i, ch) in format!("{h:02}").chars().enumerate() {
                if let Some(slot) = line.get_mut(col + i) {
                    *slot = ch;
                }
            }
        }
    }
    line.into_iter().collect::<String>().trim_end().to_string()
}

pub fn render_timeline(roster: &Roster, now: NaiveDateTime, window: &Window) -> String {
    let name_w = roster
        .employees()
        .iter()
        .map(|e| visible_width(&e.name))
        .max()
        .unwrap_or(0)
        .max(8);

    let mut out = String::new();
    out.push_str(&format!("{:name_w$} {}\n", "", axis(window)));

    for emp in roster.employees() {
        let pad = name_w.saturating_sub(visible_width(&emp.name));
        out.push_str(&emp.name);
        out.push_str(&" ".repeat(pad));
        out.push(' ');
        out.push_str(&employee_bar(emp, now, window));
        out.push('\n');
    }

    out
}
