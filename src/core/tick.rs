//! Periodic refresh of the board.

use crate::models::roster::Roster;

pub const REFRESH_INTERVAL_SECS: u64 = 60;

/// One refresh tick: derived fields and display order only, the ledger is
/// never touched.
pub fn on_tick(roster: &mut Roster) {
    roster.refresh_derived();
    roster.sort_for_display();
}
