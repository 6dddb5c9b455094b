//! [`Command`] for switching the active [`Occupancy`] of a [`Section`].

use tracing as log;

use crate::{domain::Occupancy, Section};

use super::Command;

/// [`Command`] for switching the active [`Occupancy`] of a [`Section`].
///
/// Entries of the other occupancies keep their independently edited data:
/// switching is a view selection, not a reset.
#[derive(Clone, Copy, Debug)]
pub struct SwitchOccupancy {
    /// [`Occupancy`] to make active.
    pub to: Occupancy,
}

impl Command<SwitchOccupancy> for Section {
    /// Previously active [`Occupancy`].
    type Ok = Occupancy;

    fn execute(&mut self, cmd: SwitchOccupancy) -> Self::Ok {
        let prev = self.occupancy();
        if !self.kind().supports(cmd.to) {
            return prev;
        }

        self.occupancy = cmd.to;
        // Re-derived even when the counts are unchanged, so the row labels
        // match the newly active occupancy.
        self.rederive(cmd.to);
        log::debug!(from = %prev, to = %cmd.to, "occupancy switched");

        prev
    }
}
