//! [`Command`] for editing the desired row count of a [`Section`].

use common::Digits;

use crate::Section;

use super::Command;

/// [`Command`] for editing the desired row count of the active [`Tenancy`].
///
/// The raw input is sanitized to digit-only text as typed, and the rows of
/// the active occupancy are re-derived from the new count.
///
/// [`Tenancy`]: crate::domain::Tenancy
#[derive(Clone, Debug)]
pub struct UpdateTotalCount {
    /// Raw form input to store as the desired row count.
    pub value: String,
}

impl Command<UpdateTotalCount> for Section {
    type Ok = ();

    fn execute(&mut self, cmd: UpdateTotalCount) -> Self::Ok {
        self.update(|entry| entry.total_count = Digits::new(&cmd.value));
        self.rederive(self.occupancy());
    }
}
