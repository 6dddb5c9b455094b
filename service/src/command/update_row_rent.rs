//! [`Command`] for editing the rent of a single row of a [`Section`].

use common::Digits;

use crate::{domain::lease, Section};

use super::Command;

/// [`Command`] for editing the monthly rent of a single row of the active
/// [`Tenancy`].
///
/// The raw input is sanitized to digit-only text as typed.
///
/// [`Tenancy`]: crate::domain::Tenancy
#[derive(Clone, Debug)]
pub struct UpdateRowRent {
    /// Position of the row to edit.
    pub row: lease::Num,

    /// Raw form input to store as the row's rent.
    pub value: String,
}

impl Command<UpdateRowRent> for Section {
    type Ok = ();

    fn execute(&mut self, cmd: UpdateRowRent) -> Self::Ok {
        self.update_row(cmd.row, |row| row.rent = Digits::new(&cmd.value));
    }
}
