//! [`Command`] for editing the deposit of a single row of a [`Section`].

use common::Digits;

use crate::{domain::lease, Section};

use super::Command;

/// [`Command`] for editing the deposit of a single row of the active
/// [`Tenancy`].
///
/// The raw input is sanitized to digit-only text as typed.
///
/// [`Tenancy`]: crate::domain::Tenancy
#[derive(Clone, Debug)]
pub struct UpdateRowDeposit {
    /// Position of the row to edit.
    pub row: lease::Num,

    /// Raw form input to store as the row's deposit.
    pub value: String,
}

impl Command<UpdateRowDeposit> for Section {
    type Ok = ();

    fn execute(&mut self, cmd: UpdateRowDeposit) -> Self::Ok {
        self.update_row(cmd.row, |row| row.deposit = Digits::new(&cmd.value));
    }
}
