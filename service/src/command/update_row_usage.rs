//! [`Command`] for relabeling a single row of a [`Section`].

use common::Digits;

use crate::{
    domain::lease::{self, Usage},
    Section,
};

use super::Command;

/// [`Command`] for relabeling a single row of the active [`Tenancy`].
///
/// Any usage other than [`Usage::Rented`] forces the row's deposit and rent
/// empty: only tenanted rows keep financial data. Other rows are untouched
/// and no re-derivation happens.
///
/// [`Tenancy`]: crate::domain::Tenancy
#[derive(Clone, Copy, Debug)]
pub struct UpdateRowUsage {
    /// Position of the row to relabel.
    pub row: lease::Num,

    /// New [`Usage`] of the row.
    pub usage: Usage,
}

impl Command<UpdateRowUsage> for Section {
    type Ok = ();

    fn execute(&mut self, cmd: UpdateRowUsage) -> Self::Ok {
        self.update_row(cmd.row, |row| {
            row.usage = cmd.usage;
            if cmd.usage != Usage::Rented {
                row.deposit = Digits::default();
                row.rent = Digits::default();
            }
        });
    }
}
