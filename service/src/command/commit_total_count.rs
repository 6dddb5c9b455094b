//! [`Command`] finalizing the desired row count of a [`Section`].

use common::Digits;

use crate::Section;

use super::Command;

/// [`Command`] finalizing the desired row count of the active [`Tenancy`]
/// once its editing is done (on blur of the form field).
///
/// A count left empty or below `1` is reset to `"1"`. Rows aren't re-derived:
/// they already reflect the last valid derivation.
///
/// [`Tenancy`]: crate::domain::Tenancy
#[derive(Clone, Copy, Debug)]
pub struct CommitTotalCount;

impl Command<CommitTotalCount> for Section {
    type Ok = ();

    fn execute(&mut self, _: CommitTotalCount) -> Self::Ok {
        self.update(|entry| {
            if entry.total_count.value() < 1 {
                entry.total_count = Digits::from(1);
            }
        });
    }
}
