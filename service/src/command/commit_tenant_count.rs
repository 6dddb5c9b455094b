//! [`Command`] finalizing the tenanted row count of a [`Section`].

use common::Digits;

use crate::Section;

use super::Command;

/// [`Command`] finalizing the tenanted row count of the active [`Tenancy`]
/// once its editing is done (on blur of the form field).
///
/// A count left empty is reset to `"0"`. Rows aren't re-derived: they
/// already reflect the last valid derivation.
///
/// [`Tenancy`]: crate::domain::Tenancy
#[derive(Clone, Copy, Debug)]
pub struct CommitTenantCount;

impl Command<CommitTenantCount> for Section {
    type Ok = ();

    fn execute(&mut self, _: CommitTenantCount) -> Self::Ok {
        self.update(|entry| {
            if entry.tenant_count.is_empty() {
                entry.tenant_count = Digits::from(0);
            }
        });
    }
}
