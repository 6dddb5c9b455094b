//! [`Command`] for editing the tenanted row count of a [`Section`].

use common::Digits;

use crate::Section;

use super::Command;

/// [`Command`] for editing the tenanted row count of the active [`Tenancy`].
///
/// The raw input is sanitized to digit-only text as typed (empty or invalid
/// input counts as `0`), and the rows of the active occupancy are re-derived
/// from the new count.
///
/// [`Tenancy`]: crate::domain::Tenancy
#[derive(Clone, Debug)]
pub struct UpdateTenantCount {
    /// Raw form input to store as the tenanted row count.
    pub value: String,
}

impl Command<UpdateTenantCount> for Section {
    type Ok = ();

    fn execute(&mut self, cmd: UpdateTenantCount) -> Self::Ok {
        self.update(|entry| entry.tenant_count = Digits::new(&cmd.value));
        self.rederive(self.occupancy());
    }
}
