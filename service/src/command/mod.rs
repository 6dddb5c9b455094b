//! [`Command`] definitions.

pub mod commit_tenant_count;
pub mod commit_total_count;
pub mod switch_occupancy;
pub mod update_row_deposit;
pub mod update_row_registration;
pub mod update_row_rent;
pub mod update_row_usage;
pub mod update_tenant_count;
pub mod update_total_count;

/// [`Command`] mutating a [`Section`].
///
/// [`Section`]: crate::Section
pub use common::Handler as Command;

pub use self::{
    commit_tenant_count::CommitTenantCount,
    commit_total_count::CommitTotalCount, switch_occupancy::SwitchOccupancy,
    update_row_deposit::UpdateRowDeposit,
    update_row_registration::UpdateRowRegistration,
    update_row_rent::UpdateRowRent, update_row_usage::UpdateRowUsage,
    update_tenant_count::UpdateTenantCount,
    update_total_count::UpdateTotalCount,
};
