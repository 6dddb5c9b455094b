//! Occupancy state model of a collateral property's sections.
//!
//! List of available Cargo features:
#![doc = document_features::document_features!()]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;

use std::collections::HashMap;

use tracing as log;

use crate::domain::{lease, section, Occupancy, Tenancy};

pub use self::command::Command;

/// State of one property section's occupancy table.
///
/// Keeps an independent [`Tenancy`] per [`Occupancy`] the section's
/// [`section::Kind`] supports: switching the active occupancy is a view
/// selection over those parallel entries, never a destructive toggle.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize)
)]
pub struct Section {
    /// [`section::Kind`] of this [`Section`].
    kind: section::Kind,

    /// Currently active [`Occupancy`] of this [`Section`].
    occupancy: Occupancy,

    /// [`Tenancy`] entries of this [`Section`], one per supported
    /// [`Occupancy`] at all times.
    record: HashMap<Occupancy, Tenancy>,
}

impl Section {
    /// Creates a new [`Section`] of the provided [`section::Kind`].
    ///
    /// An `initial` occupancy the kind doesn't support is coerced to the
    /// kind's owner-only occupancy.
    #[must_use]
    pub fn new(kind: section::Kind, initial: Occupancy) -> Self {
        let occupancy = if kind.supports(initial) {
            initial
        } else {
            kind.owner_occupancy()
        };
        let record = kind
            .occupancies()
            .into_iter()
            .map(|o| (o, Tenancy::new(o, kind)))
            .collect();

        Self {
            kind,
            occupancy,
            record,
        }
    }

    /// Returns [`section::Kind`] of this [`Section`].
    #[must_use]
    pub fn kind(&self) -> section::Kind {
        self.kind
    }

    /// Returns the currently active [`Occupancy`] of this [`Section`].
    #[must_use]
    pub fn occupancy(&self) -> Occupancy {
        self.occupancy
    }

    /// Returns the [`Tenancy`] of the currently active [`Occupancy`].
    #[must_use]
    pub fn tenancy(&self) -> &Tenancy {
        // Every supported `Occupancy` has an entry at all times.
        &self.record[&self.occupancy]
    }

    /// Returns the [`Tenancy`] of the provided [`Occupancy`], if this
    /// [`Section`]'s kind supports it.
    #[must_use]
    pub fn get(&self, occupancy: Occupancy) -> Option<&Tenancy> {
        self.record.get(&occupancy)
    }

    /// Re-derives rows of the provided [`Occupancy`] from its stored counts,
    /// replacing only that entry of the record.
    fn rederive(&mut self, occupancy: Occupancy) {
        let entry = &self.record[&occupancy];
        let rows = lease::derive(
            entry.total_count.value(),
            entry.tenant_count.value(),
            &entry.rows,
            occupancy,
            self.kind,
        );
        log::debug!(%occupancy, rows = rows.len(), "rows re-derived");

        let next = Tenancy {
            rows,
            ..entry.clone()
        };
        _ = self.record.insert(occupancy, next);
    }

    /// Replaces the active entry of the record with a copy updated by the
    /// provided function.
    fn update(&mut self, f: impl FnOnce(&mut Tenancy)) {
        let mut entry = self.record[&self.occupancy].clone();
        f(&mut entry);
        _ = self.record.insert(self.occupancy, entry);
    }

    /// Updates the row on the provided position in the active entry, if such
    /// a row exists.
    fn update_row(
        &mut self,
        num: lease::Num,
        f: impl FnOnce(&mut lease::Row),
    ) {
        self.update(|entry| {
            if let Some(row) = entry.rows.iter_mut().find(|r| r.num == num) {
                f(row);
            }
        });
    }
}

#[cfg(test)]
mod spec {
    use crate::domain::{lease::Usage, section, Occupancy};

    use super::Section;

    #[test]
    fn starts_with_entry_per_supported_occupancy() {
        let section =
            Section::new(section::Kind::Residential, Occupancy::Residence);

        assert_eq!(section.occupancy(), Occupancy::Residence);
        for occupancy in
            [Occupancy::Residence, Occupancy::Rent, Occupancy::Both]
        {
            let tenancy = section.get(occupancy).unwrap();
            assert_eq!(tenancy.total_count.as_str(), "1");
            assert_eq!(tenancy.tenant_count.as_str(), "0");
            assert_eq!(tenancy.rows.len(), 1);
        }
        assert!(section.get(Occupancy::SelfUse).is_none());
    }

    #[test]
    fn initial_rows_match_their_occupancy() {
        let section = Section::new(section::Kind::Commercial, Occupancy::Rent);

        assert_eq!(section.tenancy().rows[0].usage, Usage::Vacant);
        assert_eq!(
            section.get(Occupancy::SelfUse).unwrap().rows[0].usage,
            Usage::DirectlyUsed,
        );
        assert_eq!(
            section.get(Occupancy::Both).unwrap().rows[0].usage,
            Usage::DirectlyUsed,
        );
    }

    #[test]
    fn unsupported_initial_occupancy_is_coerced() {
        let section =
            Section::new(section::Kind::Commercial, Occupancy::Residence);
        assert_eq!(section.occupancy(), Occupancy::SelfUse);

        let section =
            Section::new(section::Kind::Residential, Occupancy::SelfUse);
        assert_eq!(section.occupancy(), Occupancy::Residence);
    }

    #[test]
    fn only_commercial_rows_carry_registration_field() {
        let section =
            Section::new(section::Kind::Commercial, Occupancy::SelfUse);
        assert!(section.tenancy().rows[0].registration.is_some());

        let section =
            Section::new(section::Kind::Residential, Occupancy::Residence);
        assert!(section.tenancy().rows[0].registration.is_none());
    }
}
