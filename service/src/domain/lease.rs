//! Lease [`Row`] definitions.

use std::iter;

use common::{define_kind, Digits};
use derive_more::{AsRef, Display, From, Into};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{section, Occupancy};

/// One line item of a section's occupancy table: a tenant unit, a vacant
/// unit, or the owner-occupied unit.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Row {
    /// Position of this [`Row`] in its table.
    pub num: Num,

    /// [`Usage`] of this [`Row`]'s unit.
    pub usage: Usage,

    /// Deposit paid for this [`Row`]'s unit.
    ///
    /// Empty unless the row is [`Usage::Rented`].
    pub deposit: Digits,

    /// Monthly rent paid for this [`Row`]'s unit.
    ///
    /// Empty unless the row is [`Usage::Rented`].
    pub rent: Digits,

    /// [`Registration`] of the business in this [`Row`]'s unit.
    ///
    /// Present exactly on rows of a [`section::Kind::Commercial`] section.
    pub registration: Option<Registration>,
}

impl Row {
    /// Creates a new empty [`Row`] with the provided [`Usage`].
    fn new(num: usize, usage: Usage, kind: section::Kind) -> Self {
        Self {
            num: num.into(),
            usage,
            deposit: Digits::default(),
            rent: Digits::default(),
            registration: kind.is_commercial().then(Registration::default),
        }
    }
}

/// 1-based position of a [`Row`] within its table.
///
/// Positions are regenerated on every derivation, so they're not stable
/// identities: values survive a re-derivation positionally only.
#[derive(Clone, Copy, Debug, Display, Eq, From, Hash, Into, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Deserialize, Serialize),
    serde(transparent)
)]
pub struct Num(usize);

/// Business registration number of a unit in a commercial section.
///
/// Free-form text: registration numbers are codes, not amounts, so no digit
/// sanitization applies to them.
#[derive(AsRef, Clone, Debug, Default, Display, Eq, From, Into, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Deserialize, Serialize),
    serde(transparent)
)]
#[as_ref(forward)]
pub struct Registration(String);

impl Registration {
    /// Returns this [`Registration`] number as a [`str`] slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

define_kind! {
    #[doc = "Usage of a [`Row`]'s unit."]
    enum Usage {
        #[doc = "Occupied by the owner as a residence."]
        Occupied = 1,

        #[doc = "Let out to a tenant."]
        Rented = 2,

        #[doc = "Not occupied at all."]
        Vacant = 3,

        #[doc = "Used directly by the owner's business."]
        DirectlyUsed = 4,
    }
}

/// Derives the [`Row`]s of a section's table from the desired row count,
/// the number of tenanted rows and the previously derived rows.
///
/// Pure and deterministic. `deposit`/`rent` values (and `registration`,
/// when present) of still-tenanted rows are carried over positionally from
/// `existing`; everything else is regenerated from scratch.
#[must_use]
pub fn derive(
    desired: usize,
    filled: usize,
    existing: &[Row],
    occupancy: Occupancy,
    kind: section::Kind,
) -> Vec<Row> {
    match occupancy {
        Occupancy::Residence | Occupancy::SelfUse => (1..=desired
            .max(filled)
            .max(1))
            .map(|num| Row::new(num, kind.owner_usage(), kind))
            .collect(),
        Occupancy::Rent => {
            rent_block(desired.max(filled).max(1), filled, existing, kind)
                .collect()
        }
        Occupancy::Both => {
            // One row is always reserved for the owner, placed last.
            let rented = desired.saturating_sub(1).max(filled);
            rent_block(rented, filled, existing, kind)
                .chain(iter::once(Row::new(
                    rented + 1,
                    kind.owner_usage(),
                    kind,
                )))
                .collect()
        }
    }
}

/// Generates `count` tenant rows: the first `filled` ones as
/// [`Usage::Rented`] with values carried over from `existing`, the rest as
/// empty [`Usage::Vacant`] ones.
fn rent_block(
    count: usize,
    filled: usize,
    existing: &[Row],
    kind: section::Kind,
) -> impl Iterator<Item = Row> + '_ {
    (0..count).map(move |i| {
        if i < filled {
            let src = existing.get(i);
            Row {
                num: (i + 1).into(),
                usage: Usage::Rented,
                deposit: src.map(|r| r.deposit.clone()).unwrap_or_default(),
                rent: src.map(|r| r.rent.clone()).unwrap_or_default(),
                registration: kind.is_commercial().then(|| {
                    src.and_then(|r| r.registration.clone())
                        .unwrap_or_default()
                }),
            }
        } else {
            Row::new(i + 1, Usage::Vacant, kind)
        }
    })
}
