//! Section definitions.

use common::{define_kind, Digits};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;

use super::{lease, Occupancy};

define_kind! {
    #[doc = "Kind of a property section."]
    enum Kind {
        #[doc = "Residential part of a property."]
        Residential = 1,

        #[doc = "Commercial part of a property."]
        Commercial = 2,
    }
}

impl Kind {
    /// Returns the [`Occupancy`] values a section of this [`Kind`] supports.
    #[must_use]
    pub fn occupancies(self) -> [Occupancy; 3] {
        match self {
            Self::Residential => {
                [Occupancy::Residence, Occupancy::Rent, Occupancy::Both]
            }
            Self::Commercial => {
                [Occupancy::SelfUse, Occupancy::Rent, Occupancy::Both]
            }
        }
    }

    /// Indicates whether a section of this [`Kind`] supports the provided
    /// [`Occupancy`].
    #[must_use]
    pub fn supports(self, occupancy: Occupancy) -> bool {
        self.occupancies().contains(&occupancy)
    }

    /// Returns the owner-only [`Occupancy`] of this [`Kind`].
    #[must_use]
    pub fn owner_occupancy(self) -> Occupancy {
        match self {
            Self::Residential => Occupancy::Residence,
            Self::Commercial => Occupancy::SelfUse,
        }
    }

    /// Returns the [`lease::Usage`] of an owner-occupied row in a section of
    /// this [`Kind`].
    #[must_use]
    pub fn owner_usage(self) -> lease::Usage {
        match self {
            Self::Residential => lease::Usage::Occupied,
            Self::Commercial => lease::Usage::DirectlyUsed,
        }
    }

    /// Indicates whether this is a [`Kind::Commercial`] section.
    #[must_use]
    pub fn is_commercial(self) -> bool {
        self == Self::Commercial
    }
}

/// Details of a section under one [`Occupancy`].
#[derive(Clone, Debug, Eq, PartialEq, SmartDefault)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Tenancy {
    /// Desired number of [`lease::Row`]s, as typed into the form.
    #[default(Digits::from(1))]
    pub total_count: Digits,

    /// Number of tenanted [`lease::Row`]s, as typed into the form.
    #[default(Digits::from(0))]
    pub tenant_count: Digits,

    /// [`lease::Row`]s of the section under this [`Occupancy`].
    pub rows: Vec<lease::Row>,
}

impl Tenancy {
    /// Creates a new [`Tenancy`] with the default counts and the single row
    /// derived for the provided [`Occupancy`].
    #[must_use]
    pub fn new(occupancy: Occupancy, kind: Kind) -> Self {
        let counts = Self::default();
        Self {
            rows: lease::derive(
                counts.total_count.value(),
                counts.tenant_count.value(),
                &[],
                occupancy,
                kind,
            ),
            ..counts
        }
    }
}
