//! [`Occupancy`] definitions.

use common::define_kind;

define_kind! {
    #[doc = "Occupancy of a property section."]
    enum Occupancy {
        #[doc = "The whole section is occupied by its owner as a residence."]
        Residence = 1,

        #[doc = "The whole section is let out to tenants."]
        Rent = 2,

        #[doc = "Mixed: tenanted rows plus a single owner-occupied row."]
        Both = 3,

        #[doc = "The whole section is used directly by its owner's \
                 business."]
        SelfUse = 4,
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use super::Occupancy;

    #[test]
    fn round_trips_through_text() {
        for occupancy in [
            Occupancy::Residence,
            Occupancy::Rent,
            Occupancy::Both,
            Occupancy::SelfUse,
        ] {
            assert_eq!(
                Occupancy::from_str(&occupancy.to_string()).unwrap(),
                occupancy,
            );
        }
        assert_eq!(Occupancy::SelfUse.to_string(), "SELF_USE");
    }
}
