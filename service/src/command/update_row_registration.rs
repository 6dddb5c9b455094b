//! [`Command`] for editing the business registration of a single row of a
//! [`Section`].

use crate::{
    domain::lease::{self, Registration},
    Section,
};

use super::Command;

/// [`Command`] for editing the business registration number of a single row
/// of the active [`Tenancy`].
///
/// Rows of a residential section carry no registration field, so there the
/// command is a no-op.
///
/// [`Tenancy`]: crate::domain::Tenancy
#[derive(Clone, Debug)]
pub struct UpdateRowRegistration {
    /// Position of the row to edit.
    pub row: lease::Num,

    /// Registration number to store on the row.
    pub value: String,
}

impl Command<UpdateRowRegistration> for Section {
    type Ok = ();

    fn execute(&mut self, cmd: UpdateRowRegistration) -> Self::Ok {
        self.update_row(cmd.row, |row| {
            if let Some(registration) = &mut row.registration {
                *registration = Registration::from(cmd.value);
            }
        });
    }
}

#[cfg(test)]
mod spec {
    use crate::{
        command::UpdateRowRegistration,
        domain::{section, Occupancy},
        Command as _, Section,
    };

    #[test]
    fn stores_free_form_input_on_commercial_rows() {
        let mut section =
            Section::new(section::Kind::Commercial, Occupancy::SelfUse);

        section.execute(UpdateRowRegistration {
            row: 1.into(),
            value: "220-81-62517".into(),
        });

        assert_eq!(
            section.tenancy().rows[0]
                .registration
                .as_ref()
                .unwrap()
                .as_str(),
            "220-81-62517",
        );
    }

    #[test]
    fn residential_rows_are_left_untouched() {
        let mut section =
            Section::new(section::Kind::Residential, Occupancy::Residence);

        section.execute(UpdateRowRegistration {
            row: 1.into(),
            value: "220-81-62517".into(),
        });

        assert!(section.tenancy().rows[0].registration.is_none());
    }
}
