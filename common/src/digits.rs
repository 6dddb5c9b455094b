//! [`Digits`]-related definitions.

use derive_more::{AsRef, Display};

/// Digit-only text of a numeric form field.
///
/// Keeps whatever the user has typed so far, with everything but ASCII digits
/// stripped out, so partial input (including the empty string) stays
/// representable while a field is being edited.
#[derive(AsRef, Clone, Debug, Default, Display, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(transparent)
)]
#[as_ref(forward)]
pub struct Digits(String);

impl Digits {
    /// Creates new [`Digits`] by stripping all non-digit characters out of
    /// the provided input.
    #[must_use]
    pub fn new(input: impl AsRef<str>) -> Self {
        Self(input.as_ref().chars().filter(char::is_ascii_digit).collect())
    }

    /// Returns the numeric value of this text.
    ///
    /// Empty text is coerced to `0`, while text overflowing [`usize`] range
    /// saturates at [`usize::MAX`].
    #[must_use]
    pub fn value(&self) -> usize {
        self.0.parse().unwrap_or_else(|_| {
            if self.0.is_empty() {
                0
            } else {
                usize::MAX
            }
        })
    }

    /// Returns this text as a [`str`] slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Indicates whether this text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<usize> for Digits {
    fn from(value: usize) -> Self {
        Self(value.to_string())
    }
}

#[cfg(test)]
mod spec {
    use super::Digits;

    #[test]
    fn strips_non_digit_characters() {
        assert_eq!(Digits::new("1a2b3").as_str(), "123");
        assert_eq!(Digits::new(" 50,000 ").as_str(), "50000");
        assert_eq!(Digits::new("abc").as_str(), "");
        assert_eq!(Digits::new("007").as_str(), "007");
    }

    #[test]
    fn value_of_empty_text_is_zero() {
        assert_eq!(Digits::new("").value(), 0);
        assert_eq!(Digits::new("-.,").value(), 0);
    }

    #[test]
    fn value_parses_stored_text() {
        assert_eq!(Digits::new("42").value(), 42);
        assert_eq!(Digits::new("007").value(), 7);
        assert_eq!(Digits::from(15).value(), 15);
    }

    #[test]
    fn overlong_value_saturates_instead_of_collapsing() {
        let overlong = Digits::new("99999999999999999999999999");
        assert!(!overlong.is_empty());
        assert_eq!(overlong.value(), usize::MAX);
    }

    #[test]
    fn keeps_leading_zeros_as_typed() {
        let typed = Digits::new("00");
        assert!(!typed.is_empty());
        assert_eq!(typed.value(), 0);
    }
}
