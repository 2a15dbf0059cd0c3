use core::{cmp::Ordering, fmt, str::FromStr};

use alloc::string::String;

use crate::{data::DECIMAL_DIGITS, CepError};

/// Number of digits in a CEP.
pub const LEN: usize = 8;

/// Raw input accepted by [`Cep::normalize`]: either an integer or free-form text.
///
/// Any primitive integer and any string slice convert into a `CepInput`,
/// so the lookup functions can be called as `uf_from_cep(59064330)` or
/// `uf_from_cep("59064-330")`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CepInput<'a> {
    Number(i128),
    Text(&'a str),
}

macro_rules! number_input {
    ($($t:ty),*) => {$(
        impl From<$t> for CepInput<'_> {
            fn from(n: $t) -> Self {
                Self::Number(i128::from(n))
            }
        }
    )*};
}

number_input!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

// Anything beyond `i128` saturates, which is out of range either way.
macro_rules! wide_number_input {
    ($($t:ty),*) => {$(
        impl From<$t> for CepInput<'_> {
            fn from(n: $t) -> Self {
                Self::Number(i128::try_from(n).unwrap_or(i128::MAX))
            }
        }
    )*};
}

wide_number_input!(isize, usize, u128);

impl<'a> From<&'a str> for CepInput<'a> {
    fn from(s: &'a str) -> Self {
        Self::Text(s)
    }
}

impl<'a> From<&'a String> for CepInput<'a> {
    fn from(s: &'a String) -> Self {
        Self::Text(s)
    }
}

impl From<Cep> for CepInput<'_> {
    fn from(cep: Cep) -> Self {
        Self::Number(i128::from(cep.0))
    }
}

/// A normalized CEP: the value of exactly eight decimal digits.
///
/// Displays zero-padded (`01001000`); the alternate form (`{:#}`) adds the customary
/// hyphen (`01001-000`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cep(u32);

impl Cep {
    /// The largest value representable with eight digits.
    pub const MAX: u32 = 99_999_999;

    /// Returns `None` if `n` does not fit in eight digits.
    #[must_use]
    pub const fn new(n: u32) -> Option<Self> {
        if n <= Self::MAX {
            Some(Self(n))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Normalizes integer or textual input into a `Cep`.
    ///
    /// Integers are taken as their zero-padded eight digit form, so any value in
    /// `0..=99_999_999` is accepted and negative values are not.
    /// Text keeps only its decimal digits, in order; there must be exactly eight of them.
    /// Any Unicode decimal digit (general category Nd) counts, with its numeric value, so
    /// `"٠١٠٠١-٠٠٠"` and `"０１００１－０００"` normalize like `"01001-000"`. Other numeric
    /// characters such as superscripts are ignored.
    ///
    /// # Errors
    ///
    /// [`CepError::InvalidFormat`] if the input does not amount to exactly eight digits.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cepuf::Cep;
    /// assert_eq!(Cep::normalize("01001-000").unwrap().get(), 1_001_000);
    /// assert_eq!(Cep::normalize(1_001_000).unwrap().get(), 1_001_000);
    /// assert!(Cep::normalize("123").is_err());
    /// ```
    pub fn normalize<'a>(input: impl Into<CepInput<'a>>) -> Result<Self, CepError> {
        match input.into() {
            CepInput::Number(n) => u32::try_from(n)
                .ok()
                .and_then(Self::new)
                .ok_or(CepError::InvalidFormat),
            CepInput::Text(s) => Self::from_digits(s),
        }
    }

    fn from_digits(s: &str) -> Result<Self, CepError> {
        let mut n = 0u32;
        let mut len = 0;

        for d in s.chars().filter_map(decimal_value) {
            len += 1;
            if len > LEN {
                return Err(CepError::InvalidFormat);
            }
            n = n * 10 + d;
        }

        if len == LEN {
            Ok(Self(n))
        } else {
            Err(CepError::InvalidFormat)
        }
    }
}

/// The value of `c` if it is a Unicode decimal digit.
fn decimal_value(c: char) -> Option<u32> {
    if c.is_ascii() {
        return c.to_digit(10);
    }

    DECIMAL_DIGITS
        .binary_search_by(|range| {
            if range.contains(&c) {
                Ordering::Equal
            } else if c < *range.start() {
                Ordering::Greater
            } else {
                Ordering::Less
            }
        })
        .ok()
        .and_then(|i| DECIMAL_DIGITS.get(i))
        .map(|range| u32::from(c) - u32::from(*range.start()))
}

impl TryFrom<u32> for Cep {
    type Error = CepError;

    fn try_from(n: u32) -> Result<Self, Self::Error> {
        Self::new(n).ok_or(CepError::InvalidFormat)
    }
}

impl FromStr for Cep {
    type Err = CepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_digits(s)
    }
}

impl fmt::Display for Cep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{:05}-{:03}", self.0 / 1000, self.0 % 1000)
        } else {
            write!(f, "{:08}", self.0)
        }
    }
}
