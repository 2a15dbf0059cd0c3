//! Maps Brazilian postal codes (CEP) to their federative unit (UF).
//!
//! The table of CEP ranges lives in `CepRanges.txt` and is compiled into the crate by the
//! build script. Lookups are a binary search over that table and never allocate.
//!
//! ```
//! assert_eq!(cepuf::uf_from_cep(59064330), "RN");
//! assert_eq!(cepuf::uf_from_cep("01001-000"), "SP");
//! assert_eq!(cepuf::uf_from_cep("123"), cepuf::UNKNOWN);
//! ```

#![no_std]
#![cfg_attr(feature = "forbid-unsafe", forbid(unsafe_code))]
#![warn(clippy::undocumented_unsafe_blocks, clippy::pedantic, clippy::nursery)]

extern crate alloc;

use core::ops::RangeInclusive;

use thiserror::Error;

pub(crate) mod data {
    include!(concat!(env!("OUT_DIR"), "/data.rs"));
}

/// Returned by [`uf_from_cep`] when the input is malformed or falls outside every range.
pub const UNKNOWN: &str = "XX";

macro_rules! unwrap {
    ($opt:expr) => {{
        #[cfg(feature = "forbid-unsafe")]
        {
            $opt.unwrap()
        }
        #[cfg(not(feature = "forbid-unsafe"))]
        #[allow(unused_unsafe, reason = "may be encased in an existing unsafe block")]
        {
            // SAFETY: Caller must verify this is safe.
            unsafe { $opt.unwrap_unchecked() }
        }
    }};
}
pub(crate) use unwrap;

mod cep;
pub use cep::{Cep, CepInput, LEN};

mod uf;
pub use uf::{ParseUfError, Uf};

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum CepError {
    #[error("a CEP must have exactly 8 digits")]
    InvalidFormat,
    #[error("CEP {0:#} is not assigned to any federative unit")]
    NotFound(Cep),
}

/// Normalizes `input`, returning `None` for anything that is not exactly eight digits.
///
/// See [`Cep::normalize`] for the rules.
#[must_use]
pub fn normalize<'a>(input: impl Into<CepInput<'a>>) -> Option<Cep> {
    Cep::normalize(input).ok()
}

/// Resolves a normalized CEP to its UF abbreviation, or [`UNKNOWN`].
#[must_use]
pub fn resolve(cep: Option<Cep>) -> &'static str {
    cep.and_then(|cep| Uf::of(cep.get()))
        .map_or(UNKNOWN, Uf::as_str)
}

/// Returns the UF abbreviation owning `cep`, or [`UNKNOWN`] (`"XX"`).
///
/// This never fails: malformed input and unassigned codes both yield `"XX"`.
/// Use [`try_uf_from_cep`] to tell the two apart.
#[must_use]
pub fn uf_from_cep<'a>(cep: impl Into<CepInput<'a>>) -> &'static str {
    resolve(normalize(cep))
}

/// Strict variant of [`uf_from_cep`].
///
/// # Errors
///
/// - [`CepError::InvalidFormat`] if `cep` does not normalize to eight digits.
/// - [`CepError::NotFound`] if no range contains it.
///
/// # Examples
///
/// ```
/// # use cepuf::{try_uf_from_cep, Cep, CepError, Uf};
/// assert_eq!(try_uf_from_cep("88000-000"), Ok(Uf::SC));
/// assert_eq!(try_uf_from_cep("0100-100"), Err(CepError::InvalidFormat));
/// assert_eq!(
///     try_uf_from_cep("00000-001"),
///     Err(CepError::NotFound(Cep::new(1).unwrap()))
/// );
/// ```
pub fn try_uf_from_cep<'a>(cep: impl Into<CepInput<'a>>) -> Result<Uf, CepError> {
    let cep = Cep::normalize(cep)?;
    Uf::of(cep.get()).ok_or(CepError::NotFound(cep))
}

/// The compiled CEP ranges, sorted ascending and pairwise disjoint.
///
/// Adjacent rows of `CepRanges.txt` with the same UF are merged into one range.
#[must_use]
pub const fn ranges() -> &'static [(RangeInclusive<u32>, Uf)] {
    data::CEP_RANGES
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::ToString;

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::natal(59_064_330, "RN")]
    #[case::too_big(123_456_789, UNKNOWN)]
    #[case::negative(-1, UNKNOWN)]
    #[case::below_first_range(999_999, UNKNOWN)]
    fn test_uf_from_number(#[case] input: i64, #[case] expected: &str) {
        assert_eq!(uf_from_cep(input), expected);
    }

    #[rstest]
    #[case::sao_paulo("01001-000", "SP")]
    #[case::acre("69900-000", "AC")]
    #[case::santa_catarina("88000000", "SC")]
    #[case::porto_alegre("90010-320", "RS")]
    #[case::too_short("123", UNKNOWN)]
    #[case::empty("", UNKNOWN)]
    #[case::leading_zeros_only("00000000", UNKNOWN)]
    fn test_uf_from_text(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(uf_from_cep(input), expected);
    }

    #[test]
    fn resolve_invalid_marker() {
        assert_eq!(resolve(None), UNKNOWN);
        assert_eq!(resolve(normalize("not a cep")), UNKNOWN);
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            CepError::InvalidFormat.to_string(),
            "a CEP must have exactly 8 digits"
        );
        assert_eq!(
            CepError::NotFound(Cep::new(999).unwrap()).to_string(),
            "CEP 00000-999 is not assigned to any federative unit"
        );
    }

    #[test]
    fn ranges_are_merged() {
        assert_eq!(ranges().len(), 29);
        assert_eq!(
            ranges().iter().filter(|(_, uf)| *uf == Uf::GO).count(),
            1
        );
    }
}
