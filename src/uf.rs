use core::{fmt, str::FromStr};

use thiserror::Error;

/// A Brazilian federative unit (UF): one of the 26 states or the Federal District.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Uf {
    AC,
    AL,
    AM,
    AP,
    BA,
    CE,
    DF,
    ES,
    GO,
    MA,
    MG,
    MS,
    MT,
    PA,
    PB,
    PE,
    PI,
    PR,
    RJ,
    RN,
    RO,
    RR,
    RS,
    SC,
    SE,
    SP,
    TO,
}

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
#[error("not a federative unit abbreviation")]
pub struct ParseUfError;

impl Uf {
    /// Every federative unit, ordered by abbreviation.
    pub const ALL: [Self; 27] = [
        Self::AC,
        Self::AL,
        Self::AM,
        Self::AP,
        Self::BA,
        Self::CE,
        Self::DF,
        Self::ES,
        Self::GO,
        Self::MA,
        Self::MG,
        Self::MS,
        Self::MT,
        Self::PA,
        Self::PB,
        Self::PE,
        Self::PI,
        Self::PR,
        Self::RJ,
        Self::RN,
        Self::RO,
        Self::RR,
        Self::RS,
        Self::SC,
        Self::SE,
        Self::SP,
        Self::TO,
    ];

    /// The two-letter abbreviation, e.g. `"SP"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AC => "AC",
            Self::AL => "AL",
            Self::AM => "AM",
            Self::AP => "AP",
            Self::BA => "BA",
            Self::CE => "CE",
            Self::DF => "DF",
            Self::ES => "ES",
            Self::GO => "GO",
            Self::MA => "MA",
            Self::MG => "MG",
            Self::MS => "MS",
            Self::MT => "MT",
            Self::PA => "PA",
            Self::PB => "PB",
            Self::PE => "PE",
            Self::PI => "PI",
            Self::PR => "PR",
            Self::RJ => "RJ",
            Self::RN => "RN",
            Self::RO => "RO",
            Self::RR => "RR",
            Self::RS => "RS",
            Self::SC => "SC",
            Self::SE => "SE",
            Self::SP => "SP",
            Self::TO => "TO",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AC => "Acre",
            Self::AL => "Alagoas",
            Self::AM => "Amazonas",
            Self::AP => "Amapá",
            Self::BA => "Bahia",
            Self::CE => "Ceará",
            Self::DF => "Distrito Federal",
            Self::ES => "Espírito Santo",
            Self::GO => "Goiás",
            Self::MA => "Maranhão",
            Self::MG => "Minas Gerais",
            Self::MS => "Mato Grosso do Sul",
            Self::MT => "Mato Grosso",
            Self::PA => "Pará",
            Self::PB => "Paraíba",
            Self::PE => "Pernambuco",
            Self::PI => "Piauí",
            Self::PR => "Paraná",
            Self::RJ => "Rio de Janeiro",
            Self::RN => "Rio Grande do Norte",
            Self::RO => "Rondônia",
            Self::RR => "Roraima",
            Self::RS => "Rio Grande do Sul",
            Self::SC => "Santa Catarina",
            Self::SE => "Sergipe",
            Self::SP => "São Paulo",
            Self::TO => "Tocantins",
        }
    }
}

impl FromStr for Uf {
    type Err = ParseUfError;

    /// Parses a two-letter abbreviation, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|uf| uf.as_str().eq_ignore_ascii_case(s))
            .ok_or(ParseUfError)
    }
}

impl fmt::Display for Uf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(ugly_hack)]
impl Uf {
    /// Finds the federative unit whose CEP range contains `cep`.
    ///
    /// `cep` is the numeric value of an 8-digit CEP. Both ends of every range are inclusive.
    /// Values below the first range, above the last one or inside a gap yield `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cepuf::Uf;
    /// assert_eq!(Uf::of(59_064_330), Some(Uf::RN));
    /// assert_eq!(Uf::of(999_999), None);
    /// ```
    #[must_use]
    pub fn of(cep: u32) -> Option<Self> {
        use crate::data::CEP_RANGES;

        // upper_bound(cep) - 1
        let i = CEP_RANGES
            .partition_point(|(range, _)| *range.start() <= cep)
            .checked_sub(1)?;

        // SAFETY: `i` is strictly less than the partition point, which is at most `CEP_RANGES.len()`.
        let (range, uf) = unwrap!(CEP_RANGES.get(i));
        range.contains(&cep).then_some(*uf)
    }
}

#[cfg(all(ugly_hack, test))]
mod test {
    extern crate std;

    use rstest::rstest;

    use super::*;

    #[test]
    fn all_is_sorted() {
        assert!(Uf::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn from_str_round_trips_every_unit() {
        for uf in Uf::ALL {
            assert_eq!(uf.as_str().parse(), Ok(uf));
        }
    }

    #[rstest]
    #[case::lowercase("sp", Ok(Uf::SP))]
    #[case::mixed("Rj", Ok(Uf::RJ))]
    #[case::unknown("XX", Err(ParseUfError))]
    #[case::empty("", Err(ParseUfError))]
    #[case::too_long("SPX", Err(ParseUfError))]
    fn from_str(#[case] input: &str, #[case] expected: Result<Uf, ParseUfError>) {
        assert_eq!(input.parse::<Uf>(), expected);
    }

    #[rstest]
    #[case::zero(0, None)]
    #[case::below_first(999_999, None)]
    #[case::first_start(1_000_000, Some(Uf::SP))]
    #[case::first_end(19_999_999, Some(Uf::SP))]
    #[case::second_start(20_000_000, Some(Uf::RJ))]
    #[case::roraima_inside_amazonas(69_350_000, Some(Uf::RR))]
    #[case::amazonas_after_roraima(69_400_000, Some(Uf::AM))]
    #[case::goias_merged(73_700_000, Some(Uf::GO))]
    #[case::rondonia_second_block(78_950_000, Some(Uf::RO))]
    #[case::last_end(99_999_999, Some(Uf::RS))]
    #[case::above_last(100_000_000, None)]
    #[case::max(u32::MAX, None)]
    fn of(#[case] cep: u32, #[case] expected: Option<Uf>) {
        assert_eq!(Uf::of(cep), expected);
    }
}
