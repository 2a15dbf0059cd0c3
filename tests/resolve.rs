use rstest::rstest;

use cepuf::{try_uf_from_cep, uf_from_cep, Cep, CepError, Uf, UNKNOWN};

#[rstest]
#[case::natal_number(59064330, "RN")]
#[case::sao_paulo_padded_number(1001000, "SP")]
#[case::brasilia(70040010, "DF")]
#[case::below_first_range(999999, UNKNOWN)]
#[case::nine_digits(100000000, UNKNOWN)]
fn number(#[case] input: u32, #[case] expected: &str) {
    assert_eq!(uf_from_cep(input), expected);
}

#[rstest]
#[case::sao_paulo("01001-000", "SP")]
#[case::acre("69900-000", "AC")]
#[case::santa_catarina("88000000", "SC")]
#[case::porto_alegre("90010-320", "RS")]
#[case::rio("20040-002", "RJ")]
#[case::manaus("69005-070", "AM")]
#[case::boa_vista("69301-000", "RR")]
#[case::macapa("68900-073", "AP")]
#[case::porto_velho("76801-000", "RO")]
#[case::vilhena("78995-000", "RO")]
#[case::cuiaba("78005-000", "MT")]
#[case::goiania("74000-000", "GO")]
#[case::entorno("72800-000", "GO")]
#[case::too_short("123", UNKNOWN)]
#[case::too_long("010010000", UNKNOWN)]
#[case::garbage("cep", UNKNOWN)]
#[case::arabic_indic("٠١٠٠١-٠٠٠", "SP")]
#[case::fullwidth("０１００１－０００", "SP")]
#[case::fullwidth_natal("５９０６４３３０", "RN")]
#[case::superscripts("⁵⁹⁰⁶⁴³³⁰", UNKNOWN)]
fn text(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(uf_from_cep(input), expected);
}

#[test]
fn literal_integer_input() {
    assert_eq!(uf_from_cep(59064330), "RN");
    assert_eq!(uf_from_cep(-59064330), UNKNOWN);
}

#[test]
fn owned_string_input() {
    let cep = String::from("88000-000");
    assert_eq!(uf_from_cep(&cep), "SC");
}

#[rstest]
#[case::found("59064-330", Ok(Uf::RN))]
#[case::malformed("5906433", Err(CepError::InvalidFormat))]
#[case::unassigned("00999-999", Err(CepError::NotFound(Cep::new(999_999).unwrap())))]
fn strict(#[case] input: &str, #[case] expected: Result<Uf, CepError>) {
    assert_eq!(try_uf_from_cep(input), expected);
}

#[rstest]
#[case::found(59_064_330, Ok(Uf::RN))]
#[case::negative(-1, Err(CepError::InvalidFormat))]
#[case::nine_digits(100_000_000, Err(CepError::InvalidFormat))]
#[case::unassigned(999_999, Err(CepError::NotFound(Cep::new(999_999).unwrap())))]
#[case::zero(0, Err(CepError::NotFound(Cep::new(0).unwrap())))]
fn strict_number(#[case] input: i64, #[case] expected: Result<Uf, CepError>) {
    assert_eq!(try_uf_from_cep(input), expected);
}

#[test]
fn wide_integer_input() {
    assert_eq!(uf_from_cep(59_064_330_usize), "RN");
    assert_eq!(uf_from_cep(59_064_330_u128), "RN");
    assert_eq!(uf_from_cep(u128::MAX), UNKNOWN);
    assert_eq!(try_uf_from_cep(i128::MIN), Err(CepError::InvalidFormat));
}

#[test]
fn strict_unicode_digits() {
    assert_eq!(try_uf_from_cep("٦٩٩٠٠-٠٠٠"), Ok(Uf::AC));
    assert_eq!(try_uf_from_cep("８８０００－０００"), Ok(Uf::SC));
}

/// Both lookup modes must agree on every input.
#[rstest]
#[case("01001-000")]
#[case("00000-000")]
#[case("123")]
#[case("")]
#[case("99999-999")]
#[case("1234567890")]
fn strict_agrees_with_permissive(#[case] input: &str) {
    let strict = try_uf_from_cep(input).map_or(UNKNOWN, Uf::as_str);
    assert_eq!(strict, uf_from_cep(input));
}

#[test]
fn strict_errors_display() {
    let err = try_uf_from_cep("00000-001").unwrap_err();
    assert_eq!(
        err.to_string(),
        "CEP 00000-001 is not assigned to any federative unit"
    );
}

#[test]
fn lookup_is_thread_safe() {
    let handles = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                (0..10_000u32)
                    .map(|n| uf_from_cep(n * 9_999 + i))
                    .filter(|uf| *uf != UNKNOWN)
                    .count()
            })
        })
        .collect::<Vec<_>>();

    for handle in handles {
        assert!(handle.join().unwrap() > 0);
    }
}
