use std::{
    env,
    fs::File,
    io::{self, BufRead, Write},
    str::FromStr,
};

use prettyplease::unparse;
use proc_macro2::TokenStream;
use quote::{format_ident, quote, ToTokens};
use syn::parse_quote;

#[path = "src/uf.rs"]
#[allow(dead_code)]
mod uf;
use uf::Uf;

const TABLE: &str = "CepRanges.txt";
const DIGITS: &str = "DecimalDigits.txt";
const CEP_LEN: usize = 8;

impl ToTokens for Uf {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let variant = format_ident!("{}", self.as_str());
        tokens.extend(quote!(Uf::#variant));
    }
}

#[derive(Debug)]
struct CepRange {
    start: u32,
    end: u32,
    uf: Uf,
    line: usize,
}

fn parse_cep(s: &str, line: usize) -> u32 {
    assert!(
        s.len() == CEP_LEN && s.bytes().all(|b| b.is_ascii_digit()),
        "{TABLE}:{line}: '{s}' is not an {CEP_LEN}-digit CEP"
    );
    s.parse().unwrap()
}

fn read_line(n: usize, line: &str) -> CepRange {
    let line = line.split_once('#').map_or(line, |(data, _)| data);
    let mut iter = line.split(';').map(str::trim);

    let range = iter.next().unwrap();
    let (start, end) = range.split_once("..").unwrap_or((range, range));
    let (start, end) = (parse_cep(start, n), parse_cep(end, n));
    assert!(start <= end, "{TABLE}:{n}: range {start}..{end} is reversed");

    let uf = iter
        .next()
        .and_then(|x| Uf::from_str(x).ok())
        .unwrap_or_else(|| panic!("{TABLE}:{n}: missing or unknown UF"));

    CepRange {
        start,
        end,
        uf,
        line: n,
    }
}

fn merge_ranges(ranges: Vec<CepRange>) -> Vec<CepRange> {
    let mut merged: Vec<CepRange> = Vec::new();

    for range in ranges {
        if let Some(last) = merged.last_mut() {
            assert!(
                last.end < range.start,
                "{TABLE}:{}: range overlaps or precedes line {}",
                range.line,
                last.line
            );

            if adjacent(last, &range) {
                last.end = range.end;
                continue;
            }

            if last.end + 1 != range.start {
                println!(
                    "cargo:warning=gap in CEP ranges: {:08}..={:08} resolves to no UF",
                    last.end + 1,
                    range.start - 1
                );
            }
        }
        merged.push(range);
    }

    merged
}

fn adjacent(a: &CepRange, b: &CepRange) -> bool {
    a.uf == b.uf && a.end + 1 == b.start
}

fn read_digit_zero(n: usize, line: &str) -> (char, char) {
    let line = line.split_once('#').map_or(line, |(data, _)| data);
    let zero = line.split(';').map(str::trim).next().unwrap();

    let a = u32::from_str_radix(zero, 16)
        .unwrap_or_else(|e| panic!("{DIGITS}:{n}: '{zero}' is not a code point: {e}"));
    let start = char::from_u32(a);
    let end = char::from_u32(a + 9);

    start
        .zip(end)
        .unwrap_or_else(|| panic!("{DIGITS}:{n}: {a:X}..={:X} is not a run of chars", a + 9))
}

fn generate_digits() -> Vec<(char, char)> {
    let file = File::open(DIGITS).unwrap_or_else(|e| panic!("failed to open {DIGITS}: {e}"));
    let reader = io::BufReader::new(file);

    let runs = reader
        .lines()
        .enumerate()
        .map(|(n, x)| (n + 1, x.unwrap().trim().to_string()))
        .filter(|(_, x)| !x.is_empty() && !x.starts_with('#'))
        .map(|(n, x)| read_digit_zero(n, &x))
        .collect::<Vec<_>>();

    assert!(
        runs.first().is_some_and(|(zero, _)| *zero == '0'),
        "{DIGITS} must start with the ASCII digits"
    );
    for pair in runs.windows(2) {
        assert!(
            pair[0].1 < pair[1].0,
            "{DIGITS}: run starting at {:X} overlaps or precedes {:X}",
            pair[1].0 as u32,
            pair[0].0 as u32
        );
    }

    runs
}

fn generate_data() -> impl Iterator<Item = CepRange> {
    let file = File::open(TABLE).unwrap_or_else(|e| panic!("failed to open {TABLE}: {e}"));
    let reader = io::BufReader::new(file);

    let ranges = reader
        .lines()
        .enumerate()
        .map(|(n, x)| (n + 1, x.unwrap().trim().to_string()))
        .filter(|(_, x)| !x.is_empty() && !x.starts_with('#'))
        .map(|(n, x)| read_line(n, &x))
        .collect::<Vec<_>>();

    assert!(!ranges.is_empty(), "{TABLE} has no ranges");

    merge_ranges(ranges).into_iter()
}

fn main() {
    println!("cargo:rerun-if-changed={TABLE}");
    println!("cargo:rerun-if-changed={DIGITS}");
    println!("cargo:rerun-if-changed=src/uf.rs");
    println!("cargo:rustc-cfg=ugly_hack");

    let data = generate_data();
    let pairs = data.map(|x| {
        let (start, end, uf) = (x.start, x.end, x.uf);
        quote!((#start ..= #end, #uf))
    });
    let digits = generate_digits()
        .into_iter()
        .map(|(zero, nine)| quote!(#zero ..= #nine));

    let tokens = parse_quote! {
        use core::ops::RangeInclusive;
        use crate::Uf;

        pub const CEP_RANGES: &[(RangeInclusive<u32>, Uf)] = &[#(#pairs),*];

        pub const DECIMAL_DIGITS: &[RangeInclusive<char>] = &[#(#digits),*];
    };

    let pretty = unparse(&tokens);

    let out_dir = env::var("OUT_DIR").expect("failed to get target directory");
    let out_file = out_dir + "/data.rs";
    let mut out = File::create(out_file).expect("failed to create data.rs");

    out.write_all(pretty.as_bytes())
        .expect("failed to write pretty source");
}
