use anyhow::{Result, anyhow};
use isolang::Language;

/// Language utilities for ISO language code handling
///
/// Language registries are keyed by ISO 639-1 codes ("de", "ru", "ko"), but
/// configuration files and CSV metadata often carry 639-2 codes in either the
/// terminology ("deu") or bibliographic ("ger") form. Everything here funnels
/// those spellings into one canonical key.

/// Kind of code a string turned out to be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageCodeType {
    /// ISO 639-1 (2-letter) code
    Part1,
    /// ISO 639-2/T (3-letter) code
    Part2T,
    /// ISO 639-2/B (3-letter) code
    Part2B,
}

/// ISO 639-2/B codes that differ from their 639-2/T counterpart
const PART2B_TO_PART2T: &[(&str, &str)] = &[
    ("alb", "sqi"),
    ("arm", "hye"),
    ("baq", "eus"),
    ("bur", "mya"),
    ("chi", "zho"),
    ("cze", "ces"),
    ("dut", "nld"),
    ("fre", "fra"),
    ("geo", "kat"),
    ("ger", "deu"),
    ("gre", "ell"),
    ("ice", "isl"),
    ("mac", "mkd"),
    ("may", "msa"),
    ("per", "fas"),
    ("rum", "ron"),
    ("slo", "slk"),
    ("wel", "cym"),
];

fn part2b_to_part2t(code: &str) -> Option<&'static str> {
    PART2B_TO_PART2T
        .iter()
        .find(|(bibliographic, _)| *bibliographic == code)
        .map(|(_, terminology)| *terminology)
}

fn lookup(code: &str) -> Option<(Language, LanguageCodeType)> {
    let code = code.trim().to_lowercase();
    match code.len() {
        2 => Language::from_639_1(&code).map(|lang| (lang, LanguageCodeType::Part1)),
        3 => Language::from_639_3(&code)
            .map(|lang| (lang, LanguageCodeType::Part2T))
            .or_else(|| {
                part2b_to_part2t(&code)
                    .and_then(Language::from_639_3)
                    .map(|lang| (lang, LanguageCodeType::Part2B))
            }),
        _ => None,
    }
}

/// Validate if a language code is a valid ISO 639-1 or ISO 639-2 code
pub fn validate_language_code(code: &str) -> Result<LanguageCodeType> {
    lookup(code)
        .map(|(_, kind)| kind)
        .ok_or_else(|| anyhow!("Invalid language code: {}", code))
}

/// Normalize a language code to ISO 639-2/T (3-letter) format
pub fn normalize_to_part2t(code: &str) -> Result<String> {
    lookup(code)
        .map(|(lang, _)| lang.to_639_3().to_string())
        .ok_or_else(|| anyhow!("Cannot normalize invalid language code: {}", code))
}

/// Normalize a language code to ISO 639-1 (2-letter) format if possible
///
/// Falls back to ISO 639-2/T when the language has no 2-letter code.
pub fn normalize_to_part1(code: &str) -> Result<String> {
    lookup(code)
        .map(|(lang, _)| {
            lang.to_639_1()
                .map(str::to_string)
                .unwrap_or_else(|| lang.to_639_3().to_string())
        })
        .ok_or_else(|| anyhow!("Cannot normalize invalid language code: {}", code))
}

/// Check if two language codes represent the same language
pub fn language_codes_match(code1: &str, code2: &str) -> bool {
    match (normalize_to_part2t(code1), normalize_to_part2t(code2)) {
        (Ok(first), Ok(second)) => first == second,
        _ => false,
    }
}

/// English name of the language, e.g. "German"
pub fn get_language_name(code: &str) -> Result<String> {
    lookup(code)
        .map(|(lang, _)| lang.to_name().to_string())
        .ok_or_else(|| anyhow!("Failed to get language from code: {}", code))
}
