/*!
 * Tests for language utility functions
 */

use langlearn::language_utils::{
    LanguageCodeType, get_language_name, language_codes_match, normalize_to_part1,
    normalize_to_part2t, validate_language_code,
};

/// Test validation of language codes
#[test]
fn test_validate_language_code_withValidCodes_shouldReturnCorrectType() {
    // ISO 639-1 tests
    assert!(matches!(validate_language_code("de").unwrap(), LanguageCodeType::Part1));
    assert!(matches!(validate_language_code("ko").unwrap(), LanguageCodeType::Part1));

    // ISO 639-2/T tests
    assert!(matches!(validate_language_code("deu").unwrap(), LanguageCodeType::Part2T));
    assert!(matches!(validate_language_code("rus").unwrap(), LanguageCodeType::Part2T));

    // ISO 639-2/B tests
    assert!(matches!(validate_language_code("ger").unwrap(), LanguageCodeType::Part2B));

    // Whitespace and case tests
    assert!(matches!(validate_language_code(" KO ").unwrap(), LanguageCodeType::Part1));

    // Invalid codes
    assert!(validate_language_code("xyz").is_err());
    assert!(validate_language_code("123").is_err());
    assert!(validate_language_code("d").is_err());
}

/// Test normalization to the registry key format
#[test]
fn test_normalize_to_part1_withEverySpelling_shouldAgree() {
    for code in ["de", "deu", "ger", " DEU "] {
        assert_eq!(normalize_to_part1(code).unwrap(), "de");
    }
    assert_eq!(normalize_to_part1("kor").unwrap(), "ko");
    assert_eq!(normalize_to_part1("rus").unwrap(), "ru");
    assert!(normalize_to_part1("zz").is_err());
}

#[test]
fn test_normalize_to_part2t_withValidCodes_shouldNormalizeCorrectly() {
    assert_eq!(normalize_to_part2t("de").unwrap(), "deu");
    assert_eq!(normalize_to_part2t("ger").unwrap(), "deu");
    assert_eq!(normalize_to_part2t("ko").unwrap(), "kor");
}

/// Test matching of different language code formats
#[test]
fn test_language_codes_match_withMatchingCodes_shouldReturnTrue() {
    assert!(language_codes_match("ru", "rus"));
    assert!(language_codes_match("ger", "de"));
    assert!(!language_codes_match("ru", "ko"));
    assert!(!language_codes_match("ru", "invalid"));
}

#[test]
fn test_get_language_name_shouldReturnEnglishName() {
    assert_eq!(get_language_name("de").unwrap(), "German");
    assert_eq!(get_language_name("rus").unwrap(), "Russian");
    assert!(get_language_name("qq").is_err());
}
