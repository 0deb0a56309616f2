/*!
 * to_dict output for every record layout of every language
 */

use langlearn::LanguageRegistry;
use serde_json::Value;

use crate::common::{korean_noun_row, russian_noun_row};
use crate::unit::german_records_tests::valid_rows;

/// Language code, tag and a row that parses
fn every_layout() -> Vec<(&'static str, &'static str, Vec<&'static str>)> {
    let mut layouts: Vec<_> = valid_rows()
        .into_iter()
        .map(|(tag, fields)| ("de", tag, fields))
        .collect();
    layouts.push(("ko", "noun", korean_noun_row()));
    layouts.push(("ru", "noun", russian_noun_row()));
    layouts
}

fn assert_field(layout: &str, name: &str, value: &Value, expected: &str) {
    match value {
        Value::String(text) => assert_eq!(text, expected, "{layout}: field '{name}'"),
        Value::Bool(flag) => assert_eq!(
            *flag,
            expected.eq_ignore_ascii_case("true"),
            "{layout}: flag '{name}'"
        ),
        Value::Null => assert_eq!(expected, "", "{layout}: '{name}' is null"),
        other => panic!("{layout}: unexpected value for '{name}': {other}"),
    }
}

#[test]
fn test_to_dict_withPaddedFields_shouldHoldEveryDeclaredFieldTrimmed() {
    let registry = LanguageRegistry::with_defaults();

    for (code, tag, fields) in every_layout() {
        let layout = format!("{code}/{tag}");
        let padded: Vec<String> = fields.iter().map(|field| format!("  {} \t", field)).collect();
        let padded: Vec<&str> = padded.iter().map(String::as_str).collect();

        let language = registry.get(code).unwrap();
        let record = language
            .create_record(tag, &padded)
            .unwrap_or_else(|err| panic!("{layout} failed: {err}"));
        let dict = record.to_dict();

        for (index, name) in record.field_names().iter().enumerate() {
            let value = dict
                .get(*name)
                .unwrap_or_else(|| panic!("{layout} is missing '{name}'"));
            let expected = fields.get(index).map(|field| field.trim()).unwrap_or_default();
            assert_field(&layout, name, value, expected);
        }
    }
}

#[test]
fn test_to_dict_withoutMedia_shouldHoldNoMediaSlots() {
    let registry = LanguageRegistry::with_defaults();

    for (code, tag, fields) in every_layout() {
        let record = registry.get(code).unwrap().create_record(tag, &fields).unwrap();
        let dict = record.to_dict();
        for slot in record.media().slots() {
            if record.field_names().contains(slot) {
                continue;
            }
            assert!(!dict.contains_key(*slot), "{code}/{tag} wrote empty '{slot}'");
        }
    }
}
