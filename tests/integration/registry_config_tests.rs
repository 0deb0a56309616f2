/*!
 * Registry built from a configuration file
 */

use std::path::Path;

use anyhow::Result;
use langlearn::app_config::Config;
use langlearn::errors::RegistryError;
use langlearn::{CardSide, LanguageRegistry};

use crate::common::{create_temp_dir, create_test_config};

fn registry_from_test_config() -> Result<LanguageRegistry> {
    let dir = create_temp_dir()?;
    let config = Config::from_file(create_test_config(dir.path())?)?;
    Ok(LanguageRegistry::from_config(&config)?)
}

#[test]
fn test_from_config_shouldRegisterOnlyConfiguredLanguages() -> Result<()> {
    let registry = registry_from_test_config()?;
    assert_eq!(registry.list_available(), vec!["de", "ko"]);
    assert!(registry.is_registered("deu"));
    assert!(!registry.is_registered("ru"));
    Ok(())
}

#[test]
fn test_from_config_shouldApplyVoiceAndTemplates() -> Result<()> {
    let registry = registry_from_test_config()?;

    let german = registry.get("ger")?;
    assert_eq!(german.tts_config().voice_id, "Vicki");
    assert_eq!(german.tts_config().engine, "standard");
    assert_eq!(
        german.template_path("noun", CardSide::Back),
        Path::new("cards/german").join("noun_back.html")
    );

    let korean = registry.get("kor")?;
    assert_eq!(korean.code(), "ko");
    assert_eq!(korean.tts_config().engine, "neural");
    assert_eq!(korean.tts_config().language_code, "ko-KR");
    Ok(())
}

#[test]
fn test_get_withUnconfiguredLanguage_shouldListAvailable() -> Result<()> {
    let registry = registry_from_test_config()?;
    let err = registry.get("rus").unwrap_err();
    assert_eq!(
        err,
        RegistryError::LanguageNotRegistered {
            code: "rus".to_string(),
            available: vec!["de".to_string(), "ko".to_string()],
        }
    );
    Ok(())
}

#[test]
fn test_from_config_withUnsupportedLanguage_shouldSkipIt() -> Result<()> {
    let config = Config::from_json(
        r#"{ "languages": [
            { "code": "fr", "tts": { "voice_id": "Lea", "language_code": "fr-FR" } },
            { "code": "ru", "tts": { "voice_id": "Maxim", "language_code": "ru-RU" } }
        ] }"#,
    )?;
    let registry = LanguageRegistry::from_config(&config)?;
    assert_eq!(registry.list_available(), vec!["ru"]);
    assert_eq!(registry.get("ru")?.tts_config().voice_id, "Maxim");
    Ok(())
}

#[test]
fn test_from_config_withInvalidCode_shouldFail() -> Result<()> {
    let config = Config::from_json(
        r#"{ "languages": [ { "code": "zz", "tts": { "voice_id": "X", "language_code": "zz" } } ] }"#,
    )?;
    assert!(matches!(
        LanguageRegistry::from_config(&config),
        Err(RegistryError::InvalidLanguageCode(code)) if code == "zz"
    ));
    Ok(())
}

#[test]
fn test_each_default_language_shouldCreateItsOwnRecords() -> Result<()> {
    let registry = LanguageRegistry::with_defaults();
    for code in registry.list_available() {
        let language = registry.get(code)?;
        assert!(language.supported_record_types().contains(&"noun"), "{code}");
        for (stem, tag) in language.csv_to_record_type_mapping() {
            assert!(
                language.supported_record_types().contains(&tag),
                "{code}: {stem} maps to unsupported {tag}"
            );
        }
    }
    Ok(())
}

#[test]
fn test_clear_shouldEmptyRegistry() {
    let mut registry = LanguageRegistry::with_defaults();
    registry.clear();
    assert!(registry.list_available().is_empty());
    assert!(!registry.is_registered("de"));
}
