/*!
 * Tests for configuration loading, saving and validation
 */

use std::path::PathBuf;

use anyhow::Result;
use langlearn::app_config::{Config, LanguageSettings, LogLevel};

use crate::common::{create_temp_dir, create_test_config, create_test_file};

#[test]
fn test_from_file_withPartialConfig_shouldFillDefaults() -> Result<()> {
    let dir = create_temp_dir()?;
    let path = create_test_config(dir.path())?;

    let config = Config::from_file(&path)?;
    assert_eq!(config.default_language, "deu");
    assert_eq!(config.log_level, LogLevel::Warn);
    assert_eq!(config.languages.len(), 2);

    let german = config.settings_for("de").unwrap();
    assert_eq!(german.tts.engine, "standard");
    assert_eq!(german.template_dir_or_default(), PathBuf::from("cards/german"));

    let korean = config.settings_for("ko").unwrap();
    assert_eq!(korean.tts.engine, "neural");
    assert_eq!(korean.template_dir_or_default(), PathBuf::from("templates/kor"));

    config.validate()?;
    Ok(())
}

#[test]
fn test_save_then_from_file_shouldPreserveSettings() -> Result<()> {
    let dir = create_temp_dir()?;
    let path = dir.path().join("saved.json");

    let mut config = Config::default();
    config.log_level = LogLevel::Debug;
    config.languages[1].tts.voice_id = "Maxim".to_string();
    config.save(&path)?;

    let loaded = Config::from_file(&path)?;
    assert_eq!(loaded, config);
    Ok(())
}

#[test]
fn test_from_file_withMissingFile_shouldNamePath() {
    let err = Config::from_file("does/not/exist.json").unwrap_err();
    assert!(err.to_string().contains("does/not/exist.json"));
}

#[test]
fn test_from_file_withInvalidJson_shouldFail() -> Result<()> {
    let dir = create_temp_dir()?;
    let path = create_test_file(dir.path(), "broken.json", "{ not json")?;
    let err = Config::from_file(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
    Ok(())
}

#[test]
fn test_validate_withBlankVoice_shouldFail() {
    let mut config = Config::default();
    config.languages[2].tts.voice_id = "  ".to_string();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("ko"));
}

#[test]
fn test_validate_withInvalidLanguageCode_shouldFail() {
    let mut config = Config::default();
    config
        .languages
        .push(LanguageSettings::new("zz", "Nobody", "zz-ZZ"));
    assert!(config.validate().is_err());
}

#[test]
fn test_log_level_fromStr_shouldAcceptWarning() {
    assert_eq!("WARNING".parse::<LogLevel>().unwrap(), LogLevel::Warn);
    assert!("loud".parse::<LogLevel>().is_err());
    assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
}
