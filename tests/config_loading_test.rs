use anyhow::Result;
use orientation_engine::utils::validation::Validate;
use orientation_engine::{
    AnswerSheet, CatalogData, EngineError, RecommendationEngine, TomlConfig,
};
use tempfile::TempDir;

const DATA: &str = r#"
[[areas]]
id = "tec"
display_name = "Tecnología"
keywords = ["Programar", "robótica"]

[[areas]]
id = "salud"
display_name = "Salud"
keywords = ["medicina"]

[[programs]]
id = "sis"
name = "Ingeniería de Sistemas"
institution = "Universidad A"
areas = ["tec"]

[[programs]]
id = "med"
name = "Medicina"
institution = "Universidad B"
areas = ["salud"]

[[programs]]
id = "meca"
name = "Mecatrónica"
institution = "Universidad A"
areas = ["tec"]
"#;

fn write_files(temp_dir: &TempDir, engine_section: &str) -> Result<String> {
    let normalized = temp_dir.path().to_str().unwrap().replace('\\', "/");
    let data_path = format!("{}/catalog.toml", normalized);
    std::fs::write(&data_path, DATA)?;

    let config_path = format!("{}/engine.toml", normalized);
    let config_content = format!(
        r#"
{}

[data]
path = "{}"

[audit]
enabled = true
path = "{}/audit/assessments.jsonl"
"#,
        engine_section, data_path, normalized
    );
    std::fs::write(&config_path, config_content)?;
    Ok(config_path)
}

#[test]
fn test_engine_built_from_config_and_data_files() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = write_files(
        &temp_dir,
        r#"[engine]
limit = 2
weight = 10
default_institutions = ["Instituto Central"]"#,
    )?;

    let config = TomlConfig::from_file(&config_path)?;
    config.validate()?;
    assert!(config.audit_path().unwrap().ends_with("assessments.jsonl"));

    let data = CatalogData::from_file(config.data_path().unwrap())?;
    let engine = RecommendationEngine::from_data(data, config.engine.clone())?;

    let assessment = engine.assess(&AnswerSheet::new().with_answer("q1", "PROGRAMAR robots"));
    assert_eq!(
        assessment.labels(),
        vec![
            "Ingeniería de Sistemas (Universidad A)",
            "Mecatrónica (Universidad A)"
        ]
    );
    assert_eq!(assessment.recommendations[0].match_score, 10);
    assert_eq!(assessment.institutions, vec!["Universidad A"]);
    assert_eq!(
        engine.resolve(&["sin institución"]),
        vec!["Instituto Central"]
    );

    Ok(())
}

#[test]
fn test_invalid_engine_settings_fail_validation() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = write_files(&temp_dir, "[engine]\nweight = 0")?;

    let config = TomlConfig::from_file(&config_path)?;
    let err = config.validate().unwrap_err();
    assert!(matches!(err, EngineError::InvalidConfigValueError { ref field, .. } if field == "engine.weight"));

    Ok(())
}

#[test]
fn test_corrupt_catalog_stops_startup() -> Result<()> {
    let data = CatalogData::from_toml_str(
        r#"
[[areas]]
id = "tec"
display_name = "Tecnología"
keywords = ["programar"]

[[programs]]
id = "sis"
name = "Sistemas"
institution = "Universidad A"
areas = ["tec"]

[[programs]]
id = "sis"
name = "Sistemas II"
institution = "Universidad A"
areas = ["tec"]
"#,
    )?;

    let result = RecommendationEngine::from_data(data, Default::default());
    assert!(matches!(
        result,
        Err(EngineError::DuplicateProgramError { ref id }) if id == "sis"
    ));
    Ok(())
}

#[test]
fn test_missing_data_file_is_io_error() {
    let result = CatalogData::from_file("/nonexistent/catalog.toml");
    assert!(matches!(result, Err(EngineError::IoError(_))));
}
