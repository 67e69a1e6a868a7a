use relmap::config::DatasetConfig;
use relmap::utils::validation::Validate;
use relmap::{Operation, ReportEngine};
use std::fs;
use tempfile::TempDir;

fn write_dataset(dir: &TempDir, content: &str) -> String {
    let path = dir.path().join("dataset.toml");
    fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn test_end_to_end_report_from_toml_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_dataset(
        &temp_dir,
        r#"
[usage]
EndUser1 = 2.25
EndUser2 = 4.5
EndUser3 = 1
EndUser4 = 3.75
EndUser5 = 0.6
EndUser6 = 8

[groups]
Ali = ["Muhammad", "Amir", "Malik"]
Devi = ["Ram", "Amaira"]
Chen = ["Feng", "Li"]
"#,
    );

    let config = DatasetConfig::from_file(&path).unwrap();
    config.validate().unwrap();

    let engine = ReportEngine::new(config.into_dataset(), Operation::ALL.to_vec());
    let report = engine.run();

    assert_eq!(report.total_hours, Some(20.1));

    let names = report.full_names.as_ref().unwrap();
    assert_eq!(names.len(), 7);
    assert_eq!(names[0], "Muhammad Ali");
    assert_eq!(names[6], "Li Chen");

    let inverted = report.inverted.as_ref().unwrap();
    assert_eq!(inverted["Muhammad"], ["Ali"]);
    assert_eq!(inverted["Ram"], ["Devi"]);

    // Report serializes cleanly to JSON with all three sections.
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["total_hours"], 20.1);
    assert_eq!(json["full_names"][3], "Ram Devi");
    assert_eq!(json["inverted"]["Feng"][0], "Chen");
}

#[test]
fn test_report_skips_unrequested_sections_in_json() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_dataset(&temp_dir, "[usage]\nA = 1.5\n");

    let config = DatasetConfig::from_file(&path).unwrap();
    let engine = ReportEngine::new(config.into_dataset(), vec![Operation::TotalHours]);
    let report = engine.run();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["total_hours"], 1.5);
    assert!(json.get("full_names").is_none());
    assert!(json.get("inverted").is_none());
}

#[test]
fn test_invalid_dataset_is_rejected_before_running() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_dataset(&temp_dir, "[usage]\nA = -2.0\n");

    let config = DatasetConfig::from_file(&path).unwrap();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("usage.A"));
}

#[test]
fn test_missing_file_and_bad_toml_are_errors() {
    let temp_dir = TempDir::new().unwrap();

    let missing = temp_dir.path().join("nope.toml");
    assert!(DatasetConfig::from_file(&missing).is_err());

    let path = write_dataset(&temp_dir, "[usage\nbroken");
    assert!(DatasetConfig::from_file(&path).is_err());
}
