//! End-to-end: CSV on disk through to the dashboard view

use data_loader::LoadError;
use explorer::{run, ExplorerConfig, ExplorerError};
use insurance_record::Region;
use std::io::Write;
use tempfile::NamedTempFile;

fn create_test_csv() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Age,Sex,BMI,Children,Smoker,Region,Charges").unwrap();
    writeln!(file, "19,female,27.9,0,yes,southwest,16884.924").unwrap();
    writeln!(file, "18,male,33.77,1,no,southeast,1725.5523").unwrap();
    writeln!(file, "28,male,33,3,no,southeast,4449.462").unwrap();
    writeln!(file, "33,male,22.705,0,no,northwest,21984.47061").unwrap();
    writeln!(file, "32,male,28.88,0,no,northwest,3866.8552").unwrap();
    writeln!(file, "31,female,25.74,0,no,southeast,3756.6216").unwrap();
    writeln!(file, "46,female,33.44,1,no,southeast,8240.5896").unwrap();
    file
}

#[test]
fn test_run_full_pipeline() {
    let file = create_test_csv();
    let config = ExplorerConfig {
        data_path: file.path().to_path_buf(),
        include_records: true,
        ..Default::default()
    };

    let view = run(&config).unwrap();

    assert_eq!(view.total_records, 7);
    assert_eq!(view.filtered_records, 7);
    assert_eq!(view.unclassified_records, 0);

    let southeast = view.region_averages.get(&Region::Southeast).unwrap();
    let expected = (1725.5523 + 4449.462 + 3756.6216 + 8240.5896) / 4.0;
    assert!((southeast - expected).abs() < 1e-9);

    let records = view.records.unwrap();
    let ages: Vec<_> = records.iter().map(|r| r.record.age).collect();
    assert_eq!(ages, vec![19, 18, 28, 33, 32, 31, 46]);
}

#[test]
fn test_run_with_filters() {
    let file = create_test_csv();
    let config = ExplorerConfig {
        data_path: file.path().to_path_buf(),
        regions: Some(vec!["southeast".into()]),
        age_groups: Some(vec!["26-35".into()]),
        ..Default::default()
    };

    let view = run(&config).unwrap();

    assert_eq!(view.filtered_records, 2);
    assert_eq!(view.region_averages.len(), 1);
    assert_eq!(
        view.region_averages.get(&Region::Southeast),
        Some((4449.462 + 3756.6216) / 2.0)
    );
}

#[test]
fn test_run_missing_file() {
    let config = ExplorerConfig {
        data_path: "no/such/insurance.csv".into(),
        ..Default::default()
    };

    let err = run(&config).unwrap_err();
    assert!(matches!(err, ExplorerError::Load(LoadError::NotFound { .. })));
}
