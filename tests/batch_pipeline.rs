use fitness_tracker::config::TrackerConfig;
use fitness_tracker::{
    default_packages, read_package, run_batch, summarize, BatchOptions, BatchReport, ErrorPolicy,
    InfoMessage, MessageLocale, OutputFormat, Package, Running, TrackerError, Workout,
    WorkoutCode,
};

fn run_to_string(
    packages: &[Package],
    options: &BatchOptions,
) -> (Result<BatchReport, TrackerError>, String) {
    let mut out = Vec::new();
    let result = run_batch(packages, options, &mut out);
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn read_package_labels_do_not_depend_on_values() {
    for (code, data) in [
        ("RUN", vec![1.0, 2.0, 3.0]),
        ("WLK", vec![4.0, 5.0, 6.0, 7.0]),
        ("SWM", vec![8.0, 9.0, 10.0, 11.0, 12.0]),
    ] {
        let expected = WorkoutCode::from_code(code).unwrap().label();
        assert_eq!(read_package(code, &data).unwrap().label(), expected);
    }
}

#[test]
fn unknown_tag_fails_regardless_of_data() {
    for data in [vec![], vec![15000.0, 1.0, 75.0], vec![-1.0; 10]] {
        let err = read_package("BIKE", &data).unwrap_err();
        assert!(matches!(err, TrackerError::UnknownWorkoutTag(ref tag) if tag == "BIKE"));
    }
    assert!(matches!(
        read_package("run", &[15000.0, 1.0, 75.0]),
        Err(TrackerError::UnknownWorkoutTag(_))
    ));
}

#[test]
fn short_packets_are_malformed() {
    for code in ["RUN", "WLK", "SWM"] {
        let err = read_package(code, &[15000.0, 1.0]).unwrap_err();
        assert!(matches!(
            err,
            TrackerError::MalformedInputData { tag, expected: 3, actual: 2 } if tag == code
        ));
    }
    assert!(matches!(
        read_package("WLK", &[]),
        Err(TrackerError::MalformedInputData { actual: 0, .. })
    ));
}

#[test]
fn three_value_walking_reads_weight_as_height() {
    let short = read_package("WLK", &[9000.0, 1.0, 75.0]).unwrap();
    let explicit = read_package("WLK", &[9000.0, 1.0, 75.0, 75.0]).unwrap();

    assert_eq!(short, explicit);
    match short {
        Workout::SportsWalking(walking) => assert!((walking.height - 75.0).abs() < 1e-6),
        other => panic!("expected walking, got {:?}", other),
    }
}

#[test]
fn short_swimming_reads_pool_fields_from_tail() {
    let four = read_package("SWM", &[720.0, 1.0, 80.0, 40.0]).unwrap();
    match four {
        Workout::Swimming(swimming) => {
            assert!((swimming.length_pool - 80.0).abs() < 1e-6);
            assert_eq!(swimming.count_pool, 40);
        }
        other => panic!("expected swimming, got {:?}", other),
    }

    let three = read_package("SWM", &[720.0, 1.0, 80.0]).unwrap();
    match three {
        Workout::Swimming(swimming) => {
            assert!((swimming.length_pool - 1.0).abs() < 1e-6);
            assert_eq!(swimming.count_pool, 80);
        }
        other => panic!("expected swimming, got {:?}", other),
    }
}

#[test]
fn walking_height_comes_from_last_value() {
    let workout = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0, 999.0]).unwrap();
    assert_eq!(format!("{:.3}", workout.spent_calories()), "192.050");
}

#[test]
fn swimming_pool_fields_come_from_tail() {
    let padded = read_package("SWM", &[720.0, 1.0, 80.0, 0.0, 25.0, 40.0]).unwrap();
    let exact = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
    assert_eq!(padded, exact);
}

#[test]
fn running_ignores_extra_values() {
    let padded = read_package("RUN", &[15000.0, 1.0, 75.0, 42.0]).unwrap();
    let exact = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
    assert_eq!(padded, exact);
}

#[test]
fn fractional_counts_are_rejected() {
    assert!(matches!(
        read_package("RUN", &[10.5, 1.0, 75.0]),
        Err(TrackerError::InvalidPhysicalValue { field: "action count", .. })
    ));
    assert!(matches!(
        read_package("SWM", &[720.0, 1.0, 80.0, 25.0, -2.0]),
        Err(TrackerError::InvalidPhysicalValue { field: "pool lap count", .. })
    ));
}

#[test]
fn default_batch_prints_in_input_order() {
    let (result, output) = run_to_string(&default_packages(), &BatchOptions::default());
    let report = result.unwrap();

    assert_eq!(report.processed, 3);
    assert_eq!(report.skipped, 0);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Workout type: Swimming; Duration: 1.000 h; Distance: 0.994 km; Avg speed: 1.000 km/h; Calories burned: 336.000.",
            "Workout type: Running; Duration: 1.000 h; Distance: 9.750 km; Avg speed: 9.750 km/h; Calories burned: 797.805.",
            "Workout type: SportsWalking; Duration: 1.000 h; Distance: 5.850 km; Avg speed: 5.850 km/h; Calories burned: 349.252.",
        ]
    );
    assert!(output.ends_with('\n'));
}

#[test]
fn abort_policy_stops_at_first_bad_package() {
    let packages = vec![
        Package::new("RUN", &[15000.0, 1.0, 75.0]),
        Package::new("XYZ", &[1.0, 1.0, 1.0]),
        Package::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ];
    let (result, output) = run_to_string(&packages, &BatchOptions::default());

    assert!(matches!(result, Err(TrackerError::UnknownWorkoutTag(_))));
    assert_eq!(output.lines().count(), 1);
}

#[test]
fn skip_policy_continues_past_bad_packages() {
    let packages = vec![
        Package::new("RUN", &[15000.0, 0.0, 75.0]),
        Package::new("WLK", &[9000.0]),
        Package::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ];
    let options = BatchOptions {
        on_error: ErrorPolicy::Skip,
        ..BatchOptions::default()
    };
    let (result, output) = run_to_string(&packages, &options);
    let report = result.unwrap();

    assert_eq!(report.processed, 1);
    assert_eq!(report.skipped, 2);
    assert!(output.starts_with("Workout type: Swimming;"));
}

#[test]
fn json_output_is_one_object_per_line() {
    let options = BatchOptions {
        format: OutputFormat::Json,
        ..BatchOptions::default()
    };
    let (result, output) = run_to_string(&default_packages()[..1], &options);
    result.unwrap();

    let message: InfoMessage = serde_json::from_str(output.trim_end()).unwrap();
    assert_eq!(message.training_type, "Swimming");
    assert!((message.calories - 336.0).abs() < 1e-6);
}

#[test]
fn config_round_trips_through_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("tracker.toml");

    let mut config = TrackerConfig::sample();
    config.batch.on_error = "skip".to_string();
    config.output.locale = "ru".to_string();
    config.write(&path).unwrap();

    let (loaded, loaded_path) = TrackerConfig::load(Some(path.clone())).unwrap();
    assert_eq!(loaded_path, Some(path));
    assert_eq!(loaded.batch.packages, default_packages());

    let options = loaded.to_options().unwrap();
    assert_eq!(options.on_error, ErrorPolicy::Skip);
    assert_eq!(options.locale, MessageLocale::Russian);
    assert_eq!(options.format, OutputFormat::Text);
}

#[test]
fn config_accepts_integer_readings_and_tag_alias() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tracker.toml");
    std::fs::write(
        &path,
        "[[batch.packages]]\ntag = \"RUN\"\ndata = [15000, 1, 75]\n",
    )
    .unwrap();

    let (config, _) = TrackerConfig::load(Some(path)).unwrap();
    assert_eq!(config.packages(), vec![Package::new("RUN", &[15000.0, 1.0, 75.0])]);
}

#[test]
fn missing_config_falls_back_to_demo_batch() {
    let dir = tempfile::tempdir().unwrap();
    let (config, _) = TrackerConfig::load(Some(dir.path().join("absent.toml"))).unwrap();

    assert!(config.batch.packages.is_empty());
    assert_eq!(config.packages(), default_packages());
}

#[test]
fn misspelled_config_values_are_rejected() {
    let dir = tempfile::tempdir().unwrap();

    for (contents, expected) in [
        ("[batch]\non_error = \"skp\"\n", "invalid error policy (abort|skip): skp"),
        ("[output]\nlocale = \"fr\"\n", "invalid locale (en|ru): fr"),
        ("[output]\nformat = \"yaml\"\n", "invalid output format (text|json): yaml"),
    ] {
        let path = dir.path().join("tracker.toml");
        std::fs::write(&path, contents).unwrap();

        let err = TrackerConfig::load(Some(path)).unwrap_err();
        assert!(err.contains(expected), "unexpected error: {}", err);
    }
}

#[test]
fn overflowing_metrics_are_refused() {
    let workout: Workout = Running::new(15000, 1e300, 1e300).unwrap().into();
    assert!(workout.spent_calories().is_infinite());

    let err = summarize(&workout).unwrap_err();
    assert!(matches!(
        err,
        TrackerError::InvalidPhysicalValue { field: "calories", .. }
    ));
}

#[test]
fn overflowing_package_is_skipped_not_printed() {
    let packages = vec![
        Package::new("RUN", &[15000.0, 1e300, 1e300]),
        Package::new("RUN", &[15000.0, 1.0, 75.0]),
    ];
    let options = BatchOptions {
        on_error: ErrorPolicy::Skip,
        format: OutputFormat::Json,
        ..BatchOptions::default()
    };
    let (result, output) = run_to_string(&packages, &options);

    assert_eq!(result.unwrap(), BatchReport { processed: 1, skipped: 1 });
    assert!(!output.contains("null"));
    let message: InfoMessage = serde_json::from_str(output.trim_end()).unwrap();
    assert_eq!(message.training_type, "Running");
}
