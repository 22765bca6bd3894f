//! Configuration loading and property tests

use std::io::Write;

use assumption_lint::config::ConfigError;
use assumption_lint::{AssumptionAnalysisService, CheckerConfig, Preset, SolverBackendKind};
use proptest::prelude::*;
use tempfile::NamedTempFile;

#[test]
fn test_load_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "version: 1\npreset: docstring\noverrides:\n  max_path_length: 12\n  cycle_guard: false"
    )
    .unwrap();

    let config = CheckerConfig::from_yaml_file(file.path()).unwrap();
    assert_eq!(config.preset, Preset::Docstring);
    assert!(!config.comment_assumptions);
    assert_eq!(config.max_path_length, 12);
    assert!(!config.cycle_guard);
    assert!(AssumptionAnalysisService::new(config).is_ok());
}

#[test]
fn test_missing_config_file() {
    let err = CheckerConfig::from_yaml_file("/nonexistent/assumptions.yaml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_preset_overridden_back_on() {
    let yaml = "version: 1\npreset: docstring\noverrides:\n  comment_assumptions: true\n";
    let config = CheckerConfig::from_yaml_str(yaml).unwrap();
    assert!(config.comment_assumptions);
    assert_eq!(config.comment_prefix, "#");
}

#[test]
fn test_unknown_solver_in_yaml() {
    let yaml = "version: 1\npreset: module\noverrides:\n  solver: minisat\n";
    assert!(matches!(
        CheckerConfig::from_yaml_str(yaml),
        Err(ConfigError::Yaml(_))
    ));
}

fn preset_strategy() -> impl Strategy<Value = Preset> {
    prop_oneof![Just(Preset::Docstring), Just(Preset::Module)]
}

fn solver_strategy() -> impl Strategy<Value = SolverBackendKind> {
    prop_oneof![Just(SolverBackendKind::Native), Just(SolverBackendKind::Z3)]
}

proptest! {
    #[test]
    fn prop_path_length_validation_matches_range(len in 0usize..10_000) {
        let config = CheckerConfig::default().max_path_length(len);
        prop_assert_eq!(config.validate().is_ok(), (1..=4096).contains(&len));
    }

    #[test]
    fn prop_yaml_roundtrip(
        preset in preset_strategy(),
        solver in solver_strategy(),
        len in 1usize..=4096,
        guard in any::<bool>(),
        timeout in 1u32..100_000,
        prefix in "(#|//|--|;)",
    ) {
        let config = CheckerConfig::preset(preset)
            .solver(solver)
            .max_path_length(len)
            .cycle_guard(guard)
            .solver_timeout_ms(timeout)
            .comment_prefix(prefix);

        let yaml = config.to_yaml().unwrap();
        let loaded = CheckerConfig::from_yaml_str(&yaml).unwrap();
        prop_assert_eq!(loaded, config);
    }
}
