// SkinConsult - tests/e2e_routine.rs
//
// End-to-end tests for the catalog -> selector -> output pipeline.
//
// These tests exercise the real filesystem, the real CSV reader and the
// compiled binary. No mocks, no stubs.

use skinconsult::app::catalog_store::CatalogStore;
use skinconsult::app::consultant;
use skinconsult::core::model::{Concern, Phase, RoutineRequest, SkinType, StepCategory};
use skinconsult::core::routine::{build_routine, filter_candidates, Routine, RoutineOutcome};
use skinconsult::platform::config::OutputFormat;
use skinconsult::ui::report::ReportOptions;
use skinconsult::util::constants;
use std::path::{Path, PathBuf};
use std::process::Command;

// =============================================================================
// Helpers
// =============================================================================

/// Absolute path to an on-disk fixture file.
fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn sample_store() -> CatalogStore {
    CatalogStore::new(fixture("sample_catalog.csv"))
}

fn product_at<'c>(routine: &Routine<'c>, phase: Phase, step: StepCategory) -> Option<&'c str> {
    routine
        .slots
        .iter()
        .find(|s| s.phase == phase && s.step == step)
        .and_then(|s| s.product)
        .map(|p| p.name.as_str())
}

// =============================================================================
// Library pipeline
// =============================================================================

#[test]
fn e2e_sample_catalog_loads_with_skipped_row() {
    let reader = skinconsult::platform::fs::open_catalog_file(&fixture("sample_catalog.csv")).unwrap();
    let (catalog, warnings) =
        skinconsult::core::catalog::parse_catalog(reader, Path::new("sample_catalog.csv")).unwrap();

    assert_eq!(catalog.len(), 9);
    assert_eq!(warnings.len(), 1, "{warnings:?}");
    assert!(warnings[0].contains("line 9"));
    // Padded header names still resolve.
    assert_eq!(catalog.entries()[0].product.name, "Foaming Face Wash");
    assert_eq!(catalog.entries()[0].product.skin_types, "Oily, Combination");
}

#[test]
fn e2e_oily_acne_full_morning() {
    let store = sample_store();
    let catalog = store.get().unwrap();
    let request = RoutineRequest::from_profile(SkinType::Oily, Concern::Acne, None);
    let outcome = build_routine(&catalog, &request);
    let routine = outcome.plan().expect("plan");

    assert_eq!(routine.candidates, 4);
    assert_eq!(
        product_at(routine, Phase::Morning, StepCategory::Cleanse),
        Some("Foaming Face Wash")
    );
    assert_eq!(
        product_at(routine, Phase::Morning, StepCategory::Treat),
        Some("Niacinamide Serum")
    );
    assert_eq!(
        product_at(routine, Phase::Morning, StepCategory::Protect),
        Some("Matte Sunscreen SPF 50")
    );
    assert_eq!(product_at(routine, Phase::Evening, StepCategory::Moisturize), None);
    assert_eq!(routine.found_count(), 6);
}

#[test]
fn e2e_allergy_guard_shrinks_candidates() {
    let store = sample_store();
    let catalog = store.get().unwrap();
    let open = RoutineRequest::from_profile(SkinType::Oily, Concern::Acne, None);
    let guarded = RoutineRequest::from_profile(SkinType::Oily, Concern::Acne, Some("alcohol".into()));

    let open_ids = filter_candidates(&catalog, &open);
    let guarded_ids = filter_candidates(&catalog, &guarded);
    assert_eq!(open_ids.len(), 4);
    assert_eq!(guarded_ids.len(), 3);
    assert!(guarded_ids
        .iter()
        .all(|&i| !catalog.entries()[i].product.name.contains("Alcohol")));
}

#[test]
fn e2e_dry_hydration_earlier_row_wins() {
    let store = sample_store();
    let catalog = store.get().unwrap();
    let request = RoutineRequest::from_profile(SkinType::Dry, Concern::Hydration, None);
    let outcome = build_routine(&catalog, &request);
    let routine = outcome.plan().expect("plan");

    assert_eq!(
        product_at(routine, Phase::Evening, StepCategory::Moisturize),
        Some("Hydra Cream")
    );
    assert_eq!(
        product_at(routine, Phase::Night, StepCategory::Moisturize),
        Some("Hydra Cream")
    );
    assert_eq!(
        product_at(routine, Phase::Night, StepCategory::Cleanse),
        Some("Gentle Cleanser")
    );
    assert_eq!(product_at(routine, Phase::Morning, StepCategory::Treat), None);
}

#[test]
fn e2e_unmatched_profile_is_no_match() {
    let store = sample_store();
    let catalog = store.get().unwrap();
    let request = RoutineRequest::from_profile(SkinType::Combination, Concern::Hydration, None);
    let outcome = build_routine(&catalog, &request);
    assert!(matches!(outcome, RoutineOutcome::NoMatch { .. }));
    assert!(outcome.slots().is_empty());
}

#[test]
fn e2e_recommend_writes_json() {
    let store = sample_store();
    let request = RoutineRequest::from_profile(SkinType::Normal, Concern::Pigmentation, None);
    let mut out = Vec::new();
    let matched = consultant::recommend(
        &store,
        &request,
        OutputFormat::Json,
        ReportOptions::default(),
        &mut out,
        Path::new("<buffer>"),
    )
    .unwrap();
    assert!(matched);

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["status"], "plan");
    assert_eq!(value["candidates"], 1);
    assert_eq!(value["slots"][1]["step"], "Treat");
    assert_eq!(value["slots"][1]["product"]["name"], "Vitamin C Booster");
}

// =============================================================================
// Binary
// =============================================================================

/// Run the binary with an empty config so the user's own config is ignored.
fn run_cli(args: &[&str]) -> std::process::Output {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "").unwrap();

    Command::new(env!("CARGO_BIN_EXE_skinconsult"))
        .arg("--config")
        .arg(&config)
        .arg("--catalog")
        .arg(fixture("sample_catalog.csv"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run skinconsult")
}

#[test]
fn e2e_cli_text_report() {
    let output = run_cli(&["recommend", "--skin-type", "oily", "--concern", "acne"]);
    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("MORNING ROUTINE"));
    assert!(stdout.contains("Foaming Face Wash"));
    assert!(stdout.contains("View Details: https://shop.example/foaming-face-wash"));
    assert!(stdout.contains("No specific Moisturize found matching your profile."));
}

#[test]
fn e2e_cli_no_match_exit_code() {
    let output = run_cli(&[
        "recommend",
        "-s",
        "Combination",
        "-k",
        "Hydration",
        "--format",
        "csv",
    ]);
    assert_eq!(output.status.code(), Some(constants::EXIT_NO_MATCH));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains(constants::NO_MATCH_MESSAGE));
}

#[test]
fn e2e_cli_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("out").join("routine.csv");
    let output = run_cli(&[
        "recommend",
        "-s",
        "dry",
        "-k",
        "hydration",
        "-f",
        "csv",
        "-o",
        target.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "{output:?}");
    let csv = std::fs::read_to_string(&target).unwrap();
    assert_eq!(csv.lines().count(), 9);
    assert!(csv.contains("Evening Routine,Moisturize,found,Hydra Cream"));
}

#[test]
fn e2e_cli_rejects_unknown_skin_type() {
    let output = run_cli(&["recommend", "-s", "scaly", "-k", "acne"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("unknown skin type"));
}

#[test]
fn e2e_cli_missing_explicit_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_skinconsult"))
        .arg("--config")
        .arg(fixture("sample_catalog.csv").with_file_name("does_not_exist.toml"))
        .args(["recommend", "-s", "oily", "-k", "acne"])
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(constants::EXIT_FAILURE));
    assert!(String::from_utf8(output.stderr).unwrap().contains("Configuration error"));
}

#[test]
fn e2e_cli_missing_catalog_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "[catalog]\npath = \"absent.csv\"\n").unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_skinconsult"))
        .arg("--config")
        .arg(&config)
        .args(["recommend", "-s", "oily", "-k", "acne"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(constants::EXIT_FAILURE));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Catalog error"), "{stderr}");
    assert!(stderr.contains("absent.csv"));
}

#[test]
fn e2e_cli_classify() {
    let output = run_cli(&["classify", "Oil-free Sunscreen", "Neem Soap"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Oil-free Sunscreen  Treat"));
    assert!(stdout.contains("Neem Soap           Cleanse"));
}
