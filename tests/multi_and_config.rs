//! Integration tests for the rotor-order search and JSON configuration.

use std::path::PathBuf;

use bombe::config::resolve_rotor;
use bombe::machine::catalog::{REFLECTORS, ROTORS};
use bombe::{BombeConfig, BombeError, Component, ConfigError, MultiBombe};

const CIPHERTEXT: &str = "JSJCWEEZHZNBNNOKOTINGHPPRKPBRP";
const CRIB: &str = "WETTERVORHERSAGEFUER";

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

fn pool(names: &[&str]) -> Vec<Component> {
    names.iter().map(|n| resolve_rotor(n).unwrap()).collect()
}

// ═══════════════════════════════════════════════════════════════════════
// MultiBombe
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn multi_finds_the_right_order() {
    let reflectors: Vec<Component> = REFLECTORS[..1].iter().map(Component::from).collect();
    let mut search = MultiBombe::new(
        &pool(&["I", "II", "III"]),
        &[],
        &reflectors,
        CIPHERTEXT,
        CRIB,
        true,
    )
    .unwrap();
    assert_eq!(search.combination_count(), 6);

    let mut fractions = Vec::new();
    let stops = search.run_with_progress(|p| fractions.push(p.fraction)).unwrap();
    assert_eq!(fractions.len(), 6);
    assert_eq!(fractions.last().copied(), Some(1.0));

    let hit = stops
        .iter()
        .find(|m| m.rotors == ["I", "II", "III"] && m.candidate.setting == "BLA")
        .expect("I-II-III at BLA must be reported");
    assert_eq!(hit.reflector, "B");
    assert_eq!(&hit.candidate.preview[..CRIB.len()], CRIB);
}

#[test]
fn multi_candidate_serializes_flat() {
    let reflectors: Vec<Component> = REFLECTORS[..1].iter().map(Component::from).collect();
    let mut search = MultiBombe::new(
        &pool(&["I", "II", "III"]),
        &[],
        &reflectors,
        CIPHERTEXT,
        CRIB,
        true,
    )
    .unwrap();
    let stops = search.run().unwrap();
    let hit = stops
        .iter()
        .find(|m| m.candidate.setting == "BLA")
        .unwrap();
    let json = serde_json::to_value(hit).unwrap();
    assert_eq!(json["rotors"], serde_json::json!(["I", "II", "III"]));
    assert_eq!(json["reflector"], "B");
    assert_eq!(json["setting"], "BLA");
    assert!(json["steckers"].as_str().unwrap().contains("AR"));
}

#[test]
fn multi_rejects_small_pool() {
    let reflectors: Vec<Component> = REFLECTORS.iter().map(Component::from).collect();
    let rotors: Vec<Component> = ROTORS[..1].iter().map(Component::from).collect();
    let err = MultiBombe::new(&rotors, &[], &reflectors, CIPHERTEXT, CRIB, true)
        .err()
        .unwrap();
    assert_eq!(err, BombeError::RotorPoolTooSmall { needed: 3, got: 1 });
}

// ═══════════════════════════════════════════════════════════════════════
// BombeConfig
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn config_file_runs_end_to_end() {
    let config = BombeConfig::from_path(fixture("weather.json")).unwrap();
    assert_eq!(config.offset, 5);
    assert_eq!(config.aligned_ciphertext().unwrap(), CIPHERTEXT);

    let mut bombe = config.build().unwrap();
    let stops = bombe.run();
    assert_eq!(stops.len(), 1);
    assert_eq!(stops[0].setting, "BLA");
}

#[test]
fn config_missing_file() {
    let err = BombeConfig::from_path(fixture("does_not_exist.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn config_missing_required_field() {
    let err = BombeConfig::from_json_str(r#"{"rotors": ["I", "II", "III"]}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn config_unknown_rotor() {
    let config = BombeConfig::from_json_str(
        r#"{"rotors": ["I", "XI", "III"], "ciphertext": "JSJCWEEZ", "crib": "WETTER"}"#,
    )
    .unwrap();
    assert_eq!(
        config.build().err(),
        Some(BombeError::UnknownRotor("XI".to_string()))
    );
}

#[test]
fn config_round_trips_through_json() {
    let config = BombeConfig::from_path(fixture("weather.json")).unwrap();
    let raw = serde_json::to_string(&config).unwrap();
    assert_eq!(BombeConfig::from_json_str(&raw).unwrap(), config);
}
