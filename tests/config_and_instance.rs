//! Integration tests for configuration parsing and attribute values.

use std::str::FromStr;

use vicinity::config::{KnnConfig, Metric, Weighting};
use vicinity::instance::AttributeValue;

// ---------------------------------------------------------------------------
// Config / hyperparameters
// ---------------------------------------------------------------------------

#[test]
fn default_config_uses_one_manhattan_neighbor() {
    let config = KnnConfig::default();
    assert_eq!(config.k, 1);
    assert_eq!(config.metric, Metric::Manhattan);
    assert_eq!(config.weighting, Weighting::Uniform);
    assert!(!config.normalize);
}

#[test]
fn metric_parses_from_lowercase_names() {
    assert_eq!(Metric::from_str("manhattan").unwrap(), Metric::Manhattan);
    assert_eq!(Metric::from_str("Euclidean").unwrap(), Metric::Euclidean);
    assert!(Metric::from_str("cosine").is_err());
}

#[test]
fn weighting_parses_both_spellings() {
    assert_eq!(Weighting::from_str("uniform").unwrap(), Weighting::Uniform);
    assert_eq!(
        Weighting::from_str("inverse").unwrap(),
        Weighting::InverseDistance
    );
    assert_eq!(
        Weighting::from_str("inverse_distance").unwrap(),
        Weighting::InverseDistance
    );
    assert!(Weighting::from_str("quadratic").is_err());
}

#[test]
fn config_round_trips_through_serde() {
    let config = KnnConfig::new(7, Metric::Euclidean, Weighting::InverseDistance, true);

    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"euclidean\""));
    assert!(json.contains("\"inverse_distance\""));

    let back: KnnConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

// ---------------------------------------------------------------------------
// Attribute values
// ---------------------------------------------------------------------------

#[test]
fn attribute_values_convert_from_native_types() {
    assert_eq!(AttributeValue::from(2.5), AttributeValue::Numeric(2.5));
    assert_eq!(
        AttributeValue::from("sunny"),
        AttributeValue::Categorical("sunny".to_string())
    );
    assert!(AttributeValue::from(1.0).is_numeric());
    assert_eq!(AttributeValue::from(1.0).as_numeric(), Some(1.0));
    assert_eq!(AttributeValue::from("a").as_numeric(), None);
}

#[test]
fn attribute_values_deserialize_untagged() {
    let values: Vec<AttributeValue> = serde_json::from_str(r#"[1.5, "overcast"]"#).unwrap();
    assert_eq!(values[0], AttributeValue::Numeric(1.5));
    assert_eq!(
        values[1],
        AttributeValue::Categorical("overcast".to_string())
    );
}

#[test]
fn attribute_values_display_without_adornment() {
    assert_eq!(AttributeValue::from(3.5).to_string(), "3.5");
    assert_eq!(AttributeValue::from("rainy").to_string(), "rainy");
}
