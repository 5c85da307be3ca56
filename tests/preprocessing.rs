//! Integration tests for the preprocessing module (min-max Scaler).

use vicinity::data_handling::Dataset;
use vicinity::instance::{AttributeValue, Instance};
use vicinity::preprocessing::fit_scaler;

fn num(v: f64) -> AttributeValue {
    AttributeValue::Numeric(v)
}

fn cat(v: &str) -> AttributeValue {
    AttributeValue::Categorical(v.to_string())
}

fn dataset(rows: Vec<Instance>, class_attribute: usize) -> Dataset {
    Dataset::new(rows, class_attribute).unwrap()
}

// ---------------------------------------------------------------------------
// Scaler fit / transform
// ---------------------------------------------------------------------------

#[test]
fn fit_scaler_maps_training_range_onto_unit_interval() {
    let data = dataset(
        vec![
            vec![num(2.0), num(10.0), cat("x")],
            vec![num(4.0), num(30.0), cat("y")],
            vec![num(6.0), num(20.0), cat("x")],
        ],
        2,
    );

    let sc = fit_scaler(&data);
    assert_eq!(sc.scale.len(), 3);
    assert_eq!(sc.translation.len(), 3);

    // column 0: min 2, max 6
    assert!((sc.transform(0, 2.0) - 0.0).abs() < 1e-9);
    assert!((sc.transform(0, 6.0) - 1.0).abs() < 1e-9);
    assert!((sc.transform(0, 4.0) - 0.5).abs() < 1e-9);

    // column 1: min 10, max 30
    assert!((sc.transform(1, 10.0) - 0.0).abs() < 1e-9);
    assert!((sc.transform(1, 30.0) - 1.0).abs() < 1e-9);
}

#[test]
fn constant_column_contributes_zero_after_centering() {
    let data = dataset(
        vec![
            vec![num(5.0), cat("a")],
            vec![num(5.0), cat("b")],
            vec![num(5.0), cat("a")],
        ],
        1,
    );

    let sc = fit_scaler(&data);
    assert!((sc.scale[0] - 1.0).abs() < 1e-9);
    assert!((sc.transform(0, 5.0) - 0.0).abs() < 1e-9);
}

#[test]
fn class_column_keeps_a_neutral_entry() {
    let data = dataset(
        vec![
            vec![num(1.0), num(100.0)],
            vec![num(3.0), num(200.0)],
        ],
        1,
    );

    let sc = fit_scaler(&data);
    // the class column must not be rescaled even though it is numeric
    assert!((sc.scale[1] - 1.0).abs() < 1e-9);
    assert!((sc.translation[1] - 0.0).abs() < 1e-9);
    assert!((sc.transform(1, 150.0) - 150.0).abs() < 1e-9);
}

#[test]
fn categorical_column_keeps_a_neutral_entry() {
    let data = dataset(
        vec![
            vec![cat("sunny"), num(1.0), cat("yes")],
            vec![cat("rainy"), num(9.0), cat("no")],
        ],
        2,
    );

    let sc = fit_scaler(&data);
    assert!((sc.scale[0] - 1.0).abs() < 1e-9);
    assert!((sc.translation[0] - 0.0).abs() < 1e-9);
}

#[test]
fn queries_outside_the_training_range_extrapolate() {
    let data = dataset(
        vec![vec![num(10.0), cat("a")], vec![num(20.0), cat("b")]],
        1,
    );

    let sc = fit_scaler(&data);
    assert!((sc.transform(0, 25.0) - 1.5).abs() < 1e-9);
    assert!((sc.transform(0, 5.0) - (-0.5)).abs() < 1e-9);
}
