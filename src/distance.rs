//! Distance metrics over instances.
//!
//! Both metrics operate on the non-class attribute slots only. Numeric
//! slots contribute their (optionally normalized) absolute difference;
//! categorical slots contribute 0 when equal and 1 when not. A slot holding
//! a numeric value on one side and a categorical value on the other counts
//! as unequal.

use crate::config::Metric;
use crate::error::KnnError;
use crate::instance::{AttributeValue, Instance};
use crate::preprocessing::Scaler;

/// Distance between two instances under `metric`.
///
/// Fails with `DimensionMismatch` when the instances differ in attribute
/// count. `scaler`, when present, is applied to both sides of every numeric
/// comparison.
pub fn distance(
    metric: Metric,
    a: &Instance,
    b: &Instance,
    class_attribute: usize,
    scaler: Option<&Scaler>,
) -> Result<f64, KnnError> {
    if a.len() != b.len() {
        return Err(KnnError::DimensionMismatch {
            expected: a.len(),
            found: b.len(),
        });
    }

    let total = match metric {
        Metric::Manhattan => attribute_gaps(a, b, class_attribute, scaler).sum(),
        Metric::Euclidean => attribute_gaps(a, b, class_attribute, scaler)
            .map(|gap| gap * gap)
            .sum::<f64>()
            .sqrt(),
    };
    Ok(total)
}

/// Absolute per-slot differences, skipping the class attribute.
fn attribute_gaps<'a>(
    a: &'a Instance,
    b: &'a Instance,
    class_attribute: usize,
    scaler: Option<&'a Scaler>,
) -> impl Iterator<Item = f64> + 'a {
    a.iter()
        .zip(b.iter())
        .enumerate()
        .filter(move |(column, _)| *column != class_attribute)
        .map(move |(column, (left, right))| match (left, right) {
            (AttributeValue::Numeric(x), AttributeValue::Numeric(y)) => match scaler {
                Some(s) => (s.transform(column, *x) - s.transform(column, *y)).abs(),
                None => (x - y).abs(),
            },
            _ => {
                if left == right {
                    0.0
                } else {
                    1.0
                }
            }
        })
}
