//! Min-max normalization fitted on the training set.
//!
//! Provides a `Scaler` holding per-column scale and translation factors so
//! attribute values can be mapped onto the unit interval before distance
//! computation. The same scaler is applied to both sides of every distance,
//! keeping attributes with large numeric ranges from dominating the metric.

use crate::data_handling::Dataset;
use crate::instance::AttributeValue;

/// Per-column scaling and translation factors.
///
/// Both vectors span the full attribute width. The class column and columns
/// without numeric values carry neutral entries (scale 1, translation 0) so
/// indices stay aligned with attribute order.
#[derive(Clone, Debug, PartialEq)]
pub struct Scaler {
    pub scale: Vec<f64>,
    pub translation: Vec<f64>,
}

impl Scaler {
    /// Map a numeric value of `column` onto the fitted range.
    pub fn transform(&self, column: usize, value: f64) -> f64 {
        (value + self.translation[column]) * self.scale[column]
    }
}

/// Fit a `Scaler` from the non-class columns of a training set.
///
/// For each column, scale = 1/(max-min) and translation = -min, so training
/// values map onto [0, 1]. A column whose numeric values are all equal keeps
/// scale 1; after translation every training value maps to 0.
pub fn fit_scaler(data: &Dataset) -> Scaler {
    let width = data.n_attributes();
    let mut scale = vec![1.0; width];
    let mut translation = vec![0.0; width];

    for column in 0..width {
        if column == data.class_attribute() {
            continue;
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for instance in data.instances() {
            if let AttributeValue::Numeric(v) = instance[column] {
                min = min.min(v);
                max = max.max(v);
            }
        }
        if min > max {
            continue; // no numeric values in this column
        }

        translation[column] = -min;
        if max > min {
            scale[column] = 1.0 / (max - min);
        }
    }

    Scaler { scale, translation }
}
