use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Central configuration for the classifier.
///
/// All hyperparameters are set before training. The relation of `k` to the
/// training-set size is checked where `k` is used, not here, since the data
/// is not known at configuration time.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct KnnConfig {
    /// Number of nearest neighbors taking part in the vote.
    pub k: usize,
    pub metric: Metric,
    pub weighting: Weighting,
    /// Min-max scale attribute values before computing distances.
    pub normalize: bool,
}

/// Supported distance metrics.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Manhattan,
    Euclidean,
}

/// Vote aggregation modes.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Weighting {
    /// Every neighbor counts 1.0.
    Uniform,
    /// Every neighbor counts 1/distance.
    InverseDistance,
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "manhattan" => Ok(Metric::Manhattan),
            "euclidean" => Ok(Metric::Euclidean),
            _ => Err(format!(
                "Unknown metric: {}. Valid options are: manhattan, euclidean",
                s
            )),
        }
    }
}

impl FromStr for Weighting {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "uniform" => Ok(Weighting::Uniform),
            "inverse" | "inverse_distance" => Ok(Weighting::InverseDistance),
            _ => Err(format!(
                "Unknown weighting: {}. Valid options are: uniform, inverse_distance",
                s
            )),
        }
    }
}

impl KnnConfig {
    pub fn new(k: usize, metric: Metric, weighting: Weighting, normalize: bool) -> Self {
        Self {
            k,
            metric,
            weighting,
            normalize,
        }
    }
}

impl Default for KnnConfig {
    fn default() -> Self {
        Self {
            k: 1,
            metric: Metric::Manhattan,
            weighting: Weighting::Uniform,
            normalize: false,
        }
    }
}
