//! Neighbor selection.
//!
//! Computes the distance from a query to every training instance and keeps
//! the k smallest. Selection is stable: equal distances keep training-set
//! order, so the instance seen first wins a tie.

use crate::config::Metric;
use crate::data_handling::Dataset;
use crate::distance::distance;
use crate::error::KnnError;
use crate::instance::Instance;
use crate::preprocessing::Scaler;

/// One training instance paired with its distance to the query.
///
/// The reference points at the original, unnormalized instance even when a
/// scaler was applied during the distance computation.
#[derive(Debug, Clone)]
pub struct Neighbor<'a> {
    pub instance: &'a Instance,
    pub distance: f64,
}

/// The min(k, training-set size) nearest training instances, ascending by
/// distance.
///
/// A training set smaller than k yields every instance ranked rather than
/// an error.
pub fn find_nearest<'a>(
    data: &'a Dataset,
    query: &Instance,
    k: usize,
    metric: Metric,
    scaler: Option<&Scaler>,
) -> Result<Vec<Neighbor<'a>>, KnnError> {
    let mut neighbors = Vec::with_capacity(data.len());
    for instance in data.instances() {
        let d = distance(metric, instance, query, data.class_attribute(), scaler)?;
        neighbors.push(Neighbor {
            instance,
            distance: d,
        });
    }

    // stable sort keeps training order for equal distances
    neighbors.sort_by(|a, b| {
        a.distance
            .partial_cmp(&b.distance)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    neighbors.truncate(k);
    Ok(neighbors)
}
