//! Vote aggregation over a neighbor subset.
//!
//! A tally maps class labels to accumulated vote weight. It is kept as a
//! vector in first-seen order: labels may hold floats, so they are neither
//! `Ord` nor `Hash`, and insertion order is what makes tie-breaking
//! deterministic.

use crate::config::Weighting;
use crate::instance::AttributeValue;
use crate::neighbors::Neighbor;

/// Class labels with their accumulated vote weight, in first-seen order.
pub type VoteTally = Vec<(AttributeValue, f64)>;

/// Floor for inverse-distance weights. An exact match (distance 0) is
/// clamped here before inversion, giving it a weight of 1e12: large enough
/// to dominate any realistic tally, while several exact matches still
/// accumulate separately and no division by zero can occur.
const MIN_DISTANCE: f64 = 1e-12;

/// Collect votes with every neighbor counting 1.0.
pub fn unweighted_votes(subset: &[Neighbor], class_attribute: usize) -> VoteTally {
    let mut tally = VoteTally::new();
    for neighbor in subset {
        add_vote(&mut tally, &neighbor.instance[class_attribute], 1.0);
    }
    tally
}

/// Collect votes with every neighbor counting the inverse of its distance.
pub fn weighted_votes(subset: &[Neighbor], class_attribute: usize) -> VoteTally {
    let mut tally = VoteTally::new();
    for neighbor in subset {
        let weight = 1.0 / neighbor.distance.max(MIN_DISTANCE);
        add_vote(&mut tally, &neighbor.instance[class_attribute], weight);
    }
    tally
}

fn add_vote(tally: &mut VoteTally, label: &AttributeValue, weight: f64) {
    match tally.iter_mut().find(|(seen, _)| seen == label) {
        Some((_, total)) => *total += weight,
        None => tally.push((label.clone(), weight)),
    }
}

/// The label with the highest accumulated weight.
///
/// Ties go to the label that entered the tally first. Returns `None` only
/// for an empty tally.
pub fn winner(tally: &VoteTally) -> Option<AttributeValue> {
    let mut best: Option<(&AttributeValue, f64)> = None;
    for (label, weight) in tally {
        match best {
            Some((_, best_weight)) if *weight <= best_weight => {}
            _ => best = Some((label, *weight)),
        }
    }
    best.map(|(label, _)| label.clone())
}

/// Tally `subset` according to `weighting` and resolve the winner.
///
/// This is the single integration point used by classification.
pub fn vote(
    subset: &[Neighbor],
    class_attribute: usize,
    weighting: Weighting,
) -> Option<AttributeValue> {
    let tally = match weighting {
        Weighting::Uniform => unweighted_votes(subset, class_attribute),
        Weighting::InverseDistance => weighted_votes(subset, class_attribute),
    };
    winner(&tally)
}
