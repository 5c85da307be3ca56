//! Data structures and helpers for labeled tabular datasets.
//!
//! This module defines `Dataset`, the validated owner of a training set and
//! its class-attribute index, and contains helpers for label access, numeric
//! column extraction, and shuffled train/eval splits.
use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::error::KnnError;
use crate::instance::{AttributeValue, Instance};

/// A rectangular set of instances with one column designated as the label.
///
/// Construction validates the data once; afterwards the set is read-only,
/// so any number of concurrent lookups against it are safe.
#[derive(Debug, Clone)]
pub struct Dataset {
    instances: Vec<Instance>,
    class_attribute: usize,
}

impl Dataset {
    /// Validate and take ownership of a training set.
    ///
    /// Fails when the data is empty, rows have inconsistent lengths, or the
    /// class-attribute index is out of range.
    pub fn new(instances: Vec<Instance>, class_attribute: usize) -> Result<Self, KnnError> {
        if instances.is_empty() {
            return Err(KnnError::InvalidInput("training data is empty".to_string()));
        }
        let width = instances[0].len();
        if width == 0 {
            return Err(KnnError::InvalidInput(
                "instances have no attributes".to_string(),
            ));
        }
        for (row, instance) in instances.iter().enumerate() {
            if instance.len() != width {
                return Err(KnnError::InvalidInput(format!(
                    "instance {} has {} attributes, expected {}",
                    row,
                    instance.len(),
                    width
                )));
            }
        }
        if class_attribute >= width {
            return Err(KnnError::InvalidInput(format!(
                "class attribute index {} out of range for {} attributes",
                class_attribute, width
            )));
        }

        Ok(Dataset {
            instances,
            class_attribute,
        })
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Attribute count per instance, the class column included.
    pub fn n_attributes(&self) -> usize {
        self.instances[0].len()
    }

    pub fn class_attribute(&self) -> usize {
        self.class_attribute
    }

    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }

    /// The label of the instance at `row`.
    pub fn label(&self, row: usize) -> &AttributeValue {
        &self.instances[row][self.class_attribute]
    }

    /// Log a short summary of the training data.
    pub fn log_summary(&self) {
        log::info!(
            "{} training instances, {} attributes, class attribute at index {}",
            self.len(),
            self.n_attributes(),
            self.class_attribute
        );

        let mut counts: Vec<(&AttributeValue, usize)> = Vec::new();
        for row in 0..self.len() {
            let label = self.label(row);
            match counts.iter_mut().find(|(seen, _)| *seen == label) {
                Some((_, n)) => *n += 1,
                None => counts.push((label, 1)),
            }
        }
        for (label, n) in &counts {
            log::debug!("class {}: {} instances", label, n);
        }
    }

    /// Extracts an attribute column as numeric values.
    ///
    /// # Returns
    /// * `Ok(Vec<f64>)` containing the column values (one per instance)
    /// * `Err` if the index is out of range or any value in the column is
    ///   categorical
    pub fn numeric_column(&self, column: usize) -> anyhow::Result<Vec<f64>> {
        if column >= self.n_attributes() {
            anyhow::bail!(
                "column index {} out of range for {} attributes",
                column,
                self.n_attributes()
            );
        }

        self.instances
            .iter()
            .enumerate()
            .map(|(row, instance)| {
                instance[column].as_numeric().ok_or_else(|| {
                    anyhow::anyhow!(
                        "instance {} holds a categorical value in column {}",
                        row,
                        column
                    )
                })
            })
            .collect()
    }

    /// Split into train and eval subsets by shuffling instance order.
    ///
    /// `train_fraction` is the share of instances assigned to the train
    /// half. A fraction that leaves either half empty fails with
    /// `InvalidInput`, since both halves must remain valid datasets.
    pub fn split(&self, train_fraction: f64) -> Result<(Dataset, Dataset), KnnError> {
        let mut indices: Vec<usize> = (0..self.len()).collect();
        indices.shuffle(&mut thread_rng());

        let n_train = ((self.len() as f64 * train_fraction) as usize).min(self.len());
        let pick = |chosen: &[usize]| {
            chosen
                .iter()
                .map(|&row| self.instances[row].clone())
                .collect::<Vec<_>>()
        };

        let train = Dataset::new(pick(&indices[..n_train]), self.class_attribute)?;
        let eval = Dataset::new(pick(&indices[n_train..]), self.class_attribute)?;
        Ok((train, eval))
    }
}
