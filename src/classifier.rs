use crate::error::KnnError;
use crate::instance::{AttributeValue, Instance};

/// A small trait abstraction for instance-based classifiers. This
/// centralizes the train/predict contract so callers can hold trained
/// models behind `Box<dyn Classifier>` without tying themselves to a
/// concrete implementation.
pub trait Classifier {
    /// Learn a model from `training_data`, treating the attribute at
    /// `class_attribute` as the label.
    fn fit(
        &mut self,
        training_data: Vec<Instance>,
        class_attribute: usize,
    ) -> Result<(), KnnError>;

    /// Predict the class label of a single query instance.
    fn predict(&self, query: &Instance) -> Result<AttributeValue, KnnError>;

    /// Optional human readable name for the model
    fn name(&self) -> &str {
        "classifier"
    }
}
