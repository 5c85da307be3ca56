//! The k-nearest-neighbor classifier.
//!
//! Training stores the dataset and, when normalization is enabled, fits a
//! min-max scaler from it. Prediction is read-only against that state, so
//! independent queries can run concurrently; retraining replaces the model
//! wholesale.

use rayon::prelude::*;

use crate::classifier::Classifier;
use crate::config::{KnnConfig, Metric, Weighting};
use crate::data_handling::Dataset;
use crate::error::KnnError;
use crate::instance::{AttributeValue, Instance};
use crate::neighbors::{find_nearest, Neighbor};
use crate::preprocessing::{fit_scaler, Scaler};
use crate::voting;

/// Trained state: the stored reference set and, when normalization is on,
/// the scaler fitted from it.
#[derive(Debug, Clone)]
struct TrainedModel {
    data: Dataset,
    scaler: Option<Scaler>,
}

/// k-nearest-neighbor classifier over mixed numeric/categorical instances.
pub struct KnnClassifier {
    config: KnnConfig,
    model: Option<TrainedModel>,
}

impl KnnClassifier {
    pub fn new(config: KnnConfig) -> Self {
        KnnClassifier {
            config,
            model: None,
        }
    }

    pub fn config(&self) -> &KnnConfig {
        &self.config
    }

    pub fn k(&self) -> usize {
        self.config.k
    }

    pub fn metric(&self) -> Metric {
        self.config.metric
    }

    pub fn weighting(&self) -> Weighting {
        self.config.weighting
    }

    pub fn is_normalizing(&self) -> bool {
        self.config.normalize
    }

    pub fn set_k(&mut self, k: usize) {
        self.config.k = k;
    }

    pub fn set_metric(&mut self, metric: Metric) {
        self.config.metric = metric;
    }

    pub fn set_weighting(&mut self, weighting: Weighting) {
        self.config.weighting = weighting;
    }

    /// Toggle normalization.
    ///
    /// When a model is already trained the scaler is re-derived from (or
    /// dropped for) the stored training set, so the next prediction sees a
    /// consistent state.
    pub fn set_normalizing(&mut self, normalize: bool) {
        self.config.normalize = normalize;
        if let Some(model) = self.model.as_mut() {
            model.scaler = normalize.then(|| fit_scaler(&model.data));
        }
    }

    /// Learn the model: validate and store the training data, and fit the
    /// scaler when normalization is enabled. Retraining replaces both
    /// wholesale.
    pub fn learn_model(
        &mut self,
        training_data: Vec<Instance>,
        class_attribute: usize,
    ) -> Result<(), KnnError> {
        let data = Dataset::new(training_data, class_attribute)?;
        data.log_summary();

        let scaler = self.config.normalize.then(|| fit_scaler(&data));
        log::debug!(
            "learned model over {} instances, normalize={}",
            data.len(),
            self.config.normalize
        );

        self.model = Some(TrainedModel { data, scaler });
        Ok(())
    }

    /// The min(k, training-set size) nearest training instances for
    /// `query`, ascending by distance.
    pub fn nearest(&self, query: &Instance) -> Result<Vec<Neighbor<'_>>, KnnError> {
        let model = self.trained()?;
        if self.config.k == 0 {
            return Err(KnnError::InvalidInput("k must be at least 1".to_string()));
        }
        find_nearest(
            &model.data,
            query,
            self.config.k,
            self.config.metric,
            model.scaler.as_ref(),
        )
    }

    /// Predict the label of `query` by majority (or inverse-distance) vote
    /// among its nearest neighbors.
    pub fn classify_instance(&self, query: &Instance) -> Result<AttributeValue, KnnError> {
        let model = self.trained()?;
        let subset = self.nearest(query)?;
        voting::vote(&subset, model.data.class_attribute(), self.config.weighting)
            .ok_or_else(|| KnnError::InvalidInput("neighbor subset is empty".to_string()))
    }

    /// Per-label vote shares for `query`, normalized to sum to 1.
    pub fn votes_for(&self, query: &Instance) -> Result<voting::VoteTally, KnnError> {
        let model = self.trained()?;
        let subset = self.nearest(query)?;
        let class_attribute = model.data.class_attribute();

        let mut tally = match self.config.weighting {
            Weighting::Uniform => voting::unweighted_votes(&subset, class_attribute),
            Weighting::InverseDistance => voting::weighted_votes(&subset, class_attribute),
        };
        let total: f64 = tally.iter().map(|(_, weight)| weight).sum();
        if total > 0.0 {
            for (_, weight) in tally.iter_mut() {
                *weight /= total;
            }
        }
        Ok(tally)
    }

    /// Classify many queries, fanning out across threads.
    ///
    /// Each query is an independent read-only lookup against the trained
    /// model; the first failure aborts the batch.
    pub fn classify_batch(&self, queries: &[Instance]) -> Result<Vec<AttributeValue>, KnnError> {
        queries
            .par_iter()
            .map(|query| self.classify_instance(query))
            .collect()
    }

    fn trained(&self) -> Result<&TrainedModel, KnnError> {
        self.model.as_ref().ok_or(KnnError::ModelNotTrained)
    }
}

impl Classifier for KnnClassifier {
    fn fit(
        &mut self,
        training_data: Vec<Instance>,
        class_attribute: usize,
    ) -> Result<(), KnnError> {
        self.learn_model(training_data, class_attribute)
    }

    fn predict(&self, query: &Instance) -> Result<AttributeValue, KnnError> {
        self.classify_instance(query)
    }

    fn name(&self) -> &str {
        "k-nearest-neighbor"
    }
}

impl Default for KnnClassifier {
    fn default() -> Self {
        Self::new(KnnConfig::default())
    }
}
