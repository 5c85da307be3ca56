//! vicinity: k-nearest-neighbor classification for mixed tabular data.
//!
//! This crate implements an instance-based classifier over rows of mixed
//! numeric and categorical attribute values: distance computation (Manhattan
//! or Euclidean), stable selection of the k nearest training instances,
//! optional min-max normalization fitted on the training set, and majority
//! or inverse-distance-weighted voting.
//!
//! The design favors small, testable modules: the classifier is a plain
//! struct holding strategy enums for metric and weighting rather than a
//! subclass hierarchy.
pub mod classifier;
pub mod config;
pub mod data_handling;
pub mod distance;
pub mod error;
pub mod instance;
pub mod knn;
pub mod neighbors;
pub mod preprocessing;
pub mod voting;
