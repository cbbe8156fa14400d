mod gff;
mod sample;

pub use self::{gff::GffFeatures, sample::SampleFeatures};

use crate::Feature;

/// A read-only source of features.
pub trait FeatureCollection: Send + Sync {
    /// Returns all features on the given reference sequence.
    fn list_features(&self, reference_name: &str) -> &[Feature];
}
