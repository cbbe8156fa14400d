use super::FeatureCollection;
use crate::{Feature, Strand};

/// A fixed set of five sample genes.
///
/// The same features are listed for every reference sequence.
pub struct SampleFeatures(Vec<Feature>);

impl Default for SampleFeatures {
    fn default() -> Self {
        const KIND: &str = "gene";

        Self(vec![
            Feature::new(
                "gene001",
                10000,
                20000,
                "GENE1",
                "Dummy gene 1 for testing",
                Strand::Forward,
                KIND,
            ),
            Feature::new(
                "gene002",
                25000,
                35000,
                "GENE2",
                "Dummy gene 2 for testing",
                Strand::Reverse,
                KIND,
            ),
            Feature::new(
                "gene003",
                40000,
                50000,
                "GENE3",
                "Dummy gene 3 for testing",
                Strand::Forward,
                KIND,
            ),
            Feature::new(
                "gene004",
                55000,
                65000,
                "GENE4",
                "Dummy gene 4 for testing",
                Strand::Reverse,
                KIND,
            ),
            Feature::new(
                "gene005",
                70000,
                80000,
                "GENE5",
                "Dummy gene 5 for testing",
                Strand::Forward,
                KIND,
            ),
        ])
    }
}

impl FeatureCollection for SampleFeatures {
    fn list_features(&self, _: &str) -> &[Feature] {
        &self.0
    }
}
