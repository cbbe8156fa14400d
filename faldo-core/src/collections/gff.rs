use std::{
    io::{BufRead, BufReader},
    path::Path,
};

use indexmap::IndexMap;
use tracing::info;

use super::FeatureCollection;
use crate::{
    Feature,
    features::{ReadFeaturesError, read_features},
};

/// Features read from GFF3, grouped by reference sequence name.
#[derive(Debug)]
pub struct GffFeatures {
    features: IndexMap<String, Vec<Feature>>,
}

impl GffFeatures {
    /// Reads features of the given type from a GFF3 source.
    ///
    /// See [`read_features`] for how records are converted.
    pub fn read<R>(
        reader: &mut R,
        feature_type: &str,
        feature_id: &str,
    ) -> Result<Self, ReadFeaturesError>
    where
        R: BufRead,
    {
        let features = read_features(reader, feature_type, feature_id)?;
        Ok(Self { features })
    }

    /// Reads features of the given type from a GFF3 file, which may be gzip-compressed.
    pub fn from_path<P>(
        src: P,
        feature_type: &str,
        feature_id: &str,
    ) -> Result<Self, ReadFeaturesError>
    where
        P: AsRef<Path>,
    {
        let src = src.as_ref();

        info!(?src, feature_type, feature_id, "reading features");

        let mut reader = crate::fs::open(src).map(BufReader::new)?;
        let collection = Self::read(&mut reader, feature_type, feature_id)?;

        info!(
            reference_sequence_count = collection.features.len(),
            feature_count = collection.len(),
            "read features"
        );

        Ok(collection)
    }

    /// Returns the number of features across all reference sequences.
    pub fn len(&self) -> usize {
        self.features.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn reference_sequence_names(&self) -> impl Iterator<Item = &str> {
        self.features.keys().map(String::as_str)
    }
}

impl FeatureCollection for GffFeatures {
    fn list_features(&self, reference_name: &str) -> &[Feature] {
        self.features
            .get(reference_name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Strand;

    const DATA: &[u8] = b"\
##gff-version 3
chr1	.	gene	101	200	.	+	.	ID=g1;Name=A
chr2	.	gene	301	400	.	-	.	ID=g2;Name=B
chr1	.	gene	501	600	.	-	.	ID=g3;Name=C
";

    #[test]
    fn test_read() -> Result<(), ReadFeaturesError> {
        let mut reader = DATA;
        let collection = GffFeatures::read(&mut reader, "gene", "ID")?;

        assert_eq!(collection.len(), 3);
        assert!(!collection.is_empty());
        assert!(collection.reference_sequence_names().eq(["chr1", "chr2"]));

        Ok(())
    }

    #[test]
    fn test_list_features() -> Result<(), ReadFeaturesError> {
        let mut reader = DATA;
        let collection = GffFeatures::read(&mut reader, "gene", "ID")?;

        assert_eq!(
            collection.list_features("chr1"),
            [
                Feature::new("g1", 100, 200, "A", "", Strand::Forward, "gene"),
                Feature::new("g3", 500, 600, "C", "", Strand::Reverse, "gene"),
            ]
        );

        assert_eq!(collection.list_features("chr2").len(), 1);
        assert!(collection.list_features("chrM").is_empty());

        Ok(())
    }
}
