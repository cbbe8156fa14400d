use crate::{Feature, RangePredicate};

/// Selects features that are contained in or overlap the predicate range.
///
/// The input order is preserved. The reference name of the predicate is not considered; scoping
/// features to a reference sequence is the responsibility of the feature collection.
pub fn filter<'f>(features: &'f [Feature], predicate: &RangePredicate) -> Vec<&'f Feature> {
    features
        .iter()
        .filter(|feature| is_contained(feature, predicate) || overlaps(feature, predicate))
        .collect()
}

fn is_contained(feature: &Feature, predicate: &RangePredicate) -> bool {
    feature.start >= predicate.start && feature.end <= predicate.end
}

fn overlaps(feature: &Feature, predicate: &RangePredicate) -> bool {
    feature.start < predicate.end && feature.end > predicate.start
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Strand,
        collections::{FeatureCollection, SampleFeatures},
    };

    fn predicate(start: u64, end: u64) -> RangePredicate {
        RangePredicate {
            reference_name: String::from("chr1"),
            start,
            end,
        }
    }

    fn ids<'f>(features: &[&'f Feature]) -> Vec<&'f str> {
        features.iter().map(|feature| feature.id.as_str()).collect()
    }

    #[test]
    fn test_filter() {
        let sample = SampleFeatures::default();
        let features = sample.list_features("chr1");

        let actual = filter(features, &predicate(15000, 45000));
        assert_eq!(ids(&actual), ["gene001", "gene002", "gene003"]);

        let actual = filter(features, &RangePredicate::default());
        assert_eq!(
            ids(&actual),
            ["gene001", "gene002", "gene003", "gene004", "gene005"]
        );

        let actual = filter(features, &predicate(20000, 25000));
        assert!(actual.is_empty());

        let actual = filter(features, &predicate(19999, 25001));
        assert_eq!(ids(&actual), ["gene001", "gene002"]);
    }

    #[test]
    fn test_filter_with_degenerate_predicates() {
        let features = [
            Feature::new("f0", 10, 20, "", "", Strand::Forward, "gene"),
            Feature::new("f1", 30, 40, "", "", Strand::Reverse, "gene"),
        ];

        // zero-width
        let actual = filter(&features, &predicate(15, 15));
        assert_eq!(ids(&actual), ["f0"]);

        let actual = filter(&features, &predicate(20, 20));
        assert!(actual.is_empty());

        // inverted
        let actual = filter(&features, &predicate(35, 12));
        assert!(actual.is_empty());

        let actual = filter(&features, &predicate(18, 12));
        assert_eq!(ids(&actual), ["f0"]);

        // Only containment selects a point on a zero-width range.
        let points = [Feature::new("p0", 20, 20, "", "", Strand::Unknown, "snv")];
        let actual = filter(&points, &predicate(20, 20));
        assert_eq!(ids(&actual), ["p0"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let sample = SampleFeatures::default();
        let predicate = predicate(15000, 45000);

        let once: Vec<_> = filter(sample.list_features("chr1"), &predicate)
            .into_iter()
            .cloned()
            .collect();

        let twice = filter(&once, &predicate);

        assert_eq!(twice.len(), once.len());
        assert!(twice.into_iter().eq(once.iter()));
    }
}
