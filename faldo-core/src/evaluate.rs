use tracing::info;

use crate::{
    FeatureCollection, QueryParseError, SparqlResults, filter::filter, query::interpret,
    results::encode,
};

/// Evaluates a range query against a feature collection.
///
/// The query text is interpreted as a range predicate, the features on the predicate's reference
/// sequence are filtered by it, and the selected features are encoded as a result document.
pub fn evaluate<C>(collection: &C, query: &str) -> Result<SparqlResults, QueryParseError>
where
    C: FeatureCollection + ?Sized,
{
    let predicate = interpret(query)?;

    info!(
        reference_name = %predicate.reference_name,
        start = predicate.start,
        end = predicate.end,
        "parsed query"
    );

    let features = collection.list_features(&predicate.reference_name);
    let selected = filter(features, &predicate);

    info!(
        feature_count = features.len(),
        selected_feature_count = selected.len(),
        "filtered features"
    );

    Ok(encode(selected))
}
