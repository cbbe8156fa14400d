pub mod collections;
mod evaluate;
pub mod features;
pub mod filter;
pub mod fs;
pub mod query;
pub mod results;

pub use self::{
    collections::FeatureCollection,
    evaluate::evaluate,
    features::{Feature, Strand},
    query::{QueryParseError, RangePredicate},
    results::SparqlResults,
};
