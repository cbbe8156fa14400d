//! SPARQL 1.1 Query Results JSON encoding.

use std::io::Write;

use serde::Serialize;
use thiserror::Error;

use crate::Feature;

/// The media type of a SPARQL 1.1 Query Results JSON document.
pub const MEDIA_TYPE: &str = "application/sparql-results+json";

/// The variables bound in every result, in header order.
pub const VARIABLES: [&str; 7] = ["uniqueId", "start", "end", "name", "note", "strand", "type"];

const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";

#[derive(Debug, Error)]
#[error("error encoding results")]
pub struct EncodingError(#[from] serde_json::Error);

#[derive(Debug, Serialize)]
pub struct SparqlResults {
    pub head: Head,
    pub results: Results,
}

impl SparqlResults {
    pub fn len(&self) -> usize {
        self.results.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.bindings.is_empty()
    }

    pub fn to_vec(&self) -> Result<Vec<u8>, EncodingError> {
        serde_json::to_vec(self).map_err(EncodingError::from)
    }

    pub fn to_writer<W>(&self, writer: &mut W) -> Result<(), EncodingError>
    where
        W: Write,
    {
        serde_json::to_writer_pretty(writer, self).map_err(EncodingError::from)
    }
}

#[derive(Debug, Serialize)]
pub struct Head {
    pub vars: Vec<&'static str>,
}

impl Default for Head {
    fn default() -> Self {
        Self {
            vars: VARIABLES.to_vec(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Results {
    pub bindings: Vec<Binding>,
}

/// A single solution. Every binding carries exactly the variables in [`VARIABLES`].
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Binding {
    pub unique_id: Literal,
    pub start: Literal,
    pub end: Literal,
    pub name: Literal,
    pub note: Literal,
    pub strand: Literal,
    #[serde(rename = "type")]
    pub kind: Literal,
}

impl From<&Feature> for Binding {
    fn from(feature: &Feature) -> Self {
        Self {
            unique_id: Literal::plain(&feature.id),
            start: Literal::integer(feature.start),
            end: Literal::integer(feature.end),
            name: Literal::plain(&feature.name),
            note: Literal::plain(&feature.note),
            strand: Literal::integer(feature.strand.as_i8()),
            kind: Literal::plain(&feature.kind),
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TermType {
    Literal,
}

#[derive(Debug, Serialize)]
pub struct Literal {
    #[serde(rename = "type")]
    pub ty: TermType,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datatype: Option<&'static str>,
}

impl Literal {
    fn plain(value: &str) -> Self {
        Self {
            ty: TermType::Literal,
            value: value.into(),
            datatype: None,
        }
    }

    fn integer<N>(n: N) -> Self
    where
        N: Into<i128>,
    {
        Self {
            ty: TermType::Literal,
            value: n.into().to_string(),
            datatype: Some(XSD_INTEGER),
        }
    }
}

/// Encodes features as a result document, one binding per feature in input order.
pub fn encode<'f, I>(features: I) -> SparqlResults
where
    I: IntoIterator<Item = &'f Feature>,
{
    let bindings = features.into_iter().map(Binding::from).collect();

    SparqlResults {
        head: Head::default(),
        results: Results { bindings },
    }
}
