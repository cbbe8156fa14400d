use std::io::{self, BufWriter, Read, Write};

use faldo_core::{
    FeatureCollection, QueryParseError, SparqlResults,
    collections::{GffFeatures, SampleFeatures},
    features::ReadFeaturesError,
    results::EncodingError,
};
use thiserror::Error;
use tracing::info;

use crate::cli::query;

const STDIN: &str = "-";

pub fn query(args: query::Args) -> Result<(), QueryError> {
    let features: Box<dyn FeatureCollection> = match &args.annotations {
        Some(src) => Box::new(GffFeatures::from_path(
            src,
            &args.feature_type,
            &args.feature_id,
        )?),
        None => Box::new(SampleFeatures::default()),
    };

    let query = read_query(&args.query)?;

    info!("evaluating query");

    let results = faldo_core::evaluate(features.as_ref(), &query)?;

    info!(binding_count = results.len(), "evaluated query");

    let stdout = io::stdout().lock();
    let mut writer = BufWriter::new(stdout);

    write_results(&mut writer, &results)?;

    Ok(())
}

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("I/O error")]
    Io(#[from] io::Error),
    #[error("invalid features")]
    InvalidFeatures(#[from] ReadFeaturesError),
    #[error("invalid query")]
    InvalidQuery(#[from] QueryParseError),
    #[error("invalid results")]
    Encoding(#[from] EncodingError),
}

fn read_query(query: &str) -> io::Result<String> {
    if query == STDIN {
        let mut buf = String::new();
        io::stdin().lock().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(query.into())
    }
}

fn write_results<W>(writer: &mut W, results: &SparqlResults) -> Result<(), QueryError>
where
    W: Write,
{
    results.to_writer(writer)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use faldo_core::{Feature, Strand, results::encode};

    use super::*;

    #[test]
    fn test_read_query() -> io::Result<()> {
        assert_eq!(read_query("FILTER (?start >= 1)")?, "FILTER (?start >= 1)");
        Ok(())
    }

    #[test]
    fn test_write_results() -> Result<(), QueryError> {
        let features = [Feature::new("f0", 5, 8, "F0", "", Strand::Reverse, "gene")];
        let results = encode(&features);

        let mut buf = Vec::new();
        write_results(&mut buf, &results)?;

        let expected = br#"{
  "head": {
    "vars": [
      "uniqueId",
      "start",
      "end",
      "name",
      "note",
      "strand",
      "type"
    ]
  },
  "results": {
    "bindings": [
      {
        "uniqueId": {
          "type": "literal",
          "value": "f0"
        },
        "start": {
          "type": "literal",
          "value": "5",
          "datatype": "http://www.w3.org/2001/XMLSchema#integer"
        },
        "end": {
          "type": "literal",
          "value": "8",
          "datatype": "http://www.w3.org/2001/XMLSchema#integer"
        },
        "name": {
          "type": "literal",
          "value": "F0"
        },
        "note": {
          "type": "literal",
          "value": ""
        },
        "strand": {
          "type": "literal",
          "value": "-1",
          "datatype": "http://www.w3.org/2001/XMLSchema#integer"
        },
        "type": {
          "type": "literal",
          "value": "gene"
        }
      }
    ]
  }
}
"#;

        assert_eq!(buf, expected);

        Ok(())
    }
}
