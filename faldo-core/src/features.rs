mod feature;
mod strand;

use std::io::{self, BufRead};

use indexmap::IndexMap;
use noodles::gff::record::attributes::field::Value;
use thiserror::Error;

pub use self::{feature::Feature, strand::Strand};

const NAME: &str = "Name";
const NOTE: &str = "Note";

#[derive(Error, Debug)]
pub enum ReadFeaturesError {
    #[error("I/O error")]
    Io(#[from] io::Error),
    #[error("missing attribute")]
    MissingAttribute,
    #[error("invalid attribute")]
    InvalidAttribute,
    #[error("invalid interval")]
    InvalidInterval,
}

/// Reads features of the given type from GFF3, grouped by reference sequence name.
///
/// Records are converted from 1-based, closed intervals to 0-based, half-open intervals. Each
/// feature's ID is read from the `feature_id` attribute; its name and note come from the `Name`
/// and `Note` attributes, respectively, and are empty when missing.
pub fn read_features<R>(
    reader: &mut R,
    feature_type: &str,
    feature_id: &str,
) -> Result<IndexMap<String, Vec<Feature>>, ReadFeaturesError>
where
    R: BufRead,
{
    use noodles::gff;

    let mut features: IndexMap<String, Vec<Feature>> = IndexMap::new();

    let mut reader = gff::io::Reader::new(reader);
    let mut line = gff::Line::default();

    while reader.read_line(&mut line)? != 0 {
        let Some(record) = line.as_record().transpose()? else {
            continue;
        };

        if record.ty() != feature_type {
            continue;
        }

        let start = usize::from(record.start()?);
        let end = usize::from(record.end()?);

        if start > end {
            return Err(ReadFeaturesError::InvalidInterval);
        }

        let strand = Strand::from(record.strand()?);

        let attributes = record.attributes();

        let id = string_value(attributes.get(feature_id))?
            .ok_or(ReadFeaturesError::MissingAttribute)?;
        let name = string_value(attributes.get(NAME))?.unwrap_or_default();
        let note = string_value(attributes.get(NOTE))?.unwrap_or_default();

        let feature = Feature::new(
            id,
            (start - 1) as u64,
            end as u64,
            name,
            note,
            strand,
            record.ty(),
        );

        features
            .entry(record.reference_sequence_name().into())
            .or_default()
            .push(feature);
    }

    Ok(features)
}

fn string_value(
    value: Option<io::Result<Value<'_>>>,
) -> Result<Option<String>, ReadFeaturesError> {
    value
        .transpose()
        .map_err(|_| ReadFeaturesError::InvalidAttribute)?
        .map(|value| match value {
            Value::String(s) => Ok(s.into()),
            Value::Array(_) => Err(ReadFeaturesError::InvalidAttribute),
        })
        .transpose()
}
