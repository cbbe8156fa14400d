use super::Strand;

/// A genomic annotation record in 0-based, half-open (interbase) coordinates.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Feature {
    pub id: String,
    pub start: u64,
    pub end: u64,
    pub name: String,
    pub note: String,
    pub strand: Strand,
    pub kind: String,
}

impl Feature {
    pub fn new<I, N, M, K>(
        id: I,
        start: u64,
        end: u64,
        name: N,
        note: M,
        strand: Strand,
        kind: K,
    ) -> Self
    where
        I: Into<String>,
        N: Into<String>,
        M: Into<String>,
        K: Into<String>,
    {
        Self {
            id: id.into(),
            start,
            end,
            name: name.into(),
            note: note.into(),
            strand,
            kind: kind.into(),
        }
    }
}
