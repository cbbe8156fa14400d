use noodles::gff::feature::record::Strand as GffStrand;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Strand {
    Forward,
    Reverse,
    #[default]
    Unknown,
}

impl Strand {
    /// Returns the signed orientation, i.e., `1`, `-1`, or `0` when unknown.
    pub fn as_i8(self) -> i8 {
        match self {
            Self::Forward => 1,
            Self::Reverse => -1,
            Self::Unknown => 0,
        }
    }
}

impl From<GffStrand> for Strand {
    fn from(strand: GffStrand) -> Self {
        match strand {
            GffStrand::Forward => Self::Forward,
            GffStrand::Reverse => Self::Reverse,
            _ => Self::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_i8() {
        assert_eq!(Strand::Forward.as_i8(), 1);
        assert_eq!(Strand::Reverse.as_i8(), -1);
        assert_eq!(Strand::Unknown.as_i8(), 0);
    }

    #[test]
    fn test_from_gff_strand() {
        assert_eq!(Strand::from(GffStrand::Forward), Strand::Forward);
        assert_eq!(Strand::from(GffStrand::Reverse), Strand::Reverse);
        assert_eq!(Strand::from(GffStrand::None), Strand::Unknown);
        assert_eq!(Strand::from(GffStrand::Unknown), Strand::Unknown);
    }
}
