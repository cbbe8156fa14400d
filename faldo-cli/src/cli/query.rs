use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
pub struct Args {
    /// Feature type.
    #[arg(long, default_value = "gene")]
    pub feature_type: String,

    /// Feature ID.
    #[arg(long, default_value = "ID")]
    pub feature_id: String,

    /// Input annotations file (GFF3).
    ///
    /// By default, a fixed set of five sample genes is queried.
    #[arg(long)]
    pub annotations: Option<PathBuf>,

    /// SPARQL query text.
    ///
    /// Use "-" to read the query from stdin.
    pub query: String,
}
