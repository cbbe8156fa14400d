use std::{net::SocketAddr, path::PathBuf};

use clap::Parser;

#[derive(Debug, Parser)]
pub struct ServerConfig {
    /// The socket address the server binds to.
    #[arg(long, env = "BIND_ADDRESS", default_value = "127.0.0.1:8090")]
    pub bind: SocketAddr,

    /// Input annotations (GFF3), optionally gzip-compressed.
    ///
    /// When not set, a fixed set of five sample genes is served.
    #[arg(long, env = "ANNOTATIONS")]
    pub annotations: Option<PathBuf>,

    /// The type of feature to read from the annotations, e.g., "gene", "exon", etc.
    #[arg(long, env = "FEATURE_TYPE", default_value = "gene")]
    pub feature_type: String,

    /// The attribute used as the unique ID of a feature.
    #[arg(long, env = "FEATURE_ID", default_value = "ID")]
    pub feature_id: String,
}
