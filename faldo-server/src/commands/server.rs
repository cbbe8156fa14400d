use std::sync::Arc;

use faldo_core::{
    FeatureCollection,
    collections::{GffFeatures, SampleFeatures},
};
use tracing::info;

use crate::{cli::ServerConfig, server};

pub async fn server(config: ServerConfig) -> anyhow::Result<()> {
    let features = load_features(&config).await?;
    server::serve(&config, features).await?;
    Ok(())
}

async fn load_features(config: &ServerConfig) -> anyhow::Result<Arc<dyn FeatureCollection>> {
    let Some(src) = config.annotations.clone() else {
        info!("serving sample features");
        return Ok(Arc::new(SampleFeatures::default()));
    };

    let feature_type = config.feature_type.clone();
    let feature_id = config.feature_id.clone();

    let features = tokio::task::spawn_blocking(move || {
        GffFeatures::from_path(src, &feature_type, &feature_id)
    })
    .await??;

    Ok(Arc::new(features))
}
