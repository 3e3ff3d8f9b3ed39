//! Provider construction and selection.

mod hashed;
mod openai;

pub use hashed::HashedTfClient;
pub use openai::OpenAiClient;

use navio_core::config::EmbeddingConfig;
use navio_core::errors::{NavioError, NavioResult};
use navio_core::traits::IEmbeddingClient;
use tracing::info;

/// Build the embedding client named by `config.provider`.
pub fn create_client(config: &EmbeddingConfig) -> NavioResult<Box<dyn IEmbeddingClient>> {
    let client: Box<dyn IEmbeddingClient> = match config.provider.as_str() {
        "openai" => Box::new(OpenAiClient::new(config)?),
        "hashed" => Box::new(HashedTfClient::new(config.dimensions)),
        other => {
            return Err(NavioError::ConfigError {
                reason: format!("unknown embedding provider: {other}"),
            })
        }
    };

    info!(
        provider = client.name(),
        dims = client.dimensions(),
        "embedding client initialized"
    );

    Ok(client)
}
