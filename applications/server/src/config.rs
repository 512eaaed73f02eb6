/// Server configuration
use crate::error::{Result, ServerError};
use chainstream_core::{ArtistId, UserId};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

/// Prefix of environment overrides, e.g. `CHAINSTREAM_SERVER__PORT=8080`
pub const ENV_PREFIX: &str = "CHAINSTREAM";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_catalog")]
    pub catalog: CatalogSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

/// Catalog contents and the fallbacks used by track uploads
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogSettings {
    /// Start with the sample artists, tracks and playlists
    #[serde(default = "default_seed_sample_data")]
    pub seed_sample_data: bool,

    /// Artist credited with uploads that do not name one
    #[serde(default = "default_artist_id")]
    pub default_artist_id: ArtistId,

    /// User whose library `/api/library` serves and who is billed for payments
    #[serde(default = "default_user_id")]
    pub default_user_id: UserId,

    /// Playable stand-in for upload URLs that cannot be streamed
    #[serde(default = "default_demo_audio_url")]
    pub demo_audio_url: String,

    #[serde(default = "default_cover_url")]
    pub default_cover_url: String,
}

impl ServerConfig {
    /// Load `config.toml` (if present) and environment overrides
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load an explicit config file, or `config.toml` if it exists
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from("config.toml");
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(ServerError::Config("server.port must not be 0".to_string()));
        }

        if self.catalog.demo_audio_url.trim().is_empty() {
            return Err(ServerError::Config(
                "catalog.demo_audio_url is required".to_string(),
            ));
        }

        if self.catalog.default_cover_url.trim().is_empty() {
            return Err(ServerError::Config(
                "catalog.default_cover_url is required".to_string(),
            ));
        }

        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self.server.host.parse().map_err(|e| {
            ServerError::Config(format!("invalid server.host {}: {e}", self.server.host))
        })?;
        Ok(SocketAddr::from((ip, self.server.port)))
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_catalog() -> CatalogSettings {
    CatalogSettings {
        seed_sample_data: default_seed_sample_data(),
        default_artist_id: default_artist_id(),
        default_user_id: default_user_id(),
        demo_audio_url: default_demo_audio_url(),
        default_cover_url: default_cover_url(),
    }
}

fn default_seed_sample_data() -> bool {
    true
}

fn default_artist_id() -> ArtistId {
    1
}

fn default_user_id() -> UserId {
    1
}

fn default_demo_audio_url() -> String {
    "https://cdn.freesound.org/previews/563/563087_12593596-lq.mp3".to_string()
}

fn default_cover_url() -> String {
    "https://images.unsplash.com/photo-1511379938547-c1f69419868d?w=400&auto=format&fit=crop&q=60"
        .to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            catalog: default_catalog(),
        }
    }
}
