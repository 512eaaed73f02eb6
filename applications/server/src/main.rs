/// ChainStream Server - catalog and artist payment backend
use chainstream_core::StorageContext;
use chainstream_server::{config::ServerConfig, create_router, state::AppState};
use chainstream_storage::MemoryStore;
use clap::{Parser, Subcommand};
use std::{path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "chainstream-server")]
#[command(about = "ChainStream music catalog and artist payment server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long, env = "CHAINSTREAM_CONFIG")]
        config: Option<PathBuf>,
    },
    /// Print what the sample catalog contains
    SeedInfo,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chainstream_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config).await?;
        }
        Commands::SeedInfo => {
            seed_info().await?;
        }
    }

    Ok(())
}

async fn serve(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = ServerConfig::load_from(config_path.as_deref())?;
    config.validate()?;

    tracing::info!("Starting ChainStream Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let store = if config.catalog.seed_sample_data {
        let store = MemoryStore::seeded()?;
        tracing::info!("Catalog seeded with sample data");
        store
    } else {
        MemoryStore::new()
    };

    let addr = config.socket_addr()?;
    let app_state = AppState::new(Arc::new(store), Arc::new(config));
    let app = create_router(app_state);

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

async fn seed_info() -> anyhow::Result<()> {
    let store = MemoryStore::seeded()?;

    let artists = store.get_artists().await?;
    let tracks = store.get_all_tracks().await?;
    let playlists = store.get_playlists().await?;
    let transactions = store.get_transactions().await?;

    println!("Sample catalog:");
    println!("  {} artists", artists.len());
    for artist in &artists {
        println!(
            "    {} - {} ({}, {:.3} ETH from {} supporters)",
            artist.id, artist.name, artist.genre, artist.earnings, artist.supporters
        );
    }
    println!("  {} tracks", tracks.len());
    println!("  {} playlists", playlists.len());
    println!("  {} transactions", transactions.len());

    Ok(())
}
