use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use wedding_invitations::config::Config;
use wedding_invitations::i18n::TranslationCatalog;
use wedding_invitations::web::{build_app, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("wedding_invitations=info".parse()?),
        )
        .init();

    info!("Starting wedding invitations site");

    // Load configuration from environment
    let config = Config::from_env()?;

    let catalog = match &config.locales_dir {
        Some(dir) => {
            info!("Loading translations from {}", dir.display());
            TranslationCatalog::from_dir(dir)?
        }
        None => TranslationCatalog::embedded()?,
    };

    if let Some(dir) = &config.assets_dir {
        info!("Serving images from {}", dir.display());
    }

    let addr = config.bind_addr();
    let app = build_app(Arc::new(AppState::new(catalog, config)));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
