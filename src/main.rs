//! # OrderMail, the order notification service
//!
//! Watches the order collection's change feed and emails customers when a
//! payment is confirmed or an order is delivered.
//!
//! Usage:
//!   ordermail                         # Start with ~/.ordermail/config.toml
//!   ordermail --config ./config.toml  # Explicit config path
//!   ordermail --port 8080             # Override gateway port

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ordermail_core::config::OrderMailConfig;
use ordermail_engine::RuleEngine;
use ordermail_feed::{OrderWatcher, webhook_feed};
use ordermail_gateway::AppState;
use ordermail_mailer::SmtpSender;

#[derive(Parser)]
#[command(
    name = "ordermail",
    version,
    about = "📦 OrderMail order notification service"
)]
struct Cli {
    /// Config file path (default: ~/.ordermail/config.toml)
    #[arg(short, long)]
    config: Option<String>,

    /// Gateway port override
    #[arg(short, long)]
    port: Option<u16>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "ordermail=debug,tower_http=debug"
    } else {
        "ordermail=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    // Load configuration
    let mut config = match &cli.config {
        Some(path) => {
            let expanded = shellexpand::tilde(path).to_string();
            let mut c = OrderMailConfig::load_from(std::path::Path::new(&expanded))?;
            c.apply_env_overrides();
            c
        }
        None => OrderMailConfig::load()?,
    };
    if let Some(port) = cli.port {
        config.gateway.port = port;
    }

    // Upstream credential material, validated up front so a bad secret
    // fails at boot, not on the first event.
    match config.feed.service_account()? {
        Some(sa) => tracing::info!("🔑 Feed credentials loaded for project {}", sa.project_id),
        None => tracing::warn!("⚠️ No feed service account configured"),
    }

    // Customers see the store name on the From line unless overridden.
    if config.smtp.display_name.is_none() {
        config.smtp.display_name = Some(config.store_name.clone());
    }

    let sender = Arc::new(SmtpSender::new(config.smtp.clone()));
    let engine = RuleEngine::new(config.store_name.clone());
    let (injector, source) = webhook_feed(config.feed.collection.clone());

    // Watcher loop, runs for the lifetime of the process.
    let watcher = OrderWatcher::new(engine, sender);
    tokio::spawn(async move {
        if let Err(e) = watcher.run(&source).await {
            tracing::error!("❌ Watcher stopped: {e}");
        }
    });

    let state = AppState {
        collection: config.feed.collection.clone(),
        feed_token: config.feed.inbound_token.clone(),
        injector,
        start_time: std::time::Instant::now(),
    };

    ordermail_gateway::start(&config.gateway, state).await
}
