// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Vitrine server binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vitrine_server::{create_app_state, create_router, seo, version};
use vitrine_server_config::{LogFormat, LoggingConfig};

/// Vitrine server - HTTP backend for the agency site.
#[derive(Parser, Debug)]
#[command(name = "vitrine-server", about = "Vitrine agency site server", version)]
struct Args {
	/// Config file to load instead of /etc/vitrine/server.toml
	#[arg(long, env = "VITRINE_SERVER_CONFIG")]
	config: Option<PathBuf>,

	#[command(subcommand)]
	command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Run the HTTP server (default)
	Serve,
	/// Show version and build information
	Version,
	/// Print the sitemap to stdout
	Sitemap {
		/// Site origin; defaults to the configured base URL
		#[arg(long)]
		base_url: Option<String>,
	},
}

fn init_tracing(logging: &LoggingConfig) {
	let filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| logging.level.clone().into());
	let registry = tracing_subscriber::registry().with(filter);

	match logging.format {
		LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
		LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
	}
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Args::parse();

	if let Some(Command::Version) = args.command {
		println!("{}", version::format_version_info());
		return Ok(());
	}

	// Load .env file if present
	dotenvy::dotenv().ok();

	if let Some(Command::Sitemap {
		base_url: Some(base_url),
	}) = &args.command
	{
		print!("{}", seo::sitemap_xml(base_url));
		return Ok(());
	}

	let config = match &args.config {
		Some(path) => vitrine_server_config::load_config_with_file(path)?,
		None => vitrine_server_config::load_config()?,
	};

	if let Some(Command::Sitemap { .. }) = args.command {
		print!("{}", seo::sitemap_xml(&config.http.base_url));
		return Ok(());
	}

	init_tracing(&config.logging);

	vitrine_common_catalog::validate_catalog()?;

	tracing::info!(
		host = %config.http.host,
		port = config.http.port,
		backend = %config.backend.kind(),
		base_url = %config.http.base_url,
		"starting vitrine-server"
	);

	let state = create_app_state(&config).await?;
	let app = create_router(state).layer(TraceLayer::new_for_http());

	let addr = config.socket_addr();
	tracing::info!("listening on {}", addr);

	let listener = tokio::net::TcpListener::bind(&addr).await?;

	tokio::select! {
		result = axum::serve(listener, app) => {
			if let Err(e) = result {
				tracing::error!(error = %e, "Server error");
			}
		}
		_ = tokio::signal::ctrl_c() => {
			tracing::info!("Received shutdown signal");
		}
	}

	tracing::info!("Server shutdown complete");
	Ok(())
}
