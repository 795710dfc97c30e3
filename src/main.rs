//! ExifScope - Exif metadata decoder and inspection server.
//!
//! This binary dispatches the `serve` and `inspect` commands.

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use exifscope::{
    config::{Cli, Command, InspectConfig, ServeConfig},
    exif::{decode, default_density, derive_ppi, display_scale, spaced_name, tag_map},
    exiftool::ExiftoolClient,
    server::{create_router, AppState, RouterConfig},
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.into_command() {
        Command::Serve(config) => run_serve(config).await,
        Command::Inspect(config) => run_inspect(config),
    }
}

// =============================================================================
// Serve Command
// =============================================================================

async fn run_serve(config: ServeConfig) -> ExitCode {
    init_logging(config.verbose);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    info!("Configuration:");
    info!("  Extraction tool: {}", config.exiftool);
    info!(
        "  Upload cap: {}MB",
        config.max_upload_bytes / (1024 * 1024)
    );
    match &config.cors_origins {
        Some(origins) => info!("  CORS origins: {}", origins.join(", ")),
        None => info!("  CORS origins: any"),
    }

    let state = AppState::new(ExiftoolClient::new(&config.exiftool));
    let router_config = build_router_config(&config);
    let router = create_router(state, router_config);

    let addr = config.bind_address();

    info!("");
    info!("Server listening on: http://{}", addr);
    info!("");
    info!("  Try these endpoints:");
    info!("    curl http://{}/health", addr);
    info!(
        "    curl -F file=@photo.jpg http://{}/upload",
        addr
    );
    info!(
        "    curl --data-binary @photo.jpg http://{}/exif",
        addr
    );
    info!("");

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = axum::serve(listener, router).await {
        error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Build RouterConfig from the application ServeConfig.
fn build_router_config(config: &ServeConfig) -> RouterConfig {
    let mut router_config = RouterConfig::new()
        .with_max_upload_bytes(config.max_upload_bytes)
        .with_tracing(!config.no_tracing);

    if let Some(ref origins) = config.cors_origins {
        router_config = router_config.with_cors_origins(origins.clone());
    }

    router_config
}

// =============================================================================
// Inspect Command
// =============================================================================

fn run_inspect(config: InspectConfig) -> ExitCode {
    if config.verbose {
        init_logging(true);
    }

    let data = match std::fs::read(&config.file) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Error: cannot read {}: {}", config.file.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let result = match decode(&data) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let tags = tag_map(&result);
    let ppi = derive_ppi(&tags);
    let os = config.os_family();
    let density = default_density(os);
    let scale = ppi.map(|ppi| display_scale(density, ppi));

    if config.json {
        let tags_json: serde_json::Map<String, serde_json::Value> = tags
            .iter()
            .map(|(name, value)| (name.clone(), value.to_json()))
            .collect();
        let descriptions: serde_json::Map<String, serde_json::Value> = result
            .iter()
            .map(|(name, tag)| {
                (
                    spaced_name(name),
                    serde_json::Value::String(tag.description.clone()),
                )
            })
            .collect();

        let document = serde_json::json!({
            "tags": tags_json,
            "descriptions": descriptions,
            "ppi": ppi,
            "display_density": density,
            "display_scale": scale,
        });
        println!("{}", serde_json::to_string_pretty(&document).unwrap());
        return ExitCode::SUCCESS;
    }

    println!("{}", config.file.display());
    println!("─────────────────────────────────");
    for (name, tag) in &result {
        println!("  {:<28} {}", name, tag.description);
    }
    println!();
    match ppi {
        Some(ppi) => println!("Image density: {} ppi", ppi),
        None => println!("Image density: unknown"),
    }
    println!("Display density: {} ppi ({:?})", density, os);
    if let Some(scale) = scale {
        println!("Display scale: {:.3}", scale);
    }

    ExitCode::SUCCESS
}

// =============================================================================
// Logging
// =============================================================================

/// Initialize the tracing/logging subsystem.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "exifscope=debug,tower_http=debug"
    } else {
        "exifscope=info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
