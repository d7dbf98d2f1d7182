use anyhow::Context;
use clap::Parser;
use std::sync::Arc;

use small_inn::domain::ports::AppConfig;
use small_inn::utils::error::ErrorSeverity;
use small_inn::utils::{logger, validation::Validate};
use small_inn::{create_router, AppState, CliConfig, FileConfig, SqliteStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut cli = CliConfig::parse();

    // DATABASE_URL wins over the flag, matching how deployments set it.
    if let Ok(url) = std::env::var("DATABASE_URL") {
        cli.database_url = url;
    }

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting small-inn");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config: Box<dyn AppConfig> = match &cli.config {
        Some(path) => {
            let file = FileConfig::from_file(path)
                .with_context(|| format!("loading config file {}", path.display()))?;
            exit_on_invalid(file.validate());
            Box::new(file)
        }
        None => {
            exit_on_invalid(cli.validate());
            Box::new(cli.clone())
        }
    };

    if let Err(e) = serve(config.as_ref()).await {
        tracing::error!(
            "❌ Server failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

fn exit_on_invalid(result: small_inn::Result<()>) {
    if let Err(e) = result {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }
}

async fn serve(config: &dyn AppConfig) -> small_inn::Result<()> {
    let store = SqliteStore::open(config.database_url(), config.seed_demo_data()).await?;
    let state = AppState {
        store: Arc::new(store),
    };
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(
        "🏨 Hotel booking server listening on http://{}",
        config.bind_addr()
    );
    axum::serve(listener, app).await?;

    Ok(())
}
