use clap::Parser;
use civic_portal::utils::{logger, validation::Validate};
use civic_portal::{CliConfig, CommandLoop};
use std::io;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting civic-portal");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let catalog = match config.load_catalog() {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!(
                "❌ Failed to load service catalog: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let mut console =
        CommandLoop::new_with_monitoring(catalog, stdin.lock(), io::stdout(), config.monitor);

    let summary = console.run()?;
    tracing::info!(
        "Session finished: {} commands, {} invalid inputs",
        summary.commands_handled,
        summary.invalid_inputs
    );

    Ok(())
}
