use clap::Parser;
use pythagoras::config::Command;
use pythagoras::utils::logger;
use pythagoras::{CliConfig, LocalStorage, PythagorasApp, TomlConfig};
use std::io;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // Load the configuration file, if any
    let file_config = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => TomlConfig::default(),
    };

    if cli.log_json {
        logger::init_json_logger(cli.verbose, file_config.log_level());
    } else {
        logger::init_cli_logger(cli.verbose, file_config.log_level());
    }

    tracing::info!("Starting pythagoras");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve(file_config) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.severity().exit_code());
        }
    };

    let storage = LocalStorage::new(config.output_path().to_string());
    let mut app = PythagorasApp::from_config(storage, &config);

    let stdout = io::stdout();
    let result = match cli.command() {
        Command::Triplets { format, save, .. } => app.run_triplets(format, save, &mut stdout.lock()),
        Command::Triangle { save, .. } => app.run_triangle(save, &mut stdout.lock()),
        Command::Interactive => app.run_interactive(io::stdin().lock(), stdout.lock()),
    };

    if let Err(e) = result {
        tracing::error!(
            "❌ Request failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.severity().exit_code());
    }

    Ok(())
}
