use clap::Parser;
use yearbound::config::toml_config::TomlConfig;
use yearbound::utils::{logger, validation::Validate};
use yearbound::{build_report, lookup_zone, CliConfig, OutputFormat, ZoneRules};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let file_config = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        },
        None => TomlConfig::default(),
    };

    if file_config.json_logs() {
        logger::init_json_logger(cli.verbose, file_config.log_level());
    } else {
        logger::init_cli_logger(cli.verbose, file_config.log_level());
    }
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = file_config.validate() {
        tracing::error!("Configuration validation failed: {} ({:?})", e, e.category());
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let result = cli.instant().and_then(|instant| {
        let zone = cli.effective_zone(&file_config).map(lookup_zone).transpose()?;
        build_report(instant, zone.as_ref().map(|z| z as &dyn ZoneRules))
    });

    let report = match result {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("Boundary computation failed: {} ({:?})", e, e.category());
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(2);
        }
    };

    match cli.effective_format(&file_config) {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print!("{}", report.to_text()),
    }

    Ok(())
}
