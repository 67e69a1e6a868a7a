use anyhow::Result;
use clap::Parser;
use relmap::config::DatasetConfig;
use relmap::utils::{logger, validation::Validate};
use relmap::{CliConfig, Operation, Report, ReportEngine};

fn main() -> Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting relmap CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let operations = match parse_operations(&config.ops) {
        Ok(ops) => ops,
        Err(e) => {
            tracing::error!("Invalid operation selection: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let dataset = match DatasetConfig::from_file(&config.input) {
        Ok(dataset_config) => {
            if let Err(e) = dataset_config.validate() {
                tracing::error!("Dataset validation failed: {}", e);
                eprintln!("❌ {}", e.user_friendly_message());
                std::process::exit(1);
            }
            dataset_config.into_dataset()
        }
        Err(e) => {
            tracing::error!("Failed to load dataset from {}: {}", config.input, e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let engine = ReportEngine::new(dataset, operations);
    let report = engine.run();

    if config.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_text(&report));
    }

    tracing::info!("Report completed");
    Ok(())
}

fn parse_operations(names: &[String]) -> relmap::Result<Vec<Operation>> {
    if names.is_empty() {
        return Ok(Operation::ALL.to_vec());
    }
    names.iter().map(|name| name.parse()).collect()
}

fn render_text(report: &Report) -> String {
    let mut out = String::new();

    if let Some(total) = report.total_hours {
        out.push_str(&format!("Total hours: {}\n", total));
    }

    if let Some(names) = &report.full_names {
        out.push_str("Full names:\n");
        for name in names {
            out.push_str(&format!("  {}\n", name));
        }
    }

    if let Some(inverted) = &report.inverted {
        out.push_str("Member index:\n");
        for (member, groups) in inverted {
            out.push_str(&format!("  {}: {}\n", member, groups.join(", ")));
        }
    }

    out
}
