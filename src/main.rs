//! varlog command line.
//!
//! Emits one info or error message with named variables through the tracing
//! sink, using the same formatting as the library.
//!
//! ```text
//! varlog [--config varlog.toml] info "cache warmed" --var entries=120 --var ratio=0.5
//! varlog error "upload failed" --var retry=false
//! varlog --config varlog.toml print-config
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use varlog::config::{load_config, VarlogConfig};
use varlog::observability::init_tracing;
use varlog::{Logger, TracingSink, Value, Vars};

#[derive(Parser)]
#[command(name = "varlog")]
#[command(about = "Log a message with named debug variables", long_about = None)]
#[command(subcommand_required = true, arg_required_else_help = true)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log at info severity
    Info(MessageArgs),
    /// Log at error severity, tagged with this command's location
    Error(MessageArgs),
    /// Print the effective configuration as JSON
    PrintConfig,
}

#[derive(clap::Args)]
struct MessageArgs {
    /// Message text.
    message: String,

    /// Named variable as NAME=VALUE; repeatable.
    #[arg(short, long = "var", value_parser = parse_var)]
    vars: Vec<(String, Value)>,
}

impl MessageArgs {
    fn vars(&self) -> Option<Vars> {
        if self.vars.is_empty() {
            return None;
        }
        Some(self.vars.iter().map(|(name, value)| (name.clone(), value)).collect())
    }
}

/// Split `NAME=VALUE` and infer the value's category.
fn parse_var(raw: &str) -> Result<(String, Value), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got {:?}", raw))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("variable name missing in {:?}", raw));
    }
    Ok((name.to_string(), infer_value(value)))
}

fn infer_value(raw: &str) -> Value {
    match raw {
        "null" => Value::Invalid,
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => {
            if let Ok(n) = raw.parse::<i128>() {
                Value::Int(n)
            } else if let Ok(n) = raw.parse::<u128>() {
                Value::Uint(n)
            } else if let Ok(f) = raw.parse::<f64>() {
                Value::F64(f)
            } else {
                Value::Str(raw.to_string())
            }
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => VarlogConfig::default(),
    };

    if let Commands::PrintConfig = cli.command {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    init_tracing(&config.observability)?;

    let sink = TracingSink::new(config.observability.logger_name.clone());
    let logger = Logger::from_config(sink, &config);

    match cli.command {
        Commands::Info(args) => {
            logger.info(&args.message, args.vars().as_ref());
        }
        Commands::Error(args) => {
            let location = varlog::caller_location!();
            logger.error_at(location, &args.message, args.vars().as_ref());
        }
        Commands::PrintConfig => {}
    }

    Ok(())
}
