//! job-logger command line
//!
//! Logs one line through the adapter and the process-wide tracing engine, the
//! same way a job worker would, or inspects the resolved configuration.
//!
//! ```text
//! job-logger log   --config host.toml --job-type MyApp --job-id 42 --level warning "disk low"
//! job-logger check --config host.toml --job-type MyApp
//! job-logger levels
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde_json::json;

use job_logger::config::loader::load_config;
use job_logger::config::validation::validate_config;
use job_logger::{
    JobLogger, JobRecord, LogBackend, LoggerConfig, LoggerContext, LoggerError, SeverityLevel,
};

#[derive(Parser)]
#[command(name = "job-logger")]
#[command(about = "Log job messages through the configured logging engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct HostArgs {
    /// Host config file with [global] and per-job-type tables
    #[arg(short, long)]
    config: PathBuf,

    /// Job type the messages are logged for
    #[arg(short, long)]
    job_type: String,

    /// Hostname to report instead of the system one
    #[arg(long)]
    hostname: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Log a single message
    Log {
        #[command(flatten)]
        host: HostArgs,

        /// Job id to prefix the message with
        #[arg(long)]
        job_id: Option<String>,

        /// Level name (emerg..debug) or syslog code (0-7); defaults to info
        #[arg(short, long)]
        level: Option<String>,

        /// Message text
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },
    /// Validate the configuration and print it
    Check {
        #[command(flatten)]
        host: HostArgs,
    },
    /// Print how job levels map onto engine levels
    Levels,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Log {
            host,
            job_id,
            level,
            message,
        } => {
            let level = level
                .as_deref()
                .map(str::parse::<SeverityLevel>)
                .transpose()?;
            let (config, context) = resolve(&host)?;

            let logger = JobLogger::with_global_engine(config, context);
            let job = job_id.map(JobRecord::new);
            logger.log_message(
                job.as_ref().map(|j| j as &dyn job_logger::Job),
                level,
                &message.join(" "),
            )?;
        }
        Commands::Check { host } => {
            let (config, context) = resolve(&host)?;
            let readable = validate_config(&config).map(|_| ()).map_err(|e| e.to_string());

            let logger = JobLogger::with_global_engine(config, context);
            let report = json!({
                "job_type": logger.context().job_type,
                "hostname": logger.context().hostname(),
                "category": logger.category(),
                "config": logger.config(),
                "engine_config_ok": readable.is_ok(),
                "engine_config_error": readable.err(),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Levels => {
            println!("{:<10} {:>4}  {}", "level", "code", "engine");
            for level in SeverityLevel::ALL {
                println!("{:<10} {:>4}  {}", level, level.code(), level.to_external());
            }
        }
    }

    Ok(())
}

fn resolve(host: &HostArgs) -> Result<(LoggerConfig, LoggerContext), LoggerError> {
    let config = load_config(&host.config, &host.job_type)?;

    let mut context = LoggerContext::new(&host.job_type);
    if let Some(name) = &host.hostname {
        context = context.with_hostname(name);
    }
    Ok((config, context))
}
