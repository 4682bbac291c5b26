//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use env_logger::Env;

use crate::commands;
use crate::commands::compare::CompareOptions;
use crate::config::{DbConfig, DEFAULT_DATABASE, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_TOP_ROWS};
use crate::models::Period;


/// rental-delta - compare customer rental activity across two months
#[derive(Parser)]
#[command(name = "rdelta")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log progress at info level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}


/// Database connection flags, each with an environment fallback.
#[derive(Args, Debug, Clone)]
struct ConnectionArgs {
    /// Database user
    #[arg(long, env = "DB_USER")]
    user: Option<String>,

    /// Database password
    #[arg(long, env = "DB_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Database host
    #[arg(long, env = "DB_HOST", default_value = DEFAULT_HOST)]
    host: String,

    /// Database port
    #[arg(long, env = "DB_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Database name or path to the database file
    #[arg(long, env = "DB_NAME", default_value = DEFAULT_DATABASE)]
    database: String,
}


impl ConnectionArgs {
    fn into_config(self) -> anyhow::Result<DbConfig> {
        let config = DbConfig::new(
            self.user.unwrap_or_default(),
            self.password.unwrap_or_default(),
            self.host,
            self.port,
            self.database,
        )?;
        Ok(config)
    }
}


/// A single month given as `--month` and `--year`.
#[derive(Args, Debug, Clone)]
struct PeriodArgs {
    /// Month number (1-12)
    #[arg(short, long)]
    month: u32,

    /// Four-digit year
    #[arg(short, long)]
    year: i32,
}


impl PeriodArgs {
    fn period(&self) -> anyhow::Result<Period> {
        Ok(Period::new(self.month, self.year)?)
    }
}


#[derive(Subcommand)]
enum Commands {
    /// Check the database connection and count all rentals
    Check {
        #[command(flatten)]
        connection: ConnectionArgs,
    },

    /// Fetch the rentals made in one month
    Rentals {
        #[command(flatten)]
        period: PeriodArgs,

        /// Save the rentals to this CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        connection: ConnectionArgs,
    },

    /// Count rentals per customer for one month
    Counts {
        #[command(flatten)]
        period: PeriodArgs,

        /// Save the counts to this CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        connection: ConnectionArgs,
    },

    /// Compare customers active in both of two months
    Compare {
        /// First month as MM/YYYY
        #[arg(long, default_value = "05/2005")]
        from: Period,

        /// Second month as MM/YYYY
        #[arg(long, default_value = "06/2005")]
        to: Period,

        /// Directory for the CSV outputs
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// Number of rows to print
        #[arg(short, long, default_value_t = DEFAULT_TOP_ROWS)]
        top: usize,

        /// Print summary metrics as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        connection: ConnectionArgs,
    },

    /// Compare two saved per-customer count CSV files
    Diff {
        /// Counts for the first month
        file_a: PathBuf,

        /// Counts for the second month
        file_b: PathBuf,

        /// Number of rows to print
        #[arg(short, long, default_value_t = DEFAULT_TOP_ROWS)]
        top: usize,

        /// Save the comparison to this CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}


fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let _ = env_logger::try_init_from_env(Env::default().default_filter_or(default_level));
}


/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Check { connection }) => {
            commands::check::run(&connection.into_config()?)?;
        }
        Some(Commands::Rentals { period, output, connection }) => {
            commands::rentals::run(&connection.into_config()?, period.period()?, output.as_deref())?;
        }
        Some(Commands::Counts { period, output, connection }) => {
            commands::counts::run(&connection.into_config()?, period.period()?, output.as_deref())?;
        }
        Some(Commands::Compare { from, to, output_dir, top, json, connection }) => {
            let options = CompareOptions { from, to, output_dir, top, json };
            commands::compare::run(&connection.into_config()?, &options)?;
        }
        Some(Commands::Diff { file_a, file_b, top, output }) => {
            commands::diff::run(&file_a, &file_b, top, output.as_deref())?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
