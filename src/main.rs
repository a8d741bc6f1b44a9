#![forbid(unsafe_code)]
//! Rule Master Command Line Interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

use rulemaster::commands::{
    execute_generate, execute_init, execute_list, GenerateOptions, InitOptions, ListOptions,
};
use rulemaster::config::DEFAULT_CONFIG_FILE;
use rulemaster::{Config, RuleError};

#[derive(Parser)]
#[command(name = "rule-master")]
#[command(about = "Interactively build a project rules document from predefined rules")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file path
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Directory containing rule definitions
    #[arg(short, long, global = true, env = "RULE_MASTER_RULES")]
    rules_dir: Option<PathBuf>,

    /// Output document path
    #[arg(short, long, env = "RULE_MASTER_OUTPUT")]
    output: Option<PathBuf>,

    /// Do not offer custom rules at the end
    #[arg(long)]
    no_custom: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config and starter rules
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// List the rules that would be offered
    List,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("rulemaster=debug,rule_master=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Some(Commands::Init { force }) => {
            execute_init(InitOptions {
                config_path: cli.config,
                force,
            })?;
        }

        Some(Commands::List) => {
            let config = Config::load_or_default(&cli.config)?;
            execute_list(ListOptions { rules_dir: cli.rules_dir }, &config)?;
        }

        None => {
            let config = Config::load_or_default(&cli.config)?;
            let options = GenerateOptions {
                rules_dir: cli.rules_dir,
                output: cli.output,
                no_custom: cli.no_custom,
            };
            execute_generate(options, config)?;
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        if matches!(e.downcast_ref::<RuleError>(), Some(RuleError::Cancelled)) {
            println!("\n{} Cancelled, nothing was written", style("→").dim());
            return;
        }
        eprintln!("{} {:#}", style("✗").red(), e);
        std::process::exit(1);
    }
}
