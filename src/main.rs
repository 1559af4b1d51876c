//! tplfill CLI
//!
//! Usage:
//!   tplfill [--in FILE] [--properties FILE] [--interactive] [--out FILE]
//!   tplfill --list-params [--in FILE]

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use tplfill::{run, streams, Config, Error, Outcome, TerminalPrompt};

#[derive(Parser, Debug)]
#[command(name = "tplfill")]
#[command(about = "Substitute ${NAME} placeholders in a template")]
struct Cli {
    /// List all template variables and exit
    #[arg(long = "list-params")]
    list_params: bool,

    /// Path to input template file (default: stdin)
    #[arg(long = "in", value_name = "PATH")]
    input: Option<PathBuf>,

    /// Path to properties file (key=value)
    #[arg(long, value_name = "PATH")]
    properties: Option<PathBuf>,

    /// Prompt for missing variables interactively
    #[arg(long)]
    interactive: bool,

    /// Path to write output (default: stdout)
    #[arg(long, value_name = "PATH")]
    out: Option<PathBuf>,

    /// Diagnostic log level written to stderr (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: tracing::Level,
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Config::new()
            .with_list_params(cli.list_params)
            .with_input(cli.input.clone())
            .with_properties(cli.properties.clone())
            .with_interactive(cli.interactive)
            .with_output(cli.out.clone())
    }
}

fn setup_logging(level: tracing::Level) {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .without_time()
        .with_target(false)
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

fn execute(config: &Config) -> Result<(), Error> {
    let template = streams::read_template(config.input.as_deref())?;

    // Prompts go to stderr so they never mix with rendered output on stdout.
    let mut prompt = TerminalPrompt::new(io::stdin().lock(), io::stderr());

    match run(config, &template, &mut prompt)? {
        Outcome::Listing(names) => {
            for name in names {
                println!("{}", name);
            }
        }
        Outcome::Rendered(bytes) => streams::write_output(config.output.as_deref(), &bytes)?,
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.log_level);

    let config = Config::from(&cli);
    debug!(?config, "starting");

    match execute(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
