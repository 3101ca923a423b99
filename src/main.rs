use clap::{Parser as ClapParser, Subcommand};
use cuanto::cli::{self, CliError, RespondOptions};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "cuanto")]
#[command(about = "Answers Spanish arithmetic questions like \"¿cuánto es 3*(4+5)?\" without eval()")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Route a message through the assistant and print the reply
    Respond {
        /// The incoming message (reads from stdin if not provided)
        message: Option<String>,

        /// Emit a {"response": ..., "kind": ...} JSON envelope
        #[arg(long)]
        json: bool,
    },

    /// Evaluate a bare arithmetic expression, skipping intent matching
    Eval {
        /// The expression, e.g. "3*(4+5)"
        expression: String,
    },
}

fn main() {
    init_tracing();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Respond { message, json } => run_respond(message, json),
        Commands::Eval { expression } => run_eval(&expression),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

// Logs go to stderr; RUST_LOG overrides the default filter.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

fn run_respond(message: Option<String>, json: bool) -> Result<(), CliError> {
    let message = match message {
        Some(text) => text,
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).map_err(CliError::Io)?;
            buffer.trim().to_string()
        }
        None => return Err(CliError::NoMessage),
    };

    if message.is_empty() {
        return Err(CliError::NoMessage);
    }

    let options = RespondOptions { message, json };
    println!("{}", cli::execute_respond(&options));
    Ok(())
}

fn run_eval(expression: &str) -> Result<(), CliError> {
    println!("{}", cli::execute_eval(expression)?);
    Ok(())
}
