use anyhow::Result;
use clap::Parser;
use md2json::{Conversion, ConvertError, ConvertOptions, DEFAULT_OUTPUT};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "md2json")]
#[command(
    about = "Convert a structured Markdown file to a JSON array of objects, using '##' headers as section titles."
)]
#[command(version)]
struct Cli {
    /// The path to the input Markdown (.md) file
    input_file: PathBuf,

    /// The path for the output JSON (.json) file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

impl From<Cli> for ConvertOptions {
    fn from(cli: Cli) -> Self {
        ConvertOptions::new(cli.input_file).output(cli.output)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = init_logging().and_then(|_| run(cli.into()));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // ConvertError messages are already user-facing
            let message = match e.downcast_ref::<ConvertError>() {
                Some(convert_error) => convert_error.to_string(),
                None => format!("An unexpected error occurred: {:#}", e),
            };
            error!("{}", message);
            eprintln!("{}", message);
            ExitCode::FAILURE
        }
    }
}

fn run(options: ConvertOptions) -> Result<()> {
    println!("Reading content from: {}", options.input.display());
    let conversion = Conversion::read(&options)?;

    if conversion.empty_input() {
        println!("Input Markdown file is empty. Generating empty JSON.");
    }
    let report = conversion.write()?;

    println!(
        "Successfully converted '{}' to JSON.",
        report.input.display()
    );
    println!("Output saved to: {}", report.output.display());

    Ok(())
}

/// Log to stderr; `RUST_LOG` overrides the default `warn` filter
fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}
