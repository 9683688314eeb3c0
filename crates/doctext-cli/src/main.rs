mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "doctext",
    version,
    about = "Extract plain text from PDF, DOCX, spreadsheet, CSV and text files"
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the text of a document
    Extract {
        /// Path to the document, or "-" to read standard input
        input_file: PathBuf,

        /// File name to use as the format hint (required for stdin)
        #[arg(long, required_if_eq("input_file", "-"))]
        name: Option<String>,

        /// Output format: text (default) or json
        #[arg(short, long, default_value = "text")]
        output: String,

        /// Write the extracted text to a file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Print only the first 500 characters and a character count
        #[arg(long)]
        preview: bool,

        /// TOML configuration file
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
    /// List supported file extensions
    Formats,
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let result = match cli.command {
        Commands::Extract {
            input_file,
            name,
            output,
            out,
            preview,
            config,
        } => commands::extract::run(commands::extract::ExtractArgs {
            input_file,
            name,
            output_format: output,
            output_file: out,
            preview,
            config,
        }),
        Commands::Formats => {
            commands::formats::list();
            Ok(true)
        }
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
