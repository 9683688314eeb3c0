use doctext_core::config::ExtractorConfig;
use doctext_core::error::ExtractError;
use doctext_core::{Extractor, InputDocument};
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::output;

pub struct ExtractArgs {
    pub input_file: PathBuf,
    pub name: Option<String>,
    pub output_format: String,
    pub output_file: Option<PathBuf>,
    pub preview: bool,
    pub config: Option<PathBuf>,
}

/// Returns `Ok(false)` when the document produced a diagnostic.
pub fn run(args: ExtractArgs) -> Result<bool, ExtractError> {
    let config = match &args.config {
        Some(path) => ExtractorConfig::load(path)?,
        None => ExtractorConfig::default(),
    };
    let extractor = Extractor::new(config);

    let mut doc = open_input(&args.input_file, args.name.as_deref())?;
    log::info!("extracting text from {}", doc.name());
    let result = extractor.extract(Some(&mut doc));

    if args.output_format == "json" {
        output::json::print(&result)?;
        return Ok(!result.is_diagnostic());
    }

    if result.is_diagnostic() {
        eprintln!("{result}");
        return Ok(false);
    }
    let text = result.into_string();

    match args.output_file {
        Some(path) => {
            std::fs::write(&path, &text)?;
            eprintln!(
                "Extracted {} character(s), written to {}",
                text.chars().count(),
                path.display()
            );
        }
        None if args.preview => output::text::print_preview(&text),
        None => println!("{text}"),
    }

    Ok(true)
}

fn open_input(path: &Path, name: Option<&str>) -> Result<InputDocument, ExtractError> {
    if path.as_os_str() == "-" {
        let mut bytes = Vec::new();
        std::io::stdin().read_to_end(&mut bytes)?;
        return Ok(InputDocument::from_bytes(name.unwrap_or("stdin"), bytes));
    }

    match name {
        Some(name) => Ok(InputDocument::new(name, std::fs::File::open(path)?)),
        None => Ok(InputDocument::open(path)?),
    }
}
