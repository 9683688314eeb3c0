use doctext_core::error::ExtractError;
use doctext_core::ExtractionResult;

pub fn print(result: &ExtractionResult) -> Result<(), ExtractError> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}
