use doctext_core::extraction::pdftotext::PdftotextExtractor;
use doctext_core::format::DocumentFormat;

pub fn list() {
    println!("Supported file extensions:\n");
    for (ext, format) in DocumentFormat::supported_extensions() {
        println!("  .{:<6} {}", ext, format);
    }

    let pdftotext = if PdftotextExtractor::is_available() {
        "available"
    } else {
        "not installed"
    };
    println!("\nPDF backends:\n");
    println!("  lopdf      built in (default)");
    println!("  pdftotext  {pdftotext}");
}
