const PREVIEW_CHARS: usize = 500;

pub fn print_preview(text: &str) {
    print!("{}", format_preview(text));
}

/// First 500 characters, with `...` and a total count when the text is longer.
fn format_preview(text: &str) -> String {
    let total = text.chars().count();
    if total <= PREVIEW_CHARS {
        return format!("{text}\n");
    }

    let head: String = text.chars().take(PREVIEW_CHARS).collect();
    format!("{head}...\n\nTotal characters extracted: {total}\n")
}
