use std::io::{Cursor, Read};

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::ExtractError;
use crate::extraction::{finish, ExtractionResult};
use crate::input::InputDocument;

const DOCUMENT_PART: &str = "word/document.xml";

/// Elements that may sit between a paragraph and its runs.
const RUN_CONTAINERS: &[&[u8]] = &[b"w:hyperlink", b"w:ins", b"w:smartTag", b"w:fldSimple"];

/// Read the body paragraphs of a DOCX document, one per line.
pub fn extract_docx(doc: &mut InputDocument) -> ExtractionResult {
    let outcome = doc
        .read_all()
        .map_err(ExtractError::from)
        .and_then(|bytes| read_document_xml(&bytes))
        .and_then(|xml| body_paragraphs(&xml))
        .map(|paragraphs| paragraphs.join("\n"));
    finish(outcome, "Error reading DOCX")
}

fn read_document_xml(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    let mut part = archive.by_name(DOCUMENT_PART).map_err(|e| match e {
        zip::result::ZipError::FileNotFound => {
            ExtractError::Malformed(format!("no {DOCUMENT_PART} in archive"))
        }
        other => other.into(),
    })?;
    let mut xml = String::new();
    part.read_to_string(&mut xml)?;
    Ok(xml)
}

/// Text of each `w:p` that is a direct child of `w:body`.
///
/// Paragraphs nested in tables, text boxes or content controls are not part
/// of the body sequence and are skipped.
pub fn body_paragraphs(xml: &str) -> Result<Vec<String>, ExtractError> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Vec<u8>> = Vec::new();
    let mut current: Option<String> = None;
    let mut paragraphs = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = e.name().as_ref().to_vec();
                if name == b"w:p" && parent_is_body(&stack) {
                    current = Some(String::new());
                }
                stack.push(name);
            }
            Event::End(e) => {
                stack.pop();
                if e.name().as_ref() == b"w:p" && parent_is_body(&stack) {
                    if let Some(text) = current.take() {
                        paragraphs.push(text);
                    }
                }
            }
            Event::Empty(e) => {
                if e.name().as_ref() == b"w:p" && parent_is_body(&stack) {
                    paragraphs.push(String::new());
                } else if let Some(text) = current.as_mut() {
                    if in_body_run(&stack) {
                        if let Some(s) = run_marker(&e) {
                            text.push_str(s);
                        }
                    }
                }
            }
            Event::Text(t) => {
                if let Some(text) = current.as_mut() {
                    let (run, tail) = stack.split_at(stack.len().saturating_sub(1));
                    if tail.first().map(Vec::as_slice) == Some(&b"w:t"[..]) && in_body_run(run) {
                        let unescaped = t
                            .unescape()
                            .map_err(|e| ExtractError::Malformed(e.to_string()))?;
                        text.push_str(&unescaped);
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}

fn parent_is_body(stack: &[Vec<u8>]) -> bool {
    stack.last().map(Vec::as_slice) == Some(&b"w:body"[..])
}

/// True when `stack` ends at a `w:r` belonging to a body paragraph.
fn in_body_run(stack: &[Vec<u8>]) -> bool {
    let Some(body) = stack.iter().rposition(|n| n == b"w:body") else {
        return false;
    };
    match &stack[body + 1..] {
        [p, middle @ .., r] if p == b"w:p" && r == b"w:r" => middle
            .iter()
            .all(|n| RUN_CONTAINERS.contains(&n.as_slice())),
        _ => false,
    }
}

/// Text produced by self-closing run children.
fn run_marker(e: &BytesStart) -> Option<&'static str> {
    match e.name().as_ref() {
        b"w:tab" | b"w:ptab" => Some("\t"),
        b"w:noBreakHyphen" => Some("-"),
        b"w:cr" => Some("\n"),
        b"w:br" => {
            let kind = e
                .attributes()
                .flatten()
                .find(|a| a.key.as_ref() == b"w:type")
                .map(|a| a.value.into_owned());
            match kind.as_deref() {
                None | Some(b"textWrapping") => Some("\n"),
                _ => None,
            }
        }
        _ => None,
    }
}
