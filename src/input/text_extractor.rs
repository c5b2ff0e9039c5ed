//! Text extraction from various file formats

use crate::error::{Result, ResumeIntelError};
use pulldown_cmark::{Event, Parser, Tag};
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// Selectable-text PDFs only; a scanned PDF comes back as blank text
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            ResumeIntelError::PdfExtraction(format!("Failed to extract text from PDF '{}': {}", path.display(), e))
        })?;
        Ok(compact_lines(&text))
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        Ok(fs::read_to_string(path).await?)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path).await?;
        Ok(markdown_to_text(&markdown_content))
    }
}

/// Strip markdown syntax, keeping one line per block and link targets inline
pub fn markdown_to_text(markdown: &str) -> String {
    let mut text = String::new();

    for event in Parser::new(markdown) {
        match event {
            Event::Text(t) | Event::Code(t) => text.push_str(&t),
            Event::SoftBreak => text.push(' '),
            Event::HardBreak => text.push('\n'),
            Event::End(Tag::Link(_, url, _)) => {
                text.push_str(&format!(" ({})", url));
            }
            Event::End(Tag::Paragraph | Tag::Heading(..) | Tag::Item | Tag::CodeBlock(_) | Tag::TableRow) => {
                text.push('\n');
            }
            Event::End(Tag::TableCell) => text.push_str(" | "),
            _ => {}
        }
    }

    compact_lines(&text)
}

/// Trim every line and drop the blank ones
pub fn compact_lines(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_to_text() {
        let text = markdown_to_text("# Jane Roe\n\n## Skills\n\n- **Python**\n- SQL and `dbt`\n\nSee [GitHub](https://github.com/jane).");

        assert_eq!(
            text,
            "Jane Roe\nSkills\nPython\nSQL and dbt\nSee GitHub (https://github.com/jane)."
        );
    }

    #[test]
    fn test_compact_lines() {
        assert_eq!(compact_lines("  a \n\n\n b\n   \n"), "a\nb");
    }
}
