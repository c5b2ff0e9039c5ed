//! File type detection

use crate::error::{Result, ResumeIntelError};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Pdf,
    Text,
    Markdown,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pdf" => Some(FileType::Pdf),
            "txt" | "text" => Some(FileType::Text),
            "md" | "markdown" => Some(FileType::Markdown),
            _ => None,
        }
    }

    pub fn detect(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| ResumeIntelError::InvalidInput(format!("File has no extension: {}", path.display())))?;

        Self::from_extension(extension).ok_or_else(|| {
            ResumeIntelError::UnsupportedFormat(format!("Unsupported file type for: {}", path.display()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_mapping() {
        assert_eq!(FileType::from_extension("PDF"), Some(FileType::Pdf));
        assert_eq!(FileType::from_extension("markdown"), Some(FileType::Markdown));
        assert_eq!(FileType::from_extension("docx"), None);
    }

    #[test]
    fn test_detect_errors() {
        assert!(matches!(
            FileType::detect(Path::new("resume.xyz")),
            Err(ResumeIntelError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            FileType::detect(Path::new("resume")),
            Err(ResumeIntelError::InvalidInput(_))
        ));
        assert_eq!(FileType::detect(Path::new("a/b/job.txt")).unwrap(), FileType::Text);
    }
}
