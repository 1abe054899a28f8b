/// File formats accepted by the upload form and the translation service.
pub const SUPPORTED_FORMATS: [&str; 9] = [
    "doc", "docx", "pdf", "txt", "ppt", "pptx", "xlsx", "xls", "csv",
];

/// Extension to canonical MIME type, one entry per supported format.
const MIME_TYPES: [(&str, &str); 9] = [
    (
        "docx",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    ),
    ("doc", "application/msword"),
    ("pdf", "application/pdf"),
    ("txt", "text/plain"),
    ("ppt", "application/vnd.ms-powerpoint"),
    (
        "pptx",
        "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    ),
    (
        "xlsx",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    ),
    ("xls", "application/vnd.ms-excel"),
    ("csv", "text/csv"),
];

pub const FALLBACK_MIME: &str = "application/octet-stream";

pub const MIB: u64 = 1024 * 1024;

/// A document received from the browser, held in memory for the lifetime of
/// one submission. Nothing is written to disk.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub file_name: String,
    pub content: Vec<u8>,
}

impl UploadedDocument {
    pub fn new(file_name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content,
        }
    }

    /// Lower-cased text after the last dot of the file name. A name without a
    /// dot yields the whole name, which then fails the format check.
    pub fn extension(&self) -> String {
        self.file_name
            .rsplit('.')
            .next()
            .unwrap_or_default()
            .to_lowercase()
    }

    pub fn byte_size(&self) -> u64 {
        self.content.len() as u64
    }

    pub fn mime_type(&self) -> &'static str {
        mime_type_for(&self.extension())
    }
}

pub fn is_supported_format(extension: &str) -> bool {
    SUPPORTED_FORMATS.contains(&extension)
}

/// Unknown extensions should not survive validation; the fallback keeps this
/// total anyway.
pub fn mime_type_for(extension: &str) -> &'static str {
    MIME_TYPES
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, mime)| *mime)
        .unwrap_or(FALLBACK_MIME)
}

/// Per-format upload cap: 1 MiB for plain text, 50 MiB for everything else.
pub fn max_bytes_for(extension: &str) -> u64 {
    if extension == "txt" {
        MIB
    } else {
        50 * MIB
    }
}
