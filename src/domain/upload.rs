#[derive(Debug, Clone, PartialEq)]
pub struct Upload {
    pub filename: String,
    pub mime_type: String,
    pub content_type: ContentType,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Pdf,
    Word,
    Image,
    Text,
}

const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
const DOC_MIME: &str = "application/msword";

impl ContentType {
    /// Routes a declared MIME type to a handling branch. Total: anything
    /// unrecognized falls through to the Text branch rather than erroring.
    pub fn from_mime(mime: &str) -> Self {
        match mime {
            "application/pdf" => Self::Pdf,
            DOCX_MIME | DOC_MIME => Self::Word,
            m if m.starts_with("image/") => Self::Image,
            _ => Self::Text,
        }
    }
}

impl Upload {
    pub fn new(filename: String, mime_type: String, size_bytes: u64) -> Self {
        let content_type = ContentType::from_mime(&mime_type);
        Self {
            filename,
            mime_type,
            content_type,
            size_bytes,
        }
    }

    /// Subtype of the declared MIME string, e.g. "png" for "image/png".
    pub fn mime_subtype(&self) -> Option<&str> {
        self.mime_type.split('/').nth(1).filter(|s| !s.is_empty())
    }
}
