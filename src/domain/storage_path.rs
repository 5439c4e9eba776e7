use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePath(String);

impl StoragePath {
    /// Bucket key for an uploaded file: upload timestamp plus the filename
    /// with everything outside `[A-Za-z0-9.]` replaced by underscores.
    pub fn new(timestamp_millis: i64, filename: &str) -> Self {
        let safe_name: String = filename
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '.' { c } else { '_' })
            .collect();
        Self(format!("{timestamp_millis}_{safe_name}"))
    }

    pub fn from_raw(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoragePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
