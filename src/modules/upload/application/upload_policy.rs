#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_files: usize,
    pub max_file_size_bytes: u64,
    pub max_file_name_len: usize,
    pub allowed_mime_types: &'static [&'static str],
}

impl UploadPolicy {
    pub const DEFAULT_ALLOWED_MIME_TYPES: &'static [&'static str] =
        &["image/png", "image/jpeg", "image/webp"];

    /// One image per gallery entry. Multi-select was never persisted beyond
    /// the first file, so the selection boundary enforces a single file.
    pub fn single_image() -> Self {
        Self {
            max_files: 1,
            max_file_size_bytes: 5 * 1024 * 1024, // 5MB
            max_file_name_len: 255,
            allowed_mime_types: Self::DEFAULT_ALLOWED_MIME_TYPES,
        }
    }

    /// Handy for unit tests or custom wiring.
    pub fn with_max_files(max_files: usize) -> Self {
        Self {
            max_files,
            ..Self::single_image()
        }
    }

    pub fn allows_mime(&self, mime: &str) -> bool {
        self.allowed_mime_types.contains(&mime)
    }
}

/// MIME type from a file name extension, limited to the formats the admin
/// file picker accepts.
pub fn mime_for_file_name(name: &str) -> Option<&'static str> {
    let ext = name.rsplit('.').next()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}
