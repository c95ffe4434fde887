/// Extension used when an uploaded filename carries none we can trust.
pub const FALLBACK_EXTENSION: &str = "bin";

/// Generates an object key for an uploaded file.
///
/// The key is six random lowercase hex characters followed by the file's extension, e.g.
/// `3fa9c1.jpg`. Keys carry no sequence or timestamp.
///
/// # Arguments
/// - `file_name` - Original filename from the multipart submission
///
/// # Returns
/// - `String` - Object key such as `3fa9c1.jpg`
pub fn upload_key(file_name: &str) -> String {
    let token: [u8; 3] = rand::random();
    let token: String = token.iter().map(|byte| format!("{byte:02x}")).collect();

    format!("{}.{}", token, file_extension(file_name))
}

/// Returns the lowercased substring after the last `.` of `file_name`.
///
/// Falls back to [`FALLBACK_EXTENSION`] when there is no dot, nothing after it, or the
/// suffix contains anything other than ASCII letters and digits.
pub fn file_extension(file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()) => {
            ext.to_ascii_lowercase()
        }
        _ => FALLBACK_EXTENSION.to_string(),
    }
}
