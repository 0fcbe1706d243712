use std::path::Path;
use uuid::Uuid;

use crate::modules::media::application::domain::entities::MediaUsage;

pub const UPLOADS_DIR: &str = "uploads";
pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Relative paths to try under the static root, in order: the cleaned path
/// itself, then the same path under `uploads/` unless it already is.
pub fn candidate_paths(legacy_path: &str) -> Vec<String> {
    let cleaned = legacy_path.trim().trim_start_matches('/');
    if cleaned.is_empty() {
        return Vec::new();
    }

    let mut candidates = vec![cleaned.to_string()];
    if !cleaned.starts_with("uploads/") {
        candidates.push(format!("{}/{}", UPLOADS_DIR, cleaned));
    }
    candidates
}

/// `media/<usage>/<uuid>/<filename>`
pub fn object_key(usage: MediaUsage, id: Uuid, file_name: &str) -> String {
    format!("media/{}/{}/{}", usage.as_str(), id, file_name)
}

pub fn file_name(relative_path: &str) -> String {
    Path::new(relative_path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(relative_path)
        .to_string()
}

pub fn content_type_for(file_name: &str) -> &'static str {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => FALLBACK_CONTENT_TYPE,
    }
}
