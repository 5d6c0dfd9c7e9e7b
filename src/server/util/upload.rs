//! Storage of uploaded profile pictures under the configured upload directory.

use std::path::{Path, PathBuf};

use crate::server::error::AppError;

/// Subdirectory of the upload root holding profile pictures.
pub const AVATAR_DIR: &str = "avatars";

/// URL prefix the upload root is served under.
pub const UPLOAD_URL_PREFIX: &str = "/uploads";

const ALLOWED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Extracts the lowercase extension of an uploaded image, rejecting anything but jpg/jpeg/png.
///
/// # Returns
/// - `Ok(String)` - Lowercase extension without the dot
/// - `Err(AppError::BadRequest)` - Missing or disallowed extension
pub fn image_extension(file_name: &str) -> Result<String, AppError> {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .filter(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
        .ok_or_else(|| {
            AppError::BadRequest("Profile picture must be a .jpg, .jpeg or .png file".to_string())
        })
}

/// A file written to the upload directory.
#[derive(Debug, Clone)]
pub struct StoredUpload {
    /// Location on disk.
    pub file_path: PathBuf,
    /// Path the file is served under, as stored in the database.
    pub public_path: String,
}

/// Writes a profile picture as `avatars/user_<id>_<unix_ts>.<ext>`.
pub async fn store_avatar(
    upload_dir: &Path,
    user_id: i32,
    timestamp: i64,
    extension: &str,
    bytes: &[u8],
) -> Result<StoredUpload, AppError> {
    let file_name = format!("user_{}_{}.{}", user_id, timestamp, extension);
    let dir = upload_dir.join(AVATAR_DIR);

    tokio::fs::create_dir_all(&dir).await?;

    let file_path = dir.join(&file_name);
    tokio::fs::write(&file_path, bytes).await?;

    Ok(StoredUpload {
        file_path,
        public_path: format!("{}/{}/{}", UPLOAD_URL_PREFIX, AVATAR_DIR, file_name),
    })
}

/// Resolves a stored public path (`/uploads/...`) back to its location on disk.
///
/// Returns `None` for paths outside the upload prefix or containing parent components.
pub fn resolve_public_path(upload_dir: &Path, public_path: &str) -> Option<PathBuf> {
    let relative = public_path
        .strip_prefix(UPLOAD_URL_PREFIX)?
        .trim_start_matches('/');

    if relative.is_empty() || relative.split('/').any(|part| part == ".." || part.is_empty()) {
        return None;
    }

    Some(upload_dir.join(relative))
}

/// Deletes a file, logging instead of failing.
pub async fn remove_file_best_effort(path: &Path) {
    if let Err(e) = tokio::fs::remove_file(path).await {
        tracing::warn!("Failed to remove upload {}: {}", path.display(), e);
    }
}
