//! Filesystem store for product images and fonts.
//!
//! Uploaded files are written under a single directory with generated names and exposed to
//! browsers under [`UPLOAD_URL_PREFIX`]. Products reference their files by that public URL.

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::server::{
    error::{upload::UploadError, Error},
    model::product::UploadedFile,
};

/// URL path under which the upload directory is served.
pub const UPLOAD_URL_PREFIX: &str = "/static/uploads";

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "svg"];
const FONT_EXTENSIONS: &[&str] = &["ttf", "otf", "woff", "woff2"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadKind {
    Image,
    Font,
}

impl UploadKind {
    /// Name of the multipart field carrying this kind of file.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Font => "font_file",
        }
    }

    fn allowed_extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Image => IMAGE_EXTENSIONS,
            Self::Font => FONT_EXTENSIONS,
        }
    }

    /// Returns the lower-cased extension of `file_name` if it is allowed for this kind.
    pub fn validate(&self, file_name: &str) -> Result<String, UploadError> {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension {
            Some(ext) if self.allowed_extensions().contains(&ext.as_str()) => Ok(ext),
            _ => Err(UploadError::UnsupportedFileType {
                field: self.field().to_string(),
                file_name: file_name.to_string(),
            }),
        }
    }
}

#[derive(Clone, Debug)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Creates the upload directory if it does not exist yet.
    pub async fn ensure_dir(&self) -> Result<(), Error> {
        tokio::fs::create_dir_all(&self.dir).await?;

        Ok(())
    }

    /// Writes an uploaded file and returns its public URL.
    ///
    /// The stored name is a fresh UUID plus the validated extension, the client supplied file
    /// name never reaches the filesystem.
    ///
    /// # Returns
    /// - `Ok(String)` - Public URL of the stored file
    /// - `Err(Error::UploadError)` - Empty file or extension not allowed for `kind`
    /// - `Err(Error::IoError)` - Writing the file failed
    pub async fn save(&self, kind: UploadKind, file: &UploadedFile) -> Result<String, Error> {
        if file.bytes.is_empty() {
            return Err(UploadError::EmptyFile {
                field: kind.field().to_string(),
            }
            .into());
        }

        let extension = kind.validate(&file.file_name)?;
        let stored_name = format!("{}.{}", uuid::Uuid::new_v4(), extension);

        self.ensure_dir().await?;
        tokio::fs::write(self.dir.join(&stored_name), &file.bytes).await?;

        tracing::debug!(
            file = %stored_name,
            bytes = file.bytes.len(),
            "Stored uploaded {}",
            kind.field()
        );

        Ok(format!("{}/{}", UPLOAD_URL_PREFIX, stored_name))
    }

    /// Deletes the file behind a public URL previously returned by [`UploadStore::save`].
    ///
    /// URLs outside the store (external images) are left alone.
    ///
    /// # Returns
    /// - `Ok(true)` - File was deleted
    /// - `Ok(false)` - URL does not belong to the store or the file was already gone
    /// - `Err(Error::IoError)` - Deleting the file failed
    pub async fn remove(&self, url: &str) -> Result<bool, Error> {
        let Some(stored_name) = stored_name(url) else {
            return Ok(false);
        };

        match tokio::fs::remove_file(self.dir.join(stored_name)).await {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    /// Best-effort removal used when cleaning up after a failed or superseded write.
    pub async fn discard(&self, url: &str) {
        if let Err(err) = self.remove(url).await {
            tracing::warn!(url = %url, "Failed to remove uploaded file: {}", err);
        }
    }
}

fn stored_name(url: &str) -> Option<&str> {
    let name = url.strip_prefix(UPLOAD_URL_PREFIX)?.strip_prefix('/')?;

    let is_plain_file_name = !name.is_empty()
        && !name.contains(['/', '\\'])
        && name != "."
        && name != "..";

    is_plain_file_name.then_some(name)
}
