//! Reading upload files for multipart requests.

use std::path::Path;

use tokio::fs::File;
use tokio::io::AsyncReadExt;

use crate::objects::PardotError;

/// A file read fully into memory, ready to attach to a multipart form.
#[derive(Debug)]
pub(crate) struct Upload {
    pub(crate) file_name: String,
    pub(crate) bytes: Vec<u8>,
}

/// Reads `path` into memory.
///
/// The file handle lives only inside this function and is closed on every
/// return path, so nothing stays open while the request is in flight.
pub(crate) async fn read_upload(path: &Path) -> Result<Upload, PardotError> {
    let to_error = |source| PardotError::File {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).await.map_err(to_error)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).await.map_err(to_error)?;

    let file_name = path
        .file_name()
        .map_or_else(|| "upload.csv".to_string(), |name| name.to_string_lossy().into_owned());

    Ok(Upload { file_name, bytes })
}
