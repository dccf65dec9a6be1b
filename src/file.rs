use futures::future::{self, FutureExt, LocalBoxFuture};

use crate::error::UploadError;

/// A file the user picked.
///
/// Name, size and type are only looked at for logging and for labelling the
/// multipart part. The content is read once, when the request body is built.
pub trait FileHandle {
    fn name(&self) -> String;
    fn size(&self) -> u64;
    fn mime_type(&self) -> String;
    fn read(&self) -> LocalBoxFuture<'static, Result<Vec<u8>, UploadError>>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryFile {
    name: String,
    mime_type: String,
    content: Vec<u8>,
}

impl MemoryFile {
    pub fn new<N, M, C>(name: N, mime_type: M, content: C) -> Self
    where
        N: Into<String>,
        M: Into<String>,
        C: Into<Vec<u8>>,
    {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            content: content.into(),
        }
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }
}

impl FileHandle for MemoryFile {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn size(&self) -> u64 {
        self.content.len() as u64
    }

    fn mime_type(&self) -> String {
        self.mime_type.clone()
    }

    fn read(&self) -> LocalBoxFuture<'static, Result<Vec<u8>, UploadError>> {
        future::ready(Ok(self.content.clone())).boxed_local()
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use local::LocalFile;

#[cfg(not(target_arch = "wasm32"))]
mod local {
    use std::io;
    use std::path::{Path, PathBuf};

    use futures::future::{FutureExt, LocalBoxFuture};

    use super::FileHandle;
    use crate::error::UploadError;

    /// A regular file on the local filesystem. Metadata is taken when the
    /// file is opened, content when the upload request is built.
    #[derive(Clone, Debug)]
    pub struct LocalFile {
        path: PathBuf,
        name: String,
        size: u64,
        mime_type: String,
    }

    impl LocalFile {
        pub async fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
            let path = path.as_ref().to_path_buf();
            let metadata = tokio::fs::metadata(&path).await?;
            if !metadata.is_file() {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("{} is not a regular file", path.display()),
                ));
            }

            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let mime_type = mime_guess::from_path(&path)
                .first_or_octet_stream()
                .to_string();

            Ok(Self {
                path,
                name,
                size: metadata.len(),
                mime_type,
            })
        }

        pub fn path(&self) -> &Path {
            &self.path
        }
    }

    impl FileHandle for LocalFile {
        fn name(&self) -> String {
            self.name.clone()
        }

        fn size(&self) -> u64 {
            self.size
        }

        fn mime_type(&self) -> String {
            self.mime_type.clone()
        }

        fn read(&self) -> LocalBoxFuture<'static, Result<Vec<u8>, UploadError>> {
            let path = self.path.clone();
            async move {
                tokio::fs::read(&path)
                    .await
                    .map_err(|err| UploadError::Read(format!("{}: {}", path.display(), err)))
            }
            .boxed_local()
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn memory_file_reports_metadata() {
        let file = MemoryFile::new("abc.png", "image/png", vec![1u8, 2, 3, 4]);
        assert_eq!(file.name(), "abc.png");
        assert_eq!(file.size(), 4);
        assert_eq!(file.mime_type(), "image/png");
    }

    #[test]
    fn memory_file_reads_content_every_time() {
        let file = MemoryFile::new("a.txt", "text/plain", "hello");
        assert_eq!(block_on(file.read()).unwrap(), b"hello".to_vec());
        assert_eq!(block_on(file.read()).unwrap(), b"hello".to_vec());
    }
}
