use futures::future::{FutureExt, LocalBoxFuture};
use js_sys::Uint8Array;
use okuri::{FileHandle, UploadError};
use wasm_bindgen_futures::JsFuture;

/// A file from an `<input type="file">` selection.
#[derive(Clone, Debug)]
pub struct BrowserFile(web_sys::File);

impl From<web_sys::File> for BrowserFile {
    fn from(file: web_sys::File) -> Self {
        Self(file)
    }
}

impl FileHandle for BrowserFile {
    fn name(&self) -> String {
        self.0.name()
    }

    fn size(&self) -> u64 {
        self.0.size() as u64
    }

    fn mime_type(&self) -> String {
        self.0.type_()
    }

    fn read(&self) -> LocalBoxFuture<'static, Result<Vec<u8>, UploadError>> {
        let buffer = JsFuture::from(self.0.array_buffer());
        async move {
            let buffer = buffer
                .await
                .map_err(|err| UploadError::Read(format!("{:?}", err)))?;
            Ok(Uint8Array::new(&buffer).to_vec())
        }
        .boxed_local()
    }
}
