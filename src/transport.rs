use std::marker::PhantomData;

use futures::future::{FutureExt, LocalBoxFuture};
use mime::Mime;
use reqwest::multipart::{Form, Part};
use reqwest::Client;

use crate::error::UploadError;
use crate::file::FileHandle;
use crate::response::UploadResponse;
use crate::utils::{join_uri, UPLOAD_ENDPOINT};

/// Sends one file to the server and hands back what it answered.
pub trait Transport {
    type File: FileHandle;

    fn submit(&self, file: Self::File)
        -> LocalBoxFuture<'static, Result<UploadResponse, UploadError>>;
}

/// Multipart `POST` to `<base>/api/upload_file` with a single `file` part.
pub struct HttpTransport<F> {
    client: Client,
    endpoint: String,
    _file: PhantomData<fn(F)>,
}

impl<F> HttpTransport<F> {
    pub fn new<B: AsRef<str>>(base_uri: B) -> Self {
        Self::with_client(Client::new(), base_uri)
    }

    pub fn with_client<B: AsRef<str>>(client: Client, base_uri: B) -> Self {
        Self {
            client,
            endpoint: join_uri(base_uri, UPLOAD_ENDPOINT),
            _file: PhantomData,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl<F> Clone for HttpTransport<F> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            endpoint: self.endpoint.clone(),
            _file: PhantomData,
        }
    }
}

impl<F> Transport for HttpTransport<F>
where
    F: FileHandle + 'static,
{
    type File = F;

    fn submit(&self, file: F) -> LocalBoxFuture<'static, Result<UploadResponse, UploadError>> {
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();
        async move {
            let filename = file.name();
            let mime_type = file.mime_type();
            let content = file.read().await?;

            // the boundary and the request content type are left to reqwest
            let part = Part::bytes(content).file_name(filename);
            let part = match mime_type.parse::<Mime>() {
                Ok(_) => part.mime_str(&mime_type)?,
                Err(err) => {
                    // an unparseable type is dropped, never fatal
                    log::debug!("sending part without type {:?}: {}", mime_type, err);
                    part
                }
            };
            let form = Form::new().part("file", part);

            let resp = client.post(&endpoint).multipart(form).send().await?;
            if !resp.status().is_success() {
                return Err(UploadError::Status(resp.status()));
            }
            let body = resp.bytes().await?;
            Ok(UploadResponse::from_slice(body.as_ref())?)
        }
        .boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::MemoryFile;

    #[test]
    fn endpoint_is_fixed_under_base() {
        let transport = HttpTransport::<MemoryFile>::new("http://127.0.0.1:5000/");
        assert_eq!(transport.endpoint(), "http://127.0.0.1:5000/api/upload_file");

        let transport = transport.clone();
        assert_eq!(transport.endpoint(), "http://127.0.0.1:5000/api/upload_file");
    }
}
