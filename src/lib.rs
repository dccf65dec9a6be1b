//! Upload dispatcher: one multipart `POST /api/upload_file` per selected file,
//! and one result per successful answer.
//!
//! The dispatcher itself knows nothing about the DOM or the terminal. Front
//! ends plug in a [`Transport`], a [`ResultsSink`] and a local spawner for
//! whatever event loop they run on.

pub mod dispatcher;
pub mod error;
pub mod file;
pub mod response;
pub mod spawn;
pub mod transport;
pub mod utils;

pub use dispatcher::{Dispatcher, ResultsSink};
pub use error::UploadError;
pub use file::{FileHandle, MemoryFile};
pub use response::UploadResponse;
pub use transport::{HttpTransport, Transport};

#[cfg(not(target_arch = "wasm32"))]
pub use file::LocalFile;
#[cfg(not(target_arch = "wasm32"))]
pub use spawn::TokioSpawner;
