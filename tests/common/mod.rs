#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Multipart, State},
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use okuri::{ResultsSink, UploadError};
use serde_json::json;

#[derive(Debug, Clone)]
pub struct ReceivedPart {
    pub name: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct Received {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub parts: Vec<ReceivedPart>,
}

/// How the fake endpoint answers every request.
#[derive(Debug, Clone, Copy)]
pub enum Reply {
    /// `{"path": "/files/<file name of the first part>"}`
    Stored,
    Status(StatusCode),
    NotJson,
    NoPath,
}

#[derive(Clone)]
struct FakeServer {
    received: Arc<Mutex<Vec<Received>>>,
    reply: Reply,
}

async fn record(
    State(server): State<FakeServer>,
    method: Method,
    uri: Uri,
    mut multipart: Multipart,
) -> Response {
    let mut parts = Vec::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_owned();
        let file_name = field.file_name().map(str::to_owned);
        let content_type = field.content_type().map(str::to_owned);
        let bytes = match field.bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(_) => return StatusCode::BAD_REQUEST.into_response(),
        };
        parts.push(ReceivedPart {
            name,
            file_name,
            content_type,
            bytes,
        });
    }

    let stored = parts
        .first()
        .and_then(|p| p.file_name.clone())
        .unwrap_or_default();
    server.received.lock().unwrap().push(Received {
        method,
        path: uri.path().to_owned(),
        query: uri.query().map(str::to_owned),
        parts,
    });

    match server.reply {
        Reply::Stored => Json(json!({ "path": format!("/files/{}", stored) })).into_response(),
        Reply::Status(code) => code.into_response(),
        Reply::NotJson => "ok".into_response(),
        Reply::NoPath => Json(json!({ "id": 1 })).into_response(),
    }
}

/// Serves every path with the recording handler and returns the base uri.
pub async fn spawn_server(reply: Reply) -> (String, Arc<Mutex<Vec<Received>>>) {
    let received = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new().fallback(record).with_state(FakeServer {
        received: received.clone(),
        reply,
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), received)
}

#[derive(Clone, Default)]
pub struct Collected {
    pub results: Rc<RefCell<Vec<String>>>,
    pub failures: Rc<RefCell<Vec<String>>>,
}

impl ResultsSink for Collected {
    fn on_result(&self, path: &str) {
        self.results.borrow_mut().push(path.to_owned());
    }

    fn on_failure(&self, name: &str, _err: &UploadError) {
        self.failures.borrow_mut().push(name.to_owned());
    }
}
