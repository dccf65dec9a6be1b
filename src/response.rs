use serde::Deserialize;

/// Body the server answers a successful upload with.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct UploadResponse {
    /// Where the stored file can be fetched from. Used as both the link target
    /// and the link text.
    pub path: String,
}

impl UploadResponse {
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_path() {
        let resp = UploadResponse::from_slice(br#"{"path": "/files/abc.png"}"#).unwrap();
        assert_eq!(resp.path, "/files/abc.png");
    }

    #[test]
    fn ignores_extra_fields() {
        let resp =
            UploadResponse::from_slice(br#"{"path": "/files/a.txt", "size": 3}"#).unwrap();
        assert_eq!(resp.path, "/files/a.txt");
    }

    #[test]
    fn rejects_missing_or_mistyped_path() {
        assert!(UploadResponse::from_slice(br#"{}"#).is_err());
        assert!(UploadResponse::from_slice(br#"{"path": 42}"#).is_err());
        assert!(UploadResponse::from_slice(b"<html>ok</html>").is_err());
        assert!(UploadResponse::from_slice(b"").is_err());
    }
}
