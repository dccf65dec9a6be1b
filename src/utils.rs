/// Path the server accepts uploads on.
pub const UPLOAD_ENDPOINT: &str = "/api/upload_file";

pub fn join_uri<P, Q>(base_uri: P, rest: Q) -> String
where
    P: AsRef<str>,
    Q: AsRef<str>,
{
    let base_uri = base_uri.as_ref();
    let rest = rest.as_ref();
    if base_uri.ends_with('/') {
        if let Some(stripped) = rest.strip_prefix('/') {
            format!("{}{}", base_uri, stripped)
        } else {
            format!("{}{}", base_uri, rest)
        }
    } else if rest.starts_with('/') {
        format!("{}{}", base_uri, rest)
    } else {
        format!("{}/{}", base_uri, rest)
    }
}
