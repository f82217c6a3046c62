use serde::de::DeserializeOwned;

/// Buffered response returned by an [`super::AssetFetcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetResponse {
    status: u16,
    body: Vec<u8>,
}

impl AssetResponse {
    /// Build a response from a status code and body.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// A `200` response carrying a JSON document.
    pub fn json_body(body: impl Into<Vec<u8>>) -> Self {
        Self::new(200, body)
    }

    /// An empty `404` response.
    pub fn not_found() -> Self {
        Self::new(404, Vec::new())
    }

    /// HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// `true` for any 2xx status.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Raw body bytes.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    /// Decode the body as UTF-8 text.
    pub fn text(&self) -> Result<&str, std::str::Utf8Error> {
        std::str::from_utf8(&self.body)
    }
}
