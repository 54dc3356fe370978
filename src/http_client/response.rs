use bytes::Bytes;

use crate::http_client::headers::Headers;

#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub headers: Headers,
    pub data: ResponseData,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Body decoding applied to every response of a client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseType {
    #[default]
    Json,
    Text,
    Bytes,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResponseData {
    Json(serde_json::Value),
    Text(String),
    Bytes(Bytes),
}

impl ResponseType {
    /// Decodes a raw body. A `Json` body that is empty or does not parse is
    /// kept as `Text` instead of failing the request.
    pub fn decode(&self, body: Bytes) -> ResponseData {
        match self {
            ResponseType::Bytes => ResponseData::Bytes(body),
            ResponseType::Text => ResponseData::Text(String::from_utf8_lossy(&body).into_owned()),
            ResponseType::Json => {
                if body.is_empty() {
                    return ResponseData::Text(String::new());
                }

                match serde_json::from_slice(&body) {
                    Ok(value) => ResponseData::Json(value),
                    Err(e) => {
                        tracing::warn!("Response body is not valid JSON, keeping it as text: {e}");
                        ResponseData::Text(String::from_utf8_lossy(&body).into_owned())
                    }
                }
            }
        }
    }
}
