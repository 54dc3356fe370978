use std::{
    collections::HashMap,
    ops::{Deref, DerefMut},
};

use http::{HeaderMap, HeaderName, HeaderValue};

pub const CONTENT_TYPE: &str = "Content-Type";
pub const APPLICATION_JSON: &str = "application/json";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Headers(pub HashMap<String, String>);

impl Headers {
    /// Inserts a header, replacing any entry whose name differs only in case.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        self.0.retain(|existing, _| !existing.eq_ignore_ascii_case(&name));
        self.0.insert(name, value.into());
    }
}

impl Deref for Headers {
    type Target = HashMap<String, String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Headers {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const N: usize> From<[(String, String); N]> for Headers {
    fn from(arr: [(String, String); N]) -> Self {
        let map = arr.into_iter().collect();
        Headers(map)
    }
}

impl From<&HeaderMap> for Headers {
    fn from(headers: &HeaderMap) -> Self {
        let map = headers
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|val| (k.to_string(), val.to_string())))
            .collect();
        Headers(map)
    }
}

impl From<&Headers> for HeaderMap {
    fn from(h: &Headers) -> Self {
        let mut header_map = HeaderMap::new();
        for (k, v) in h.iter() {
            if let (Ok(name), Ok(value)) = (
                HeaderName::from_bytes(k.as_bytes()),
                HeaderValue::from_str(v),
            ) {
                header_map.insert(name, value);
            }
        }
        header_map
    }
}
