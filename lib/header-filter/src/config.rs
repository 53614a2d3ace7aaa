use crate::{FilterError, Host};
use proxy_wasm::types::Status;
use std::collections::BTreeMap;

/// Response headers to add to every stream, read from the plugin
/// configuration.
///
/// The configuration is line-oriented text:
///
/// ```text
/// # comment
/// x-served-by=wasm
/// ```
///
/// Lines starting with `#` are comments. A line is kept only if it holds
/// exactly one `=` after a non-empty key; anything else is ignored, and for a
/// repeated key the last line wins. Entries iterate in key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderConfig {
    headers: BTreeMap<String, String>,
}

impl HeaderConfig {
    pub fn parse(bytes: &[u8]) -> Self {
        HeaderConfig {
            headers: bytes.split(|b| *b == b'\n').filter_map(parse_line).collect(),
        }
    }

    /// Loads the plugin configuration; a missing one is an empty config.
    pub fn from_host<H: Host>(host: &H) -> Result<Self, FilterError> {
        match host.plugin_configuration() {
            Ok(Some(bytes)) => Ok(Self::parse(&bytes)),
            Ok(None) | Err(Status::NotFound) => Ok(Self::default()),
            Err(status) => Err(FilterError::LoadConfig(status)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|s| s.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}

fn parse_line(line: &[u8]) -> Option<(String, String)> {
    let line = std::str::from_utf8(line).ok()?;
    let line = line.strip_suffix('\r').unwrap_or(line);

    if line.starts_with('#') {
        return None;
    }

    let mut tokens = line.split('=');
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(key), Some(value), None) if !key.is_empty() => {
            Some((key.to_string(), value.to_string()))
        }
        _ => None,
    }
}
