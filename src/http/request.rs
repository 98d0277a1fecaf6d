//! Transport-neutral request and response values.

use serde_json::Value;
use std::borrow::Cow;

/// Request methods the router distinguishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiMethod {
    /// `GET`.
    Get,
    /// `OPTIONS`, answered as a CORS preflight.
    Options,
    /// Any other method.
    Other(String),
}

impl ApiMethod {
    /// Classifies a method name, ignoring case.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        if name.eq_ignore_ascii_case("GET") {
            Self::Get
        } else if name.eq_ignore_ascii_case("OPTIONS") {
            Self::Options
        } else {
            Self::Other(name.to_ascii_uppercase())
        }
    }

    /// Returns the canonical method name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Get => "GET",
            Self::Options => "OPTIONS",
            Self::Other(name) => name,
        }
    }
}

/// A parsed request: method, path and decoded query pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    method: ApiMethod,
    path: String,
    query: Vec<(String, String)>,
}

impl ApiRequest {
    /// Parses a request target such as `/nft-holdings?walletAddress=0x..`.
    ///
    /// Query keys and values are percent-decoded with `+` read as a space.
    /// Pairs that fail to decode are dropped.
    #[must_use]
    pub fn new(method: ApiMethod, target: &str) -> Self {
        let (path, raw_query) = target.split_once('?').unwrap_or((target, ""));
        let query = raw_query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .filter_map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                Some((decode_component(key)?, decode_component(value)?))
            })
            .collect();
        Self {
            method,
            path: path.to_owned(),
            query,
        }
    }

    /// Parses a `GET` request for `target`.
    #[must_use]
    pub fn get(target: &str) -> Self {
        Self::new(ApiMethod::Get, target)
    }

    /// Returns the request method.
    #[must_use]
    pub const fn method(&self) -> &ApiMethod {
        &self.method
    }

    /// Returns the path without the query string.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the first value of query parameter `name`.
    #[must_use]
    pub fn query(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

fn decode_component(raw: &str) -> Option<String> {
    let spaced: Cow<'_, str> = if raw.contains('+') {
        Cow::Owned(raw.replace('+', " "))
    } else {
        Cow::Borrowed(raw)
    };
    urlencoding::decode(&spaced).ok().map(Cow::into_owned)
}

/// A response ready to be written by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    status: u16,
    body: Option<Value>,
}

impl ApiResponse {
    /// Creates a JSON response.
    #[must_use]
    pub const fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            body: Some(body),
        }
    }

    /// Creates a `204 No Content` response.
    #[must_use]
    pub const fn no_content() -> Self {
        Self {
            status: 204,
            body: None,
        }
    }

    /// Returns the status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Returns the JSON body, if any.
    #[must_use]
    pub const fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Returns the body rendered as compact JSON, or an empty string.
    #[must_use]
    pub fn body_text(&self) -> String {
        self.body.as_ref().map(Value::to_string).unwrap_or_default()
    }
}
