use reqwest::Method;
use serde_json::Value;

/// Per-call settings for [`crate::AuthClient::request`].
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    /// Extra headers, applied over the JSON content type.
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::get()
    }
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::with_method(Method::GET)
    }

    pub fn post() -> Self {
        Self::with_method(Method::POST)
    }

    pub fn with_method(method: Method) -> Self {
        Self {
            method,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}
