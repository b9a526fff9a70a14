//! Opaque identifiers handed out by the API.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An identifier the API may send as a JSON integer or string.
///
/// It is sent back in the shape it arrived in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiId {
    Int(i64),
    Str(String),
}

impl fmt::Display for ApiId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiId::Int(id) => write!(f, "{}", id),
            ApiId::Str(id) => f.write_str(id),
        }
    }
}

impl From<&str> for ApiId {
    fn from(id: &str) -> Self {
        ApiId::Str(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_wire_shape() {
        let int: ApiId = serde_json::from_str("42").unwrap();
        let text: ApiId = serde_json::from_str("\"c-7\"").unwrap();

        assert_eq!(int, ApiId::Int(42));
        assert_eq!(text, ApiId::Str("c-7".to_string()));
        assert_eq!(serde_json::to_string(&int).unwrap(), "42");
        assert_eq!(serde_json::to_string(&text).unwrap(), "\"c-7\"");
        assert_eq!(int.to_string(), "42");
    }
}
