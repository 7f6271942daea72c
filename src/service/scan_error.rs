use std::error::Error as StdError;

use hyper::http::uri::InvalidUri;
use thiserror::Error;

/// Anything that stops a scan from producing a server answer.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("invalid scan URL `{url}`")]
    InvalidUrl {
        url: String,
        #[source]
        source: InvalidUri,
    },

    #[error("failed to encode scan request")]
    Encode(#[source] serde_json::Error),

    #[error("failed to build scan request")]
    Request(#[from] hyper::http::Error),

    #[error(transparent)]
    Connect(#[from] hyper_util::client::legacy::Error),

    #[error("failed to read response body")]
    Body(#[from] hyper::Error),

    #[error("malformed scan response")]
    Decode(#[source] serde_json::Error),
}

impl ScanError {
    /// The error followed by its chain of causes, joined with `: `.
    pub fn describe(&self) -> String {
        let mut text = self.to_string();
        let mut source = self.source();
        while let Some(cause) = source {
            text.push_str(": ");
            text.push_str(&cause.to_string());
            source = cause.source();
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_includes_causes() {
        let source = "http://exa mple".parse::<hyper::Uri>().unwrap_err();
        let detail = source.to_string();
        let error = ScanError::InvalidUrl {
            url: "http://exa mple".to_string(),
            source,
        };
        assert_eq!(error.describe(), format!("invalid scan URL `http://exa mple`: {detail}"));
    }
}
