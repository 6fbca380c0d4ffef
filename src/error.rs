use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures talking to the browser. Every one of these is recovered locally by
/// rendering the non-animated final state.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("no global window available")]
    NoWindow,
    #[error("{api} is unavailable: {reason}")]
    Unsupported { api: &'static str, reason: String },
}

impl HostError {
    pub fn unsupported(api: &'static str, err: JsValue) -> Self {
        let reason = err
            .as_string()
            .unwrap_or_else(|| format!("{:?}", err));
        HostError::Unsupported { api, reason }
    }
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("embedded site content is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("embedded site content is missing {0}")]
    Missing(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_names_the_api() {
        let err = HostError::Unsupported {
            api: "IntersectionObserver",
            reason: "not a constructor".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "IntersectionObserver is unavailable: not a constructor"
        );
    }

    #[test]
    fn malformed_content_wraps_serde_error() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ContentError::from(parse);
        assert!(err.to_string().starts_with("embedded site content is malformed"));
    }
}
