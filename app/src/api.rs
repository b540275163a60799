use gloo_net::http::Request;
use serde::Serialize;
use serde_json::Value;

use crate::error::HumanizeError;

#[derive(Debug, Clone, Serialize)]
pub struct HumanizeRequest<'a> {
    pub text: &'a str,
}

/// What the server said, once the body parsed as JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum HumanizeReply {
    Humanized { text: String, similarity: f64 },
    ServerError(String),
    Unexpected,
}

impl HumanizeReply {
    /// Sorts a response body into one of the three known shapes.
    ///
    /// An empty `humanized` string does not count as a result; the body is
    /// then checked for `error` like any other.
    pub fn classify(body: &Value) -> Self {
        if let Some(text) = body.get("humanized").and_then(Value::as_str) {
            if !text.is_empty() {
                let similarity = body.get("similarity").and_then(Value::as_f64).unwrap_or(0.0);
                return HumanizeReply::Humanized {
                    text: text.to_string(),
                    similarity,
                };
            }
        }
        match body.get("error") {
            Some(Value::String(msg)) if !msg.is_empty() => HumanizeReply::ServerError(msg.clone()),
            Some(Value::Number(n)) => HumanizeReply::ServerError(n.to_string()),
            _ => HumanizeReply::Unexpected,
        }
    }
}

/// Similarity score in [0,1] as a percentage with two decimals.
pub fn format_similarity(score: f64) -> String {
    format!("{:.2}%", score * 100.0)
}

/// POSTs the text and parses whatever JSON comes back, whatever the status.
pub async fn humanize(endpoint: &str, text: &str) -> Result<HumanizeReply, HumanizeError> {
    let send_err = |source| HumanizeError::Send {
        endpoint: endpoint.to_string(),
        source,
    };
    let resp = Request::post(endpoint)
        .json(&HumanizeRequest { text })
        .map_err(send_err)?
        .send()
        .await
        .map_err(send_err)?;

    if !resp.ok() {
        log::debug!("{endpoint} answered HTTP {}", resp.status());
    }

    let body: Value = resp.json().await.map_err(|source| HumanizeError::Decode {
        endpoint: endpoint.to_string(),
        source,
    })?;
    let reply = HumanizeReply::classify(&body);
    log::debug!("humanize reply: {reply:?}");
    Ok(reply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_body_has_a_single_text_field() {
        let body = serde_json::to_value(HumanizeRequest { text: "hello there" }).unwrap();
        assert_eq!(body, json!({ "text": "hello there" }));
    }

    #[test]
    fn humanized_reply() {
        let reply = HumanizeReply::classify(&json!({ "humanized": "Hi there", "similarity": 0.8765 }));
        assert_eq!(
            reply,
            HumanizeReply::Humanized {
                text: "Hi there".into(),
                similarity: 0.8765
            }
        );
    }

    #[test]
    fn missing_similarity_reads_as_zero() {
        let reply = HumanizeReply::classify(&json!({ "humanized": "ok" }));
        assert_eq!(
            reply,
            HumanizeReply::Humanized {
                text: "ok".into(),
                similarity: 0.0
            }
        );
    }

    #[test]
    fn error_reply() {
        assert_eq!(
            HumanizeReply::classify(&json!({ "error": "bad request" })),
            HumanizeReply::ServerError("bad request".into())
        );
        assert_eq!(
            HumanizeReply::classify(&json!({ "error": 429 })),
            HumanizeReply::ServerError("429".into())
        );
    }

    #[test]
    fn empty_result_falls_through_to_error() {
        assert_eq!(
            HumanizeReply::classify(&json!({ "humanized": "", "error": "model timeout" })),
            HumanizeReply::ServerError("model timeout".into())
        );
        assert_eq!(
            HumanizeReply::classify(&json!({ "humanized": "" })),
            HumanizeReply::Unexpected
        );
    }

    #[test]
    fn other_shapes_are_unexpected() {
        for body in [
            json!({}),
            json!({ "result": "x" }),
            json!({ "error": "" }),
            json!({ "error": null }),
            json!({ "humanized": 12 }),
            json!(["humanized"]),
            json!("humanized"),
            json!(null),
        ] {
            assert_eq!(HumanizeReply::classify(&body), HumanizeReply::Unexpected, "{body}");
        }
    }

    #[test]
    fn similarity_is_a_two_decimal_percentage() {
        assert_eq!(format_similarity(0.8765), "87.65%");
        assert_eq!(format_similarity(1.0), "100.00%");
        assert_eq!(format_similarity(0.0), "0.00%");
        assert_eq!(format_similarity(0.5), "50.00%");
    }
}
