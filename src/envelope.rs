//! The uniform result shape returned by every operation.

use crate::{error::Error, result::Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Either the decoded response of the service or a `{status: false, message}`
/// failure.
///
/// Serializes to exactly what the service (or the failure) looks like on the
/// wire, so an envelope can be forwarded as JSON untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Envelope {
    /// The call failed.
    Failure(Failure),
    /// The decoded response body.
    Success(Value),
}

/// Body of a failed [`Envelope`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    /// Always `false`.
    pub status: bool,
    /// Human-readable reason.
    pub message: String,
}

impl Failure {
    /// Builds a failure with `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Failure {
            status: false,
            message: message.into(),
        }
    }
}

/// Reshaped reply of an upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Upload {
    /// Always `true`.
    pub status: bool,
    /// Document key.
    pub id: String,
    /// Link to the document.
    pub url: String,
}

impl Envelope {
    /// Returns `true` if the call succeeded.
    pub fn is_ok(&self) -> bool {
        matches!(self, Envelope::Success(_))
    }

    /// The `status` flag callers branch on.
    pub fn status(&self) -> bool {
        self.is_ok()
    }

    /// Failure message, if the call failed.
    pub fn message(&self) -> Option<&str> {
        match self {
            Envelope::Failure(failure) => Some(&failure.message),
            Envelope::Success(_) => None,
        }
    }

    /// The decoded body, if the call succeeded.
    pub fn body(&self) -> Option<&Value> {
        match self {
            Envelope::Success(body) => Some(body),
            Envelope::Failure(_) => None,
        }
    }

    /// Converts into a plain `Result`.
    ///
    /// # Errors
    ///
    /// Returns the [`Failure`] if the call failed.
    pub fn into_result(self) -> std::result::Result<Value, Failure> {
        match self {
            Envelope::Success(body) => Ok(body),
            Envelope::Failure(failure) => Err(failure),
        }
    }

    /// Deserializes a successful body into `T`.
    ///
    /// # Errors
    ///
    /// Fails with the envelope's message, or with the decoding error if the
    /// body does not fit `T`.
    pub fn decode<T: for<'a> Deserialize<'a>>(self) -> std::result::Result<T, Failure> {
        let body = self.into_result()?;
        serde_json::from_value(body).map_err(|e| Failure::new(e.to_string()))
    }

    /// The envelope as a JSON value.
    pub fn to_value(&self) -> Value {
        match self {
            Envelope::Success(body) => body.clone(),
            Envelope::Failure(failure) => serde_json::json!({
                "status": failure.status,
                "message": failure.message,
            }),
        }
    }
}

impl From<Result<Value>> for Envelope {
    fn from(result: Result<Value>) -> Self {
        match result {
            Ok(body) => Envelope::Success(body),
            Err(e) => Envelope::from(e),
        }
    }
}

impl From<Error> for Envelope {
    fn from(e: Error) -> Self {
        Envelope::Failure(Failure::new(e.to_string()))
    }
}

impl From<Upload> for Value {
    fn from(upload: Upload) -> Self {
        serde_json::json!({
            "status": upload.status,
            "id": upload.id,
            "url": upload.url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn failure_serializes_flat() {
        let envelope = Envelope::from(Error::MissingArgument("You didn't provide a place!".into()));
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({"status": false, "message": "You didn't provide a place!"})
        );
        assert_eq!(envelope.to_value(), serde_json::to_value(&envelope).unwrap());
        assert!(!envelope.status());
    }

    #[test]
    fn success_is_verbatim() {
        let body = json!({"answer": "Ask again later", "status": 200});
        let ok: Result<Value> = Ok(body.clone());
        let envelope = Envelope::from(ok);
        assert_eq!(serde_json::to_value(&envelope).unwrap(), body);
        assert_eq!(envelope.body(), Some(&body));
        assert!(envelope.message().is_none());
    }

    #[test]
    fn decode_typed_upload() {
        let value = Value::from(Upload {
            status: true,
            id: "abc".into(),
            url: "https://haste.example/abc.rs".into(),
        });
        let upload: Upload = Envelope::Success(value).decode().unwrap();
        assert_eq!(upload.id, "abc");

        let failed = Envelope::Failure(Failure::new("nope")).decode::<Upload>();
        assert_eq!(failed.unwrap_err().message, "nope");
    }
}
