use serde::Deserialize;

use crate::api::error::SystemError;

/// Response envelope used by every JSON endpoint of the SEE API.
/// `code == 200` means success; anything else carries an error message.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub code: i64,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        self.code == 200
    }

    /// Unwraps the payload of a successful response, turning a non-200 code
    /// or a missing body into an API error.
    pub fn into_data(self) -> Result<T, SystemError> {
        match self {
            ApiResponse { code: 200, data: Some(data), .. } => Ok(data),
            ApiResponse { code, message, .. } => Err(SystemError::api(code, message)),
        }
    }

    /// For endpoints that acknowledge without a payload.
    pub fn into_unit(self) -> Result<(), SystemError> {
        if self.is_success() {
            Ok(())
        } else {
            Err(SystemError::api(self.code, self.message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        slug: String,
    }

    #[test]
    fn success_envelope_yields_data() {
        let response: ApiResponse<Payload> =
            serde_json::from_str(r#"{"code":200,"data":{"slug":"abc"}}"#).unwrap();
        assert_eq!(response.into_data().unwrap(), Payload { slug: "abc".to_string() });
    }

    #[test]
    fn error_envelope_carries_code_and_message() {
        let response: ApiResponse<Payload> =
            serde_json::from_str(r#"{"code":429,"message":"rate limited"}"#).unwrap();
        match response.into_data() {
            Err(SystemError::Api { code, message }) => {
                assert_eq!(code, 429);
                assert_eq!(message, "rate limited");
            }
            other => panic!("expected api error, got {:?}", other),
        }
    }

    #[test]
    fn success_without_data_is_an_error_for_into_data() {
        let response: ApiResponse<Payload> = serde_json::from_str(r#"{"code":200}"#).unwrap();
        assert!(response.into_data().is_err());
    }

    #[test]
    fn into_unit_ignores_missing_data() {
        let response: ApiResponse<serde_json::Value> =
            serde_json::from_str(r#"{"code":200,"message":"ok"}"#).unwrap();
        assert!(response.into_unit().is_ok());
    }
}
