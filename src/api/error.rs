use std::borrow::Cow;

/// User-facing error, printed at the CLI boundary. Internal detail stays in
/// `SystemError` and only crosses over through the `From` impl below.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Bad Request: {0}")]
    BadRequest(Cow<'static, str>),
    #[error("Unauthorized: {0}")]
    Unauthorized(Cow<'static, str>),
    #[error("Forbidden: {0}")]
    Forbidden(Cow<'static, str>),
    #[error("Not Found: {0}")]
    NotFound(Cow<'static, str>),
    #[error("Conflict: {0}")]
    Conflict(Cow<'static, str>),
    #[error("API Error ({code}): {message}")]
    Api { code: i64, message: Cow<'static, str> },
    #[error("Network Error: {0}")]
    Network(Cow<'static, str>),
    #[error("Internal Error")]
    Internal,
}

impl Error {
    pub fn bad_request(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn not_found(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::NotFound(msg.into())
    }
}

#[derive(thiserror::Error, Debug)]
pub enum SystemError {
    // reqwest errors
    #[error("HTTP Error: {0}")]
    Http(#[from] reqwest::Error),
    // sqlx errors
    #[error("Database Error: {0}")]
    DatabaseError(Cow<'static, str>),
    #[error("Database Conflict: {0}")]
    Conflict(Cow<'static, str>),
    // serde errors
    #[error("JSON Serialization/Deserialization Error")]
    JsonError(#[from] serde_json::Error),
    // io errors
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
    // non-success envelope from the server
    #[error("API Error ({code}): {message}")]
    Api { code: i64, message: Cow<'static, str> },
    // Custom Errors
    #[error("Bad Request: {0}")]
    BadRequest(Cow<'static, str>),
    #[error("Not Found: {0}")]
    NotFound(Cow<'static, str>),
    #[error("Internal System Error: {0}")]
    InternalError(Box<dyn std::error::Error + Send + Sync>),
}

impl From<SystemError> for Error {
    fn from(value: SystemError) -> Self {
        match value {
            SystemError::BadRequest(msg) => Error::BadRequest(msg),
            SystemError::NotFound(msg) => Error::NotFound(msg),
            SystemError::Conflict(msg) => Error::Conflict(msg),
            SystemError::Api { code, message } => match code {
                400 => Error::BadRequest(message),
                401 => Error::Unauthorized(message),
                403 => Error::Forbidden(message),
                404 => Error::NotFound(message),
                409 => Error::Conflict(message),
                _ => Error::Api { code, message },
            },
            SystemError::Http(err) => {
                log::error!("HTTP error: {:?}", err);
                Error::Network(err.to_string().into())
            }
            _ => {
                log::error!("Internal Error: {:?}", value);
                Error::Internal
            }
        }
    }
}

impl From<sqlx::Error> for SystemError {
    fn from(err: sqlx::Error) -> Self {
        log::error!("{:?}", err);
        match &err {
            sqlx::Error::RowNotFound => SystemError::not_found("Resource not found"),
            sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
                // SQLITE_CONSTRAINT_UNIQUE / SQLITE_CONSTRAINT_PRIMARYKEY
                Some("2067") | Some("1555") => {
                    SystemError::Conflict(db_err.message().to_string().into())
                }
                _ => SystemError::DatabaseError(db_err.message().to_string().into()),
            },
            _ => SystemError::InternalError(Box::new(err)),
        }
    }
}

impl SystemError {
    pub fn bad_request(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn not_found(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn api(code: i64, message: Option<String>) -> Self {
        Self::Api {
            code,
            message: message.unwrap_or_else(|| "Request failed".to_string()).into(),
        }
    }
}
