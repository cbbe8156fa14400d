use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use faldo_core::{QueryParseError, results::EncodingError};
use tracing::{error, warn};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("missing query parameter")]
    MissingQuery,
    #[error("error parsing query: {0}")]
    QueryParse(#[from] QueryParseError),
    #[error("error encoding response")]
    Encoding(#[from] EncodingError),
}

impl Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingQuery | Self::QueryParse(_) => StatusCode::BAD_REQUEST,
            Self::Encoding(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match &self {
            Self::QueryParse(e) => warn!("{e}"),
            Self::Encoding(e) => error!("{e:?}"),
            Self::MissingQuery => {}
        }

        (self.status_code(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code() {
        assert_eq!(Error::MissingQuery.status_code(), StatusCode::BAD_REQUEST);

        let e = "abc".parse::<u64>().unwrap_err();
        assert_eq!(
            Error::from(QueryParseError::InvalidStart(e)).status_code(),
            StatusCode::BAD_REQUEST
        );

        let e = serde_json::from_str::<u64>("x").unwrap_err();
        assert_eq!(
            Error::from(EncodingError::from(e)).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
