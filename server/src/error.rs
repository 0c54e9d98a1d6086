use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use connect4_core::GameError;
use shared::{ErrorKind, ErrorResponse};

#[derive(Debug)]
pub enum ApiError {
    Game(GameError),
    /// The query string could not be decoded. `kind` names the offending
    /// parameter when it is known.
    BadQuery { kind: ErrorKind, message: String },
    Internal(String),
}

impl From<GameError> for ApiError {
    fn from(err: GameError) -> Self {
        Self::Game(err)
    }
}

impl ApiError {
    fn body(&self) -> ErrorResponse {
        match self {
            Self::Game(err) => ErrorResponse::from(err),
            Self::BadQuery { kind, message } => ErrorResponse::new(*kind, message.clone()),
            Self::Internal(message) => ErrorResponse::new(ErrorKind::Internal, message.clone()),
        }
    }
}

const fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::InvalidHistory | ErrorKind::InvalidLevel | ErrorKind::BadRequest => {
            StatusCode::BAD_REQUEST
        }
        ErrorKind::GameOver => StatusCode::CONFLICT,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = self.body();
        let status = status_for(body.kind);
        if status.is_server_error() {
            tracing::error!("{}", body.message);
        } else {
            tracing::debug!("rejected request: {}", body.message);
        }
        (status, Json(body)).into_response()
    }
}
