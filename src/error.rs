use rocket::response::{Responder, Response};
use rocket::{Request, http::Status};
use std::fmt;
use std::io::Cursor;

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    StoreUnavailable(String),
    NotFound(String),
    BadRequest(String),
    InternalServerError(String),
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            ApiError::StoreUnavailable(_) => Status::ServiceUnavailable,
            ApiError::NotFound(_) => Status::NotFound,
            ApiError::BadRequest(_) => Status::BadRequest,
            ApiError::InternalServerError(_) => Status::InternalServerError,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::StoreUnavailable(msg)
            | ApiError::NotFound(msg)
            | ApiError::BadRequest(msg)
            | ApiError::InternalServerError(msg) => msg,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, _: &'r Request<'_>) -> rocket::response::Result<'static> {
        let body = serde_json::json!({ "error": self.message() }).to_string();

        Response::build()
            .status(self.status())
            .header(rocket::http::ContentType::JSON)
            .sized_body(body.len(), Cursor::new(body))
            .ok()
    }
}

impl From<diesel::result::Error> for ApiError {
    fn from(err: diesel::result::Error) -> Self {
        ApiError::StoreUnavailable(format!("Metadata store error: {err}"))
    }
}
