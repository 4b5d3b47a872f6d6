use actix_web::error::{BlockingError, ResponseError};
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use diesel::r2d2;
use diesel::result::Error as DieselError;
use std::convert::From;

use super::templates;

pub type Result<T> = ::std::result::Result<T, Error>;

#[derive(Debug, Display)]
pub enum Error {
    #[display(fmt = "Not found")]
    NotFound,

    #[display(fmt = "Invalid configuration: {}", _0)]
    Config(String),

    DieselError(DieselError),

    PoolError(r2d2::PoolError),

    #[display(fmt = "Blocking operation was canceled")]
    BlockingCanceled,

    #[display(fmt = "Failed to apply migrations: {}", _0)]
    MigrationError(Box<dyn std::error::Error + Send + Sync>),

    TemplateError(askama::Error),

    IoError(std::io::Error),
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound => None,
            Self::Config(_) => None,
            Self::DieselError(e) => Some(e),
            Self::PoolError(e) => Some(e),
            Self::BlockingCanceled => None,
            Self::MigrationError(e) => Some(&**e),
            Self::TemplateError(e) => Some(e),
            Self::IoError(e) => Some(e),
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            Self::NotFound => templates::not_found_response(),
            e => {
                error!("{}", e);
                HttpResponse::InternalServerError()
                    .content_type("text/plain; charset=utf-8")
                    .body("Internal Server Error")
            }
        }
    }
}

impl From<DieselError> for Error {
    fn from(e: DieselError) -> Error {
        match e {
            DieselError::NotFound => Error::NotFound,
            e => Error::DieselError(e),
        }
    }
}

impl From<r2d2::PoolError> for Error {
    fn from(e: r2d2::PoolError) -> Error {
        Error::PoolError(e)
    }
}

impl From<BlockingError> for Error {
    fn from(_: BlockingError) -> Error {
        Error::BlockingCanceled
    }
}

impl From<askama::Error> for Error {
    fn from(e: askama::Error) -> Error {
        Error::TemplateError(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::IoError(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_rows_map_to_not_found() {
        let error = Error::from(DieselError::NotFound);

        assert!(matches!(error, Error::NotFound));
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn storage_failures_are_server_errors() {
        let error = Error::from(DieselError::RollbackTransaction);

        assert!(matches!(error, Error::DieselError(_)));
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn not_found_renders_the_not_found_page() {
        let response = Error::NotFound.error_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
