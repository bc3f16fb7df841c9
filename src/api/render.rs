use axum::Json;
use axum::http::header::{ACCESS_CONTROL_EXPOSE_HEADERS, CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use rust_xlsxwriter::XlsxError;
use serde::Serialize;
use tracing::{error, warn};

use super::negotiate::Format;
use crate::domain::{Envelope, PagedResult, ValidationErrors};
use crate::service::RecordsError;
use crate::transport::{ExportCsv, ExportSheet, encode_csv, encode_workbook};

const INTERNAL_ERROR: &str = "internal server error";

#[derive(Debug, thiserror::Error)]
/// Failures while producing an export response.
pub enum ExportError {
    /// The representation was requested from a resource that cannot produce it.
    #[error("{format} export is not supported by {resource}")]
    Unsupported {
        format: &'static str,
        resource: String,
    },

    #[error("spreadsheet encoding failed: {0}")]
    Sheet(#[from] XlsxError),

    #[error("invalid attachment header: {0}")]
    Header(#[from] axum::http::header::InvalidHeaderValue),
}

/// Where an export lands: separator and attachment file name without extension.
#[derive(Debug, Clone)]
pub struct ExportTarget {
    pub separator: char,
    pub file_stem: String,
}

/// Serializer for one resource type, with its export capabilities fixed at construction.
pub struct Renderer<T> {
    csv: Option<fn(&[T], char) -> String>,
    sheet: Option<fn(&[T]) -> Result<Vec<u8>, XlsxError>>,
}

impl<T: Serialize> Renderer<T> {
    pub fn json_only() -> Self {
        Self {
            csv: None,
            sheet: None,
        }
    }

    /// Render a single value. Only JSON applies to values that are not record pages.
    pub fn render_value(&self, format: Format, value: T, target: &ExportTarget) -> Response {
        if format != Format::Json {
            return contract_violation(ExportError::Unsupported {
                format: format.as_str(),
                resource: target.file_stem.clone(),
            });
        }
        (StatusCode::OK, Json(Envelope::success(value))).into_response()
    }

    pub fn render_page(
        &self,
        format: Format,
        page: PagedResult<T>,
        target: &ExportTarget,
    ) -> Response {
        self.try_render_page(format, page, target)
            .unwrap_or_else(contract_violation)
    }

    fn try_render_page(
        &self,
        format: Format,
        page: PagedResult<T>,
        target: &ExportTarget,
    ) -> Result<Response, ExportError> {
        let unsupported = || ExportError::Unsupported {
            format: format.as_str(),
            resource: target.file_stem.clone(),
        };
        match format {
            Format::Json => Ok((StatusCode::OK, Json(Envelope::success(page))).into_response()),
            Format::Csv => {
                let encode = self.csv.ok_or_else(unsupported)?;
                attachment(format, target, encode(page.items(), target.separator))
            }
            Format::Xlsx => {
                let encode = self.sheet.ok_or_else(unsupported)?;
                attachment(format, target, encode(page.items())?)
            }
        }
    }
}

impl<T: Serialize + ExportCsv + ExportSheet> Renderer<T> {
    pub fn exportable() -> Self {
        Self {
            csv: Some(encode_csv::<T>),
            sheet: Some(encode_workbook::<T>),
        }
    }
}

fn attachment(
    format: Format,
    target: &ExportTarget,
    body: impl IntoResponse,
) -> Result<Response, ExportError> {
    let disposition = HeaderValue::from_str(&format!(
        "attachment; filename=\"{}.{}\"",
        target.file_stem,
        format.as_str()
    ))?;
    Ok((
        [
            (CONTENT_TYPE, HeaderValue::from_static(format.content_type())),
            (CONTENT_DISPOSITION, disposition),
            (
                ACCESS_CONTROL_EXPOSE_HEADERS,
                HeaderValue::from_static("Content-Disposition"),
            ),
        ],
        body,
    )
        .into_response())
}

fn contract_violation(err: ExportError) -> Response {
    error!(target: "cricrecords::api", error = %err, "cannot render response");
    failure(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
}

/// JSON failure envelope with `status`.
pub fn failure(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(Envelope::<()>::failure(message))).into_response()
}

/// 400 response listing every rejected value.
pub fn rejected(errors: &ValidationErrors) -> Response {
    let message = errors.joined(ValidationErrors::SEPARATOR);
    warn!(
        target: "cricrecords::api",
        failures = errors.len(),
        errors = %message,
        "request rejected"
    );
    failure(StatusCode::BAD_REQUEST, message)
}

pub fn service_error(err: RecordsError) -> Response {
    match err {
        RecordsError::Validation(errors) => rejected(&errors),
        RecordsError::DataAccess(_) => failure(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR),
    }
}
