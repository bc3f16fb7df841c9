//! Cricket records query API.
//!
//! Raw request parameters are validated into strong domain types (every failure is
//! collected, not just the first), dispatched to pluggable data-access collaborators, and the
//! resulting pages are rendered as a JSON envelope, a CSV attachment or an xlsx workbook.
//!
//! The crate is layered like this:
//! - [`domain`]: value types, the accumulating validator, sort codes and record rows (no I/O),
//! - `transport`: raw query parameters and export wire formats,
//! - [`service`]: query dispatch per record category and name lookups,
//! - [`api`]: the axum router.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use cricrecords::{ApiConfig, AppState, RecordsService, Repositories};
//!
//! async fn serve(repositories: Repositories) -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ApiConfig::load("cricrecords.toml")?;
//!     let state = AppState::new(RecordsService::new(repositories), config);
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//!     axum::serve(listener, cricrecords::router(Arc::new(state))).await?;
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod api;
pub mod config;
pub mod domain;
pub mod service;
mod transport;

pub use api::{AppState, Format, router};
pub use config::{ApiConfig, ConfigError};
pub use domain::{
    Envelope, PagedResult, RawRecordQuery, RecordQuery, SortKey, ValidationError,
    ValidationErrors, validate_all,
};
pub use service::{RecordsError, RecordsService, Repositories};
pub use transport::{Cell, ExportCsv, ExportSheet, Sheet, Tabular};
