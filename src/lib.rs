//! Typed client for the hh.ru recruitment API.

#[macro_use]
pub mod macros;

pub mod api;
pub mod config;
pub mod consts;
pub mod error;
pub mod executor;
pub mod mapper;
pub mod models;
pub mod params;
pub mod query;
pub mod text;

pub use api::HhClient;
pub use config::ClientConfig;
pub use error::{ApiRequestError, ConfigError, HhError, SchemaValidationError, TransportError};
pub use executor::{HttpExecutor, HttpRequest, HttpResponse, ReqwestExecutor};
pub use params::{EmployerSearchParams, SearchParams};
pub use query::{OneOrMany, QueryParams};
