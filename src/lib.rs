pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use adapters::http::HttpTransport;
pub use config::ClientConfig;
pub use core::{project_api::ProjectApi, registry::Endpoint};
pub use domain::model::{ApiResult, Project, ProjectStatus, Response, CODE_SUCCESS};
pub use domain::ports::{PendingResponse, RequestDescriptor, Transport};
pub use utils::error::{ClientError, Result};
