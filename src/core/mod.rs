pub mod project_api;
pub mod registry;

pub use crate::domain::model::{ApiResult, Project, ProjectStatus, Response};
pub use crate::domain::ports::{PendingResponse, RequestDescriptor, Transport};
pub use crate::utils::error::Result;
