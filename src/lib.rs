pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{cli::LocalStorage, CliConfig};
pub use crate::core::content::{visit_document, ContentVisitor, TextCollector};
pub use crate::core::{engine::FetchEngine, pipeline::NotionPipeline};
pub use crate::domain::model::{PageDataRequest, PageId};
pub use crate::utils::error::{FetchError, Result};
