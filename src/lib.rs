pub mod cli;
pub mod config;
pub mod error;
pub mod html;
pub mod logger;
pub mod meta;
pub mod models;
pub mod paginator;
pub mod utils;

pub use error::{MetaError, MetaResult};
pub use meta::MetaTags;
pub use models::{Rel, Tag};
pub use paginator::{Paginator, UrlPaginator};
