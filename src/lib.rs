pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, toml_config::TomlConfig};
pub use self::core::{app::PythagorasApp, session::Session, triplets::find_triplets};
pub use domain::model::{OutputFormat, SearchBound, TriangleSpec, Triplet};
pub use utils::error::{PythagorasError, Result};
