pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};

pub use config::{toml_config::TomlConfig, Settings};
pub use crate::core::{
    calculator::Calculator,
    plate_check::{check_licence_plate, Car, InMemoryRegistry},
};
pub use domain::model::{LicencePlate, Number, Operation, Value};
pub use utils::error::{CalcError, Result};
