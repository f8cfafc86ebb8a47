pub mod calculator;
pub mod output;
pub mod plate_check;

pub use crate::domain::model::{LicencePlate, Number, Operation, Value};
pub use crate::domain::ports::{ConfigProvider, StolenVehicleRegistry, Vehicle};
pub use crate::utils::error::Result;
