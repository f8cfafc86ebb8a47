use crate::domain::model::LicencePlate;

pub trait Vehicle {
    fn licence_plate(&self) -> LicencePlate;
}

pub trait StolenVehicleRegistry {
    fn stolen_plates(&self) -> &[LicencePlate];

    fn is_stolen(&self, plate: &LicencePlate) -> bool {
        self.stolen_plates().contains(plate)
    }
}

/// Where the CLI reads its output settings from (command line or TOML file).
pub trait ConfigProvider {
    fn output_format(&self) -> &str;
    fn stolen_plates(&self) -> &[String];
    fn verbose(&self) -> bool;
}
