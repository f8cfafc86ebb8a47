use crate::domain::model::LicencePlate;
use crate::domain::ports::{StolenVehicleRegistry, Vehicle};
use crate::utils::error::{CalcError, Result};
use tracing::debug;

/// Returns `true` when the vehicle's plate is listed in the registry.
pub fn check_licence_plate<V, R>(vehicle: &V, registry: &R) -> bool
where
    V: Vehicle + ?Sized,
    R: StolenVehicleRegistry + ?Sized,
{
    let plate = vehicle.licence_plate();
    let stolen = registry.is_stolen(&plate);
    debug!("licence plate {} stolen={}", plate, stolen);
    stolen
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    plate: LicencePlate,
}

impl Car {
    pub fn new(plate: LicencePlate) -> Self {
        Self { plate }
    }
}

impl Vehicle for Car {
    fn licence_plate(&self) -> LicencePlate {
        self.plate.clone()
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistry {
    plates: Vec<LicencePlate>,
}

impl InMemoryRegistry {
    pub fn new(plates: Vec<LicencePlate>) -> Self {
        Self { plates }
    }

    /// Builds a registry from configured strings. A blank entry is a configuration error.
    pub fn from_strings<S: AsRef<str>>(raw: &[S]) -> Result<Self> {
        let plates = raw
            .iter()
            .map(|p| {
                LicencePlate::new(p.as_ref()).map_err(|e| match e {
                    CalcError::InvalidInputError { value, reason, .. } => {
                        CalcError::InvalidConfigValueError {
                            field: "stolen_plates".to_string(),
                            value,
                            reason,
                        }
                    }
                    other => other,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(plates))
    }

    pub fn len(&self) -> usize {
        self.plates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plates.is_empty()
    }
}

impl StolenVehicleRegistry for InMemoryRegistry {
    fn stolen_plates(&self) -> &[LicencePlate] {
        &self.plates
    }
}
