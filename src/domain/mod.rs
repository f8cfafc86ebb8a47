// Domain layer: operand/result models and ports. No dependencies beyond std/serde.

pub mod model;
pub mod ports;
