// Domain layer: value types and ports. Registries and algorithms live in `core`.

pub mod model;
pub mod ports;
