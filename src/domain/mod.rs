// Domain layer: entities and ports. No dependencies on the console or config code.

pub mod model;
pub mod ports;
