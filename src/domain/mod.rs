// Domain layer: value types and the zone-rules port. No I/O.

pub mod model;
pub mod ports;
