// Adapters layer: concrete zone rules backed by chrono and chrono-tz.

pub mod zone;
