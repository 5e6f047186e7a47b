// Domain layer: models, case state tables, field names and ports (interfaces).
// No HTTP here; adapters implement the ports.

pub mod case_state;
pub mod model;
pub mod ports;
pub mod properties;
