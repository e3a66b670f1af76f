// Domain layer: page and slot models plus the ports (interfaces) adapters implement.

pub mod model;
pub mod ports;
pub mod selector;
