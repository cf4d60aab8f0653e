// Domain layer: plain data and the configuration port shared by the CLI and TOML fronts.

pub mod model;
pub mod ports;
