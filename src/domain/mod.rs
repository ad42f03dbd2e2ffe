// Domain layer: plain data types and the ports the shell talks through.

pub mod model;
pub mod ports;
