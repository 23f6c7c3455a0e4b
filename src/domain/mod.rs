// Domain layer: calculation records and the ports front ends plug into.

pub mod model;
pub mod ports;
