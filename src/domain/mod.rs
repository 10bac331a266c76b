// Domain layer: lookup keys, job records and the ports the front-end talks to.

pub mod model;
pub mod ports;
