// Domain layer: registration models, outcomes and the ports the registrar talks to.

pub mod model;
pub mod outcome;
pub mod ports;
