// Domain layer: wire models and the transport port. No HTTP client code lives here.

pub mod model;
pub mod ports;
