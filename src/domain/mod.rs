// Domain layer: request/response models and the ports the resolvers implement.

pub mod model;
pub mod ports;
