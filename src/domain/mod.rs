// Domain layer: data model and ports (capabilities). Adapters live in `crate::adapters`.

pub mod model;
pub mod ports;
