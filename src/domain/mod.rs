// Domain layer: feed/map models, the styling and legend functions, and the
// ports the pipeline is wired through.

pub mod legend;
pub mod model;
pub mod ports;
pub mod style;
