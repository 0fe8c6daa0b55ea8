// notchkin-core: Types, config and errors for notched continuum segment kinematics.

pub mod config;
pub mod error;
pub mod types;

pub mod prelude {
    pub use crate::config::SegmentConfig;
    pub use crate::error::{
        ActuationError, ConfigError, GeometryError, NotchError, Surface, TopologyError,
    };
    pub use crate::types::{ActuationInput, GeometryParameters, NotchState, SafetyLimits};
}
