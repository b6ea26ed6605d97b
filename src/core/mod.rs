//! Core simulation plumbing: random streams, configuration, errors.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{ClampBounds, ModelKind, RateBounds, RateCoefficients, SimConfig};
pub use error::{Result, SimError};
pub use rng::{SimRng, SimRngState, UniformSource};
