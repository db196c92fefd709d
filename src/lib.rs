//! The core crate for Resona. Defines the spectral data structures and
//! activation functions used throughout the audio pipeline.
//!
//! Two sibling primitives live here: [`ActivationRegistry`] resolves layer
//! nonlinearities by symbolic name when a network is assembled, and
//! [`SpectrogramBuffer`] holds the rolling window of spectral frames fed by
//! the capture front end. Neither calls the other.

mod error;

pub mod activations;
pub mod spectral;

pub use error::ResonaCoreError;
pub use activations::{ActivationRegistry, DifferentiableFunction};
pub use spectral::SpectrogramBuffer;
