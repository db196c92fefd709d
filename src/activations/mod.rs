//! Named differentiable scalar functions used as layer nonlinearities.
//!
//! Network layers obtain their nonlinearity by resolving a symbolic name
//! (usually taken from a configuration key) against an [`ActivationRegistry`].
//! The registry is built once during startup and handed to consumers by
//! reference; it is never mutated afterward.

mod functions;
mod registry;

pub use functions::{
    Abs, DifferentiableFunction, Elu, Exp, Gaussian, Isrlu, Isru, LeakyRelu, Log, Relu, Sigmoid,
    Sqrt, Square, Swish, Tanh, Tanh01,
};
pub use registry::{ActivationHandle, ActivationRegistry};
