use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::ResonaCoreError;

use super::functions::{
    DifferentiableFunction, Elu, Gaussian, Isrlu, LeakyRelu, Relu, Tanh, Tanh01,
};

/// A shared, thread-safe handle to an activation function.
pub type ActivationHandle = Arc<dyn DifferentiableFunction + Send + Sync>;

/// Mapping from symbolic name to activation function.
///
/// Built once during an explicit initialization step and passed by reference
/// (or behind an `Arc`) into whatever assembles network layers. All mutation
/// requires `&mut self`, so a shared registry is immutable and concurrent
/// lookups need no locking.
///
/// The full catalog of functions lives alongside this type in the
/// activations module; the registry holds only the active set. [`with_defaults`](ActivationRegistry::with_defaults)
/// populates the set the standard pipeline runs with, and anything else can
/// be added through [`register`](ActivationRegistry::register).
///
/// # Examples
/// ```
/// use resona_core::ActivationRegistry;
///
/// let registry = ActivationRegistry::with_defaults();
/// let relu = registry.require("RELU").unwrap();
/// assert_eq!(relu.evaluate(2.0), 2.0);
/// assert!(registry.resolve("SWISH").is_none());
/// ```
#[derive(Default)]
pub struct ActivationRegistry {
    functions: HashMap<String, ActivationHandle>,
}

impl ActivationRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        ActivationRegistry {
            functions: HashMap::new(),
        }
    }

    /// Creates a registry holding the default active set: RELU, LEAKY_RELU,
    /// ISRLU, ELU, TANH, TANH_01, and GAUSSIAN.
    ///
    /// The rest of the catalog (SIGMOID, ISRU, SWISH, ABS, SQUARE, SQRT,
    /// LOG, EXP) is deliberately left out and must be registered explicitly
    /// where a pipeline needs it.
    pub fn with_defaults() -> Self {
        let mut registry = ActivationRegistry::new();
        registry.register("RELU", Arc::new(Relu));
        registry.register("LEAKY_RELU", Arc::new(LeakyRelu::default()));
        registry.register("ISRLU", Arc::new(Isrlu::default()));
        registry.register("ELU", Arc::new(Elu::default()));
        registry.register("TANH", Arc::new(Tanh));
        registry.register("TANH_01", Arc::new(Tanh01));
        registry.register("GAUSSIAN", Arc::new(Gaussian));
        debug!(
            count = registry.len(),
            "populated default activation registry"
        );
        registry
    }

    /// Inserts or replaces the function registered under `name`.
    pub fn register(&mut self, name: impl Into<String>, function: ActivationHandle) {
        self.functions.insert(name.into(), function);
    }

    /// Looks up `name`. Pure and side-effect-free; absence is `None`.
    pub fn resolve(&self, name: &str) -> Option<&ActivationHandle> {
        self.functions.get(name)
    }

    /// Looks up `name` for layer construction, where absence is a
    /// configuration error that must surface to the caller.
    pub fn require(&self, name: &str) -> Result<ActivationHandle, ResonaCoreError> {
        self.functions
            .get(name)
            .cloned()
            .ok_or_else(|| ResonaCoreError::UnknownActivation(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Iterates over the registered names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}
