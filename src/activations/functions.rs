use ndarray::{Array1, ArrayView1};

/// A scalar nonlinearity with a known closed-form derivative.
///
/// Every activation used by the network layers implements this capability:
/// evaluate the function, evaluate its derivative, and report the identifier
/// the function is cataloged under.
///
/// # The two-argument derivative
///
/// [`derivative`](DifferentiableFunction::derivative) takes both the input
/// `x` and the output `y`. For most of the catalog the derivative is an
/// algebraic function of the output alone (the sigmoid family being the
/// classic case), so a caller that already holds `y` from the forward pass
/// gets the derivative without re-evaluating the function. The result is
/// only meaningful when `y == evaluate(x)` for the same `x`; callers that
/// cannot uphold that should use
/// [`evaluate_with_derivative`](DifferentiableFunction::evaluate_with_derivative)
/// instead.
pub trait DifferentiableFunction {
    /// The identifier this function is cataloged under.
    fn name(&self) -> &'static str;

    /// Computes y = f(x).
    fn evaluate(&self, x: f64) -> f64;

    /// Computes dy/dx at `x`, given `y = evaluate(x)`.
    fn derivative(&self, x: f64, y: f64) -> f64;

    /// Computes a guaranteed-consistent `(y, dy/dx)` pair.
    fn evaluate_with_derivative(&self, x: f64) -> (f64, f64) {
        let y = self.evaluate(x);
        (y, self.derivative(x, y))
    }

    /// Applies the function element-wise to a spectral frame.
    ///
    /// Bins are widened to f64 for evaluation and narrowed back to f32.
    fn evaluate_frame(&self, frame: ArrayView1<'_, f32>) -> Array1<f32> {
        frame.mapv(|bin| self.evaluate(bin as f64) as f32)
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

//region Sigmoid family

/// Logistic sigmoid. Range (0, 1).
#[derive(Debug, Clone, Copy, Default)]
pub struct Sigmoid;

impl DifferentiableFunction for Sigmoid {
    fn name(&self) -> &'static str {
        "SIGMOID"
    }
    fn evaluate(&self, x: f64) -> f64 {
        sigmoid(x)
    }
    fn derivative(&self, _x: f64, y: f64) -> f64 {
        y * (1.0 - y)
    }
}

/// Hyperbolic tangent. Range (-1, 1), with a steeper gradient around the
/// origin than the sigmoid.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tanh;

impl DifferentiableFunction for Tanh {
    fn name(&self) -> &'static str {
        "TANH"
    }
    fn evaluate(&self, x: f64) -> f64 {
        x.tanh()
    }
    fn derivative(&self, _x: f64, y: f64) -> f64 {
        1.0 - y * y
    }
}

/// Hyperbolic tangent rebiased into (0, 1), a drop-in for the sigmoid where
/// a stronger gradient is wanted.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tanh01;

impl DifferentiableFunction for Tanh01 {
    fn name(&self) -> &'static str {
        "TANH_01"
    }
    fn evaluate(&self, x: f64) -> f64 {
        0.5 + 0.5 * x.tanh()
    }
    fn derivative(&self, _x: f64, y: f64) -> f64 {
        // y = 0.5 + 0.5 t, so the underlying tanh output is t = 2y - 1.
        let t = 2.0 * y - 1.0;
        0.5 * (1.0 - t * t)
    }
}

/// Inverse square root unit, x/sqrt(1 + a x^2). Range (-1, 1). A cheaper
/// bounded alternative to tanh.
#[derive(Debug, Clone, Copy)]
pub struct Isru {
    pub alpha: f64,
}

impl Default for Isru {
    fn default() -> Self {
        Isru { alpha: 1.0 }
    }
}

impl DifferentiableFunction for Isru {
    fn name(&self) -> &'static str {
        "ISRU"
    }
    fn evaluate(&self, x: f64) -> f64 {
        x / (1.0 + self.alpha * x * x).sqrt()
    }
    fn derivative(&self, x: f64, y: f64) -> f64 {
        if x == 0.0 {
            1.0
        } else {
            (y / x).powi(3)
        }
    }
}

//endregion

//region Rectifier family

/// Rectified linear unit. Range [0, inf). The derivative at x = 0 belongs
/// to the non-negative branch and is 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct Relu;

impl DifferentiableFunction for Relu {
    fn name(&self) -> &'static str {
        "RELU"
    }
    fn evaluate(&self, x: f64) -> f64 {
        if x >= 0.0 {
            x
        } else {
            0.0
        }
    }
    fn derivative(&self, x: f64, _y: f64) -> f64 {
        if x >= 0.0 {
            1.0
        } else {
            0.0
        }
    }
}

/// ReLU with a small slope on the negative side, so gradients never die.
/// Range (-inf, inf).
#[derive(Debug, Clone, Copy)]
pub struct LeakyRelu {
    pub slope: f64,
}

impl Default for LeakyRelu {
    fn default() -> Self {
        LeakyRelu { slope: 0.1 }
    }
}

impl DifferentiableFunction for LeakyRelu {
    fn name(&self) -> &'static str {
        "LRELU"
    }
    fn evaluate(&self, x: f64) -> f64 {
        if x >= 0.0 {
            x
        } else {
            self.slope * x
        }
    }
    fn derivative(&self, x: f64, _y: f64) -> f64 {
        if x >= 0.0 {
            1.0
        } else {
            self.slope
        }
    }
}

/// Exponential linear unit. Range [-alpha, inf).
#[derive(Debug, Clone, Copy)]
pub struct Elu {
    pub alpha: f64,
}

impl Default for Elu {
    fn default() -> Self {
        Elu { alpha: 0.05 }
    }
}

impl DifferentiableFunction for Elu {
    fn name(&self) -> &'static str {
        "ELU"
    }
    fn evaluate(&self, x: f64) -> f64 {
        if x >= 0.0 {
            x
        } else {
            self.alpha * (x.exp() - 1.0)
        }
    }
    fn derivative(&self, x: f64, y: f64) -> f64 {
        if x >= 0.0 {
            1.0
        } else {
            y + self.alpha
        }
    }
}

/// Inverse square root linear unit: identity for x >= 0, ISRU below.
/// Range (-1, inf). Converges like ELU without the exponential.
#[derive(Debug, Clone, Copy)]
pub struct Isrlu {
    pub alpha: f64,
}

impl Default for Isrlu {
    fn default() -> Self {
        Isrlu { alpha: 1.0 }
    }
}

impl DifferentiableFunction for Isrlu {
    fn name(&self) -> &'static str {
        "ISRLU"
    }
    fn evaluate(&self, x: f64) -> f64 {
        if x >= 0.0 {
            x
        } else {
            x / (1.0 + self.alpha * x * x).sqrt()
        }
    }
    fn derivative(&self, x: f64, y: f64) -> f64 {
        // For x > 0, y == x and this collapses to 1.
        if x == 0.0 {
            1.0
        } else {
            (y / x).powi(3)
        }
    }
}

/// x * sigmoid(x), the self-gated unit. Range is roughly [-0.278, inf).
/// This fixed form has no trainable beta.
#[derive(Debug, Clone, Copy, Default)]
pub struct Swish;

impl DifferentiableFunction for Swish {
    fn name(&self) -> &'static str {
        "SWISH"
    }
    fn evaluate(&self, x: f64) -> f64 {
        x * sigmoid(x)
    }
    fn derivative(&self, x: f64, y: f64) -> f64 {
        y + sigmoid(x) * (1.0 - y)
    }
}

//endregion

//region Elementary functions

#[derive(Debug, Clone, Copy, Default)]
pub struct Abs;

impl DifferentiableFunction for Abs {
    fn name(&self) -> &'static str {
        "ABS"
    }
    fn evaluate(&self, x: f64) -> f64 {
        x.abs()
    }
    fn derivative(&self, x: f64, _y: f64) -> f64 {
        if x > 0.0 {
            1.0
        } else if x < 0.0 {
            -1.0
        } else {
            0.0
        }
    }
}

/// Gaussian bump e^(-x^2). Range (0, 1].
#[derive(Debug, Clone, Copy, Default)]
pub struct Gaussian;

impl DifferentiableFunction for Gaussian {
    fn name(&self) -> &'static str {
        "GAUSSIAN"
    }
    fn evaluate(&self, x: f64) -> f64 {
        (-x * x).exp()
    }
    fn derivative(&self, x: f64, y: f64) -> f64 {
        -2.0 * x * y
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Square;

impl DifferentiableFunction for Square {
    fn name(&self) -> &'static str {
        "SQUARE"
    }
    fn evaluate(&self, x: f64) -> f64 {
        x * x
    }
    fn derivative(&self, x: f64, _y: f64) -> f64 {
        2.0 * x
    }
}

/// Square root. Inputs below zero yield NaN, following IEEE semantics
/// rather than raising an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sqrt;

impl DifferentiableFunction for Sqrt {
    fn name(&self) -> &'static str {
        "SQRT"
    }
    fn evaluate(&self, x: f64) -> f64 {
        x.sqrt()
    }
    fn derivative(&self, _x: f64, y: f64) -> f64 {
        0.5 / y
    }
}

/// Natural logarithm. Zero yields -inf and negative inputs yield NaN,
/// following IEEE semantics rather than raising an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct Log;

impl DifferentiableFunction for Log {
    fn name(&self) -> &'static str {
        "LOG"
    }
    fn evaluate(&self, x: f64) -> f64 {
        x.ln()
    }
    fn derivative(&self, x: f64, _y: f64) -> f64 {
        1.0 / x
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Exp;

impl DifferentiableFunction for Exp {
    fn name(&self) -> &'static str {
        "EXP"
    }
    fn evaluate(&self, x: f64) -> f64 {
        x.exp()
    }
    fn derivative(&self, _x: f64, y: f64) -> f64 {
        y
    }
}

//endregion
