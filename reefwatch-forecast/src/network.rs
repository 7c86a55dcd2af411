//! Fixed-topology feed-forward regressor
//!
//! A single-hidden-layer network mapping a normalized feature vector to
//! itself: 6 inputs, a smaller sigmoid hidden layer, 6 sigmoid outputs. The
//! compressed hidden layer forces the fit to approximate the typical
//! relationships between the parameters rather than memorize records, which
//! is what the autoregressive rollout uses as a smoothing step.
//!
//! Training is mini-batch gradient descent on the mean squared error.
//! Once trained the network is pure: [`Network::predict`]
//! has no internal state and no side effects.

use reefwatch_core::{FeatureVector, PARAMETER_COUNT};

use crate::rng::Rng;

/// Spread of the uniform weight initialization
const INIT_WEIGHT_SPREAD: f32 = 0.5;

fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + libm::expf(-x))
}

/// Single-hidden-layer auto-associative network
///
/// Sigmoid outputs keep every prediction inside (0, 1), so denormalized
/// forecasts can never leave the fitted feature range.
#[derive(Debug, Clone)]
pub struct Network {
    hidden_units: usize,
    // Row-major: w1[j * inputs + i] connects input i to hidden j
    w1: Vec<f32>,
    b1: Vec<f32>,
    // w2[k * hidden + j] connects hidden j to output k
    w2: Vec<f32>,
    b2: Vec<f32>,
}

impl Network {
    /// Create a network with randomly initialized weights
    pub fn new(hidden_units: usize, rng: &mut Rng) -> Self {
        let hidden_units = hidden_units.max(1);
        let mut init = |count: usize| -> Vec<f32> {
            (0..count).map(|_| rng.next_signed() * INIT_WEIGHT_SPREAD).collect()
        };

        Self {
            hidden_units,
            w1: init(hidden_units * PARAMETER_COUNT),
            b1: init(hidden_units),
            w2: init(PARAMETER_COUNT * hidden_units),
            b2: init(PARAMETER_COUNT),
        }
    }

    /// Number of hidden units
    pub fn hidden_units(&self) -> usize {
        self.hidden_units
    }

    fn hidden_activations(&self, input: &FeatureVector) -> Vec<f32> {
        let mut hidden = Vec::with_capacity(self.hidden_units);
        for j in 0..self.hidden_units {
            let mut sum = self.b1[j];
            for i in 0..PARAMETER_COUNT {
                sum += self.w1[j * PARAMETER_COUNT + i] * input[i];
            }
            hidden.push(sigmoid(sum));
        }
        hidden
    }

    fn output_activations(&self, hidden: &[f32]) -> FeatureVector {
        let mut output = [0.0; PARAMETER_COUNT];
        for k in 0..PARAMETER_COUNT {
            let mut sum = self.b2[k];
            for j in 0..self.hidden_units {
                sum += self.w2[k * self.hidden_units + j] * hidden[j];
            }
            output[k] = sigmoid(sum);
        }
        output
    }

    /// Run the network on a normalized feature vector
    pub fn predict(&self, input: &FeatureVector) -> FeatureVector {
        let hidden = self.hidden_activations(input);
        self.output_activations(&hidden)
    }

    /// One gradient step over a mini-batch; returns the summed per-sample MSE
    ///
    /// Gradients are accumulated across the batch and averaged before the
    /// single weight update, so the batch size changes the update schedule,
    /// not just the bookkeeping. A one-sample batch is plain SGD.
    pub(crate) fn train_batch(&mut self, inputs: &[FeatureVector], targets: &[FeatureVector], learning_rate: f32) -> f32 {
        debug_assert_eq!(inputs.len(), targets.len());
        if inputs.is_empty() {
            return 0.0;
        }

        let mut grad_w1 = vec![0.0; self.w1.len()];
        let mut grad_b1 = vec![0.0; self.b1.len()];
        let mut grad_w2 = vec![0.0; self.w2.len()];
        let mut grad_b2 = vec![0.0; self.b2.len()];
        let mut squared_error = 0.0;

        for (input, target) in inputs.iter().zip(targets) {
            let hidden = self.hidden_activations(input);
            let output = self.output_activations(&hidden);

            // Output-layer deltas: dLoss/dPreactivation with sigmoid derivative
            let mut delta_out = [0.0; PARAMETER_COUNT];
            for k in 0..PARAMETER_COUNT {
                let error = output[k] - target[k];
                squared_error += error * error;
                delta_out[k] = error * output[k] * (1.0 - output[k]);
            }

            let mut delta_hidden = vec![0.0; self.hidden_units];
            for j in 0..self.hidden_units {
                let mut sum = 0.0;
                for k in 0..PARAMETER_COUNT {
                    sum += delta_out[k] * self.w2[k * self.hidden_units + j];
                }
                delta_hidden[j] = sum * hidden[j] * (1.0 - hidden[j]);
            }

            for k in 0..PARAMETER_COUNT {
                for j in 0..self.hidden_units {
                    grad_w2[k * self.hidden_units + j] += delta_out[k] * hidden[j];
                }
                grad_b2[k] += delta_out[k];
            }
            for j in 0..self.hidden_units {
                for i in 0..PARAMETER_COUNT {
                    grad_w1[j * PARAMETER_COUNT + i] += delta_hidden[j] * input[i];
                }
                grad_b1[j] += delta_hidden[j];
            }
        }

        let scale = learning_rate / inputs.len() as f32;
        for (weight, grad) in self.w1.iter_mut().zip(&grad_w1) {
            *weight -= scale * grad;
        }
        for (bias, grad) in self.b1.iter_mut().zip(&grad_b1) {
            *bias -= scale * grad;
        }
        for (weight, grad) in self.w2.iter_mut().zip(&grad_w2) {
            *weight -= scale * grad;
        }
        for (bias, grad) in self.b2.iter_mut().zip(&grad_b2) {
            *bias -= scale * grad;
        }

        squared_error / PARAMETER_COUNT as f32
    }
}
