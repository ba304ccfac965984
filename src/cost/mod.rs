//! Cost estimation for chat-completion calls.
//!
//! Costs are linear in token counts: prompt and completion tokens are each
//! billed per 1K at their own rate and the two amounts are summed.

use serde::{Deserialize, Serialize};

/// Default input rate (USD per 1K prompt tokens)
pub const INPUT_COST_PER_1K: f64 = 0.00275;

/// Default output rate (USD per 1K completion tokens)
pub const OUTPUT_COST_PER_1K: f64 = 0.011;

/// Token pricing (USD per 1K tokens)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pricing {
    /// Input cost per 1K prompt tokens
    pub input_per_1k: f64,
    /// Output cost per 1K completion tokens
    pub output_per_1k: f64,
}

impl Pricing {
    /// Create a new pricing structure
    pub const fn new(input_per_1k: f64, output_per_1k: f64) -> Self {
        Self {
            input_per_1k,
            output_per_1k,
        }
    }

    /// Estimated cost in USD for the given token counts
    pub fn cost(&self, prompt_tokens: u32, completion_tokens: u32) -> f64 {
        self.input_cost(prompt_tokens) + self.output_cost(completion_tokens)
    }

    /// Cost of the prompt side only
    pub fn input_cost(&self, prompt_tokens: u32) -> f64 {
        (prompt_tokens as f64 / 1000.0) * self.input_per_1k
    }

    /// Cost of the completion side only
    pub fn output_cost(&self, completion_tokens: u32) -> f64 {
        (completion_tokens as f64 / 1000.0) * self.output_per_1k
    }
}

impl Default for Pricing {
    fn default() -> Self {
        Self::new(INPUT_COST_PER_1K, OUTPUT_COST_PER_1K)
    }
}

/// Percent reduction from `baseline` to `candidate`.
///
/// Positive when the candidate is smaller, negative when it is larger, and
/// `0.0` when the two are equal or the baseline is not positive.
pub fn percent_reduction(baseline: f64, candidate: f64) -> f64 {
    if baseline > 0.0 {
        100.0 * (baseline - candidate) / baseline
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_pricing() {
        // 1000 input * 0.00275 + 500 output * 0.011 / 1000 = 0.00275 + 0.0055
        let cost = Pricing::default().cost(1000, 500);
        assert!((cost - 0.00825).abs() < 1e-12);
    }

    #[test]
    fn test_zero_tokens_cost_nothing() {
        assert_eq!(Pricing::default().cost(0, 0), 0.0);
    }

    #[test]
    fn test_custom_pricing() {
        let pricing = Pricing::new(0.005, 0.015);
        let cost = pricing.cost(2000, 1000);
        assert!((cost - 0.025).abs() < 1e-12);
    }

    #[test]
    fn test_percent_reduction() {
        assert!((percent_reduction(200.0, 150.0) - 25.0).abs() < 1e-12);
        assert!((percent_reduction(100.0, 120.0) + 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_percent_reduction_guards_zero_baseline() {
        assert_eq!(percent_reduction(0.0, 10.0), 0.0);
        assert_eq!(percent_reduction(0.0, 0.0), 0.0);
    }

    proptest! {
        #[test]
        fn prop_cost_is_sum_of_sides(p in 0u32..1_000_000, c in 0u32..1_000_000) {
            let pricing = Pricing::default();
            let expected = p as f64 / 1000.0 * INPUT_COST_PER_1K
                + c as f64 / 1000.0 * OUTPUT_COST_PER_1K;
            prop_assert_eq!(pricing.cost(p, c), expected);
        }

        #[test]
        fn prop_equal_values_reduce_nothing(x in 0.0f64..1e9) {
            prop_assert_eq!(percent_reduction(x, x), 0.0);
        }

        #[test]
        fn prop_reduction_is_antisymmetric_in_difference(a in 1.0f64..1e6, b in 1.0f64..1e6) {
            // Swapping the operands flips the sign of the numerator.
            let forward = percent_reduction(a, b) * a;
            let backward = percent_reduction(b, a) * b;
            prop_assert!((forward + backward).abs() < 1e-6 * a.max(b));
        }
    }
}
