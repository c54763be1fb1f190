use config::{INVALID_AMOUNT_MESSAGE, STACK_SIZE};
use thiserror::Error;

pub mod calculator;
pub mod config;
pub mod load_state;
pub mod slots;
pub mod utils;

/// An amount split into full stacks and the blocks left over.
///
/// Amounts are whole `f64` values, matching what a browser number input
/// yields. Splitting by a power of two is exact for any finite whole `f64`,
/// so no valid amount is too large.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Decomposition {
    /// Always whole and non-negative.
    pub full_stacks: f64,
    /// Always in `0..STACK_SIZE`.
    pub leftover: u64,
}

// Reasons an amount was refused. Users only ever see `INVALID_AMOUNT_MESSAGE`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidAmount {
    #[error("amount is empty")]
    Empty,
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("amount is not finite")]
    NotFinite,
    #[error("amount is not a whole number")]
    NotAnInteger,
    #[error("amount must be greater than zero")]
    NotPositive,
}

impl InvalidAmount {
    pub fn user_message(&self) -> &'static str {
        INVALID_AMOUNT_MESSAGE
    }
}

/// Split `count` into stacks of [`STACK_SIZE`].
///
/// Callers validate first: `count` must be finite, whole and non-negative.
/// Zero simply yields `{0, 0}`.
pub fn decompose(count: f64) -> Decomposition {
    let stack = STACK_SIZE as f64;
    let leftover = count % stack;
    Decomposition {
        full_stacks: (count / stack).floor(),
        leftover: leftover as u64,
    }
}

/// Parse raw input and decompose it when it is a valid amount.
pub fn validate_amount(raw: &str) -> Result<Decomposition, InvalidAmount> {
    utils::parse_amount(raw).map(decompose)
}

pub fn format_result_message(d: &Decomposition) -> String {
    format!(
        "You need {} full stacks and {} blocks.",
        d.full_stacks, d.leftover
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn boundaries() {
        assert_eq!(decompose(1.0), Decomposition { full_stacks: 0.0, leftover: 1 });
        assert_eq!(decompose(63.0), Decomposition { full_stacks: 0.0, leftover: 63 });
        assert_eq!(decompose(64.0), Decomposition { full_stacks: 1.0, leftover: 0 });
        assert_eq!(decompose(65.0), Decomposition { full_stacks: 1.0, leftover: 1 });
    }

    #[test]
    fn five_thousand() {
        assert_eq!(decompose(5000.0), Decomposition { full_stacks: 78.0, leftover: 8 });
    }

    #[test]
    fn largest_i32_does_not_overflow() {
        let d = decompose(i32::MAX as f64);
        assert_eq!(d.full_stacks, 33_554_431.0);
        assert_eq!(d.leftover, 63);
    }

    #[test]
    fn amounts_past_exact_integer_range_still_split() {
        let d = validate_amount("1e20").unwrap();
        assert_eq!(d, Decomposition { full_stacks: 1_562_500_000_000_000_000.0, leftover: 0 });
        assert_eq!(
            format_result_message(&d),
            "You need 1562500000000000000 full stacks and 0 blocks."
        );

        let d = validate_amount("9007199254740992").unwrap();
        assert_eq!(d.full_stacks, 140_737_488_355_328.0);
        assert_eq!(d.leftover, 0);

        let huge = 1e300;
        let d = decompose(huge);
        assert_eq!(d.full_stacks * STACK_SIZE as f64 + d.leftover as f64, huge);
        assert!(d.leftover < STACK_SIZE);
    }

    #[test]
    fn result_message_format() {
        let msg = format_result_message(&decompose(130.0));
        assert_eq!(msg, "You need 2 full stacks and 2 blocks.");
    }

    #[test]
    fn every_invalid_reason_shares_one_message() {
        for raw in ["", "abc", "5.5", "0", "-3", "Infinity", "1e400"] {
            let err = validate_amount(raw).unwrap_err();
            assert_eq!(err.user_message(), "Please enter a valid positive integer");
        }
    }

    proptest! {
        #[test]
        fn recomposes_to_count(n in 1u64..=(1u64 << 53)) {
            let count = n as f64;
            let d = decompose(count);
            prop_assert_eq!(d.full_stacks as u64 * STACK_SIZE + d.leftover, n);
            prop_assert!(d.leftover < STACK_SIZE);
        }

        #[test]
        fn recomposes_past_exact_range(mantissa in 1u64..(1u64 << 52), exp in 0i32..900) {
            let count = (mantissa as f64) * 2f64.powi(exp);
            let d = decompose(count);
            prop_assert_eq!(d.full_stacks * STACK_SIZE as f64 + d.leftover as f64, count);
            prop_assert!(d.leftover < STACK_SIZE);
        }

        #[test]
        fn valid_text_round_trips(n in 1u64..=u32::MAX as u64) {
            prop_assert_eq!(validate_amount(&n.to_string()), Ok(decompose(n as f64)));
        }
    }
}
