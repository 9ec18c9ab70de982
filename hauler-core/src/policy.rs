use serde::Deserialize;

use crate::error::OrderError;
use crate::order::OrderStatus;

/// How approve/decline treat the order's current status.
///
/// The permissive mode reproduces the historical behavior: the status is
/// overwritten regardless of its current value, so an approved order can
/// still be declined. Whether that is desirable is a product decision, so
/// the guard is configuration rather than a hardcoded state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionMode {
    #[default]
    Permissive,
    /// Approve/decline are only legal while the order is still PENDING.
    Strict,
}

impl TransitionMode {
    pub fn check(&self, from: OrderStatus, to: OrderStatus) -> Result<(), OrderError> {
        match self {
            TransitionMode::Permissive => Ok(()),
            TransitionMode::Strict if from == OrderStatus::Pending => Ok(()),
            TransitionMode::Strict => Err(OrderError::InvalidTransition { from, to }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permissive_allows_redecision() {
        let mode = TransitionMode::Permissive;
        assert!(mode
            .check(OrderStatus::Approved, OrderStatus::Declined)
            .is_ok());
        assert!(mode
            .check(OrderStatus::Declined, OrderStatus::Approved)
            .is_ok());
    }

    #[test]
    fn strict_only_transitions_out_of_pending() {
        let mode = TransitionMode::Strict;
        assert!(mode
            .check(OrderStatus::Pending, OrderStatus::Approved)
            .is_ok());

        let err = mode
            .check(OrderStatus::Approved, OrderStatus::Declined)
            .unwrap_err();
        match err {
            OrderError::InvalidTransition { from, to } => {
                assert_eq!(from, OrderStatus::Approved);
                assert_eq!(to, OrderStatus::Declined);
            }
            other => panic!("expected InvalidTransition, got {other:?}"),
        }
    }

    #[test]
    fn mode_deserializes_from_config_strings() {
        let strict: TransitionMode = serde_json::from_str("\"strict\"").unwrap();
        assert_eq!(strict, TransitionMode::Strict);

        let permissive: TransitionMode = serde_json::from_str("\"permissive\"").unwrap();
        assert_eq!(permissive, TransitionMode::Permissive);
    }
}
