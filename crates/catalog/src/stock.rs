//! Pure stock transitions.
//!
//! The stock state machine is a non-negative integer with exactly two
//! transitions: `+quantity` (restock) and `-quantity` (purchase, guarded by
//! `quantity <= stock`). The store is responsible for executing a transition
//! atomically against a single item.

use sweetshop_core::DomainError;

/// Compute the stock after a restock of `quantity` units.
///
/// `quantity` must be at least 1.
pub fn restock_stock(stock: i64, quantity: i64) -> Result<i64, DomainError> {
    validate_quantity(quantity)?;

    stock
        .checked_add(quantity)
        .ok_or_else(|| DomainError::validation("stock overflow"))
}

/// Compute the stock after a purchase of `quantity` units.
///
/// `quantity` must be at least 1. Purchasing exactly the remaining stock is
/// allowed and drains it to zero; anything more fails without mutating.
pub fn purchase_stock(stock: i64, quantity: i64) -> Result<i64, DomainError> {
    validate_quantity(quantity)?;

    if quantity > stock {
        return Err(DomainError::InsufficientStock {
            available: stock,
            requested: quantity,
        });
    }

    Ok(stock - quantity)
}

fn validate_quantity(quantity: i64) -> Result<(), DomainError> {
    if quantity < 1 {
        return Err(DomainError::validation("quantity must be at least 1"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn restock_adds_quantity() {
        assert_eq!(restock_stock(10, 50).unwrap(), 60);
    }

    #[test]
    fn purchase_subtracts_quantity() {
        assert_eq!(purchase_stock(60, 10).unwrap(), 50);
    }

    #[test]
    fn purchase_can_drain_stock_to_zero() {
        assert_eq!(purchase_stock(60, 60).unwrap(), 0);
    }

    #[test]
    fn purchase_from_empty_stock_fails() {
        assert_eq!(
            purchase_stock(0, 1),
            Err(DomainError::InsufficientStock {
                available: 0,
                requested: 1,
            })
        );
    }

    #[test]
    fn overdraw_reports_available_and_requested() {
        assert_eq!(
            purchase_stock(5, 7),
            Err(DomainError::InsufficientStock {
                available: 5,
                requested: 7,
            })
        );
    }

    #[test]
    fn zero_and_negative_quantities_are_rejected() {
        assert!(restock_stock(10, 0).is_err());
        assert!(restock_stock(10, -5).is_err());
        assert!(purchase_stock(10, 0).is_err());
        assert!(purchase_stock(10, -5).is_err());
    }

    #[test]
    fn restock_overflow_is_an_error() {
        assert!(restock_stock(i64::MAX, 1).is_err());
    }

    proptest! {
        #[test]
        fn transitions_never_go_negative(stock in 0i64..1_000_000, qty in 1i64..1_000_000) {
            if let Ok(next) = purchase_stock(stock, qty) {
                prop_assert!(next >= 0);
                prop_assert_eq!(next, stock - qty);
            } else {
                prop_assert!(qty > stock);
            }

            let restocked = restock_stock(stock, qty).unwrap();
            prop_assert_eq!(restocked, stock + qty);
        }

        #[test]
        fn purchase_then_restock_round_trips(stock in 0i64..1_000_000, qty in 1i64..1_000_000) {
            prop_assume!(qty <= stock);
            let after = purchase_stock(stock, qty).unwrap();
            prop_assert_eq!(restock_stock(after, qty).unwrap(), stock);
        }
    }
}
