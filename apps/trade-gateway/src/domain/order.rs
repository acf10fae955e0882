//! Inbound trade instructions and their validation rules.
//!
//! These are the shapes callers POST to the gateway. Validation happens
//! before anything reaches the gateway client; a request that fails here is
//! never forwarded to the terminal.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A request rejected by validation, with the field that failed and a fixed
/// human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Name of the offending field.
    pub field: &'static str,
    /// Fixed reason string returned to the caller.
    pub message: &'static str,
}

impl ValidationError {
    /// Create a new validation error.
    #[must_use]
    pub const fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// A buy or sell instruction as submitted by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Stock code, exactly 6 ASCII digits (e.g. `600519`).
    pub stock_code: String,
    /// Limit price, strictly positive.
    pub price: Decimal,
    /// Number of shares, a positive multiple of 100 (one board lot).
    pub amount: u32,
}

impl OrderRequest {
    /// Create a new order request.
    #[must_use]
    pub fn new(stock_code: impl Into<String>, price: Decimal, amount: u32) -> Self {
        Self {
            stock_code: stock_code.into(),
            price,
            amount,
        }
    }

    /// Check the exchange-side shape rules.
    ///
    /// Checks run in field order and the first failure wins: code shape,
    /// price sign, amount sign, lot size. Zero shares would pass the lot-size
    /// check (0 is a multiple of 100), so the sign check comes first.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the offending field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.stock_code.len() != 6 || !self.stock_code.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::new(
                "stock_code",
                "stock code must be 6 digits",
            ));
        }

        if self.price <= Decimal::ZERO {
            return Err(ValidationError::new("price", "order price must be positive"));
        }

        if self.amount == 0 {
            return Err(ValidationError::new(
                "amount",
                "order amount must be positive",
            ));
        }

        if self.amount % 100 != 0 {
            return Err(ValidationError::new(
                "amount",
                "order amount must be a multiple of 100",
            ));
        }

        Ok(())
    }
}

/// A cancellation instruction for a previously placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelRequest {
    /// Backend-issued order identifier, forwarded verbatim.
    pub order_id: String,
}

impl CancelRequest {
    /// Create a new cancel request.
    #[must_use]
    pub fn new(order_id: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
        }
    }

    /// Check that an order id is present.
    ///
    /// The id itself is opaque to the gateway; only emptiness is rejected.
    /// No trimming or normalization is applied.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the id is empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.order_id.is_empty() {
            return Err(ValidationError::new("order_id", "order id required"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;
    use test_case::test_case;

    #[test_case("000001" ; "shenzhen main board")]
    #[test_case("600519" ; "shanghai main board")]
    #[test_case("300750" ; "chinext")]
    #[test_case("688981" ; "star market")]
    fn six_digit_codes_accepted(code: &str) {
        let order = OrderRequest::new(code, dec!(12.5), 100);
        assert!(order.validate().is_ok());
    }

    #[test_case("" ; "empty")]
    #[test_case("00001" ; "five digits")]
    #[test_case("0000001" ; "seven digits")]
    #[test_case("00000a" ; "trailing letter")]
    #[test_case("a00001" ; "leading letter")]
    #[test_case(" 00001" ; "leading space")]
    #[test_case("60051 " ; "trailing space")]
    #[test_case("６００５１９" ; "fullwidth digits")]
    fn malformed_codes_rejected(code: &str) {
        let err = OrderRequest::new(code, dec!(12.5), 100)
            .validate()
            .unwrap_err();
        assert_eq!(err.field, "stock_code");
        assert_eq!(err.message, "stock code must be 6 digits");
    }

    #[test_case(100)]
    #[test_case(200)]
    #[test_case(1000)]
    #[test_case(999_900)]
    fn round_lot_amounts_accepted(amount: u32) {
        let order = OrderRequest::new("000001", dec!(12.5), amount);
        assert!(order.validate().is_ok());
    }

    #[test_case(1)]
    #[test_case(99)]
    #[test_case(101)]
    #[test_case(150)]
    #[test_case(250)]
    fn odd_lot_amounts_rejected(amount: u32) {
        let err = OrderRequest::new("000001", dec!(12.5), amount)
            .validate()
            .unwrap_err();
        assert_eq!(err.field, "amount");
        assert_eq!(err.message, "order amount must be a multiple of 100");
    }

    #[test]
    fn zero_amount_rejected_as_nonpositive() {
        let err = OrderRequest::new("000001", dec!(12.5), 0)
            .validate()
            .unwrap_err();
        assert_eq!(err.message, "order amount must be positive");
    }

    #[test]
    fn zero_price_rejected() {
        let err = OrderRequest::new("000001", dec!(0), 100)
            .validate()
            .unwrap_err();
        assert_eq!(err.field, "price");
        assert_eq!(err.message, "order price must be positive");
    }

    #[test]
    fn negative_price_rejected() {
        let err = OrderRequest::new("000001", dec!(-0.01), 100)
            .validate()
            .unwrap_err();
        assert_eq!(err.message, "order price must be positive");
    }

    #[test]
    fn one_cent_price_accepted() {
        let order = OrderRequest::new("000001", dec!(0.01), 100);
        assert!(order.validate().is_ok());
    }

    #[test]
    fn code_shape_checked_before_price() {
        let err = OrderRequest::new("bad", dec!(0), 0).validate().unwrap_err();
        assert_eq!(err.field, "stock_code");
    }

    #[test]
    fn cancel_with_id_accepted() {
        assert!(CancelRequest::new("86359").validate().is_ok());
    }

    #[test]
    fn cancel_empty_id_rejected() {
        let err = CancelRequest::new("").validate().unwrap_err();
        assert_eq!(err.field, "order_id");
        assert_eq!(err.message, "order id required");
    }

    #[test]
    fn cancel_id_is_not_trimmed() {
        // Whitespace ids are non-empty and pass through untouched.
        assert!(CancelRequest::new(" ").validate().is_ok());
    }

    #[test]
    fn validation_error_displays_the_message() {
        let err = ValidationError::new("amount", "order amount must be positive");
        assert_eq!(err.to_string(), "order amount must be positive");
    }

    #[test]
    fn order_request_deserializes_from_wire_shape() {
        let order: OrderRequest =
            serde_json::from_str(r#"{"stock_code":"600519","price":12.5,"amount":100}"#).unwrap();
        assert_eq!(order.stock_code, "600519");
        assert_eq!(order.price, dec!(12.5));
        assert_eq!(order.amount, 100);
    }

    proptest! {
        #[test]
        fn any_six_ascii_digits_accepted(code in "[0-9]{6}") {
            prop_assert!(OrderRequest::new(code, dec!(1), 100).validate().is_ok());
        }

        #[test]
        fn wrong_length_codes_rejected(code in "[0-9]{0,5}|[0-9]{7,12}") {
            prop_assert!(OrderRequest::new(code, dec!(1), 100).validate().is_err());
        }

        #[test]
        fn whole_lots_accepted(lots in 1u32..10_000) {
            prop_assert!(OrderRequest::new("000001", dec!(1), lots * 100).validate().is_ok());
        }

        #[test]
        fn broken_lots_rejected(amount in 1u32..1_000_000) {
            prop_assume!(amount % 100 != 0);
            prop_assert!(OrderRequest::new("000001", dec!(1), amount).validate().is_err());
        }
    }
}
