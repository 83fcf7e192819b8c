/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{OrderType, Side};

/// JSON body for POST /api/v1/order
///
/// All seven keys are always sent. Numeric fields are JSON numbers;
/// prices a method does not use are `0` and an unset client id is `""`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderInput {
    #[serde(with = "rust_decimal::serde::float")]
    pub quantity: Decimal,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub stop_price: Decimal,
    #[serde(default)]
    pub new_order_client_id: String,
    pub order_method: OrderType,
    pub order_type: Side,
    pub pair_symbol: String,
}

impl OrderInput {
    pub fn market(side: Side, pair_symbol: impl Into<String>, quantity: Decimal) -> Self {
        Self {
            quantity,
            price: Decimal::ZERO,
            stop_price: Decimal::ZERO,
            new_order_client_id: String::new(),
            order_method: OrderType::Market,
            order_type: side,
            pair_symbol: pair_symbol.into(),
        }
    }

    pub fn limit(
        side: Side,
        pair_symbol: impl Into<String>,
        quantity: Decimal,
        price: Decimal,
    ) -> Self {
        Self {
            price,
            order_method: OrderType::Limit,
            ..Self::market(side, pair_symbol, quantity)
        }
    }

    pub fn stop_limit(
        side: Side,
        pair_symbol: impl Into<String>,
        quantity: Decimal,
        price: Decimal,
        stop_price: Decimal,
    ) -> Self {
        Self {
            price,
            stop_price,
            order_method: OrderType::StopLimit,
            ..Self::market(side, pair_symbol, quantity)
        }
    }

    /// Attach a caller-chosen id, echoed back as `orderClientId`
    pub fn with_client_id(mut self, id: impl Into<String>) -> Self {
        self.new_order_client_id = id.into();
        self
    }
}
