/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - payload records carried in the envelope `data` field
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{OrderStatus, OrderType, Side};

/// One `[price, quantity]` ladder entry, string-encoded on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceLevel(
    #[serde(with = "rust_decimal::serde::str")] pub Decimal,
    #[serde(with = "rust_decimal::serde::str")] pub Decimal,
);

impl PriceLevel {
    pub fn price(&self) -> Decimal {
        self.0
    }

    pub fn quantity(&self) -> Decimal {
        self.1
    }
}

/// GET /api/v2/orderbook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBook {
    pub timestamp: i64,
    pub bids: Vec<PriceLevel>,
    pub asks: Vec<PriceLevel>,
}

/// GET /api/v2/trades
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub pair: String,
    pub pair_normalized: String,
    pub numerator: String,
    pub denominator: String,
    #[serde(rename = "date")]
    pub timestamp: i64,
    pub tid: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub side: Side,
}

/// GET /api/v1/users/balances
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub asset: String,
    #[serde(rename = "assetname")]
    pub asset_name: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub balance: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub locked: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub free: Decimal,
}

/// GET /api/v1/users/transactions/trade
///
/// Amounts arrive as JSON numbers here, unlike the market endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserTransaction {
    pub id: String,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub price: Decimal,
    pub numerator_symbol: String,
    pub denominator_symbol: String,
    pub order_type: Side,
    pub timestamp: i64,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub amount: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub fee: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub tax: Decimal,
}

/// Order record shared by open orders, order history and order creation.
///
/// Creation responses spell a few fields differently (`newOrderClientId`,
/// `datetime`, lower-case `pairsymbol`); those are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub price: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub amount: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub quantity: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_optional_decimal",
        serialize_with = "serde_helpers::serialize_optional_decimal",
        skip_serializing_if = "Option::is_none"
    )]
    pub stop_price: Option<Decimal>,
    #[serde(alias = "pairsymbol")]
    pub pair_symbol: String,
    #[serde(default, alias = "pairsymbolnormalized")]
    pub pair_symbol_normalized: String,
    #[serde(rename = "type")]
    pub side: Side,
    pub method: OrderType,
    #[serde(default, alias = "newOrderClientId")]
    pub order_client_id: Option<String>,
    #[serde(default, alias = "datetime")]
    pub time: i64,
    #[serde(default)]
    pub update_time: Option<i64>,
    #[serde(default)]
    pub status: Option<OrderStatus>,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_optional_decimal",
        serialize_with = "serde_helpers::serialize_optional_decimal",
        skip_serializing_if = "Option::is_none"
    )]
    pub left_amount: Option<Decimal>,
}

/// GET /api/v1/openOrders
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpenOrders {
    #[serde(default)]
    pub asks: Vec<Order>,
    #[serde(default)]
    pub bids: Vec<Order>,
}

impl OpenOrders {
    pub fn len(&self) -> usize {
        self.asks.len() + self.bids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.asks.is_empty() && self.bids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.bids.iter().chain(self.asks.iter())
    }
}

mod serde_helpers {
    use super::Decimal;
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;
    use std::str::FromStr;

    fn decimal_from_value<E: serde::de::Error>(value: Value) -> Result<Option<Decimal>, E> {
        match value {
            Value::Null => Ok(None),
            Value::String(raw) if raw.trim().is_empty() => Ok(None),
            Value::String(raw) => Decimal::from_str(raw.trim()).map(Some).map_err(E::custom),
            Value::Number(number) => Decimal::from_str(&number.to_string())
                .or_else(|_| Decimal::from_scientific(&number.to_string()))
                .map(Some)
                .map_err(E::custom),
            _ => Err(E::custom("invalid decimal value")),
        }
    }

    pub fn deserialize_decimal_or_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(decimal_from_value::<D::Error>(value)?.unwrap_or(Decimal::ZERO))
    }

    pub fn deserialize_optional_decimal<'de, D>(
        deserializer: D,
    ) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        decimal_from_value(value)
    }

    pub fn serialize_decimal<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }

    pub fn serialize_optional_decimal<S>(
        value: &Option<Decimal>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(value) => serializer.serialize_str(&value.to_string()),
            None => serializer.serialize_none(),
        }
    }
}
