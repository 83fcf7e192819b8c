/*
[INPUT]:  Caller-supplied query values (ints, floats, strings, enums) and optional raw body
[OUTPUT]: Encoded query string and endpoint path for a single request
[POS]:    HTTP layer - per-request parameter builder
[UPDATE]: When adding new query parameters or changing value formatting
*/

use std::fmt;

use crate::types::{OrderType, Side};

/// Query parameters and optional body for one request.
///
/// Built fluently and passed by reference to an endpoint method; the
/// client keeps no parameter state between calls.
///
/// ```
/// use btcturk_adapter::Params;
///
/// let params = Params::new().pair_symbol("BTC_TRY").limit(10);
/// assert_eq!(params.encode(), "limit=10&pairSymbol=BTC_TRY");
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Params {
    pairs: Vec<(String, String)>,
    body: Option<Vec<u8>>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// limit (order book depth, transactions, all orders)
    pub fn limit(self, value: i64) -> Self {
        self.add_int("limit", value)
    }

    /// offset (transactions)
    pub fn offset(self, value: i64) -> Self {
        self.add_int("offset", value)
    }

    /// sort (transactions)
    pub fn sort(self, value: impl Into<String>) -> Self {
        self.add("sort", value)
    }

    /// id (cancel order)
    pub fn order_id(self, value: i64) -> Self {
        self.add_int("id", value)
    }

    /// orderId (all orders)
    pub fn from_order_id(self, value: i64) -> Self {
        self.add_int("orderId", value)
    }

    /// startTime (all orders)
    pub fn start_time(self, value: i64) -> Self {
        self.add_int("startTime", value)
    }

    /// endTime (all orders)
    pub fn end_time(self, value: i64) -> Self {
        self.add_int("endTime", value)
    }

    /// page (all orders)
    pub fn page(self, value: i64) -> Self {
        self.add_int("page", value)
    }

    /// last (trades, at most 50)
    pub fn last(self, value: i64) -> Self {
        self.add_int("last", value)
    }

    /// quantity, six fractional digits.
    ///
    /// Not validated: NaN and infinities are written as `NaN` / `inf`
    /// / `-inf` and the exchange will reject them. Check
    /// `value.is_finite()` first when the input is computed.
    pub fn quantity(self, value: f64) -> Self {
        self.add_float("quantity", value)
    }

    /// price, formatted like [`Params::quantity`]
    pub fn price(self, value: f64) -> Self {
        self.add_float("price", value)
    }

    /// stopPrice, formatted like [`Params::quantity`]
    pub fn stop_price(self, value: f64) -> Self {
        self.add_float("stopPrice", value)
    }

    pub fn new_order_client_id(self, value: impl Into<String>) -> Self {
        self.add("newOrderClientId", value)
    }

    pub fn order_method(self, value: OrderType) -> Self {
        self.add("orderMethod", value.as_str())
    }

    /// pairSymbol (order book, trades, open orders, all orders)
    pub fn pair_symbol(self, value: impl Into<String>) -> Self {
        self.add("pairSymbol", value)
    }

    /// type filter for transactions; repeatable
    pub fn transaction_type(self, value: Side) -> Self {
        self.add("type", value.as_str())
    }

    /// symbol filter for transactions; repeatable
    pub fn symbol(self, value: impl Into<String>) -> Self {
        self.add("symbol", value)
    }

    /// Arbitrary key/value for parameters without a dedicated method
    pub fn custom(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.add(key, value)
    }

    /// Raw request body, forwarded by endpoints that accept one
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// First value stored under `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All values stored under `key`, in insertion order
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn body_bytes(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// URL-encode the pairs, sorted by key.
    ///
    /// Values of a repeated key keep their insertion order.
    pub fn encode(&self) -> String {
        let mut pairs: Vec<&(String, String)> = self.pairs.iter().collect();
        pairs.sort_by(|a, b| a.0.cmp(&b.0));

        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in pairs {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }

    /// `path` with the encoded query appended, or `path` alone when empty
    pub fn endpoint(&self, path: &str) -> String {
        if self.pairs.is_empty() {
            path.to_string()
        } else {
            format!("{path}?{}", self.encode())
        }
    }

    fn add(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.pairs.push((key.into(), value.into()));
        self
    }

    fn add_int(self, key: &str, value: i64) -> Self {
        self.add(key, value.to_string())
    }

    fn add_float(self, key: &str, value: f64) -> Self {
        self.add(key, format_float(value))
    }
}

/// Fixed six fractional digits, e.g. `0.5` -> `0.500000`
pub(crate) fn format_float(value: f64) -> String {
    format!("{value:.6}")
}

impl fmt::Debug for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Params")
            .field("query", &self.encode())
            .field("body_len", &self.body.as_ref().map(Vec::len))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_chained_calls_accumulate() {
        let params = Params::new().limit(10).offset(5).pair_symbol("BTC_TRY");

        assert_eq!(params.len(), 3);
        assert_eq!(params.get("limit"), Some("10"));
        assert_eq!(params.get("offset"), Some("5"));
        assert_eq!(params.get("pairSymbol"), Some("BTC_TRY"));
    }

    #[test]
    fn test_encode_is_order_independent() {
        let a = Params::new().limit(10).pair_symbol("BTC_TRY");
        let b = Params::new().pair_symbol("BTC_TRY").limit(10);

        let parse = |query: String| -> HashSet<(String, String)> {
            url::form_urlencoded::parse(query.as_bytes())
                .into_owned()
                .collect()
        };

        let expected: HashSet<(String, String)> = [
            ("limit".to_string(), "10".to_string()),
            ("pairSymbol".to_string(), "BTC_TRY".to_string()),
        ]
        .into_iter()
        .collect();

        assert_eq!(parse(a.encode()), expected);
        assert_eq!(parse(b.encode()), expected);
        assert_eq!(a.encode(), b.encode());
    }

    #[test]
    fn test_repeated_keys_are_kept() {
        let params = Params::new()
            .transaction_type(Side::Buy)
            .transaction_type(Side::Sell)
            .symbol("btc")
            .symbol("try");

        assert_eq!(params.get_all("type"), vec!["buy", "sell"]);
        assert_eq!(params.encode(), "symbol=btc&symbol=try&type=buy&type=sell");
    }

    #[test]
    fn test_float_formatting_uses_six_digits() {
        assert_eq!(format_float(0.5), "0.500000");
        assert_eq!(format_float(350000.0), "350000.000000");
        assert_eq!(format_float(0.00000049), "0.000000");
        assert_eq!(format_float(1.2345678), "1.234568");

        let params = Params::new().price(1234.5).quantity(0.001).stop_price(-1.0);
        assert_eq!(params.get("price"), Some("1234.500000"));
        assert_eq!(params.get("quantity"), Some("0.001000"));
        assert_eq!(params.get("stopPrice"), Some("-1.000000"));
    }

    #[test]
    fn test_non_finite_floats_pass_through_unchecked() {
        let params = Params::new()
            .price(f64::NAN)
            .quantity(f64::INFINITY)
            .stop_price(f64::NEG_INFINITY);

        assert_eq!(params.get("price"), Some("NaN"));
        assert_eq!(params.get("quantity"), Some("inf"));
        assert_eq!(params.get("stopPrice"), Some("-inf"));
    }

    #[test]
    fn test_values_are_url_encoded() {
        let params = Params::new().custom("note", "a b&c=d");
        assert_eq!(params.encode(), "note=a+b%26c%3Dd");
    }

    #[test]
    fn test_endpoint_omits_empty_query() {
        assert_eq!(Params::new().endpoint("/api/v1/openOrders"), "/api/v1/openOrders");
        assert_eq!(
            Params::new().order_id(7).endpoint("/api/v1/order"),
            "/api/v1/order?id=7"
        );
    }

    #[test]
    fn test_enum_values_use_wire_names() {
        let params = Params::new().order_method(OrderType::StopLimit);
        assert_eq!(params.get("orderMethod"), Some("stoplimit"));
    }

    #[test]
    fn test_body_is_separate_from_query() {
        let params = Params::new().order_id(1).body(br#"{"id":1}"#.to_vec());
        assert_eq!(params.body_bytes(), Some(&br#"{"id":1}"#[..]));
        assert_eq!(params.encode(), "id=1");
    }
}
