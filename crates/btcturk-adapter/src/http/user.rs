/*
[INPUT]:  Query parameters and signed credentials
[OUTPUT]: User account data (balances, transactions, open and historical orders)
[POS]:    HTTP layer - account read endpoints (require HMAC auth)
[UPDATE]: When adding new user endpoints or changing query parameters
*/

// ### User Endpoints

use reqwest::Method;
use tracing::instrument;

use crate::http::{BtcturkClient, Params, Result};
use crate::types::{Balance, OpenOrders, Order, UserTransaction};

impl BtcturkClient {
    /// Query account balances
    ///
    /// GET /api/v1/users/balances
    #[instrument(skip(self), level = "debug")]
    pub async fn balances(&self) -> Result<Vec<Balance>> {
        let request = self.signed_request(Method::GET, "/api/v1/users/balances", None)?;
        self.send_json(request).await
    }

    /// Query trade transactions, filters repeatable
    ///
    /// GET /api/v1/users/transactions/trade?type=buy&type=sell&symbol=btc&symbol=try
    #[instrument(skip(self), level = "debug")]
    pub async fn user_transactions(&self, params: &Params) -> Result<Vec<UserTransaction>> {
        let endpoint = params.endpoint("/api/v1/users/transactions/trade");
        let request = self.signed_request(Method::GET, &endpoint, None)?;
        self.send_json(request).await
    }

    /// Query open orders
    ///
    /// GET /api/v1/openOrders?pairSymbol={pair}
    #[instrument(skip(self), level = "debug")]
    pub async fn open_orders(&self, params: &Params) -> Result<OpenOrders> {
        let endpoint = params.endpoint("/api/v1/openOrders");
        let request = self.signed_request(Method::GET, &endpoint, None)?;
        self.send_json(request).await
    }

    /// Query order history
    ///
    /// GET /api/v1/allOrders?pairSymbol={pair}[&orderId&startTime&endTime&page&limit]
    #[instrument(skip(self), level = "debug")]
    pub async fn all_orders(&self, params: &Params) -> Result<Vec<Order>> {
        let endpoint = params.endpoint("/api/v1/allOrders");
        let body = params.body_bytes().map(<[u8]>::to_vec);
        let request = self.signed_request(Method::GET, &endpoint, body)?;
        self.send_json(request).await
    }
}
