/*
[INPUT]:  Order input and cancellation parameters with signed credentials
[OUTPUT]: Created order and cancellation confirmation
[POS]:    HTTP layer - trading endpoints (require HMAC auth)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use reqwest::Method;
use tracing::{info, instrument};

use crate::http::{BtcturkClient, BtcturkError, Params, Result};
use crate::types::{Order, OrderInput};

impl BtcturkClient {
    /// Create a new order
    ///
    /// POST /api/v1/order with a JSON body
    #[instrument(skip(self), level = "debug")]
    pub async fn new_order(&self, input: &OrderInput) -> Result<Order> {
        let body = serde_json::to_vec(input).map_err(BtcturkError::Serialization)?;
        let request = self.signed_request(Method::POST, "/api/v1/order", Some(body))?;
        let order: Order = self.send_json(request).await?;
        info!(order_id = order.id, pair = %order.pair_symbol, "order created");
        Ok(order)
    }

    /// Cancel an order
    ///
    /// DELETE /api/v1/order?id={id}
    #[instrument(skip(self), level = "debug")]
    pub async fn cancel_order(&self, params: &Params) -> Result<bool> {
        let endpoint = params.endpoint("/api/v1/order");
        let body = params.body_bytes().map(<[u8]>::to_vec);
        let request = self.signed_request(Method::DELETE, &endpoint, body)?;
        let cancelled = self.send_success(request).await?;
        info!(order_id = ?params.get("id"), "order cancelled");
        Ok(cancelled)
    }

    /// Cancel an order by its exchange id
    pub async fn cancel_order_by_id(&self, id: i64) -> Result<bool> {
        self.cancel_order(&Params::new().order_id(id)).await
    }
}
