/*
[INPUT]:  Pair symbol and depth/count query parameters
[OUTPUT]: Market data (order book, recent trades)
[POS]:    HTTP layer - public market data endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing response format
*/

use reqwest::Method;
use tracing::instrument;

use crate::http::{BtcturkClient, Params, Result};
use crate::types::{OrderBook, Trade};

impl BtcturkClient {
    /// Query order book depth
    ///
    /// GET /api/v2/orderbook?pairSymbol={pair}[&limit={n}]
    #[instrument(skip(self), level = "debug")]
    pub async fn order_book(&self, params: &Params) -> Result<OrderBook> {
        let endpoint = params.endpoint("/api/v2/orderbook");
        let request = self.request(Method::GET, &endpoint, None)?;
        self.send_json(request).await
    }

    /// Query recent trades
    ///
    /// GET /api/v2/trades?pairSymbol={pair}[&last={count}] (count at most 50)
    #[instrument(skip(self), level = "debug")]
    pub async fn trades(&self, params: &Params) -> Result<Vec<Trade>> {
        let endpoint = params.endpoint("/api/v2/trades");
        let request = self.request(Method::GET, &endpoint, None)?;
        self.send_json(request).await
    }
}
