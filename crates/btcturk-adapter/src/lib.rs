/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public BtcTurk adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

//! Async client for the BtcTurk REST API.
//!
//! Public market data (order book, trades) needs no credentials. Account
//! endpoints are signed with the exchange's HMAC-SHA256 scheme using the
//! public/private key pair set on the client.
//!
//! ```no_run
//! use btcturk_adapter::{BtcturkClient, Params};
//!
//! # async fn run() -> btcturk_adapter::Result<()> {
//! let client = BtcturkClient::new()?;
//! let book = client
//!     .order_book(&Params::new().pair_symbol("BTC_TRY").limit(10))
//!     .await?;
//! println!("best bid: {:?}", book.bids.first());
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{Credentials, HmacSigner};

// Re-export commonly used types from http
pub use http::{
    BtcturkClient,
    BtcturkError,
    ClientConfig,
    Params,
    RequestSigner,
    Result,
    VERSION,
};

// Re-export all types
pub use types::*;
