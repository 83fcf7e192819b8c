/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod envelope;
pub mod error;
pub mod params;
pub mod public;
pub mod signature;
pub mod trade;
pub mod user;

pub use error::{BtcturkError, Result};
pub use params::Params;
pub use signature::RequestSigner;

pub use client::{BtcturkClient, ClientConfig, DEFAULT_BASE_URL, VERSION};
