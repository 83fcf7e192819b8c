/*
[INPUT]:  API key pair supplied by the embedding application
[OUTPUT]: Stored credentials and HMAC-SHA256 signing primitive
[POS]:    Auth layer - key material for BtcTurk account endpoints
[UPDATE]: When key handling or the signing primitive changes
*/

pub mod credentials;
pub mod signer;

pub use credentials::Credentials;
pub use signer::HmacSigner;
