/*
[INPUT]:  Buffered response body bytes (status already checked)
[OUTPUT]: Typed payload, boolean success flag, or envelope error
[POS]:    HTTP layer - envelope decoding shared by every endpoint
[UPDATE]: When the envelope contract or its error mapping changes
*/

use serde::de::DeserializeOwned;

use crate::http::{BtcturkError, Result};
use crate::types::Envelope;

/// Decode an envelope and return its `data` as `T`.
///
/// `code != 0` yields `Api` with the envelope message; a missing message
/// on an error envelope, or missing data on a success envelope, yields
/// `Decode`.
pub fn decode_envelope<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let envelope: Envelope = serde_json::from_slice(bytes)?;
    check_code(&envelope)?;

    match envelope.data {
        Some(data) => Ok(serde_json::from_value(data)?),
        None => Err(BtcturkError::Decode(
            "envelope reported success without data".to_string(),
        )),
    }
}

/// Decode an envelope whose only result is the `success` flag
pub fn decode_success(bytes: &[u8]) -> Result<bool> {
    let envelope: Envelope = serde_json::from_slice(bytes)?;
    check_code(&envelope)?;

    if !envelope.success {
        return Err(api_error(&envelope));
    }
    Ok(true)
}

fn check_code(envelope: &Envelope) -> Result<()> {
    if envelope.is_success() {
        Ok(())
    } else {
        Err(api_error(envelope))
    }
}

fn api_error(envelope: &Envelope) -> BtcturkError {
    match envelope.message.as_deref() {
        Some(message) => BtcturkError::api_error(envelope.code, message),
        None => BtcturkError::Decode(format!(
            "envelope reported failure (code {}) without a message",
            envelope.code
        )),
    }
}
