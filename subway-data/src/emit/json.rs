//! JSON artifacts.

use serde::Serialize;

use super::error::EmitError;

/// Pretty-print `value` with two-space indentation and a trailing newline.
pub fn to_json<T: Serialize + ?Sized>(file: &str, value: &T) -> Result<Vec<u8>, EmitError> {
    let mut bytes = serde_json::to_vec_pretty(value).map_err(|source| EmitError::Json {
        file: file.to_string(),
        source,
    })?;
    bytes.push(b'\n');
    Ok(bytes)
}
