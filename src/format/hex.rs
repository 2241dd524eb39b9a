//! Binary-to-text encoding for BLOB content.

/// Encode bytes as uppercase hex, two digits per byte, in byte order.
pub fn to_upper_hex(data: &[u8]) -> String {
    hex::encode_upper(data)
}
