use heapless::String as HeaplessString;
use serde::Serialize;
use std::hash::Hasher;
use std::str::FromStr;
use twox_hash::XxHash64;

/// Hashes serializable data into an i64 using CBOR serialization and XxHash64.
///
/// This provides a stable hash across different runs and systems by:
/// - Serializing the data to CBOR format (deterministic binary representation)
/// - Using XxHash64 with a fixed seed (0) for consistent hashing
pub fn hash_as_i64<T: Serialize>(data: &T) -> Result<i64, String> {
    let mut hasher = XxHash64::with_seed(0);
    let mut cbor = Vec::new();
    ciborium::ser::into_writer(data, &mut cbor)
        .map_err(|e| format!("Failed to serialize data for hashing: {e}"))?;
    hasher.write(&cbor);
    Ok(hasher.finish() as i64)
}

/// Case-folded form of a name; two names collide when these are equal.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
}

/// Uniqueness key stored in the `name_hash` column.
pub fn name_hash(name: &str) -> Result<i64, String> {
    hash_as_i64(&normalize_name(name))
}

/// Copies `value` into a fixed-capacity string.
///
/// `max_chars` bounds the length in characters; `N` is the byte capacity.
pub fn to_heapless<const N: usize>(
    field: &str,
    value: &str,
    max_chars: usize,
) -> Result<HeaplessString<N>, String> {
    let too_long = || format!("Value for '{field}' is too long (max {max_chars} characters)");
    if value.chars().count() > max_chars {
        return Err(too_long());
    }
    HeaplessString::from_str(value).map_err(|_| too_long())
}

/// Optional variant of [`to_heapless`].
pub fn to_optional_heapless<const N: usize>(
    field: &str,
    value: Option<&str>,
    max_chars: usize,
) -> Result<Option<HeaplessString<N>>, String> {
    value.map(|v| to_heapless(field, v, max_chars)).transpose()
}
