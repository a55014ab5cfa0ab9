#![doc = include_str!("../README.md")]

pub mod decode;
pub mod encode;
pub mod error;
mod map;
mod number;
pub mod options;
mod value;

pub use crate::error::{Error, Result};
pub use crate::map::Map;
pub use crate::options::{DecodeOptions, Delimiter, EncodeOptions};
pub use crate::value::{Number, Value};

#[cfg(all(feature = "serde", feature = "json"))]
use std::io::{Read, Write};

#[cfg(all(feature = "serde", feature = "json"))]
use serde::{de::DeserializeOwned, Serialize};

/// Encodes a value to text.
///
/// The value is normalized first (see [`normalize`]), so encoding is
/// infallible: every [`Value`] has a textual form.
pub fn encode(value: &Value, options: &EncodeOptions) -> String {
    let normalized = encode::normalize::normalize_value(value);
    encode::encoders::encode_value(&normalized, options)
}

/// Rebuilds a value in canonical form: non-finite floats become null,
/// `-0.0` becomes `0`, and integral floats collapse to integers.
///
/// [`encode`] applies this internally. It is exposed so callers can
/// pre-normalize a value before comparing it against a decoded round-trip.
pub fn normalize(value: &Value) -> Value {
    encode::normalize::normalize_value(value)
}

/// Decodes text into a [`Value`].
///
/// Strictness, indentation width, and the other knobs come from `options`.
pub fn decode(input: &str, options: &DecodeOptions) -> Result<Value> {
    decode::decode_text(input, options)
}

/// Encodes any `Serialize` type by routing it through a JSON value first.
#[cfg(all(feature = "serde", feature = "json"))]
pub fn encode_to_string<T: Serialize>(value: &T, options: &EncodeOptions) -> Result<String> {
    let json = serde_json::to_value(value)?;
    Ok(encode(&Value::from(json), options))
}

#[cfg(all(feature = "serde", feature = "json"))]
pub fn encode_to_writer<W: Write, T: Serialize>(
    mut writer: W,
    value: &T,
    options: &EncodeOptions,
) -> Result<()> {
    let text = encode_to_string(value, options)?;
    writer.write_all(text.as_bytes())?;
    Ok(())
}

/// Decodes text into any `DeserializeOwned` type via a JSON value.
#[cfg(all(feature = "serde", feature = "json"))]
pub fn decode_from_str<T: DeserializeOwned>(input: &str, options: &DecodeOptions) -> Result<T> {
    let value = decode(input, options)?;
    Ok(serde_json::from_value(serde_json::Value::from(value))?)
}

#[cfg(all(feature = "serde", feature = "json"))]
pub fn decode_from_reader<R: Read, T: DeserializeOwned>(
    mut reader: R,
    options: &DecodeOptions,
) -> Result<T> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    decode_from_str(&input, options)
}
