use crate::error::ChainError;

/// Owned form of one corpus entry: `[word, [successor, ...]]`.
pub(crate) type Pair = (String, Vec<String>);

/// Borrowed form of one corpus entry, used when exporting.
pub(crate) type PairRef<'a> = (&'a str, &'a [String]);

/// Encodes pairs as a JSON array of 2-element arrays.
///
/// Example:
/// `[("the", ["dog", "cat"])]` → `[["the",["dog","cat"]]]`
pub(crate) fn encode_json(pairs: &[PairRef<'_>]) -> Result<String, ChainError> {
	Ok(serde_json::to_string(pairs)?)
}

/// Decodes a JSON array of `[string, [string, ...]]` pairs.
///
/// A pair with a missing or extra element, or any non-string value,
/// is rejected by the tuple deserializer.
pub(crate) fn decode_json(input: &str) -> Result<Vec<Pair>, ChainError> {
	Ok(serde_json::from_str(input)?)
}

/// Encodes pairs with `postcard`.
pub(crate) fn encode_binary(pairs: &[PairRef<'_>]) -> Result<Vec<u8>, ChainError> {
	Ok(postcard::to_stdvec(pairs)?)
}

/// Decodes pairs written by `encode_binary`.
///
/// # Errors
/// Fails on malformed input and on bytes left over after the pairs.
pub(crate) fn decode_binary(bytes: &[u8]) -> Result<Vec<Pair>, ChainError> {
	let (pairs, rest): (Vec<Pair>, &[u8]) = postcard::take_from_bytes(bytes)?;
	if !rest.is_empty() {
		return Err(ChainError::TrailingBytes(rest.len()));
	}
	Ok(pairs)
}
