//! Decoding of `application/x-www-form-urlencoded` strings.
//!
//! Query strings and url-encoded bodies share one decoder. Pairs are split on
//! `&` and then on the first `=`, percent-decoded with `+` read as a space.
//! A token without `=` is a name with an empty value and empty tokens are
//! skipped.

use crate::echo::document::ParamMap;

/// Decode an encoded parameter string into a [`ParamMap`].
pub fn decode(encoded: &str) -> ParamMap {
    form_urlencoded::parse(encoded.as_bytes()).collect()
}

/// Encode name/value pairs, in order, as a parameter string.
pub fn encode<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}
