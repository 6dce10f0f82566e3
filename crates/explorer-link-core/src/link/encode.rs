//! Query value encoding.
//!
//! Values are form-encoded as UTF-8 (space becomes `+`). When a non-UTF-8
//! charset is configured the native percent-encoder is used instead, which
//! always emits UTF-8 escapes and encodes space as `%20`.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::form_urlencoded;

/// Charset label accepted by the primary encoder.
pub const UTF8: &str = "UTF-8";

/// Characters the native encoder leaves alone besides ASCII alphanumerics.
const NATIVE_UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'-')
    .remove(b'!')
    .remove(b'.')
    .remove(b'~')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*');

fn is_utf8_label(charset: &str) -> bool {
    let label = charset.trim();
    label.eq_ignore_ascii_case("utf-8") || label.eq_ignore_ascii_case("utf8")
}

/// Encodes `value` for use as a query parameter value.
pub fn encode(value: &str, charset: &str) -> String {
    if is_utf8_label(charset) {
        return form_urlencoded::byte_serialize(value.as_bytes()).collect();
    }
    tracing::warn!(charset, "charset unavailable, using native encoder");
    native_encode(value)
}

/// Percent-encodes everything outside `A-Za-z0-9_-!.~'()*`.
pub fn native_encode(value: &str) -> String {
    utf8_percent_encode(value, NATIVE_UNRESERVED).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_form_encoding() {
        assert_eq!(encode("380 New York St", UTF8), "380+New+York+St");
        assert_eq!(encode("a/b&c=d", UTF8), "a%2Fb%26c%3Dd");
        assert_eq!(encode("café", "utf8"), "caf%C3%A9");
    }

    #[test]
    fn plain_ids_are_untouched() {
        assert_eq!(
            encode("8a5fc1a0b3db4e7b8e5e5a6a0f8c4d21", UTF8),
            "8a5fc1a0b3db4e7b8e5e5a6a0f8c4d21"
        );
    }

    #[test]
    fn unknown_charset_uses_native_encoder() {
        assert_eq!(encode("380 New York St", "x-unknown"), "380%20New%20York%20St");
        assert_eq!(native_encode("it's (ok)*!~"), "it's%20(ok)*!~");
        assert_eq!(native_encode("a+b,c"), "a%2Bb%2Cc");
    }
}
