use url::form_urlencoded::byte_serialize;

/// Builds a `mailto:` link with the subject and body percent-encoded.
///
/// Spaces are encoded as `%20`, not `+`: mail clients do not decode `+`.
pub fn mailto_link(recipient: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        recipient.trim(),
        encode(subject),
        encode(body)
    )
}

/// Form encoding turns literal `+` into `%2B`, so every remaining `+` was a space.
fn encode(value: &str) -> String {
    byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
