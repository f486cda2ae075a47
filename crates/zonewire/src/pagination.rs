//! `Link` header parsing for server-driven pagination
//!
//! Paginated responses carry an RFC 8288 style header such as
//! `Link: <https://api.example.net/v1/zones?after=x&limit=100>; rel="next"`.
//! The target of the `next` relation is the continuation pointer for the
//! walk; its absence means the result set is complete. The URI is treated
//! as opaque and requested verbatim, never re-derived.

/// Extract the `rel="next"` target URI from a `Link` header value.
///
/// Tolerates unquoted relation values, whitespace-separated relation
/// lists, and unrelated link relations in the same header. Returns `None`
/// when no usable `next` relation is present.
pub(crate) fn next_link(header: &str) -> Option<String> {
    for part in header.split(',') {
        let mut segments = part.split(';');
        let target = segments.next().unwrap_or("").trim();
        if !(target.starts_with('<') && target.ends_with('>')) {
            continue;
        }
        let uri = &target[1..target.len() - 1];
        if uri.is_empty() {
            continue;
        }

        for param in segments {
            let mut kv = param.splitn(2, '=');
            let (Some(key), Some(value)) = (kv.next(), kv.next()) else {
                continue;
            };
            if !key.trim().eq_ignore_ascii_case("rel") {
                continue;
            }
            let relations = value.trim().trim_matches('"');
            if relations.split_whitespace().any(|rel| rel == "next") {
                return Some(uri.to_string());
            }
        }
    }
    None
}
