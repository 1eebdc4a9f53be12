use memchr::{memchr, memmem, memrchr};

pub(crate) const NEGATION: u8 = b'!';
pub(crate) const WILDCARD: u8 = b'*';

/// Tests whether `input` matches the pattern `body` (without the negation marker).
///
/// The literal prefix and suffix are checked first, then the interior segments are searched left to
/// right inside the window that remains between them.
pub(crate) fn matches(body: &[u8], input: &[u8]) -> bool {
    let Some(first) = memchr(WILDCARD, body) else {
        return body == input;
    };
    let last = memrchr(WILDCARD, body).unwrap_or(first);

    let prefix = &body[..first];
    let suffix = &body[last + 1..];
    let middle = if last > first { &body[first + 1..last] } else { &[][..] };

    if prefix.is_empty() && suffix.is_empty() && middle.iter().all(|&b| b == WILDCARD) {
        return true;
    }

    if input.len() < prefix.len() + suffix.len() || !input.starts_with(prefix) || !input.ends_with(suffix) {
        return false;
    }

    let mut window = &input[prefix.len()..input.len() - suffix.len()];
    for segment in middle.split(|&b| b == WILDCARD) {
        if segment.is_empty() {
            continue;
        }
        match memmem::find(window, segment) {
            Some(i) => window = &window[i + segment.len()..],
            None => return false,
        }
    }

    true
}
