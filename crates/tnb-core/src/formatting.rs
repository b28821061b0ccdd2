//! Reply formatting helpers.

/// Split a plain-text reply into chunks of at most `limit` bytes.
///
/// Lines are kept whole where possible; a single line longer than `limit` is
/// cut on char boundaries. No chunk is whitespace-only: such a run is carried
/// into the next piece, and a trailing one that fits nowhere is dropped.
/// Otherwise joining the chunks gives back `text` unchanged.
pub fn split_text_chunks(text: &str, limit: usize) -> Vec<String> {
    if text.len() <= limit {
        return vec![text.to_string()];
    }

    let mut out = Vec::new();
    let mut chunk = String::new();

    for line in text.split_inclusive('\n') {
        if chunk.len() + line.len() <= limit {
            chunk.push_str(line);
            continue;
        }

        let mut rest = if is_blank(&chunk) {
            std::mem::take(&mut chunk) + line
        } else {
            if !chunk.is_empty() {
                out.push(std::mem::take(&mut chunk));
            }
            line.to_string()
        };

        while rest.len() > limit {
            let head_len = split_utf8_prefix(&rest, limit).0.len();
            let tail = rest.split_off(head_len);
            out.push(std::mem::replace(&mut rest, tail));
        }
        chunk = rest;
    }

    if is_blank(&chunk) {
        if let Some(last) = out.last_mut().filter(|l| l.len() + chunk.len() <= limit) {
            last.push_str(&chunk);
        }
    } else {
        out.push(chunk);
    }
    out
}

fn is_blank(s: &str) -> bool {
    s.chars().all(char::is_whitespace)
}

fn split_utf8_prefix(s: &str, max_bytes: usize) -> (&str, &str) {
    let mut end = max_bytes.min(s.len());
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    if end == 0 {
        // A char wider than `max_bytes`: emit it alone to keep making progress.
        end = s.chars().next().map(char::len_utf8).unwrap_or(0);
    }
    s.split_at(end)
}
