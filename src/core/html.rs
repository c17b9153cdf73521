// src/core/html.rs
//
// Tolerant, case-insensitive scanning helpers. No DOM; callers slice the
// blocks they care about and read attributes/text out of them.

/// Byte offset of `needle` in `s` at or after `from`, ASCII case-insensitive.
pub fn find_ci(s: &str, needle: &str, from: usize) -> Option<usize> {
    let hay = s.as_bytes();
    let pat = needle.as_bytes();
    if pat.is_empty() || from > hay.len() || pat.len() > hay.len() - from {
        return None;
    }
    (from..=hay.len() - pat.len()).find(|&i| hay[i..i + pat.len()].eq_ignore_ascii_case(pat))
}

/// Next `<tag ...>...</tag>` block starting at or after `from`; returns
/// (start of opener, end of closer).
pub fn next_tag_block_ci(s: &str, o: &str, c: &str, from: usize) -> Option<(usize, usize)> {
    let start = find_ci(s, o, from)?;
    let open_end = s[start..].find('>')? + start + 1;
    let end = find_ci(s, c, open_end)? + c.len();
    Some((start, end))
}

/// The opener of a block: `<a href="...">` for `<a href="...">x</a>`.
pub fn open_tag(block: &str) -> &str {
    match block.find('>') {
        Some(gt) => &block[..=gt],
        None => block,
    }
}

pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

/// Quoted attribute value from an opening tag, `name="v"` or `name='v'`.
pub fn attr_value<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let mut from = 0usize;
    while let Some(pos) = find_ci(tag, name, from) {
        from = pos + name.len();
        // must be a whole attribute name
        let boundary = pos == 0 || tag.as_bytes()[pos - 1].is_ascii_whitespace();
        let rest = tag[from..].trim_start();
        if !boundary || !rest.starts_with('=') { continue; }
        let rest = rest[1..].trim_start();
        let quote = rest.chars().next()?;
        if quote != '"' && quote != '\'' { continue; }
        let body = &rest[1..];
        let end = body.find(quote)?;
        return Some(&body[..end]);
    }
    None
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&out)
}

/// Run of ASCII digits starting at `from`.
pub fn digits_at(s: &str, from: usize) -> &str {
    let tail = s.get(from..).unwrap_or("");
    let n = tail.bytes().take_while(u8::is_ascii_digit).count();
    &tail[..n]
}

/// Text of the anchor that follows an opener ending at `open_end`: up to the next '<'.
pub fn text_until_tag(s: &str, open_end: usize) -> &str {
    let tail = s.get(open_end..).unwrap_or("");
    match tail.find('<') {
        Some(lt) => &tail[..lt],
        None => tail,
    }
}
