// src/core/html.rs
//
// Case-insensitive tag scanning over raw markup. No DOM; callers work on
// byte offsets into the input string.

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Byte offset of the next `<tag` whose name ends right after `tag`
/// (so `<th` does not match `<thead`).
fn find_open(lc: &str, tag: &str, from: usize) -> Option<usize> {
    let needle = join!("<", tag);
    let mut pos = from;
    loop {
        let at = lc.get(pos..)?.find(&needle)? + pos;
        let after = at + needle.len();
        match lc.as_bytes().get(after) {
            Some(b) if b.is_ascii_whitespace() || *b == b'>' || *b == b'/' => return Some(at),
            None => return None,
            _ => pos = after,
        }
    }
}

/// Next complete `<tag …>…</tag>` block at or after `from`.
/// Returns `(start_of_open_tag, end_of_close_tag)`. No nesting awareness:
/// the first closing tag ends the block.
pub fn next_element_ci(s: &str, tag: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let tag = to_lower(tag);
    let start = find_open(&lc, &tag, from)?;
    let open_end = s[start..].find('>')? + start + 1;
    let close = join!("</", &tag);
    let end_rel = lc[open_end..].find(&close)?;
    let close_end = lc[open_end + end_rel..].find('>').map(|i| open_end + end_rel + i + 1)?;
    Some((start, close_end))
}

/// All top-level `<tag>` blocks inside `s`, in document order.
pub fn elements_ci<'a>(s: &'a str, tag: &str) -> Vec<&'a str> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((a, b)) = next_element_ci(s, tag, pos) {
        out.push(&s[a..b]);
        pos = b;
    }
    out
}

/// The opening tag of a block, e.g. `<td class="x">`.
pub fn open_tag(block: &str) -> &str {
    match block.find('>') {
        Some(i) => &block[..=i],
        None => block,
    }
}

/// Tag name of a block, lowercased (`"<TD class=a>…"` → `"td"`).
pub fn tag_name(block: &str) -> String {
    let rest = block.trim_start().trim_start_matches('<');
    to_lower(
        rest.split(|c: char| c.is_ascii_whitespace() || c == '>' || c == '/')
            .next()
            .unwrap_or(""),
    )
}

/// Value of `name="…"`, `name='…'` or `name=bare` inside an opening tag.
pub fn attr_value(tag: &str, name: &str) -> Option<String> {
    let lc = to_lower(tag);
    let needle = to_lower(name);
    let mut pos = 0usize;
    while let Some(rel) = lc[pos..].find(&needle) {
        let at = pos + rel;
        pos = at + needle.len();
        // must be a whole attribute name
        let before_ok = at == 0 || lc.as_bytes()[at - 1].is_ascii_whitespace();
        let rest = lc[pos..].trim_start();
        if !before_ok || !rest.starts_with('=') {
            continue;
        }
        let val_start = tag.len() - rest.len() + 1;
        let val = tag[val_start..].trim_start();
        let v = match val.chars().next() {
            Some(q @ ('"' | '\'')) => {
                let inner = &val[1..];
                &inner[..inner.find(q).unwrap_or(inner.len())]
            }
            _ => {
                let end = val
                    .find(|c: char| c.is_ascii_whitespace() || c == '>')
                    .unwrap_or(val.len());
                &val[..end]
            }
        };
        return Some(s!(v));
    }
    None
}

/// Whitespace-separated class list of an opening tag contains `class_name`.
pub fn has_class(tag: &str, class_name: &str) -> bool {
    attr_value(tag, "class")
        .map(|v| v.split_whitespace().any(|c| c.eq_ignore_ascii_case(class_name)))
        .unwrap_or(false)
}

/// Class attribute contains `fragment` anywhere (`table[class*="spec"]`).
pub fn class_contains(tag: &str, fragment: &str) -> bool {
    attr_value(tag, "class")
        .map(|v| to_lower(&v).contains(&to_lower(fragment)))
        .unwrap_or(false)
}

/// Given a complete tag block like `<td ...>INNER</td>`,
/// return the INNER text without the wrapping tags (still may contain nested tags).
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

/// Visible text of a block: inner markup, tags stripped, entities decoded,
/// whitespace collapsed.
pub fn text_of(block: &str) -> String {
    let inner = inner_after_open_tag(block);
    let decoded = super::sanitize::normalize_entities(&strip_tags(inner));
    super::sanitize::normalize_ws(&decoded)
}
