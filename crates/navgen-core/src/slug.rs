//! Anchor slug encoding.
//!
//! Reproduces the fragment IDs the site renderer assigns to headings, so a
//! navigation link built from heading text lands on the same `#id` the
//! rendered page carries.

/// Encode heading text as the anchor fragment the renderer assigns to it.
///
/// Steps, in order:
/// 1. Lowercase the text.
/// 2. Replace each run of whitespace with a single `-`.
/// 3. Keep ASCII word characters (`[A-Za-z0-9_]`), `-`, and every code point
///    in the Hiragana, Katakana and CJK Unified Ideographs blocks.
/// 4. Delete everything else.
///
/// Consecutive hyphens are not collapsed and leading or trailing hyphens are
/// kept, matching the renderer.
///
/// # Examples
///
/// ```
/// use navgen_core::encode;
///
/// assert_eq!(encode("Getting Started"), "getting-started");
/// assert_eq!(encode("2. Ruby応用"), "2-ruby応用");
/// assert_eq!(encode("A - B"), "a---b");
/// ```
#[must_use]
pub fn encode(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut in_whitespace = false;

    for c in lowered.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
                in_whitespace = true;
            }
            continue;
        }
        in_whitespace = false;

        if is_kept(c) {
            slug.push(c);
        }
    }

    slug
}

fn is_kept(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-' || in_japanese_block(c)
}

/// Hiragana, Katakana or CJK Unified Ideographs.
fn in_japanese_block(c: char) -> bool {
    matches!(c, '\u{3040}'..='\u{309F}' | '\u{30A0}'..='\u{30FF}' | '\u{4E00}'..='\u{9FFF}')
}
