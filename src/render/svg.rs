//! SVG text helpers

use std::borrow::Cow;

/// Escape text content for use inside an SVG element.
///
/// Replaces `&`, `<`, `>`, `"` and `'` with their XML entities in a single
/// left-to-right pass. Existing entities are escaped again, so this must run
/// exactly once, when the text is written out.
pub fn escape_text(s: &str) -> Cow<'_, str> {
    let needs_escape = |c: char| matches!(c, '&' | '<' | '>' | '"' | '\'');
    let Some(first) = s.find(needs_escape) else {
        return Cow::Borrowed(s);
    };

    let mut result = String::with_capacity(s.len() + 16);
    result.push_str(&s[..first]);
    for c in s[first..].chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&apos;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_borrowed() {
        assert!(matches!(escape_text("hello world"), Cow::Borrowed("hello world")));
        assert!(matches!(escape_text(""), Cow::Borrowed("")));
    }

    #[test]
    fn escapes_all_five() {
        assert_eq!(
            escape_text(r#"<hi> "there" & 'you'"#),
            "&lt;hi&gt; &quot;there&quot; &amp; &apos;you&apos;"
        );
    }

    #[test]
    fn keeps_non_ascii() {
        assert_eq!(escape_text("Привет <мир>"), "Привет &lt;мир&gt;");
        assert_eq!(escape_text("😀&😀"), "😀&amp;😀");
    }

    #[test]
    fn escaping_twice_changes_output() {
        let once = escape_text("a & b");
        let twice = escape_text(&once);
        assert_eq!(once, "a &amp; b");
        assert_eq!(twice, "a &amp;amp; b");
        assert_ne!(once, twice);
    }

    #[test]
    fn escaped_output_has_no_raw_specials() {
        let inputs = ["&&&", "<<>>", r#""'"'"#, "mixed <a href='x'>&</a>", "none"];
        for input in inputs {
            let escaped = escape_text(input);
            assert!(!escaped.contains(['<', '>', '"', '\'']), "{escaped}");
            // Every remaining '&' starts one of our entities
            for (i, _) in escaped.match_indices('&') {
                let rest = &escaped[i..];
                assert!(
                    ["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"]
                        .iter()
                        .any(|e| rest.starts_with(e)),
                    "bare ampersand in {escaped}"
                );
            }
        }
    }
}
