// HTML output escaping for user-supplied text.

/// Escape the five HTML-significant characters.
///
/// `None` is treated as an empty string. The mapping is applied in a single
/// left-to-right pass, so an `&` is never re-read as part of an entity produced
/// for another character. Escaping is *not* idempotent: feeding already-escaped
/// text back in encodes its ampersands again.
pub fn escape_html<'a>(input: impl Into<Option<&'a str>>) -> String {
    let Some(s) = input.into() else {
        return String::new();
    };

    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimal decoder for the five entities produced above, standing in for a browser parser.
    fn unescape(s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        let mut rest = s;
        while let Some(pos) = rest.find('&') {
            out.push_str(&rest[..pos]);
            rest = &rest[pos..];
            let mut matched = false;
            for (entity, ch) in [
                ("&amp;", '&'),
                ("&lt;", '<'),
                ("&gt;", '>'),
                ("&quot;", '"'),
                ("&#039;", '\''),
            ] {
                if let Some(tail) = rest.strip_prefix(entity) {
                    out.push(ch);
                    rest = tail;
                    matched = true;
                    break;
                }
            }
            if !matched {
                out.push('&');
                rest = &rest[1..];
            }
        }
        out.push_str(rest);
        out
    }

    #[test]
    fn escapes_all_five_characters() {
        assert_eq!(
            escape_html("<b>&'\"</b>"),
            "&lt;b&gt;&amp;&#039;&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn absent_value_is_empty() {
        assert_eq!(escape_html(None), "");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(escape_html("Main St 1, 10999 Berlin"), "Main St 1, 10999 Berlin");
        assert_eq!(escape_html("Müller"), "Müller");
    }

    #[test]
    fn unescaping_restores_original_text() {
        for original in [
            "<script>alert('x')</script>",
            "Tom & Jerry",
            "\"quoted\" & 'single'",
            "&amp; literally",
        ] {
            assert_eq!(unescape(&escape_html(original)), original);
        }
    }

    #[test]
    fn double_escaping_encodes_ampersands_again() {
        let once = escape_html("a & b");
        assert_eq!(once, "a &amp; b");

        let twice = escape_html(once.as_str());
        assert_eq!(twice, "a &amp;amp; b");
        assert_ne!(once, twice);
    }
}
