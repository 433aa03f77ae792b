//! String escaping for each target language.

/// Escape text content for HTML.
pub fn html_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a double-quoted HTML attribute value.
pub fn html_attr(text: &str) -> String {
    html_text(text).replace('"', "&quot;")
}

/// Escape text content for JSX and Vue templates, where braces are syntax.
pub fn template_text(text: &str) -> String {
    html_text(text).replace('{', "&#123;").replace('}', "&#125;")
}

/// Body of a single-quoted JavaScript string.
pub fn js_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

/// Body of a single-quoted Dart string. `$` starts interpolation in Dart.
pub fn dart_string(text: &str) -> String {
    js_string(text).replace('$', "\\$")
}

/// Body of a double-quoted Swift string.
pub fn swift_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_escapes() {
        assert_eq!(html_text("a < b & c"), "a &lt; b &amp; c");
        assert_eq!(html_attr("say \"hi\""), "say &quot;hi&quot;");
        assert_eq!(template_text("{{ x }}"), "&#123;&#123; x &#125;&#125;");
    }

    #[test]
    fn test_string_escapes() {
        assert_eq!(js_string("it's\nfine"), "it\\'s\\nfine");
        assert_eq!(dart_string("cost: $5"), "cost: \\$5");
        assert_eq!(swift_string("a \"quote\" \\(x)"), "a \\\"quote\\\" \\\\(x)");
    }
}
