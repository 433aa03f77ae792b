//! Indentation-aware line writer.

/// Accumulates lines of generated code at a current indentation level.
#[derive(Debug)]
pub struct CodeWriter {
    lines: Vec<String>,
    level: usize,
    width: usize,
}

impl CodeWriter {
    /// Create a writer indenting by `width` spaces per level.
    pub fn new(width: usize) -> Self {
        Self {
            lines: Vec::new(),
            level: 0,
            width,
        }
    }

    /// Append one line at the current indentation.
    pub fn line(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if text.is_empty() {
            self.lines.push(String::new());
        } else {
            self.lines
                .push(format!("{}{}", " ".repeat(self.level * self.width), text));
        }
    }

    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    pub fn indent(&mut self) {
        self.level += 1;
    }

    pub fn dedent(&mut self) {
        self.level = self.level.saturating_sub(1);
    }

    /// Run `f` one level deeper.
    pub fn nested(&mut self, f: impl FnOnce(&mut Self)) {
        self.indent();
        f(self);
        self.dedent();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The accumulated lines joined by newlines.
    pub fn finish(self) -> String {
        self.lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nesting() {
        let mut w = CodeWriter::new(2);
        w.line("<div>");
        w.nested(|w| {
            w.line("<p>Hi</p>");
            w.blank();
        });
        w.line("</div>");
        assert_eq!(w.finish(), "<div>\n  <p>Hi</p>\n\n</div>");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut w = CodeWriter::new(4);
        w.dedent();
        w.line("x");
        assert_eq!(w.finish(), "x");
    }
}
