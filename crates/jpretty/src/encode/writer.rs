pub struct JsonWriter {
    out: String,
    indent_cache: String,
}

impl JsonWriter {
    pub fn new() -> Self {
        Self {
            out: String::new(),
            indent_cache: String::new(),
        }
    }

    pub fn raw(&mut self, s: &str) {
        self.out.push_str(s);
    }

    pub fn punct(&mut self, c: char) {
        self.out.push(c);
    }

    /// Newline followed by `indent` spaces, served from a grow-only cache.
    pub fn break_line(&mut self, indent: usize) {
        self.out.push('\n');
        if indent == 0 {
            return;
        }
        if self.indent_cache.len() < indent {
            self.indent_cache
                .extend(core::iter::repeat(' ').take(indent - self.indent_cache.len()));
        }
        self.out.push_str(&self.indent_cache[..indent]);
    }

    pub fn string(&mut self, s: &str) {
        crate::encode::primitives::escape_and_quote_into(&mut self.out, s);
    }

    pub fn into_string(self) -> String {
        self.out
    }
}

impl Default for JsonWriter {
    fn default() -> Self {
        Self::new()
    }
}
