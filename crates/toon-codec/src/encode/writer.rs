/// Accumulates indented output lines. Lines are joined with `\n` and the
/// final text carries no trailing newline.
pub struct LineWriter {
    out: String,
    indent_cache: String,
    indent_width: usize,
}

impl LineWriter {
    pub fn new(indent_width: usize) -> Self {
        Self {
            out: String::new(),
            indent_cache: String::new(),
            indent_width,
        }
    }

    fn begin_line(&mut self, depth: usize) {
        if !self.out.is_empty() {
            self.out.push('\n');
        }
        let indent = depth * self.indent_width;
        if self.indent_cache.len() < indent {
            let grow = indent - self.indent_cache.len();
            self.indent_cache.extend(core::iter::repeat(' ').take(grow));
        }
        self.out.push_str(&self.indent_cache[..indent]);
    }

    pub fn push(&mut self, depth: usize, content: &str) {
        self.begin_line(depth);
        self.out.push_str(content);
    }

    /// Push a line prefixed with the `- ` item marker.
    pub fn push_list_item(&mut self, depth: usize, content: &str) {
        self.begin_line(depth);
        self.out.push_str("- ");
        self.out.push_str(content);
    }

    pub fn into_string(self) -> String {
        self.out
    }
}
