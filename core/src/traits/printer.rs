/// Trait for building generated source text.
///
/// `Printer` accumulates output with indentation support. Generators write
/// words and blocks into it and take the final string with
/// [`into_string`](Printer::into_string).
///
/// # Required Methods
///
/// - `buf()`: Get current buffer contents
/// - `buf_mut()`: Get mutable buffer for appending
/// - `indent_level()`: Current indentation depth
/// - `set_indent(level)`: Set indentation depth
/// - `into_string()`: Consume and return final output
///
/// # Example
///
/// ```ignore
/// use annogen_core::Printer;
///
/// #[derive(Default)]
/// struct MyPrinter {
///     buf: String,
///     indent: usize,
/// }
///
/// impl Printer for MyPrinter {
///     fn buf(&self) -> &str { &self.buf }
///     fn buf_mut(&mut self) -> &mut String { &mut self.buf }
///     fn indent_level(&self) -> usize { self.indent }
///     fn set_indent(&mut self, level: usize) { self.indent = level; }
///     fn into_string(self) -> String { self.buf }
/// }
///
/// let mut p = MyPrinter::default();
/// p.word("var xs = [2]int");
/// p.open_block("{");
/// p.write_separated(["1", "2"], ",", true, true);
/// p.close_block("}");
/// ```
pub trait Printer: Sized {
    /// Get the current buffer contents.
    fn buf(&self) -> &str;
    /// Get a mutable reference to the buffer for appending.
    fn buf_mut(&mut self) -> &mut String;
    /// Get the current indentation level.
    fn indent_level(&self) -> usize;
    /// Set the indentation level.
    fn set_indent(&mut self, level: usize);
    /// Consume the printer and return the final string.
    fn into_string(self) -> String;

    /// Append a string to the buffer.
    fn word(&mut self, s: &str) {
        self.buf_mut().push_str(s);
    }

    /// Append a single character to the buffer.
    fn char(&mut self, c: char) {
        self.buf_mut().push(c);
    }

    fn space(&mut self) {
        self.char(' ');
    }

    fn spaces(&mut self, n: usize) {
        self.buf_mut().extend(std::iter::repeat_n(' ', n));
    }

    fn tabs(&mut self, n: usize) {
        self.buf_mut().extend(std::iter::repeat_n('\t', n));
    }

    /// Append a newline and auto-indent.
    fn newline(&mut self) {
        self.char('\n');
        self.add_indent();
    }

    /// Add indentation at the current level.
    fn add_indent(&mut self) {
        if self.use_tabs() {
            self.tabs(self.indent_level());
        } else {
            self.spaces(self.indent_level() * self.indent_width());
        }
    }

    /// Number of spaces per indent level when not using tabs.
    ///
    /// Default: 4 spaces
    fn indent_width(&self) -> usize {
        4
    }

    /// Whether to use tabs for indentation.
    ///
    /// Default: `true` (tabs)
    fn use_tabs(&self) -> bool {
        true
    }

    fn indent(&mut self) {
        self.set_indent(self.indent_level() + 1);
    }

    /// Decrease indentation level by 1, saturating at 0.
    fn dedent(&mut self) {
        let level = self.indent_level();
        if level > 0 {
            self.set_indent(level - 1);
        }
    }

    /// Open a block: write `open`, indent, newline.
    fn open_block(&mut self, open: &str) {
        self.word(open);
        self.indent();
        self.newline();
    }

    /// Close a block: dedent, newline, write `close`.
    ///
    /// The indentation written by the preceding `newline` is trimmed first so
    /// the closing delimiter lines up with the line that opened the block.
    fn close_block(&mut self, close: &str) {
        self.dedent();
        let trimmed = self.buf().trim_end_matches([' ', '\t']).len();
        self.buf_mut().truncate(trimmed);
        if !self.buf().ends_with('\n') {
            self.newline();
        } else {
            self.add_indent();
        }
        self.word(close);
    }

    /// Write items separated by `sep`.
    ///
    /// * `trailing` - Whether to add `sep` after the last item
    /// * `newline_after_sep` - Whether to start a new line after each
    ///   separator except the last
    fn write_separated<I, S>(&mut self, items: I, sep: &str, trailing: bool, newline_after_sep: bool)
    where
        I: IntoIterator<Item = S>,
        I::IntoIter: ExactSizeIterator,
        S: AsRef<str>,
    {
        let iter = items.into_iter();
        let len = iter.len();
        for (idx, item) in iter.enumerate() {
            self.word(item.as_ref());
            let is_last = idx + 1 == len;
            if !is_last || trailing {
                self.word(sep);
                if newline_after_sep && !is_last {
                    self.newline();
                }
            }
        }
    }
}
