//! The stateful emission core.

use std::fmt;

use super::{Indent, Value};

/// Stateful text accumulator with automatic indentation and line breaks.
///
/// Every write goes through [`push_with`](Self::push_with): when the
/// indent-suspend count is zero and auto-indent is requested, the configured
/// [`Indent`] unit is repeated once per depth level before the text; when the
/// newline-suspend count is zero and auto-newline is requested, a single `\n`
/// follows it. The suspend counters are reference counts, so nested
/// [`suspend`](Self::suspend) calls need matching [`resume`](Self::resume)
/// calls before auto-formatting comes back; prefer the scoped
/// [`with_suspended`](Self::with_suspended) wrapper, which releases on every
/// exit path.
///
/// All counters saturate. Decrementing past zero and incrementing past the
/// representable maximum are silent no-ops, never errors, so mismatched
/// pairs cannot panic the formatting layer.
///
/// # Example
///
/// ```
/// use dgen::Builder;
///
/// let mut b = Builder::default();
/// b.push("fn main()");
/// b.scope(|b| {
///     b.push("writeln(\"Hello\");");
/// });
///
/// assert_eq!(b.as_str(), "fn main()\n{\n\twriteln(\"Hello\");\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Builder {
    buffer: String,
    depth: usize,
    indent: Indent,
    indent_suspend: usize,
    newline_suspend: usize,
}

impl Builder {
    /// Create a builder with the specified indentation unit.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent,
            ..Self::default()
        }
    }

    /// Write one chunk with an explicit indent/newline policy.
    ///
    /// A nonzero indent-suspend count forces `auto_indent` off and a nonzero
    /// newline-suspend count forces `auto_newline` off, regardless of the
    /// arguments.
    pub fn push_with(&mut self, text: &str, auto_indent: bool, auto_newline: bool) -> &mut Self {
        if auto_indent && self.indent_suspend == 0 {
            self.write_indent();
        }
        self.buffer.push_str(text);
        if auto_newline && self.newline_suspend == 0 {
            self.buffer.push('\n');
        }
        self
    }

    /// Write one chunk with the default policy (indent and newline).
    pub fn push(&mut self, text: &str) -> &mut Self {
        self.push_with(text, true, true)
    }

    /// Write a sequence of chunks, applying the default policy to each chunk
    /// independently.
    ///
    /// Supports emitting pre-split multi-line fragments with consistent
    /// formatting.
    pub fn push_each<I, S>(&mut self, chunks: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.push_each_with(chunks, true, true)
    }

    /// Write a sequence of chunks with an explicit per-chunk policy.
    pub fn push_each_with<I, S>(
        &mut self,
        chunks: I,
        auto_indent: bool,
        auto_newline: bool,
    ) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for chunk in chunks {
            self.push_with(chunk.as_ref(), auto_indent, auto_newline);
        }
        self
    }

    /// Write the formatted arguments with the default policy.
    ///
    /// Callers use `format_args!`:
    ///
    /// ```
    /// use dgen::Builder;
    ///
    /// let mut b = Builder::default();
    /// b.push_fmt(format_args!("int {};", "x"));
    /// assert_eq!(b.as_str(), "int x;\n");
    /// ```
    pub fn push_fmt(&mut self, args: fmt::Arguments<'_>) -> &mut Self {
        self.push(&args.to_string())
    }

    /// Write a quoted string literal as one logical token.
    ///
    /// Both auto-formatting behaviors are suspended around the quotes so the
    /// literal never picks up indentation or a line break in the middle.
    pub fn push_quoted(&mut self, text: &str) -> &mut Self {
        self.with_suspended(true, true, |b| {
            b.push("\"").push(text).push("\"");
        })
    }

    /// Add a blank line (no indentation).
    pub fn blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation depth, saturating at the maximum.
    pub fn indent(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_add(1);
        self
    }

    /// Decrease indentation depth, saturating at zero.
    pub fn dedent(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self
    }

    /// Increment the selected suspend counters.
    ///
    /// While a counter is nonzero the corresponding auto-formatting behavior
    /// is disabled for every write.
    pub fn suspend(&mut self, indent: bool, newline: bool) -> &mut Self {
        if indent {
            self.indent_suspend = self.indent_suspend.saturating_add(1);
        }
        if newline {
            self.newline_suspend = self.newline_suspend.saturating_add(1);
        }
        self
    }

    /// Decrement the selected suspend counters, saturating at zero.
    pub fn resume(&mut self, indent: bool, newline: bool) -> &mut Self {
        if indent {
            self.indent_suspend = self.indent_suspend.saturating_sub(1);
        }
        if newline {
            self.newline_suspend = self.newline_suspend.saturating_sub(1);
        }
        self
    }

    /// Run `body` one indentation level deeper, restoring the depth after.
    pub fn with_indent(&mut self, body: impl FnOnce(&mut Self)) -> &mut Self {
        self.indent();
        body(self);
        self.dedent()
    }

    /// Run `body` with the selected auto-formatting behaviors suspended,
    /// releasing them after.
    pub fn with_suspended(
        &mut self,
        indent: bool,
        newline: bool,
        body: impl FnOnce(&mut Self),
    ) -> &mut Self {
        self.suspend(indent, newline);
        body(self);
        self.resume(indent, newline)
    }

    /// Write a braced block: `{` line, indented body, `}` line.
    pub fn scope(&mut self, body: impl FnOnce(&mut Self)) -> &mut Self {
        self.push("{");
        self.with_indent(body);
        self.push("}")
    }

    /// Dispatch a value into the buffer.
    ///
    /// This is the single source of truth for value formatting: every
    /// higher-level emitter that accepts caller-supplied values routes them
    /// through here.
    pub fn push_value(&mut self, value: Value) -> &mut Self {
        match value {
            Value::Raw(v) => self.push(&v),
            Value::Str(v) => self.push_quoted(&v),
            Value::Bool(v) => self.push(if v { "true" } else { "false" }),
            Value::Int(v) => self.push_fmt(format_args!("{}", v)),
            Value::UInt(v) => self.push_fmt(format_args!("{}", v)),
            Value::Float(v) => self.push_fmt(format_args!("{}", v)),
            Value::Var(v) => self.push(v.name()),
            Value::Callback(f) => {
                f(self);
                self
            }
        }
    }

    /// Iterate and emit for each item.
    pub fn each<T, I>(&mut self, items: I, mut f: impl FnMut(&mut Self, T)) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        for item in items {
            f(self, item);
        }
        self
    }

    /// Conditionally emit.
    pub fn when(&mut self, condition: bool, f: impl FnOnce(&mut Self)) -> &mut Self {
        if condition {
            f(self);
        }
        self
    }

    /// Current contents of the buffer. Callable mid-construction; no state
    /// is mutated.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Current indentation depth.
    pub fn current_depth(&self) -> usize {
        self.depth
    }

    /// Consume the builder and return the accumulated text.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::VarRef;

    #[test]
    fn test_push_appends_newline() {
        let mut b = Builder::default();
        b.push("Hello");
        assert_eq!(b.as_str(), "Hello\n");
    }

    #[test]
    fn test_with_indent_prefixes_one_tab() {
        let mut b = Builder::default();
        b.push("Hello");
        b.with_indent(|b| {
            b.push("World");
        });
        assert_eq!(b.as_str(), "Hello\n\tWorld\n");
    }

    #[test]
    fn test_spaces_indent_unit() {
        let mut b = Builder::new(Indent::Spaces(4));
        b.with_indent(|b| {
            b.push("x");
        });
        assert_eq!(b.as_str(), "    x\n");
    }

    #[test]
    fn test_balanced_indent_restores_depth() {
        let mut b = Builder::default();
        b.indent().indent().dedent().dedent();
        assert_eq!(b.current_depth(), 0);
    }

    #[test]
    fn test_dedent_clamps_at_zero() {
        let mut b = Builder::default();
        b.dedent().dedent().dedent();
        assert_eq!(b.current_depth(), 0);
        b.push("still flush left");
        assert_eq!(b.as_str(), "still flush left\n");
    }

    #[test]
    fn test_suspend_forces_raw_writes() {
        let mut b = Builder::default();
        b.indent();
        b.suspend(true, true);
        b.push("a").push("b");
        b.resume(true, true);
        b.push("c");
        assert_eq!(b.as_str(), "ab\tc\n");
    }

    #[test]
    fn test_suspend_resume_pair_is_transparent() {
        let mut b = Builder::default();
        b.push("before");
        b.suspend(true, false);
        b.resume(true, false);
        b.push("after");
        assert_eq!(b.as_str(), "before\nafter\n");
    }

    #[test]
    fn test_resume_clamps_at_zero() {
        let mut b = Builder::default();
        b.resume(true, true).resume(true, true);
        b.push("formatted");
        assert_eq!(b.as_str(), "formatted\n");
    }

    #[test]
    fn test_nested_suspend_needs_matching_resumes() {
        let mut b = Builder::default();
        b.suspend(false, true);
        b.suspend(false, true);
        b.resume(false, true);
        b.push("no newline yet");
        b.resume(false, true);
        b.push("!");
        assert_eq!(b.as_str(), "no newline yet!\n");
    }

    #[test]
    fn test_push_each_applies_policy_per_chunk() {
        let mut b = Builder::default();
        b.indent();
        b.push_each(["one", "two"]);
        assert_eq!(b.as_str(), "\tone\n\ttwo\n");
    }

    #[test]
    fn test_push_each_with_raw_policy() {
        let mut b = Builder::default();
        b.push_each_with(["a", "b", "c"], false, false);
        assert_eq!(b.as_str(), "abc");
    }

    #[test]
    fn test_push_quoted() {
        let mut b = Builder::default();
        b.push_quoted("World!");
        assert_eq!(b.as_str(), "\"World!\"");
    }

    #[test]
    fn test_push_quoted_leaves_counters_balanced() {
        let mut b = Builder::default();
        b.push_quoted("x");
        b.push("next");
        assert_eq!(b.as_str(), "\"x\"next\n");
    }

    #[test]
    fn test_scope() {
        let mut b = Builder::default();
        b.scope(|b| {
            b.push("body();");
        });
        assert_eq!(b.as_str(), "{\n\tbody();\n}\n");
    }

    #[test]
    fn test_blank_line_has_no_indent() {
        let mut b = Builder::default();
        b.indent();
        b.push("a").blank().push("b");
        assert_eq!(b.as_str(), "\ta\n\n\tb\n");
    }

    #[test]
    fn test_push_value_scalars() {
        let mut b = Builder::default();
        b.suspend(true, true);
        b.push_value(Value::bool(true)).push(" ");
        b.push_value(Value::int(-7)).push(" ");
        b.push_value(Value::uint(7)).push(" ");
        b.push_value(Value::float(1.5));
        assert_eq!(b.as_str(), "true -7 7 1.5");
    }

    #[test]
    fn test_push_value_var_writes_name_only() {
        let mut b = Builder::default();
        b.push_value(VarRef::new("int", "total").into());
        assert_eq!(b.as_str(), "total\n");
    }

    #[test]
    fn test_push_value_callback_shares_builder() {
        let mut b = Builder::default();
        b.push_value(Value::callback(|b| {
            b.push("from callback");
        }));
        assert_eq!(b.as_str(), "from callback\n");
    }

    #[test]
    fn test_each_and_when() {
        let mut b = Builder::default();
        b.each(["x", "y"], |b, name| {
            b.push_fmt(format_args!("int {};", name));
        });
        b.when(false, |b| {
            b.push("skipped");
        });
        assert_eq!(b.as_str(), "int x;\nint y;\n");
    }

    #[test]
    fn test_as_str_mid_construction() {
        let mut b = Builder::default();
        b.push("first");
        assert_eq!(b.as_str(), "first\n");
        b.push("second");
        assert_eq!(b.build(), "first\nsecond\n");
    }

    #[test]
    fn test_determinism_across_builders() {
        let emit = |b: &mut Builder| {
            b.push("header");
            b.scope(|b| {
                b.push_fmt(format_args!("value = {};", 3));
            });
        };
        let mut a = Builder::default();
        let mut b = Builder::default();
        emit(&mut a);
        emit(&mut b);
        assert_eq!(a.as_str(), b.as_str());
    }
}
