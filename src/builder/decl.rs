//! High-level declaration and statement emitters.
//!
//! Each emitter writes its structural tokens through the builder's `push`
//! primitive, suspends auto-formatting around comma/paren-delimited inner
//! regions, and hands every caller-supplied value to
//! [`Builder::push_value`](super::Builder::push_value) so all emitters share
//! one formatting policy.

use super::{Builder, Value, VarRef};

/// A parameter in a function signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub type_name: String,
    pub name: String,
}

impl Param {
    pub fn new(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.into(),
        }
    }
}

impl From<(&str, &str)> for Param {
    fn from((type_name, name): (&str, &str)) -> Self {
        Self::new(type_name, name)
    }
}

impl Builder {
    /// Emit an import declaration.
    ///
    /// `Some(symbols)` adds a ` : ` selection clause with the comma-joined
    /// symbol list; an explicitly empty list still emits the clause, which is
    /// distinct from `None`.
    ///
    /// ```
    /// use dgen::Builder;
    ///
    /// let mut b = Builder::default();
    /// b.add_import("std.stdio", Some(&["readln", "writeln"]));
    /// assert_eq!(b.as_str(), "import std.stdio : readln, writeln;\n");
    /// ```
    pub fn add_import(&mut self, module: &str, selection: Option<&[&str]>) -> &mut Self {
        self.push_with(&format!("import {}", module), true, false);
        if let Some(symbols) = selection {
            self.with_suspended(true, true, |b| {
                b.push(" : ");
                for (i, symbol) in symbols.iter().enumerate() {
                    if i > 0 {
                        b.push(", ");
                    }
                    b.push(symbol);
                }
            });
        }
        self.push_with(";", false, true)
    }

    /// Emit a variable declaration, returning a reference usable as a
    /// [`Value`] later.
    ///
    /// Neither the type token nor the name is validated.
    pub fn add_variable(
        &mut self,
        type_name: &str,
        name: &str,
        initializer: Option<Value>,
    ) -> VarRef {
        self.push_with(&format!("{} {}", type_name, name), true, false);
        if let Some(init) = initializer {
            self.with_suspended(true, true, |b| {
                b.push(" = ");
                b.push_value(init);
            });
        }
        self.push_with(";", false, true);
        VarRef::new(type_name, name)
    }

    /// Emit an alias declaration (`alias <name> = <initializer>;`).
    pub fn add_alias(&mut self, name: &str, initializer: Option<Value>) -> VarRef {
        self.add_variable("alias", name, initializer)
    }

    /// Emit a manifest-constant declaration (`enum <name> = <initializer>;`).
    pub fn add_enum_value(&mut self, name: &str, initializer: Option<Value>) -> VarRef {
        self.add_variable("enum", name, initializer)
    }

    /// Emit a return statement.
    pub fn add_return(&mut self, value: impl Into<Value>) -> &mut Self {
        self.push_with("return ", true, false);
        let value = value.into();
        self.with_suspended(true, true, |b| {
            b.push_value(value);
        });
        self.push_with(";", false, true)
    }

    /// Emit a function declaration with a braced body.
    ///
    /// ```
    /// use dgen::Builder;
    ///
    /// let mut b = Builder::default();
    /// b.add_func_declaration("int", "sum", &[("int", "a").into(), ("int", "b").into()], |b| {
    ///     b.add_return("a + b");
    /// });
    /// assert_eq!(b.as_str(), "int sum(int a, int b)\n{\n\treturn a + b;\n}\n");
    /// ```
    pub fn add_func_declaration(
        &mut self,
        return_type: &str,
        name: &str,
        params: &[Param],
        body: impl FnOnce(&mut Self),
    ) -> &mut Self {
        self.push_with(&format!("{} {}", return_type, name), true, false);
        self.with_suspended(true, true, |b| {
            b.push("(");
            for (i, param) in params.iter().enumerate() {
                if i > 0 {
                    b.push(", ");
                }
                b.push_fmt(format_args!("{} {}", param.type_name, param.name));
            }
        });
        self.push_with(")", false, true);
        self.scope(body)
    }

    /// Emit a function call with heterogeneous arguments.
    ///
    /// Each argument is dispatched through [`Builder::push_value`]
    /// individually. With `semicolon` false the call is left open as an
    /// expression (no terminator, no line break), so it composes inside
    /// initializers and other calls.
    pub fn add_func_call<I>(&mut self, name: &str, args: I, semicolon: bool) -> &mut Self
    where
        I: IntoIterator<Item = Value>,
    {
        self.push_with(name, true, false);
        self.with_suspended(true, true, |b| {
            b.push("(");
            for (i, arg) in args.into_iter().enumerate() {
                if i > 0 {
                    b.push(", ");
                }
                b.push_value(arg);
            }
            b.push(")");
        });
        if semicolon {
            self.push_with(";", false, true);
        }
        self
    }
}
