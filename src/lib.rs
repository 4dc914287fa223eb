//! Stateful text-emission engine for building structured source code.
//!
//! The crate is organized around a single mutable [`Builder`] that owns the
//! output buffer, the current indentation depth, and two reference-counted
//! suspend counters (one for automatic indentation, one for automatic line
//! breaks). Everything the engine emits, from a raw chunk of text up to a
//! whole function declaration, flows through the same `push` primitive so
//! formatting decisions are made in exactly one place.
//!
//! # Module Organization
//!
//! - [`builder`] - The emission core ([`Builder`], [`Indent`], [`Value`], [`VarRef`], [`Param`])
//! - [`error`] - Error and result types
//! - [`imports`] - Deduplicating import aggregation ([`ImportCollector`])
//!
//! # Example
//!
//! ```
//! use dgen::Builder;
//!
//! let mut b = Builder::default();
//! b.add_import("std.stdio", Some(&["writeln"]));
//! b.add_func_declaration("int", "sum", &[("int", "a").into(), ("int", "b").into()], |b| {
//!     b.add_return("a + b");
//! });
//!
//! assert_eq!(
//!     b.as_str(),
//!     "import std.stdio : writeln;\nint sum(int a, int b)\n{\n\treturn a + b;\n}\n"
//! );
//! ```

pub mod builder;
pub mod error;
pub mod imports;

pub use builder::{Builder, Indent, Param, Value, VarRef};
pub use error::{Error, Result};
pub use imports::ImportCollector;
