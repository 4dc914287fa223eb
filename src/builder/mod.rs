//! The emission core.
//!
//! - [`Builder`] - Stateful text accumulator with indentation/newline policy
//! - [`Indent`] - Indentation configuration
//! - [`Value`] - Shape-polymorphic parameter for the value dispatcher
//! - [`VarRef`] - Named reference to a previously declared variable
//! - [`Param`] - A `(type, name)` pair in a function signature

mod decl;
mod indent;
mod source_builder;
mod value;

pub use decl::Param;
pub use indent::Indent;
pub use source_builder::Builder;
pub use value::{Value, VarRef};
