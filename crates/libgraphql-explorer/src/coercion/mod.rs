//! Best-effort coercion of raw, user-typed argument strings.
//!
//! Coercion never fails: a value that cannot be parsed for its declared
//! numeric type degrades to `null`.

mod argument_coercion;
mod scalar_kind;

pub use argument_coercion::coerce_json;
pub use argument_coercion::coerce_literal;
pub use argument_coercion::inline_arguments;
pub use argument_coercion::is_blank;
pub use argument_coercion::present_arguments;
pub use argument_coercion::scalar_kind_of;
pub use scalar_kind::ScalarKind;
