//! Arbitrary-precision signed real number arithmetic over a configurable
//! integer radix.
//!
//! [`Number`] is a fixed-point-like value: a deque of digits, a
//! most-significant exponent, and a precision budget, all expressed in a
//! user-chosen base `B >= 2`. It supports addition, subtraction,
//! multiplication, division, integer powers, and base conversion, with
//! enough digits to compute constants such as *e* and *pi* to thousands of
//! places via power series. It does **not** implement rational numbers,
//! transcendental functions, or signed zero/NaN/Inf — see the module docs
//! on [`Number`] for the full representation write-up.
//!
//! # Example
//!
//! ```
//! use apnum::Number;
//!
//! // Compute e = sum(1/n!) to 200 decimal digits.
//! let mut e = Number::from_i64(1, 200, 10);
//! let mut term = Number::from_i64(1, 200, 10);
//! let mut i = 1i64;
//! while !term.is_zero() {
//!     term /= i;
//!     e += &term;
//!     i += 1;
//! }
//!
//! assert!(e.to_dec_string().starts_with("2.71828182845904523536"));
//! ```
//!
//! # Errors
//!
//! Every fallible operation returns [`Error`]; the infix operators
//! (`+`, `-`, `*`, `/`) instead panic on the same conditions, mirroring the
//! "operators throw" convention of the engine this crate is modeled on —
//! use the `try_*` inherent methods (e.g. [`Number::try_div_assign`]) or
//! [`Number::from_text`] for a non-panicking path.

#![warn(missing_docs)]

mod add;
mod cmp;
mod convert;
mod div;
mod error;
mod format;
mod mul;
mod number;
mod parse;

pub use error::{Error, Result};
pub use mul::{abs, pow};
pub use number::{Number, DEFAULT_BASE, DEFAULT_PRECISION_IN_10, EXTRA_PRECISION};
