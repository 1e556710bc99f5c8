//! Location-tagged error propagation in Rust.
//!
//! This crate provides [`errtrail::Result<T, E>`][crate::Result], a result
//! type whose errors record every code location they pass through on their
//! way up the call stack.
//!
//!
//! # Raising and Propagating
//!
//! An error is **raised** with [`raise!`], which builds a message ending in
//! the file and line of the `raise!` invocation. Every time an error result
//! is **propagated** with [`trail!`] (or its statement form
//! [`trail_into!`]), the location of that invocation is appended on a new
//! line:
//!
//! ```text
//! Error: x is negative
//!   in src/sqrt.rs:20
//!   in src/main.rs:31
//! ```
//!
//! The most recent hop is always last. The message is an ordinary `String`,
//! so the trail survives being sent between threads, cloned, logged or
//! returned from `main`.
//!
//!
//! # Propagation Tracing vs. Backtracing
//!
//! Crates such as [`anyhow`][anyhow] capture backtraces when an error is
//! created. `errtrail` records **propagation trails** instead. Each hop costs
//! one string append, and the locations are compiled statically into the
//! binary, so no stack unwinding or symbol lookup happens at runtime.
//!
//! The price is a bit of boilerplate. Errors must be propagated with
//! [`trail!`] rather than returned directly, or the hop is not recorded.
//!
//! [anyhow]: https://docs.rs/anyhow/latest/anyhow/
//!
//!
//! # Example
//!
//! ```
//! use errtrail::{raise, trail, Result};
//!
//! fn checked(x: i32) -> Result<i32> {
//!     if x < 0 {
//!         return raise!("Error: x is negative").into();
//!     }
//!     Result::new(x)
//! }
//!
//! fn doubled(x: i32) -> Result<i32> {
//!     // Unwraps the value, or returns the error with this line appended.
//!     let y = trail!(checked(x));
//!     Result::new(y * 2)
//! }
//!
//! fn main() {
//!     let result = doubled(-15);
//!     if let Some(message) = result.error() {
//!         println!("{}", message);
//!     }
//!
//!     assert_eq!(*doubled(15).data(), 30);
//! }
//! ```
//!
//!
//! # Working with `Result<T, E>`
//!
//! ## Constructing
//!
//! ```
//! use errtrail::{error, raise, Result};
//!
//! // From a value convertible to `T`.
//! let a: Result<i64> = Result::new(7u8);
//!
//! // From an `Error` carrier, with or without a location.
//! let b: Result<i64> = error("no location").into();
//! let c: Result<i64> = raise!("with location").into();
//!
//! // From another result with convertible types.
//! let d: Result<i64, String> = errtrail::ok::<u8, &str>(1).convert();
//! ```
//!
//! ## Reading
//!
//! [`Result::data`] returns the success value and **panics** on an error
//! result; accessing data that is not there is a bug, not an error to
//! handle. [`Result::error`] never panics:
//!
//! ```
//! # let result: errtrail::Result<i32> = errtrail::err("oops");
//! if result.is_ok() {
//!     println!("value: {}", result.data());
//! } else {
//!     println!("error: {}", result.error().unwrap());
//! }
//! ```
//!
//! ## Structured Payloads
//!
//! The error payload `E` defaults to `String`. Any payload implementing
//! [`Traced`] can be propagated; [`StackError<E>`] attaches a
//! [`CodeLocationStack`] to an arbitrary error value:
//!
//! ```
//! use errtrail::{trail, Result, StackError};
//! use std::fs::File;
//! use std::io;
//!
//! fn open(path: &str) -> Result<File, StackError<io::Error>> {
//!     // A `std::result::Result` error starts a new trail here.
//!     Result::new(trail!(File::open(path)))
//! }
//! ```
//!
//! ## **IMPORTANT**: Forwarding Errors
//!
//! Returning a result directly does not record a hop. The compiler will
//! not remind you, because the types already match.
//!
//! ```
//! use errtrail::{trail, Result};
//!
//! fn gives_error() -> Result<()> {
//!     errtrail::err("Nothing here")
//! }
//!
//! // YES: the trail will include foo()
//! fn foo() -> Result<()> {
//!     Result::new(trail!(gives_error()))
//! }
//!
//! // NO: the trail will not include bar()
//! fn bar() -> Result<()> {
//!     gives_error()
//! }
//! ```
//!
//! `Result` is `#[must_use]`, so ignoring a returned result at a call site
//! produces a compiler warning.

pub mod error;
mod macros;
pub mod result;
pub mod trace;

#[doc(inline)]
pub use self::{
    error::{error, Error, StackError},
    result::{err, ok, IntoResult, Result},
    trace::{CodeLocation, CodeLocationStack, Traced},
};

pub mod prelude {
    pub use crate::error::{Error, StackError};
    pub use crate::result::Result;
    pub use crate::{raise, trail, trail_into};
}

#[cfg(test)]
mod test;
