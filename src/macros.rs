//! Propagation macros.

/*  __  __
 * |  \/  | __ _  ___ _ __ ___  ___
 * | |\/| |/ _` |/ __| '__/ _ \/ __|
 * | |  | | (_| | (__| | | (_) \__ \
 * |_|  |_|\__,_|\___|_|  \___/|___/
 *  FIGLET: Macros
 */

/// Constructs an [`Error<String>`](crate::Error) whose message ends with the
/// file and line of the `raise!` invocation.
///
/// Accepts the same arguments as [`format!`], or a single expression
/// convertible into a `String`.
///
/// ```
/// use errtrail::{raise, Result};
///
/// fn sqrt(x: i32) -> Result<f64> {
///     if x < 0 {
///         return raise!("Error: x is negative ({})", x).into();
///     }
///     Result::new(f64::from(x).sqrt())
/// }
/// ```
#[macro_export]
macro_rules! raise {
    ($msg:literal $(,)?) => {
        $crate::Error::located(
            ::std::format!($msg),
            $crate::CodeLocation::new(::core::file!(), ::core::line!()),
        )
    };
    ($msg:expr $(,)?) => {
        $crate::Error::located(
            $msg,
            $crate::CodeLocation::new(::core::file!(), ::core::line!()),
        )
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::Error::located(
            ::std::format!($fmt, $($arg)*),
            $crate::CodeLocation::new(::core::file!(), ::core::line!()),
        )
    };
}

/// Unwraps a result or returns its error from the enclosing function.
///
/// `$expr` is evaluated exactly once. It may be an
/// [`errtrail::Result`](crate::Result) or a [`std::result::Result`]. On
/// success the macro evaluates to the success value. On error the payload is
/// converted into the enclosing function's error type, the location of the
/// `trail!` invocation is appended to it, and the function returns.
///
/// The enclosing function (or closure) must return `errtrail::Result<U, F>`
/// where `F: From<E> + Traced`.
///
/// ```
/// use errtrail::{raise, trail, Result};
///
/// fn checked(x: i32) -> Result<i32> {
///     if x < 0 {
///         return raise!("Error: x is negative").into();
///     }
///     Result::new(x)
/// }
///
/// fn sum(a: i32, b: i32) -> Result<i32> {
///     Result::new(trail!(checked(a)) + trail!(checked(b)))
/// }
/// ```
#[macro_export]
macro_rules! trail {
    ($expr:expr $(,)?) => {
        match $crate::IntoResult::into_result($expr) {
            ::core::result::Result::Ok(value) => value,
            ::core::result::Result::Err(error) => {
                return $crate::Result::propagated(
                    error,
                    $crate::CodeLocation::new(::core::file!(), ::core::line!()),
                );
            }
        }
    };
}

/// Assigns the success value of a result to a pre-declared place, or returns
/// its error from the enclosing function.
///
/// Behaves exactly like `$dest = trail!($expr)`: `$expr` is evaluated once,
/// and on error `$dest` is left unassigned.
///
/// ```
/// use errtrail::{trail_into, Result};
///
/// fn halve(x: i32) -> Result<i32> {
///     Result::new(x / 2)
/// }
///
/// fn quarter(x: i32) -> Result<i32> {
///     let y: i32;
///     trail_into!(y, halve(x));
///     Result::new(y / 2)
/// }
/// ```
#[macro_export]
macro_rules! trail_into {
    ($dest:expr, $expr:expr $(,)?) => {
        $dest = $crate::trail!($expr)
    };
}

/*  _            _
 * | |_ ___  ___| |_
 * | __/ _ \/ __| __|
 * | ||  __/\__ \ |_
 *  \__\___||___/\__|
 *  FIGLET: test
 */
