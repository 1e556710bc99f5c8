//! Defines a new result type.

use crate::error::Error;
use crate::trace::{CodeLocation, Traced};

use std::fmt;
use std::process::{ExitCode, Termination};

/// Construct a new [`errtrail::Result`][crate::Result] with the given success value.
#[inline]
pub fn ok<T, E>(ok_value: T) -> Result<T, E> {
    Result(Ok(ok_value))
}

/// Construct a new [`errtrail::Result`][crate::Result] with the given error payload.
///
/// No location is recorded; use [`raise!`](crate::raise) to start a trail.
#[inline]
pub fn err<T, E, E2>(err_value: E2) -> Result<T, E>
where
    E: From<E2>,
{
    Result(Err(Error::new(E::from(err_value))))
}

/*  ____                 _ _    _______   _______
 * |  _ \ ___  ___ _   _| | |_ / /_   _| | ____\ \
 * | |_) / _ \/ __| | | | | __/ /  | |   |  _|  \ \
 * |  _ <  __/\__ \ |_| | | |_\ \  | |_  | |___ / /
 * |_| \_\___||___/\__,_|_|\__|\_\ |_( ) |_____/_/
 *                                   |/
 *  FIGLET: Result<T, E>
 */

/// Either a success value of type `T` or an [`Error`] carrying a payload of
/// type `E`.
///
/// # Propagation Using `trail!`
///
/// [`trail!`](crate::trail) unwraps a success value or returns the error
/// from the enclosing function, appending the code location of the `trail!`
/// invocation to the payload:
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
/// fn doubled(x: i32) -> Result<i32> {
///     let y = trail!(checked(x));
///     Result::new(y * 2)
/// }
///
/// let result = doubled(-15);
/// assert_eq!(result.error().unwrap().lines().count(), 3);
/// ```
///
/// ## Coercion Using `From`
///
/// A `Result<T, E>` propagates into a function returning `Result<U, F>` if
/// there is a [`From<E>`] defined for type `F`. The payload is converted
/// before the hop's location is recorded, so `F` must implement
/// [`Traced`](crate::Traced).
///
/// ## Coercion from `std::result::Result`
///
/// `trail!` also accepts a [`std::result::Result`]. Its error starts a new
/// trail whose first entry is the `trail!` site.
///
/// # Reading the Result
///
/// [`Result::data`] returns the success value and panics on an error result.
/// [`Result::error`] never panics; it returns `None` for a success result.
#[must_use = "this `Result` may be an error, which should be handled"]
#[derive(PartialEq, Eq, Debug, Hash, Clone)]
pub struct Result<T, E = String>(std::result::Result<T, Error<E>>);

/*  _                 _   ____                 _ _
 * (_)_ __ ___  _ __ | | |  _ \ ___  ___ _   _| | |_
 * | | '_ ` _ \| '_ \| | | |_) / _ \/ __| | | | | __|
 * | | | | | | | |_) | | |  _ <  __/\__ \ |_| | | |_
 * |_|_| |_| |_| .__/|_| |_| \_\___||___/\__,_|_|\__|
 *             |_|
 *  FIGLET: impl Result
 */

impl<T, E> Result<T, E> {
    /// Constructs a success result from any value convertible to `T`.
    #[inline]
    pub fn new(value: impl Into<T>) -> Self {
        Self(Ok(value.into()))
    }

    /// Builds the error result returned by one propagation hop.
    ///
    /// The payload is converted to `E` first, then `location` is recorded on
    /// it. This is what [`trail!`](crate::trail) and
    /// [`trail_into!`](crate::trail_into) return on error.
    pub fn propagated<E2>(error: Error<E2>, location: CodeLocation) -> Self
    where
        E: From<E2> + Traced,
    {
        log::trace!(target: "errtrail", "propagating error through {}", location);
        Self(Err(error.convert::<E>().traced(location)))
    }

    /// Returns `true` if the result holds a success value.
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.0.is_ok()
    }

    #[inline]
    pub fn is_err(&self) -> bool {
        self.0.is_err()
    }

    /// Returns a reference to the success value.
    ///
    /// # Panics
    ///
    /// Panics if the result is an error. The panic is reported at the
    /// caller. Check [`Result::is_ok`] first, or use [`Result::into_std`] to
    /// branch on the value.
    #[inline]
    #[track_caller]
    pub fn data(&self) -> &T {
        match &self.0 {
            Ok(value) => value,
            Err(_) => unwrap_failed("called `Result::data()` on an error result"),
        }
    }

    /// Consumes the result, returning the success value.
    ///
    /// # Panics
    ///
    /// Panics if the result is an error, like [`Result::data`].
    #[inline]
    #[track_caller]
    pub fn into_data(self) -> T {
        match self.0 {
            Ok(value) => value,
            Err(_) => unwrap_failed("called `Result::into_data()` on an error result"),
        }
    }

    /// Returns the error payload, or `None` for a success result.
    #[inline]
    pub fn error(&self) -> Option<&E> {
        match &self.0 {
            Ok(_) => None,
            Err(e) => Some(e.payload()),
        }
    }

    #[inline]
    pub fn into_error(self) -> Option<E> {
        match self.0 {
            Ok(_) => None,
            Err(e) => Some(e.into_payload()),
        }
    }

    /// Returns the success value as an [`Option`], discarding any error.
    #[inline]
    pub fn ok(self) -> Option<T> {
        self.0.ok()
    }

    /// Converts into the standard library result, keeping the [`Error`]
    /// carrier.
    #[inline]
    pub fn into_std(self) -> std::result::Result<T, Error<E>> {
        self.0
    }

    /// Converts into the standard library result, unwrapping the payload.
    ///
    /// # Examples
    ///
    /// ```
    /// # use errtrail::Result;
    /// let x: Result<(), &str> = errtrail::err("Nothing here");
    /// assert_eq!(x.into_payload_result(), Err("Nothing here"));
    /// ```
    #[inline]
    pub fn into_payload_result(self) -> std::result::Result<T, E> {
        self.0.map_err(Error::into_payload)
    }

    /// Converts from `&Result<T, E>` to `Result<&T, &E>`.
    #[inline]
    pub fn as_ref(&self) -> Result<&T, &E> {
        match &self.0 {
            Ok(value) => Result(Ok(value)),
            Err(e) => Result(Err(Error::new(e.payload()))),
        }
    }

    #[inline]
    pub fn as_std(&self) -> std::result::Result<&T, &Error<E>> {
        self.0.as_ref()
    }

    /// Converts a `Result<T, E>` into a `Result<U, F>` when both payloads
    /// are convertible.
    ///
    /// The discriminant is kept and only the live payload is converted.
    pub fn convert<U, F>(self) -> Result<U, F>
    where
        U: From<T>,
        F: From<E>,
    {
        // N.B. This would be `From<Result<T, E>> for Result<U, F>`, but that
        // conflicts with the blanket `From<T> for T`.
        match self.0 {
            Ok(value) => Result(Ok(U::from(value))),
            Err(e) => Result(Err(e.convert())),
        }
    }

    pub fn map<U, O: FnOnce(T) -> U>(self, op: O) -> Result<U, E> {
        Result(self.0.map(op))
    }

    pub fn map_err<F, O: FnOnce(E) -> F>(self, op: O) -> Result<T, F> {
        Result(self.0.map_err(|e| e.map(op)))
    }
}

/// Converts an [`Error`] carrier into an error result.
impl<T, E, E2> From<Error<E2>> for Result<T, E>
where
    E: From<E2>,
{
    #[inline]
    fn from(error: Error<E2>) -> Self {
        Self(Err(error.convert()))
    }
}

/// Converts a standard library result; the error carries no location.
impl<T, E, E2> From<std::result::Result<T, E2>> for Result<T, E>
where
    E: From<E2>,
{
    #[inline]
    fn from(result: std::result::Result<T, E2>) -> Self {
        Self(result.map_err(|e| Error::new(E::from(e))))
    }
}

#[inline(never)]
#[cold]
#[track_caller]
fn unwrap_failed(msg: &str) -> ! {
    panic!("{msg}")
}

/// Types that [`trail!`](crate::trail) can unwrap or propagate.
pub trait IntoResult {
    type Output;
    type Error;

    fn into_result(self) -> std::result::Result<Self::Output, Error<Self::Error>>;
}

impl<T, E> IntoResult for Result<T, E> {
    type Output = T;
    type Error = E;

    #[inline]
    fn into_result(self) -> std::result::Result<T, Error<E>> {
        self.0
    }
}

impl<T, E> IntoResult for std::result::Result<T, E> {
    type Output = T;
    type Error = E;

    #[inline]
    fn into_result(self) -> std::result::Result<T, Error<E>> {
        self.map_err(Error::new)
    }
}

/*
  _                 _   _____                   _             _   _
 (_)_ __ ___  _ __ | | |_   _|__ _ __ _ __ ___ (_)_ __   __ _| |_(_) ___  _ __
 | | '_ ` _ \| '_ \| |   | |/ _ \ '__| '_ ` _ \| | '_ \ / _` | __| |/ _ \| '_ \
 | | | | | | | |_) | |   | |  __/ |  | | | | | | | | | | (_| | |_| | (_) | | | |
 |_|_| |_| |_| .__/|_|   |_|\___|_|  |_| |_| |_|_|_| |_|\__,_|\__|_|\___/|_| |_|
             |_|
 FIGLET: impl Termination
*/

/// Lets `main` return a [`Result`]. An error prints its payload, trail
/// included, to stderr.
impl<T: Termination, E: fmt::Display> Termination for Result<T, E> {
    fn report(self) -> ExitCode {
        match self.0 {
            Ok(value) => value.report(),
            Err(err) => {
                log::debug!(target: "errtrail", "exiting with an error result");
                eprintln!("Error: {}", err);
                ExitCode::FAILURE
            }
        }
    }
}

/*  _            _
 * | |_ ___  ___| |_
 * | __/ _ \/ __| __|
 * | ||  __/\__ \ |_
 *  \__\___||___/\__|
 *  FIGLET: test
 */

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::error;
    use pretty_assertions::assert_eq;

    /*  ____            _         __                  _   _
     * | __ )  __ _ ___(_) ___   / _|_   _ _ __   ___| |_(_) ___  _ __  ___
     * |  _ \ / _` / __| |/ __| | |_| | | | '_ \ / __| __| |/ _ \| '_ \/ __|
     * | |_) | (_| \__ \ | (__  |  _| |_| | | | | (__| |_| | (_) | | | \__ \
     * |____/ \__,_|___/_|\___| |_|  \__,_|_| |_|\___|\__|_|\___/|_| |_|___/
     *  FIGLET: Basic functions
     */

    #[test]
    fn success_result_returns_data() {
        let result: Result<i32> = Result::new(15i32);
        assert!(result.is_ok());
        assert!(!result.is_err());
        assert_eq!(*result.data(), 15);
        assert_eq!(result.into_data(), 15);
    }

    #[test]
    fn new_converts_value_into_data_type() {
        let result: Result<i64, String> = Result::new(7u8);
        assert_eq!(*result.data(), 7i64);
    }

    #[test]
    #[should_panic(expected = "called `Result::data()` on an error result")]
    fn data_on_error_panics() {
        let result: Result<i32> = error("boom").into();
        let _ = result.data();
    }

    #[test]
    #[should_panic(expected = "called `Result::into_data()` on an error result")]
    fn into_data_on_error_panics() {
        let result: Result<i32> = error("boom").into();
        let _ = result.into_data();
    }

    #[test]
    fn error_never_panics() {
        let good: Result<i32> = ok(1);
        assert_eq!(good.error(), None);
        assert_eq!(good.into_error(), None);

        let bad: Result<i32> = err("bad");
        assert_eq!(bad.error().map(String::as_str), Some("bad"));
        assert_eq!(bad.into_error(), Some(String::from("bad")));
    }

    #[test]
    fn new_err_coerce() {
        fn func() -> Result<u32, String> {
            let x: Result<u32, String> = err("string slice");
            x
        }
        assert_eq!(
            func().into_payload_result(),
            Err(String::from("string slice"))
        );
    }

    #[test]
    fn from_error_converts_payload() {
        let result: Result<i32, String> = error("const str").into();
        assert!(!result.is_ok());
        assert_eq!(result.error().unwrap(), "const str");
    }

    #[test]
    fn convert_preserves_success() {
        let narrow: Result<u8, &str> = ok(b'a');
        let wide: Result<u32, String> = narrow.convert();
        assert!(wide.is_ok());
        assert_eq!(*wide.data(), 97u32);
    }

    #[test]
    fn convert_preserves_error() {
        let narrow: Result<u8, &str> = err("narrow");
        let wide: Result<u32, String> = narrow.convert();
        assert!(wide.is_err());
        assert_eq!(wide.error().unwrap(), "narrow");
    }

    #[test]
    fn from_std_result_keeps_discriminant() {
        let good: Result<u8, String> = std::result::Result::<u8, &str>::Ok(3).into();
        assert_eq!(good.ok(), Some(3));

        let bad: Result<u8, String> = std::result::Result::<u8, &str>::Err("no").into();
        assert_eq!(bad.into_payload_result(), Err(String::from("no")));
    }

    #[test]
    fn clone_copies_live_payload() {
        let original: Result<Vec<u8>, String> = ok(vec![1, 2, 3]);
        let copy = original.clone();
        assert_eq!(copy, original);
        assert_eq!(copy.into_data(), vec![1, 2, 3]);
    }

    #[test]
    fn map_and_map_err_touch_only_their_branch() {
        let good: Result<u8, String> = ok(2);
        assert_eq!(good.map(|v| v * 10).map_err(|e| e.len()).into_payload_result(), Ok(20));

        let bad: Result<u8, String> = err("four");
        assert_eq!(bad.map(|v| v * 10).map_err(|e| e.len()).into_payload_result(), Err(4));
    }

    #[test]
    fn propagated_converts_then_traces() {
        let result: Result<(), String> =
            Result::propagated(error("oops"), CodeLocation::new("hop.rs", 9));
        assert_eq!(result.error().unwrap(), "oops\n  in hop.rs:9");
    }

    #[test]
    fn as_std_borrows_error_carrier() {
        let bad: Result<u8> = err("no");
        let carrier = bad.as_std().unwrap_err();
        assert_eq!(carrier.payload(), "no");
    }

    #[test]
    fn as_ref_borrows_live_payload() {
        let good: Result<u8> = ok(5);
        let borrowed: Result<&u8, &String> = good.as_ref();
        assert_eq!(**borrowed.data(), 5);
        assert_eq!(good.into_data(), 5);

        let bad: Result<u8> = err("no");
        let borrowed = bad.as_ref();
        assert!(borrowed.is_err());
        assert_eq!(borrowed.error().map(|e| e.as_str()), Some("no"));
    }

    struct Opaque;

    #[test]
    fn data_works_without_debug_payload() {
        let result: Result<u8, Opaque> = ok(3);
        assert_eq!(*result.data(), 3);
        assert_eq!(result.into_data(), 3);
    }

    #[test]
    #[should_panic(expected = "called `Result::data()` on an error result")]
    fn data_on_error_panics_without_debug_payload() {
        let result: Result<u8, Opaque> = err(Opaque);
        let _ = result.data();
    }

    /*
      _                 _   _____                   _             _   _
     (_)_ __ ___  _ __ | | |_   _|__ _ __ _ __ ___ (_)_ __   __ _| |_(_) ___  _ __
     | | '_ ` _ \| '_ \| |   | |/ _ \ '__| '_ ` _ \| | '_ \ / _` | __| |/ _ \| '_ \
     | | | | | | | |_) | |   | |  __/ |  | | | | | | | | | | (_| | |_| | (_) | | | |
     |_|_| |_| |_| .__/|_|   |_|\___|_|  |_| |_| |_|_|_| |_|\__,_|\__|_|\___/|_| |_|
                 |_|
     FIGLET: impl Termination
    */

    fn same_code(a: ExitCode, b: ExitCode) -> bool {
        format!("{:?}", a) == format!("{:?}", b)
    }

    #[test]
    fn report_success_for_ok() {
        let result: Result<(), String> = ok(());
        assert!(same_code(result.report(), ExitCode::SUCCESS));
    }

    #[test]
    fn report_failure_for_err() {
        let result: Result<(), String> = err("fatal");
        assert!(same_code(result.report(), ExitCode::FAILURE));
    }
}
