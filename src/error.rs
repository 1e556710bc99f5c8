//! Defines the error carrier and the location-tagged payloads it usually holds.

use crate::trace::{push_trailer, CodeLocation, CodeLocationStack, Traced};

use std::fmt;
use std::ops::Deref;

/// Construct a new [`Error`] holding `payload` verbatim.
///
/// No location is recorded. Use [`Error::raise`] or [`raise!`](crate::raise)
/// to start a trail.
#[inline]
pub fn error<E>(payload: E) -> Error<E> {
    Error::new(payload)
}

/*  _____
 * | ____|_ __ _ __ ___  _ __
 * |  _| | '__| '__/ _ \| '__|
 * | |___| |  | | | (_) | |
 * |_____|_|  |_|  \___/|_|
 *  FIGLET: Error
 */

/// A wrapper around an arbitrary error payload.
///
/// `Error` knows nothing about the success type of the computation that
/// failed. It is converted into any [`Result<T, F>`](crate::Result) whose
/// payload type `F` implements `From<E>`:
///
/// ```
/// use errtrail::{error, Result};
///
/// fn parse(input: &str) -> Result<u8> {
///     match input.parse::<u8>() {
///         Ok(v) => Result::new(v),
///         Err(_) => error("not a byte").into(),
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Error<E> {
    payload: E,
}

impl<E> Error<E> {
    #[inline]
    pub fn new(payload: E) -> Self {
        Self { payload }
    }

    /// Returns a reference to the wrapped payload.
    pub fn payload(&self) -> &E {
        &self.payload
    }

    pub fn into_payload(self) -> E {
        self.payload
    }

    /// Converts the wrapped payload from type `E` to type `F`.
    pub fn convert<F: From<E>>(self) -> Error<F> {
        // N.B. This would be `From<Error<E>> for Error<F>`, but that
        // conflicts with the blanket `From<T> for T` when `E` == `F`.
        Error {
            payload: F::from(self.payload),
        }
    }

    pub fn map<F, O: FnOnce(E) -> F>(self, op: O) -> Error<F> {
        Error {
            payload: op(self.payload),
        }
    }

    /// Records one propagation hop at `location` on the payload.
    pub fn traced(mut self, location: CodeLocation) -> Self
    where
        E: Traced,
    {
        self.payload.trace(location);
        self
    }
}

impl Error<String> {
    /// Constructs an error whose message is `message` followed by
    /// `"\n  in <file>:<line>"`.
    ///
    /// Every hop of propagation goes through the same formatting, so a
    /// message raised once and propagated twice carries three trailer
    /// lines, most recent last.
    pub fn located(message: impl Into<String>, location: CodeLocation) -> Self {
        let mut payload = message.into();
        push_trailer(&mut payload, location);
        Self { payload }
    }

    /// Like [`Error::located`], at the source location of the caller.
    #[inline]
    #[track_caller]
    pub fn raise(message: impl Into<String>) -> Self {
        Self::located(message, CodeLocation::here())
    }
}

impl<E> Deref for Error<E> {
    type Target = E;

    /// Returns a reference to the wrapped payload.
    fn deref(&self) -> &Self::Target {
        &self.payload
    }
}

impl<E: fmt::Display> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.payload, f)
    }
}

impl<E: std::error::Error> std::error::Error for Error<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.payload.source()
    }
}

/*  ____  _             _    _____
 * / ___|| |_ __ _  ___| | _| ____|_ __ _ __ ___  _ __
 * \___ \| __/ _` |/ __| |/ /  _| | '__| '__/ _ \| '__|
 *  ___) | || (_| | (__|   <| |___| |  | | | (_) | |
 * |____/ \__\__,_|\___|_|\_\_____|_|  |_|  \___/|_|
 *  FIGLET: StackError
 */

/// A payload that keeps track of a stack of code locations next to a
/// structured error value.
///
/// Use it as the `E` of a [`Result`](crate::Result) when the error is not a
/// plain message but should still carry a trail:
///
/// ```
/// use errtrail::{trail, Result, StackError};
/// use std::{fs, io};
///
/// fn file_size(path: &str) -> Result<u64, StackError<io::Error>> {
///     let size = trail!(fs::File::open(path)).metadata().map(|m| m.len());
///     Result::new(trail!(size))
/// }
///
/// let result = file_size("foo.txt");
/// if let Some(err) = result.error() {
///     println!("I/O error: {:?}", err.error());
///     println!("Call stack: {}", err.stack());
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StackError<E> {
    error: E,
    stack: CodeLocationStack,
}

impl<E> StackError<E> {
    /// Constructs a new [`StackError`] from the given error.
    ///
    /// The stack will contain the source location of the caller of this function. If that
    /// function's caller is also annotated with `#[track_caller]`, then its location will be used
    /// instead, and so on up the stack to the first call within a non-tracked function.
    #[inline]
    #[track_caller]
    pub fn new(error: E) -> Self {
        Self {
            error,
            stack: CodeLocationStack::new(),
        }
    }

    /// Pushes the source location of the caller of this function onto the stack.
    #[inline]
    #[track_caller]
    pub fn push_caller(&mut self) {
        self.stack.trace(CodeLocation::here());
    }

    /// Returns the stack.
    pub fn stack(&self) -> &CodeLocationStack {
        &self.stack
    }

    /// Returns the wrapped error.
    pub fn error(&self) -> &E {
        &self.error
    }

    pub fn into_parts(self) -> (E, CodeLocationStack) {
        (self.error, self.stack)
    }

    /// Converts the wrapped error from type `E` to type `F`, keeping the stack.
    pub fn convert_inner<F: From<E>>(self) -> StackError<F> {
        StackError {
            error: From::from(self.error),
            stack: self.stack,
        }
    }
}

/// Wraps `error` with an empty stack; the first hop fills it in.
impl<E> From<E> for StackError<E> {
    fn from(error: E) -> Self {
        Self {
            error,
            stack: CodeLocationStack::default(),
        }
    }
}

impl<E> Traced for StackError<E> {
    fn trace(&mut self, location: CodeLocation) {
        self.stack.trace(location);
    }
}

impl<E> Deref for StackError<E> {
    type Target = E;

    /// Returns a reference to the wrapped error.
    fn deref(&self) -> &Self::Target {
        &self.error
    }
}

impl<E: fmt::Display> fmt::Display for StackError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.error, self.stack)
    }
}

impl<E: std::error::Error> std::error::Error for StackError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.error.source()
    }
}

/*  _            _
 * | |_ ___  ___| |_
 * | __/ _ \/ __| __|
 * | ||  __/\__ \ |_
 *  \__\___||___/\__|
 *  FIGLET: test
 */
