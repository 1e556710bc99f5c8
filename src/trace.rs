//! Defines types for error tracing.

use std::fmt;
use std::panic;

/// A trait denoting error payloads that can absorb a propagation hop.
///
/// [`trail!`](crate::trail) calls [`Traced::trace`] once per hop, after the
/// payload has been converted into the enclosing function's error type.
pub trait Traced {
    fn trace(&mut self, location: CodeLocation);
}

/// Appends `"\n  in <file>:<line>"` to the message.
impl Traced for String {
    fn trace(&mut self, location: CodeLocation) {
        push_trailer(self, location);
    }
}

pub(crate) fn push_trailer(message: &mut String, location: CodeLocation) {
    use std::fmt::Write;

    // Writing into a `String` cannot fail.
    let _ = write!(message, "\n  in {}", location);
}

/*   ____          _      _                    _   _
 *  / ___|___   __| | ___| |    ___   ___ __ _| |_(_) ___  _ __
 * | |   / _ \ / _` |/ _ \ |   / _ \ / __/ _` | __| |/ _ \| '_ \
 * | |__| (_) | (_| |  __/ |__| (_) | (_| (_| | |_| | (_) | | | |
 *  \____\___/ \__,_|\___|_____\___/ \___\__,_|\__|_|\___/|_| |_|
 *  FIGLET: CodeLocation
 */

/// Represents a location (filename, line number) in the source code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct CodeLocation {
    file: &'static str,
    line: u32,
}

impl CodeLocation {
    pub fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Returns the code location at the site of the caller.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use errtrail::CodeLocation;
    /// // begin file: foo.rs
    /// let loc = CodeLocation::here();
    /// assert_eq!(format!("{}", &loc), "foo.rs:2");
    /// ```
    #[inline]
    #[track_caller]
    pub fn here() -> Self {
        Self::from(panic::Location::caller())
    }

    /// Returns the `CodeLocation` that is `lines` lines below `self`,
    /// consuming `self`.
    pub fn down_by(self, lines: u32) -> Self {
        Self {
            file: self.file,
            line: self.line + lines,
        }
    }

    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }
}

impl From<&'static panic::Location<'static>> for CodeLocation {
    fn from(loc: &'static panic::Location<'static>) -> Self {
        CodeLocation {
            file: loc.file(),
            line: loc.line(),
        }
    }
}

impl fmt::Display for CodeLocation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}:{}", self.file, self.line)
    }
}

/*   ____          _      _                    _   _             ____  _             _
 *  / ___|___   __| | ___| |    ___   ___ __ _| |_(_) ___  _ __ / ___|| |_ __ _  ___| | __
 * | |   / _ \ / _` |/ _ \ |   / _ \ / __/ _` | __| |/ _ \| '_ \\___ \| __/ _` |/ __| |/ /
 * | |__| (_) | (_| |  __/ |__| (_) | (_| (_| | |_| | (_) | | | |___) | || (_| | (__|   <
 *  \____\___/ \__,_|\___|_____\___/ \___\__,_|\__|_|\___/|_| |_|____/ \__\__,_|\___|_|\_\
 *  FIGLET: CodeLocationStack
 */

/// A stack of code locations, oldest first.
#[derive(PartialEq, Eq, Default, Debug, Clone, Hash)]
pub struct CodeLocationStack(pub Vec<CodeLocation>);

impl Traced for CodeLocationStack {
    fn trace(&mut self, location: CodeLocation) {
        self.0.push(location);
    }
}

impl CodeLocationStack {
    /// Constructs a new code location stack with the caller at the top.
    #[inline]
    #[track_caller]
    pub fn new() -> Self {
        Self(vec![CodeLocation::here()])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CodeLocation> {
        self.0.iter()
    }

    pub fn to_strings(&self) -> Vec<String> {
        self.0.iter().map(|loc| format!("{}", loc)).collect()
    }
}

/// Renders one `"\n  in <file>:<line>"` trailer per entry.
impl fmt::Display for CodeLocationStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for location in self.0.iter() {
            write!(f, "\n  in {}", location)?;
        }

        Ok(())
    }
}

/*  _            _
 * | |_ ___  ___| |_
 * | __/ _ \/ __| __|
 * | ||  __/\__ \ |_
 *  \__\___||___/\__|
 *  FIGLET: test
 */
