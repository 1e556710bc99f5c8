use std::fs::File;
use std::io;

use errtrail::{trail, CodeLocation, Result, StackError, Traced};

mod custom {
    use std::fmt;

    pub type Result<T, E> = errtrail::Result<T, Tagged<E>>;

    /// Keeps the trail as a list of strings next to the error.
    #[derive(Debug)]
    pub struct Tagged<E> {
        pub error: E,
        pub hops: Vec<String>,
    }

    // Required in order to propagate into `custom::Result`.
    impl<E> From<E> for Tagged<E> {
        fn from(error: E) -> Self {
            Self {
                error,
                hops: Vec::new(),
            }
        }
    }

    // Required for propagation tracing.
    impl<E> errtrail::Traced for Tagged<E> {
        fn trace(&mut self, location: errtrail::CodeLocation) {
            self.hops.push(location.to_string());
        }
    }

    // Required in order to return `custom::Result` from main().
    impl<E: fmt::Display> fmt::Display for Tagged<E> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{} {:?}", self.error, &self.hops)
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum MyError {
    #[error("Not this time!")]
    Unlucky,
    #[error("I/O error")]
    Io(#[from] io::Error),
    #[error("File too small: {0} bytes")]
    TooSmall(u64),
}

fn file_size(path: &str) -> Result<u64, StackError<MyError>> {
    let file = trail!(File::open(path).map_err(MyError::from));
    let size = trail!(file.metadata().map_err(MyError::from)).len();

    if size < 1024 {
        let mut error = StackError::from(MyError::TooSmall(size));
        error.trace(CodeLocation::here());
        return errtrail::err(error);
    }

    Result::new(size)
}

fn maybe_file_size(path: &str) -> custom::Result<u64, MyError> {
    let lucky = (path.len() % 2) == 0;

    if !lucky {
        return errtrail::err(MyError::Unlucky);
    }

    match file_size(path).into_payload_result() {
        Ok(size) => Result::new(size),
        Err(error) => {
            println!("Stack: {}", error.stack().to_strings().join(" <- "));
            let (inner, _stack) = error.into_parts();
            Result::new(trail!(Err::<u64, MyError>(inner)))
        }
    }
}

fn main() -> custom::Result<(), MyError> {
    let size = trail!(maybe_file_size("foo.txt"));
    println!("File size: {} KiB", size / 1024);
    Result::new(())
}
