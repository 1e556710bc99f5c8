use std::fs::File;
use std::io;
use std::sync::mpsc;
use std::thread;

use errtrail::{trail, Result, StackError};

fn main() {
    let path = "foo.txt"; // <------------------- Does not exist.

    let result = file_summary(path);
    match result.error() {
        None => println!("{}", result.data()),
        Some(err) => {
            println!("Err: {:?}", err.error());
            println!("\nReturn trace: {}", err.stack());
        }
    }
}

fn open_file(path: &str) -> Result<File, StackError<io::Error>> {
    let file = trail!(File::open(path)); // <---- `trail!` starts a new error trace.
    Result::new(file)
}

fn file_size(file: &File) -> Result<u64, StackError<io::Error>> {
    let size = trail!(file.metadata()).len();
    Result::new(size)
}

fn file_summary(path: &'static str) -> Result<String, StackError<io::Error>> {
    let (tx, rx) = mpsc::channel();

    // Open the file on a separate thread, send result to this thread.
    thread::spawn(move || {
        let open_result = open_file(path);
        tx.send(open_result).unwrap();
    });

    // Make the summary on this thread.
    let open_result = trail!(rx.recv().map_err(|_| io::Error::other("opener thread hung up")));
    let file = trail!(open_result); // <--------- `trail!` continues the error trace.
    let size = trail!(file_size(&file));

    let summary = format!("{}: {} bytes", path, size);
    Result::new(summary)
}
