//! Line reader for configurable input.
//!
//! The `input` builtin reads through one of these so tests can script
//! their input instead of touching the process stdin. Same enum-dispatch
//! shape as the print handler.

use std::collections::VecDeque;
use std::io::BufRead;

use parking_lot::Mutex;

/// Default reader over the process standard input.
#[derive(Default)]
pub struct StdinLineReader;

impl StdinLineReader {
    /// Read one line, stripping the trailing newline. End of input reads
    /// as an empty string.
    pub fn read_line(&self) -> String {
        let mut line = String::new();
        let stdin = std::io::stdin();
        if stdin.lock().read_line(&mut line).is_err() {
            return String::new();
        }
        strip_newline(&mut line);
        line
    }
}

/// Scripted reader serving pre-queued lines, for tests.
pub struct BufferLineReader {
    lines: Mutex<VecDeque<String>>,
}

impl BufferLineReader {
    pub fn new(lines: Vec<String>) -> Self {
        BufferLineReader {
            lines: Mutex::new(lines.into()),
        }
    }

    /// Pop the next scripted line; an exhausted script reads as empty
    /// strings, like a closed stdin.
    pub fn read_line(&self) -> String {
        self.lines.lock().pop_front().unwrap_or_default()
    }
}

/// Line reader implementation using enum dispatch.
pub enum LineReaderImpl {
    /// Reads the process standard input (default).
    Stdin(StdinLineReader),
    /// Serves scripted lines (testing).
    Buffer(BufferLineReader),
}

impl LineReaderImpl {
    /// Read one line without its trailing newline.
    pub fn read_line(&self) -> String {
        match self {
            Self::Stdin(r) => r.read_line(),
            Self::Buffer(r) => r.read_line(),
        }
    }
}

/// Shared line reader handle.
pub type SharedLineReader = std::sync::Arc<LineReaderImpl>;

/// Create the default stdin reader.
pub fn stdin_reader() -> SharedLineReader {
    std::sync::Arc::new(LineReaderImpl::Stdin(StdinLineReader))
}

/// Create a scripted reader serving the given lines in order.
pub fn scripted_reader(lines: Vec<String>) -> SharedLineReader {
    std::sync::Arc::new(LineReaderImpl::Buffer(BufferLineReader::new(lines)))
}

fn strip_newline(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_reader_serves_lines_in_order() {
        let reader = scripted_reader(vec!["one".to_string(), "two".to_string()]);
        assert_eq!(reader.read_line(), "one");
        assert_eq!(reader.read_line(), "two");
        // Exhausted script reads as empty.
        assert_eq!(reader.read_line(), "");
    }

    #[test]
    fn newline_stripping() {
        let mut s = String::from("line\r\n");
        strip_newline(&mut s);
        assert_eq!(s, "line");
    }
}
