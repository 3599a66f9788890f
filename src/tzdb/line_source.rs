//! Comment-stripping line reader with one line of push-back.

use std::io::{self, BufRead};

/// Yields the meaningful lines of a tz database file.
///
/// Each physical line is cut at the first `#`, trailing whitespace is
/// removed and lines left empty are skipped. Leading whitespace is kept:
/// a leading TAB is how zone continuation lines are recognised.
pub struct LineSource<R> {
    reader: R,
    pending: Option<String>,
    buf: Vec<u8>,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: None,
            buf: Vec::new(),
        }
    }

    /// Return the next non-blank line, or `None` at end of stream.
    pub fn next_line(&mut self) -> io::Result<Option<String>> {
        if let Some(line) = self.pending.take() {
            return Ok(Some(line));
        }

        loop {
            self.buf.clear();
            if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
                return Ok(None);
            }

            // Invalid UTF-8 degrades to replacement characters; the decoders
            // then count the line instead of the whole parse failing.
            let decoded = String::from_utf8_lossy(&self.buf);
            let raw: &str = decoded.as_ref();
            let content = match raw.find('#') {
                Some(i) => &raw[..i],
                None => raw,
            };
            let line = content.trim_end();

            if !line.is_empty() {
                return Ok(Some(line.to_string()));
            }
        }
    }

    /// Return `line` from the next call to [`LineSource::next_line`].
    ///
    /// # Panics
    ///
    /// Panics if a pushed-back line is already pending.
    pub fn push_back(&mut self, line: String) {
        assert!(
            self.pending.is_none(),
            "push_back called with a line already pending"
        );
        self.pending = Some(line);
    }
}

impl<R: BufRead> Iterator for LineSource<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}
