//! Line splitting for import sources.
//!
//! A line ends at `\n`, `\r\n` or a lone `\r`; the terminator is dropped.
//! Input ending without a terminator still yields its last line.

use std::io::{self, BufRead};

/// Iterator over the lines of a buffered reader.
///
/// Yields `Err` for read faults and for lines that are not valid UTF-8.
pub struct LineReader<R> {
    reader: R,
    skip_lf: bool,
}

impl<R: BufRead> LineReader<R> {
    /// Wraps `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            skip_lf: false,
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut bytes = Vec::new();
        let mut seen_any = false;

        loop {
            let buf = match self.reader.fill_buf() {
                Ok(buf) => buf,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            };
            if buf.is_empty() {
                break;
            }

            // `\n` completing a `\r\n` pair that straddled two reads.
            if self.skip_lf {
                self.skip_lf = false;
                if buf[0] == b'\n' {
                    self.reader.consume(1);
                    continue;
                }
            }

            seen_any = true;
            match buf.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(end) => {
                    let terminator = buf[end];
                    bytes.extend_from_slice(&buf[..end]);
                    let crlf = terminator == b'\r' && buf.get(end + 1) == Some(&b'\n');
                    let used = if crlf { end + 2 } else { end + 1 };
                    self.skip_lf = terminator == b'\r' && !crlf && used == buf.len();
                    self.reader.consume(used);
                    return decode(bytes).map(Some);
                }
                None => {
                    let used = buf.len();
                    bytes.extend_from_slice(buf);
                    self.reader.consume(used);
                }
            }
        }

        if !seen_any {
            return Ok(None);
        }
        decode(bytes).map(Some)
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_line().transpose()
    }
}

fn decode(bytes: Vec<u8>) -> io::Result<String> {
    String::from_utf8(bytes).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            "stream did not contain valid UTF-8",
        )
    })
}

#[cfg(test)]
mod tests {
    use std::io::BufReader;

    use super::*;

    fn collect(input: &[u8]) -> Vec<String> {
        LineReader::new(input)
            .collect::<io::Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn all_terminators_end_a_line() {
        assert_eq!(collect(b"a\nb\r\nc\rd"), ["a", "b", "c", "d"]);
    }

    #[test]
    fn blank_lines_are_kept() {
        assert_eq!(collect(b"\n\r\n\r"), ["", "", ""]);
        assert_eq!(collect(b"a\r\rb\r"), ["a", "", "b"]);
    }

    #[test]
    fn empty_input_has_no_lines() {
        assert!(collect(b"").is_empty());
    }

    #[test]
    fn crlf_split_across_reads_is_one_terminator() {
        // Capacity 2 puts `\r` and `\n` in separate buffer fills.
        let reader = BufReader::with_capacity(2, &b"a\r\nb\r\n"[..]);
        let lines = LineReader::new(reader)
            .collect::<io::Result<Vec<_>>>()
            .unwrap();
        assert_eq!(lines, ["a", "b"]);
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let mut lines = LineReader::new(&[0xff, 0xfe, b'\n'][..]);
        let err = lines.next().unwrap().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
