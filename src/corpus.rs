use std::io::{self, BufRead};

/// Streams a text source character by character, one buffered line at a
/// time, without materializing the corpus. Newlines are yielded as literal
/// characters.
pub struct CharStream<R: BufRead> {
    reader: R,
    line: String,
    pos: usize,
}

impl<R: BufRead> CharStream<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            pos: 0,
        }
    }
}

impl<R: BufRead> Iterator for CharStream<R> {
    type Item = io::Result<char>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(c) = self.line[self.pos..].chars().next() {
                self.pos += c.len_utf8();
                return Some(Ok(c));
            }
            self.line.clear();
            self.pos = 0;
            match self.reader.read_line(&mut self.line) {
                Ok(0) => return None,
                Ok(_) => continue,
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
