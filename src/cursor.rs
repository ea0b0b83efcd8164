/// A byte cursor over an in-memory buffer with cheap position rollback.
///
/// The Polish-numeral grammar requires arbitrary lookahead: many words share
/// prefixes, and the space-separated composition means a parser may consume a
/// space only to discover the following word belongs to something else
/// entirely. Rather than stream the input, the whole archive is buffered and
/// walked with this cursor.
pub struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Cursor { data, pos: 0 }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn set_pos(&mut self, pos: usize) {
        debug_assert!(pos <= self.data.len());
        self.pos = pos;
    }

    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Consumes `literal` if the remaining input starts with it.
    pub fn eat_literal(&mut self, literal: &str) -> bool {
        let bytes = literal.as_bytes();
        if self.remaining().starts_with(bytes) {
            self.pos += bytes.len();
            true
        } else {
            false
        }
    }

    /// Reads bytes up to (and consuming, but not including) the next `\n`.
    /// Returns `None` if no newline remains in the input.
    pub fn read_until_newline(&mut self) -> Option<&'a [u8]> {
        let rest = self.remaining();
        let idx = rest.iter().position(|&b| b == b'\n')?;
        let line = &rest[..idx];
        self.pos += idx + 1;
        Some(line)
    }
}
