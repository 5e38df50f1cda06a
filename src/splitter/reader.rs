use super::classify::CharClass;

/// Cursor over the decoded code points of an input string.
///
/// Classification runs on whole code points rather than bytes, so multi-byte
/// characters are handled correctly. Byte offsets are kept alongside each
/// decoded code point so that tokens come back as subslices of the original
/// input.
pub struct Reader<'a> {
    input: &'a str,
    runes: Vec<(usize, char)>,
    pos: usize,
}

impl<'a> Reader<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            runes: input.char_indices().collect(),
            pos: 0,
        }
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.runes.len()
    }

    /// Classification of the next unread code point, if any.
    fn peek(&self) -> Option<CharClass> {
        self.runes.get(self.pos).map(|&(_, ch)| CharClass::of(ch))
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    /// Step back over the last read code point. Only ever undoes the
    /// immediately preceding advance, so a next code point always exists
    /// afterwards.
    fn retreat(&mut self) {
        self.pos -= 1;
    }

    /// Byte offset of the code point at `idx`, or the end of the input.
    fn byte_at(&self, idx: usize) -> usize {
        self.runes.get(idx).map_or(self.input.len(), |&(off, _)| off)
    }

    /// Whether the token accumulated so far, extended by the next code point,
    /// is a prefix of any word that must not be split.
    fn is_no_split_prefix(&self, start: usize, no_split: &[&str]) -> bool {
        let accumulated = &self.input[self.byte_at(start)..self.byte_at(self.pos + 1)];
        no_split.iter().any(|word| word.starts_with(accumulated))
    }

    /// Read the next token starting at the current cursor position.
    pub fn read_token(&mut self, no_split: &[&str]) -> &'a str {
        let start = self.pos;
        let lead = CharClass::of(self.runes[start].1);
        self.advance();

        if lead.is_digit() {
            self.read_number(start, no_split)
        } else {
            self.read_word(start, no_split)
        }
    }

    fn read_number(&mut self, start: usize, no_split: &[&str]) -> &'a str {
        // A lone digit not followed by another digit stays a one-point token.
        if self.peek() == Some(CharClass::Digit) {
            while let Some(next) = self.peek() {
                if next.is_digit() || self.is_no_split_prefix(start, no_split) {
                    self.advance();
                } else {
                    break;
                }
            }
        }

        self.token(start)
    }

    fn read_word(&mut self, start: usize, no_split: &[&str]) -> &'a str {
        if self.peek() == Some(CharClass::Upper) {
            while let Some(next) = self.peek() {
                if next.is_upper() || self.is_no_split_prefix(start, no_split) {
                    self.advance();
                } else {
                    break;
                }
            }

            // The last uppercase letter of a run followed by a lowercase word
            // belongs to that word: "PDFLoader" -> "PDF", "Loader".
            if self.peek() == Some(CharClass::Other) {
                self.retreat();
            }

            return self.token(start);
        }

        while let Some(next) = self.peek() {
            if self.is_no_split_prefix(start, no_split) || next == CharClass::Other {
                self.advance();
            } else {
                break;
            }
        }

        self.token(start)
    }

    fn token(&self, start: usize) -> &'a str {
        &self.input[self.byte_at(start)..self.byte_at(self.pos)]
    }
}
