//! Lexer for splitting shell input into words.
//!
//! Handles:
//! - Whitespace-separated words
//! - Single quotes (literal)
//! - Double quotes with `\` escapes
//! - Quoted runs glued to unquoted ones (`my"dir name"` is one word)

// =============================================================================
// Lexer
// =============================================================================

/// Lexer yielding one `String` per shell word.
///
/// A quoted empty string (`""` or `''`) yields an empty word.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Tokenize the entire input into a vector
    pub fn tokenize(self) -> Vec<String> {
        self.collect()
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn read_word(&mut self) -> String {
        let mut word = String::new();

        while let Some(c) = self.peek() {
            match c {
                c if c.is_whitespace() => break,
                '\'' => {
                    self.pos += 1;
                    self.read_single_quoted(&mut word);
                }
                '"' => {
                    self.pos += 1;
                    self.read_double_quoted(&mut word);
                }
                _ => {
                    self.pos += c.len_utf8();
                    word.push(c);
                }
            }
        }

        word
    }

    /// Read up to the closing `'`. An unclosed quote takes the rest of input.
    fn read_single_quoted(&mut self, word: &mut String) {
        while let Some(c) = self.bump() {
            if c == '\'' {
                return;
            }
            word.push(c);
        }
    }

    /// Read up to the closing `"`, resolving `\n`, `\t` and `\<char>`.
    fn read_double_quoted(&mut self, word: &mut String) {
        while let Some(c) = self.bump() {
            match c {
                '"' => return,
                '\\' => match self.bump() {
                    Some('n') => word.push('\n'),
                    Some('t') => word.push('\t'),
                    Some(escaped) => word.push(escaped),
                    None => word.push('\\'),
                },
                _ => word.push(c),
            }
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_whitespace();
        if self.pos >= self.input.len() {
            return None;
        }
        Some(self.read_word())
    }
}

// =============================================================================
// Tests
// =============================================================================
