//! Character cursor over the source text.
//!
//! The cursor owns all index arithmetic for the scanner: the start of the
//! lexeme being scanned, the next unconsumed position, and the line
//! counter. Positions are byte offsets that always sit on character
//! boundaries, since the cursor only ever steps over whole characters.
//!
//! # Lookahead
//!
//! [`peek`](Cursor::peek) and [`peek_next`](Cursor::peek_next) give one and
//! two characters of lookahead. Both return `'\0'` past the end of input
//! instead of failing; callers that care about an interior NUL check
//! [`is_at_end`](Cursor::is_at_end) first.
//!
//! # Line Tracking
//!
//! [`advance`](Cursor::advance) is the single place that counts lines: the
//! counter goes up by one for every `\n` consumed. The bulk skip helpers
//! keep the same invariant.

use lox_ir::Span;

/// Cursor over a borrowed source string.
///
/// The cursor is [`Copy`], enabling cheap state snapshots in tests.
///
/// # Invariant
///
/// `start <= current <= source.len()`, and both offsets are char boundaries.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    /// First byte of the lexeme being scanned.
    start: usize,
    /// Next unconsumed byte.
    current: usize,
    /// Line of `current` (1-based).
    line: u32,
    /// Line of `start`.
    start_line: u32,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `source`, on line 1.
    pub fn new(source: &'a str) -> Self {
        Cursor {
            source,
            start: 0,
            current: 0,
            line: 1,
            start_line: 1,
        }
    }

    /// Returns `true` once every character has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    /// Returns the next unconsumed character without consuming it.
    #[inline]
    pub fn peek(&self) -> char {
        self.rest().chars().next().unwrap_or('\0')
    }

    /// Returns the character after [`peek`](Self::peek) without consuming
    /// anything.
    #[inline]
    pub fn peek_next(&self) -> char {
        let mut chars = self.rest().chars();
        chars.next();
        chars.next().unwrap_or('\0')
    }

    /// Consume and return the next character.
    ///
    /// Returns `'\0'` without moving when already at the end.
    #[inline]
    pub fn advance(&mut self) -> char {
        let Some(c) = self.rest().chars().next() else {
            return '\0';
        };
        self.current += c.len_utf8();
        if c == '\n' {
            self.line = self.line.saturating_add(1);
        }
        c
    }

    /// Consume the next character only if it is `expected`.
    #[inline]
    pub fn eat(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.peek() != expected {
            return false;
        }
        self.advance();
        true
    }

    /// Advance while `pred` returns `true` for the next character.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while !self.is_at_end() && pred(self.peek()) {
            self.advance();
        }
    }

    /// Advance to the next `\n` (not consumed) or to the end of input.
    ///
    /// Used for comment bodies. No newline is crossed, so the line is
    /// unchanged.
    pub fn eat_until_newline(&mut self) {
        let rest = self.rest().as_bytes();
        self.current += memchr::memchr(b'\n', rest).unwrap_or(rest.len());
    }

    /// Advance to the next `"` (not consumed), counting the newlines
    /// crossed on the way.
    ///
    /// Returns `false` if input ran out first; the cursor is then at the
    /// end and the line is the last line of the source.
    pub fn eat_string_body(&mut self) -> bool {
        let rest = self.rest().as_bytes();
        let (body_len, found) = match memchr::memchr(b'"', rest) {
            Some(offset) => (offset, true),
            None => (rest.len(), false),
        };
        let newlines = memchr::memchr_iter(b'\n', &rest[..body_len]).count();
        self.line = self
            .line
            .saturating_add(u32::try_from(newlines).unwrap_or(u32::MAX));
        self.current += body_len;
        found
    }

    /// Begin a new lexeme at the current position.
    #[inline]
    pub fn start_lexeme(&mut self) {
        self.start = self.current;
        self.start_line = self.line;
    }

    /// Source text of the lexeme scanned so far.
    #[inline]
    pub fn lexeme(&self) -> &'a str {
        &self.source[self.start..self.current]
    }

    /// Byte span of the lexeme scanned so far.
    #[inline]
    pub fn span(&self) -> Span {
        Span::from_offsets(self.start, self.current)
    }

    /// Current line (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Line on which the current lexeme started.
    #[inline]
    pub fn start_line(&self) -> u32 {
        self.start_line
    }

    /// Byte offset of the next unconsumed character.
    #[inline]
    pub fn pos(&self) -> usize {
        self.current
    }

    /// Length of the source in bytes.
    #[inline]
    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    #[inline]
    fn rest(&self) -> &'a str {
        &self.source[self.current..]
    }
}
