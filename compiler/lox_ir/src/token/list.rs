//! Finished token sequence.

use std::fmt;
use std::ops::Deref;

use super::{Token, TokenKind};

/// Why a token vector is not a valid [`TokenList`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenListError {
    /// The last token is not END, or there are no tokens at all.
    MissingEnd,
    /// An END token appears before the last position.
    EarlyEnd(usize),
}

impl fmt::Display for TokenListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenListError::MissingEnd => write!(f, "token list does not end with END"),
            TokenListError::EarlyEnd(index) => {
                write!(f, "END token at index {index} is not last")
            }
        }
    }
}

impl std::error::Error for TokenListError {}

/// Scanner output: zero or more tokens followed by exactly one END.
///
/// [`TokenList::terminated`] is the only constructor, so the END token is
/// always present and always last. Read access goes through `Deref` to
/// `[Token]` (`len`, `get`, `iter`, indexing).
///
/// A list rebuilt from raw tokens (including deserialized ones) goes
/// through [`TryFrom<Vec<Token>>`] and is checked for the same shape.
#[derive(Clone, PartialEq)]
#[cfg_attr(
    feature = "cache",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "Vec<Token>", try_from = "Vec<Token>")
)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    /// Append END at `end_line`/`end_offset` and seal the list.
    ///
    /// `tokens` must not contain END already.
    pub fn terminated(mut tokens: Vec<Token>, end_line: u32, end_offset: u32) -> Self {
        debug_assert!(
            !tokens.iter().any(|t| t.kind.is_end()),
            "END appended twice"
        );
        tokens.push(Token::end(end_line, end_offset));
        TokenList { tokens }
    }

    /// The END token.
    pub fn end(&self) -> &Token {
        let (end, _) = self.split();
        end
    }

    /// Every token except END.
    pub fn without_end(&self) -> &[Token] {
        let (_, rest) = self.split();
        rest
    }

    pub fn kinds(&self) -> impl Iterator<Item = TokenKind> + '_ {
        self.tokens.iter().map(|t| t.kind)
    }

    pub fn into_vec(self) -> Vec<Token> {
        self.tokens
    }

    // `terminated` guarantees a last element; indexing cannot fail.
    fn split(&self) -> (&Token, &[Token]) {
        let last = self.tokens.len() - 1;
        (&self.tokens[last], &self.tokens[..last])
    }
}

impl Deref for TokenList {
    type Target = [Token];

    fn deref(&self) -> &[Token] {
        &self.tokens
    }
}

impl TryFrom<Vec<Token>> for TokenList {
    type Error = TokenListError;

    fn try_from(tokens: Vec<Token>) -> Result<Self, Self::Error> {
        let Some((last, rest)) = tokens.split_last() else {
            return Err(TokenListError::MissingEnd);
        };
        if !last.kind.is_end() {
            return Err(TokenListError::MissingEnd);
        }
        if let Some(index) = rest.iter().position(|t| t.kind.is_end()) {
            return Err(TokenListError::EarlyEnd(index));
        }
        Ok(TokenList { tokens })
    }
}

impl From<TokenList> for Vec<Token> {
    fn from(list: TokenList) -> Self {
        list.tokens
    }
}

impl fmt::Debug for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenList({} tokens)", self.tokens.len())
    }
}

impl IntoIterator for TokenList {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
