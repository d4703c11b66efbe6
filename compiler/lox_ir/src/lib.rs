//! Lox IR - token data model
//!
//! This crate contains the values the scanner produces and the parser
//! consumes:
//! - Spans for source locations
//! - `TokenKind`, `Literal` and `Token`
//! - `TokenList`, the finished scan output
//!
//! Every type is a plain value (Clone, `PartialEq`, Debug). Types without
//! floats also carry Eq + Hash. With the `cache` feature the token model
//! derives serde's `Serialize`/`Deserialize`.

/// Fails the build if `$ty` is not `$size` bytes.
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod span;
mod token;

pub use span::Span;
pub use token::{Literal, Token, TokenKind, TokenList, TokenListError};
