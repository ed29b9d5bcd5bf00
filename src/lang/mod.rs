/*!
# Rust Language Module

This Rust module splits KJPL source into lines and classifies each line
into a statement.

*/

pub type LineNumber = Option<usize>;

#[macro_use]
mod error;
mod ident;
mod line;
mod parse;
mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use line::Line;
pub use ident::is_ident;
pub use parse::parse;
pub use parse::Edge;
pub use token::Operator;
pub use token::Word;

pub mod ast;

#[cfg(test)]
mod tests;
