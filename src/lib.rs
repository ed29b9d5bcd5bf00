//! # KJPL
//!
//! A small line-oriented scripting language with variables, `IF` blocks,
//! `REVELATION_CASE` dispatch and parameterless functions.
//!
//! Run a program file with `kjpl program.kj`, or start `kjpl` with no
//! arguments for an interactive session.
//! ```text
//! > name = "World"
//! > PRINT(name)
//! World
//! ```
//!
//! Embedding the interpreter takes a `Runtime` and a string.
//! ```
//! let mut runtime = kjpl::mach::Runtime::new();
//! let output = runtime.compile("x = \"hello world\"\nPRINT(x)").unwrap();
//! assert_eq!(output, "hello world\n");
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
pub mod term;
