/*!
## Rust Machine Module

This Rust module executes classified KJPL programs against a persistent
session of variables and functions.

*/

mod block;
mod config;
mod function;
mod output;
mod program;
mod runtime;
mod val;
mod var;

pub use block::case_arms;
pub use block::find_block_end;
pub use block::find_else;
pub use block::Arm;
pub use config::Config;
pub use function::Function;
pub use output::Output;
pub use output::NO_OUTPUT;
pub use program::Program;
pub use runtime::Runtime;
pub use val::Val;
pub use var::Var;
