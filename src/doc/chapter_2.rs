/*!
# Statements

Each statement or block line stands alone on its own line. Keywords are
upper case. Blocks may be nested inside each other.
*/

#[path = "statements/assign.rs"]
#[allow(non_snake_case)]
pub mod ASSIGN;

#[path = "statements/call.rs"]
#[allow(non_snake_case)]
pub mod CALL;

#[path = "statements/define.rs"]
#[allow(non_snake_case)]
pub mod DEFINE;

#[path = "statements/if.rs"]
#[allow(non_snake_case)]
pub mod IF;

#[path = "statements/print.rs"]
#[allow(non_snake_case)]
pub mod PRINT;

#[path = "statements/revelation_case.rs"]
#[allow(non_snake_case)]
pub mod REVELATION_CASE;
