/// ## Resource limits
///
/// `max_call_depth` bounds nested `CALL`s. `max_nesting` bounds open blocks
/// and calls together. `max_steps` bounds the number of statements one
/// `compile` may execute, counting those run inside calls.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub max_call_depth: usize,
    pub max_nesting: usize,
    pub max_steps: usize,
}

impl Config {
    pub const DEFAULT_MAX_CALL_DEPTH: usize = 64;
    pub const DEFAULT_MAX_NESTING: usize = 256;
    pub const DEFAULT_MAX_STEPS: usize = 1_000_000;
}

impl Default for Config {
    fn default() -> Config {
        Config {
            max_call_depth: Config::DEFAULT_MAX_CALL_DEPTH,
            max_nesting: Config::DEFAULT_MAX_NESTING,
            max_steps: Config::DEFAULT_MAX_STEPS,
        }
    }
}
