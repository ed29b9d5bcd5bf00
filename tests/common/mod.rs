use kjpl::mach::Runtime;

/// Output of a run, or the fatal error prefixed with `?`.
pub fn exec(runtime: &mut Runtime, source: &str) -> String {
    match runtime.compile(source) {
        Ok(output) => output,
        Err(error) => format!("?{}\n", error),
    }
}

#[allow(dead_code)]
pub fn run(source: &str) -> String {
    exec(&mut Runtime::default(), source)
}
