extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::lang::{Edge, Error, Line};
use crate::mach::{Config, Runtime};
use crate::error;
use ansi_term::Style;
use linefeed::{Interface, ReadResult, Signal};
use std::io::ErrorKind;
use std::path::Path;
use tracing::warn;

/// Runs `file` once, or an interactive session when there is none.
/// Returns the process exit code.
pub fn main(config: Config, file: Option<&Path>) -> i32 {
    let mut runtime = Runtime::with_config(config);
    let interrupt = runtime.interrupt_handle();
    if let Err(error) = ctrlc::set_handler(move || {
        interrupt.store(true, std::sync::atomic::Ordering::SeqCst);
    }) {
        warn!(%error, "Ctrl-C handler not installed");
    }
    match file {
        Some(filename) => match load(filename).and_then(|source| runtime.compile(&source)) {
            Ok(output) => {
                println!("{}", output.trim_end_matches('\n'));
                0
            }
            Err(error) => {
                eprintln!("{}", Style::new().bold().paint(format!("Error: {}", error)));
                1
            }
        },
        None => match main_loop(&mut runtime) {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("{}", error);
                1
            }
        },
    }
}

fn main_loop(runtime: &mut Runtime) -> std::io::Result<()> {
    let interface = Interface::new("KJPL")?;
    interface.set_report_signal(Signal::Interrupt, true);
    let mut entry = Entry::default();
    interface.set_prompt(entry.prompt())?;

    loop {
        let string = match interface.read_line()? {
            ReadResult::Input(string) => string,
            ReadResult::Signal(Signal::Interrupt) => {
                entry.clear();
                interface.set_prompt(entry.prompt())?;
                continue;
            }
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        if !string.trim().is_empty() {
            interface.add_history_unique(string.clone());
        }
        if entry.is_empty() && string.trim() == "RESET" {
            runtime.reset();
            continue;
        }
        let program = entry.push(&string);
        interface.set_prompt(entry.prompt())?;
        let program = match program {
            Some(program) => program,
            None => continue,
        };
        match runtime.compile(&program) {
            Ok(output) => {
                interface.write_fmt(format_args!("{}\n", output.trim_end_matches('\n')))?;
            }
            Err(error) => {
                interface.write_fmt(format_args!(
                    "{}\n",
                    Style::new().bold().paint(error.to_string())
                ))?;
            }
        }
    }
    Ok(())
}

/// Lines typed so far, held back until every block they open is closed.
#[derive(Debug, Default)]
struct Entry {
    text: String,
    depth: usize,
}

impl Entry {
    fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn clear(&mut self) {
        self.text.clear();
        self.depth = 0;
    }

    fn prompt(&self) -> &'static str {
        if self.text.is_empty() {
            "> "
        } else {
            ". "
        }
    }

    /// Adds a line. Returns the whole program once it is complete.
    fn push(&mut self, input: &str) -> Option<String> {
        let line = Line::new(0, input);
        if line.is_empty() && self.text.is_empty() {
            return None;
        }
        match line.edge() {
            Some(Edge::Open(_)) => self.depth += 1,
            Some(Edge::Close(_)) => self.depth = self.depth.saturating_sub(1),
            None => {}
        }
        self.text.push_str(input);
        self.text.push('\n');
        if self.depth > 0 {
            return None;
        }
        let program = std::mem::take(&mut self.text);
        Some(program)
    }
}

fn load(filename: &Path) -> Result<String, Error> {
    match std::fs::read_to_string(filename) {
        Ok(source) => Ok(source),
        Err(error) => {
            let msg = format!("{}: {}", filename.display(), error);
            match error.kind() {
                ErrorKind::NotFound => Err(error!(FileNotFound; msg.as_str())),
                _ => Err(error!(InternalError; msg.as_str())),
            }
        }
    }
}
