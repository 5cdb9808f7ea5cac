use crate::interpreter::constants::DEFAULT_TICK_RATE_HZ;
use clap::Parser;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Program shown when neither a file nor `--eval` is given: adds 2 and 3
pub const DEMO_PROGRAM: &str = "\
++        first cell holds 2
>
+++       second cell holds 3
[-<+>]    move the second cell onto the first
<         back to the sum
";

#[derive(Parser, Debug)]
#[command(
    name = "tapetty",
    about = "Watch a tape-language program run, one accelerating step at a time",
    long_about = "Runs a program written in the eight-instruction tape language \
                  (> < + - . , [ ]) and draws the program, the tape and the output \
                  live in the terminal. Every executed instruction makes the next \
                  one come a little sooner.",
    version
)]
pub struct Cli {
    /// Program file; every character outside > < + - . , [ ] is ignored
    #[arg(conflicts_with = "eval")]
    pub program_file: Option<PathBuf>,

    /// Program text given inline
    #[arg(short = 'e', long)]
    pub eval: Option<String>,

    /// Ticks per second delivered to the engine
    #[arg(short = 'r', long, default_value_t = DEFAULT_TICK_RATE_HZ,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub rate: u32,

    /// Run without the terminal UI, reading input bytes from stdin
    #[arg(long)]
    pub headless: bool,

    /// Give up after this many ticks (headless only)
    #[arg(long, requires = "headless")]
    pub max_ticks: Option<u64>,

    /// Append log records to this file; without it the terminal UI logs nothing
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Where log records go for this run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    /// The terminal UI owns the screen; stderr would draw over it
    Off,
}

impl Cli {
    pub fn log_target(&self) -> LogTarget {
        match (&self.log_file, self.headless) {
            (Some(path), _) => LogTarget::File(path.clone()),
            (None, true) => LogTarget::Stderr,
            (None, false) => LogTarget::Off,
        }
    }

    /// The raw program text, before filtering
    pub fn load_source(&self) -> io::Result<String> {
        if let Some(code) = &self.eval {
            return Ok(code.clone());
        }
        match &self.program_file {
            Some(path) => fs::read_to_string(path),
            None => Ok(DEMO_PROGRAM.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Program;

    #[test]
    fn test_demo_program_comments_are_filtered_out() {
        assert_eq!(Program::parse(DEMO_PROGRAM).as_text(), "++>+++[-<+>]<");
    }

    #[test]
    fn test_eval_takes_precedence_and_defaults_apply() {
        let cli = Cli::try_parse_from(["tapetty", "-e", "+[,.]"]).unwrap();
        assert_eq!(cli.load_source().unwrap(), "+[,.]");
        assert_eq!(cli.rate, 60);
        assert!(!cli.headless);
    }

    #[test]
    fn test_rejects_invalid_combinations() {
        assert!(Cli::try_parse_from(["tapetty", "--max-ticks", "10"]).is_err());
        assert!(Cli::try_parse_from(["tapetty", "--rate", "0"]).is_err());
        assert!(Cli::try_parse_from(["tapetty", "a.bf", "-e", "+"]).is_err());
    }

    #[test]
    fn test_tui_never_logs_to_stderr() {
        let tui = Cli::try_parse_from(["tapetty"]).unwrap();
        assert_eq!(tui.log_target(), LogTarget::Off);

        let headless = Cli::try_parse_from(["tapetty", "--headless"]).unwrap();
        assert_eq!(headless.log_target(), LogTarget::Stderr);

        let to_file = Cli::try_parse_from(["tapetty", "--log-file", "run.log"]).unwrap();
        assert_eq!(to_file.log_target(), LogTarget::File(PathBuf::from("run.log")));
    }

    #[test]
    fn test_falls_back_to_demo_program() {
        let cli = Cli::try_parse_from(["tapetty", "--headless"]).unwrap();
        assert_eq!(cli.load_source().unwrap(), DEMO_PROGRAM);
    }
}
