use std::io;

use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use polycalc::calculator::Calculator;

fn main() -> io::Result<()> {
    if let Ok(level) = std::env::var("POLYCALC_LOG") {
        let level = level.parse().unwrap_or(LevelFilter::Debug);
        let _ = TermLogger::init(
            level,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Never,
        );
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();

    let mut calculator = Calculator::new(stdout.lock(), stderr.lock());
    calculator.run(stdin.lock())
}
