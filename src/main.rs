//! CLI entry point for the text autostereogram generator

use clap::Parser;
use textstereo::io::cli::{Cli, StereogramRunner};

fn main() -> textstereo::Result<()> {
    let cli = Cli::parse();
    let runner = StereogramRunner::new(cli);
    runner.run()
}
