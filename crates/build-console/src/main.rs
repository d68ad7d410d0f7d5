//! Build console: runs cargo subcommands and colorizes their output.
//!
//! One-shot flags run a single subcommand and exit; with no flags the
//! console prompts for commands interactively. Test output is filtered and
//! colorized by category (pass/fail/summary/warning), other cargo chatter
//! is suppressed.

mod classify;
mod render;
mod runner;
mod toolchain;

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use render::Renderer;

#[derive(Debug, clap::Parser)]
#[command(name = "build-console", about = "Run cargo subcommands with colorized output")]
struct Args {
    /// Run `cargo run` and exit
    #[arg(short = 'd', long)]
    dev: bool,

    /// Run `cargo test` and exit
    #[arg(short = 't', long)]
    test: bool,

    /// Generate documentation and exit
    #[arg(long)]
    doc: bool,

    /// Switch the default toolchain to nightly first
    #[arg(long)]
    nightly: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn run_cargo(subcommand: &str, extra_args: &[&str]) -> Result<()> {
    let renderer = Renderer::stdout();

    let mut args = vec![subcommand.to_string()];
    args.extend(extra_args.iter().map(|a| a.to_string()));

    let status = runner::run_streamed("cargo", &args, |line| {
        if let Some(class) = classify::classify(line) {
            renderer.print(class, line);
        }
    })?;

    if !status.success() {
        warn!(subcommand, status = ?status, "cargo exited with error");
    }

    Ok(())
}

fn interactive_loop() -> Result<()> {
    let stdin = std::io::stdin();

    loop {
        print!("build-console> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break; // EOF
        }

        let command = line.trim();
        match command {
            "" => {}
            "build" => run_cargo("build", &[])?,
            "test" => run_cargo("test", &[])?,
            "dev" | "run" => run_cargo("run", &[])?,
            "doc" => run_cargo("doc", &["--no-deps", "--open"])?,
            "quit" | "exit" => break,
            other => {
                if let Some(channel) = other.strip_prefix("toolchain ") {
                    if let Err(e) = toolchain::set_default(channel.trim()) {
                        warn!(error = %e, "could not switch toolchain");
                    }
                } else {
                    eprintln!("commands: build, test, dev, doc, toolchain <channel>, quit");
                }
            }
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    init_logging();

    let args = Args::parse();

    let detected = toolchain::detect(Path::new("."));
    info!(toolchain = %detected, "detected project toolchain");

    if args.nightly {
        if let Err(e) = toolchain::set_default("nightly") {
            warn!(error = %e, "could not switch to nightly");
        }
    }

    if args.test {
        return run_cargo("test", &[]);
    }
    if args.dev {
        return run_cargo("run", &[]);
    }
    if args.doc {
        return run_cargo("doc", &["--no-deps", "--open"]);
    }

    interactive_loop()
}
