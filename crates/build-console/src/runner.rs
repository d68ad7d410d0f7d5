//! Subprocess supervision with line-streamed output.
//!
//! The child's stdout and stderr are read on background threads, one per
//! pipe, and forwarded line-by-line into a channel. The calling thread
//! drains the channel until both pipes close, then reaps the child. Lines
//! from the two streams interleave in arrival order.

use std::io::{BufRead, BufReader, Read};
use std::process::{Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};

use anyhow::{Context, Result};
use crossbeam_channel::{unbounded, Sender};
use tracing::{debug, error};

/// Run a command and feed every output line to `on_line` as it arrives.
///
/// Blocks until the process exits and both output streams are drained.
/// Failure to spawn is the only error; a non-zero exit status is returned
/// to the caller, not treated as an error.
pub fn run_streamed<F>(program: &str, args: &[String], mut on_line: F) -> Result<ExitStatus>
where
    F: FnMut(&str),
{
    let mut child = Command::new(program)
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .with_context(|| format!("failed to start '{} {}'", program, args.join(" ")))?;

    debug!(program, pid = child.id(), "process started");

    let stdout = child
        .stdout
        .take()
        .context("child stdout was not captured")?;
    let stderr = child
        .stderr
        .take()
        .context("child stderr was not captured")?;

    let (tx, rx) = unbounded::<String>();
    let stdout_reader = spawn_reader(stdout, tx.clone());
    let stderr_reader = spawn_reader(stderr, tx);

    // The channel closes once both reader threads drop their senders
    for line in rx {
        on_line(&line);
    }

    if stdout_reader.join().is_err() || stderr_reader.join().is_err() {
        error!(program, "output reader thread panicked");
    }

    let status = child.wait().context("failed to wait for child process")?;
    debug!(program, status = ?status, "process exited");

    Ok(status)
}

fn spawn_reader<R>(pipe: R, tx: Sender<String>) -> JoinHandle<()>
where
    R: Read + Send + 'static,
{
    thread::spawn(move || {
        let reader = BufReader::new(pipe);
        for line in reader.lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
    })
}
