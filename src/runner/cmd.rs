//! Run an OCR executable with an optional model and deadline.

use crate::utils::error::RunError;
use log::{debug, warn};
use std::io::{self, PipeReader, Read};
use std::process::{Child, Command, Stdio};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use wait_timeout::ChildExt;

/// An OCR executable and the model it should use
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cmd {
    /// Executable to run
    pub exe: String,
    /// Model path, passed as `--model <model>` after all other arguments
    pub model: Option<String>,
}

impl Cmd {
    pub fn new(exe: impl Into<String>) -> Self {
        Self {
            exe: exe.into(),
            model: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Full command line: executable, `args`, then the model option
    pub fn args<S: AsRef<str>>(&self, args: &[S]) -> Vec<String> {
        let mut line = Vec::with_capacity(args.len() + 3);
        line.push(self.exe.clone());
        line.extend(args.iter().map(|a| a.as_ref().to_string()));
        if let Some(model) = self.model.as_deref().filter(|m| !m.is_empty()) {
            line.push("--model".to_string());
            line.push(model.to_string());
        }
        line
    }

    /// Run to completion and return the combined stdout and stderr output
    pub fn run<S: AsRef<str>>(&self, args: &[S]) -> Result<Vec<u8>, RunError> {
        self.execute(args, None)
    }

    /// Like [`Cmd::run`], but kill the child once `timeout` has elapsed
    ///
    /// On Unix the child runs in its own process group and the whole
    /// group is killed, so processes it started do not outlive the deadline.
    ///
    /// # Errors
    /// * `RunError::Timeout` - The deadline elapsed; the child was killed
    /// * `RunError::Failed` - The command exited unsuccessfully
    pub fn run_with_timeout<S: AsRef<str>>(
        &self,
        args: &[S],
        timeout: Duration,
    ) -> Result<Vec<u8>, RunError> {
        self.execute(args, Some(timeout))
    }

    fn execute<S: AsRef<str>>(
        &self,
        args: &[S],
        timeout: Option<Duration>,
    ) -> Result<Vec<u8>, RunError> {
        if self.exe.is_empty() {
            return Err(RunError::EmptyCommand);
        }
        let line = self.args(args);
        debug!("Running: {}", line.join(" "));

        // stdout and stderr share one pipe so the output keeps its order
        let (reader, writer) = io::pipe()?;
        let mut child = {
            let mut command = Command::new(&line[0]);
            command
                .args(&line[1..])
                .stdin(Stdio::null())
                .stdout(writer.try_clone()?)
                .stderr(writer);
            #[cfg(unix)]
            {
                use std::os::unix::process::CommandExt;
                command.process_group(0);
            }
            // `command` holds the write ends; it must be gone before reading to EOF
            command.spawn().map_err(|source| RunError::Spawn {
                exe: self.exe.clone(),
                source,
            })?
        };

        let output = drain(reader);

        let status = match timeout {
            None => child.wait()?,
            Some(limit) => match child.wait_timeout(limit)? {
                Some(status) => status,
                None => {
                    warn!("{} timed out after {:?}", self.exe, limit);
                    kill(&mut child);
                    // The reader thread detaches; it ends once the last writer is gone
                    drop(output);
                    return Err(RunError::Timeout(limit));
                }
            },
        };

        let output = collect(output)?;

        if status.success() {
            Ok(output)
        } else {
            Err(RunError::Failed { status, output })
        }
    }
}

fn drain(mut pipe: PipeReader) -> JoinHandle<io::Result<Vec<u8>>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        pipe.read_to_end(&mut buf)?;
        Ok(buf)
    })
}

fn collect(handle: JoinHandle<io::Result<Vec<u8>>>) -> Result<Vec<u8>, RunError> {
    match handle.join() {
        Ok(result) => Ok(result?),
        Err(_) => Err(RunError::Io(io::Error::other("output reader panicked"))),
    }
}

#[cfg(unix)]
fn kill(child: &mut Child) {
    use nix::sys::signal::{killpg, Signal};
    use nix::unistd::Pid;

    // The child leads its own group, so the group id is its pid
    let group = Pid::from_raw(child.id() as i32);
    if let Err(e) = killpg(group, Signal::SIGKILL) {
        debug!("Failed to kill process group {}: {}", group, e);
        let _ = child.kill();
    }
    let _ = child.wait();
}

#[cfg(not(unix))]
fn kill(child: &mut Child) {
    if let Err(e) = child.kill() {
        debug!("Failed to kill child: {}", e);
    }
    let _ = child.wait();
}
