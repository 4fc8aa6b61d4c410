//! The `cec-client` child process whose stdout feeds the event loop.

use std::io::BufReader;
use std::process::{Child, ChildStdout, Command, Stdio};

/// Running adapter. Killed and reaped when dropped.
pub struct CecAdapter {
    child: Child,
    stdout: BufReader<ChildStdout>,
}

impl CecAdapter {
    pub fn spawn(program: &str, args: &[String]) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        log::info!("Starting CEC adapter: {} {}", program, args.join(" "));

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| format!("Failed to start {}: {}", program, e))?;

        let stdout = child
            .stdout
            .take()
            .ok_or("Adapter stdout was not captured")?;

        log::debug!("Adapter running as pid {}", child.id());
        Ok(Self {
            child,
            stdout: BufReader::new(stdout),
        })
    }

    /// Line source for the event loop.
    pub fn lines(&mut self) -> &mut BufReader<ChildStdout> {
        &mut self.stdout
    }
}

impl Drop for CecAdapter {
    fn drop(&mut self) {
        match self.child.try_wait() {
            Ok(Some(status)) => log::info!("Adapter exited with {}", status),
            _ => {
                log::debug!("Stopping adapter (pid {})", self.child.id());
                let _ = self.child.kill();
                let _ = self.child.wait();
            }
        }
    }
}
