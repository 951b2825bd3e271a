//!
//! The background development server process.
//!

use std::process::Child;
use std::process::ExitStatus;
use std::time::Duration;
use std::time::Instant;

///
/// The background development server process.
///
/// The process is killed on drop if it has not been stopped.
///
#[derive(Debug)]
pub struct ServeProcess {
    /// The child process, taken when stopped.
    child: Option<Child>,
}

impl ServeProcess {
    /// The time given to the server to shut down after the interrupt.
    pub const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

    /// The exit polling period.
    const POLLING_PERIOD: Duration = Duration::from_millis(50);

    ///
    /// A shortcut constructor.
    ///
    pub fn new(child: Child) -> Self {
        Self { child: Some(child) }
    }

    ///
    /// Returns the process identifier, if the process has not been stopped.
    ///
    pub fn id(&self) -> Option<u32> {
        self.child.as_ref().map(Child::id)
    }

    ///
    /// Interrupts the server and waits for it to exit.
    ///
    /// If the server is still alive after the timeout, it is killed and an error is returned.
    ///
    pub fn interrupt(mut self) -> anyhow::Result<ExitStatus> {
        let mut child = self
            .child
            .take()
            .ok_or_else(|| anyhow::anyhow!("The server has already been stopped"))?;

        Self::send_interrupt(&mut child)?;

        let start = Instant::now();
        loop {
            if let Some(status) = child
                .try_wait()
                .map_err(|error| anyhow::anyhow!("Server process waiting: {error}"))?
            {
                return Ok(status);
            }
            if start.elapsed() >= Self::SHUTDOWN_TIMEOUT {
                let _ = child.kill();
                let _ = child.wait();
                anyhow::bail!(
                    "The server has not stopped within {}s after the interrupt",
                    Self::SHUTDOWN_TIMEOUT.as_secs()
                );
            }
            std::thread::sleep(Self::POLLING_PERIOD);
        }
    }

    #[cfg(unix)]
    fn send_interrupt(child: &mut Child) -> anyhow::Result<()> {
        let pid = libc::pid_t::try_from(child.id())
            .map_err(|error| anyhow::anyhow!("Server process identifier: {error}"))?;
        // SAFETY: the child has not been reaped yet, so the identifier is still ours.
        let result = unsafe { libc::kill(pid, libc::SIGINT) };
        if result != 0 {
            anyhow::bail!(
                "Server process interrupting: {}",
                std::io::Error::last_os_error()
            );
        }
        Ok(())
    }

    #[cfg(not(unix))]
    fn send_interrupt(child: &mut Child) -> anyhow::Result<()> {
        child
            .kill()
            .map_err(|error| anyhow::anyhow!("Server process killing: {error}"))
    }
}

impl Drop for ServeProcess {
    fn drop(&mut self) {
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}
