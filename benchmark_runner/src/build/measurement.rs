//!
//! The single build run measurement.
//!

use std::io::Read;
use std::process::Command;
use std::process::Stdio;
use std::time::Duration;
use std::time::Instant;

use sysinfo::Pid;
use sysinfo::ProcessRefreshKind;
use sysinfo::ProcessesToUpdate;
use sysinfo::System;

///
/// The single build run measurement.
///
#[derive(Debug, Clone)]
pub struct Measurement {
    /// The wall-clock duration.
    pub elapsed: Duration,
    /// The peak resident set size of the build process, in bytes.
    pub peak_memory_bytes: u64,
    /// Whether the process exited with zero.
    pub success: bool,
    /// The error output.
    pub stderr: String,
}

impl Measurement {
    /// The resident set size sampling period.
    pub const SAMPLING_PERIOD: Duration = Duration::from_millis(10);

    ///
    /// Runs `command` to completion, sampling its memory usage.
    ///
    /// The standard output is discarded and the error output is captured.
    ///
    pub fn measure(command: &mut Command) -> anyhow::Result<Self> {
        command.stdin(Stdio::null());
        command.stdout(Stdio::null());
        command.stderr(Stdio::piped());

        let start = Instant::now();
        let mut child = command
            .spawn()
            .map_err(|error| anyhow::anyhow!("Build subprocess {command:?} spawning: {error}"))?;

        let mut stderr_pipe = child
            .stderr
            .take()
            .ok_or_else(|| anyhow::anyhow!("Build subprocess stderr getting"))?;
        let stderr_reader = std::thread::spawn(move || {
            let mut buffer = Vec::new();
            let _ = stderr_pipe.read_to_end(&mut buffer);
            String::from_utf8_lossy(buffer.as_slice()).into_owned()
        });

        let pid = Pid::from_u32(child.id());
        let mut system = System::new();
        let mut peak_memory_bytes = 0;
        let status = loop {
            system.refresh_processes_specifics(
                ProcessesToUpdate::Some(&[pid]),
                true,
                ProcessRefreshKind::new().with_memory(),
            );
            if let Some(process) = system.process(pid) {
                peak_memory_bytes = peak_memory_bytes.max(process.memory());
            }

            match child
                .try_wait()
                .map_err(|error| anyhow::anyhow!("Build subprocess waiting: {error}"))?
            {
                Some(status) => break status,
                None => std::thread::sleep(Self::SAMPLING_PERIOD),
            }
        };
        let elapsed = start.elapsed();

        let stderr = stderr_reader
            .join()
            .map_err(|_| anyhow::anyhow!("Build subprocess stderr reader panicked"))?;

        Ok(Self {
            elapsed,
            peak_memory_bytes,
            success: status.success(),
            stderr,
        })
    }
}
