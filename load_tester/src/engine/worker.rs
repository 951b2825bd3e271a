//!
//! The virtual user worker thread.
//!

use std::sync::mpsc;
use std::sync::Arc;
use std::sync::Mutex;
use std::thread::JoinHandle;
use std::time::Instant;

use rand::rngs::StdRng;

use crate::statistics::Statistics;
use crate::user::User;

///
/// The virtual user worker thread.
///
/// Dropping the stop sender wakes the worker from any wait and ends its loop.
///
#[derive(Debug)]
pub struct Worker {
    /// The spawn index of the user.
    index: usize,
    /// The stop signal sender.
    stop: Option<mpsc::Sender<()>>,
    /// The thread handle.
    handle: JoinHandle<()>,
}

///
/// The shared request context of all workers.
///
#[derive(Debug, Clone)]
pub struct Context {
    /// The HTTP client.
    pub client: reqwest::blocking::Client,
    /// The target host.
    pub base_url: reqwest::Url,
    /// The request statistics.
    pub statistics: Arc<Mutex<Statistics>>,
}

impl Worker {
    ///
    /// Starts the user loop on a new thread.
    ///
    pub fn spawn(
        index: usize,
        mut user: Box<dyn User>,
        context: Context,
        mut rng: StdRng,
    ) -> anyhow::Result<Self> {
        let (sender, receiver) = mpsc::channel::<()>();

        let handle = std::thread::Builder::new()
            .name(format!("user-{index}"))
            .spawn(move || loop {
                if !matches!(receiver.try_recv(), Err(mpsc::TryRecvError::Empty)) {
                    break;
                }

                let step = user.next_step(&mut rng);
                if let Some(path) = step.path.as_deref() {
                    Self::request(&context, path);
                }

                match receiver.recv_timeout(step.wait) {
                    Err(mpsc::RecvTimeoutError::Timeout) => continue,
                    _ => break,
                }
            })
            .map_err(|error| anyhow::anyhow!("Virtual user #{index} spawning: {error}"))?;

        Ok(Self {
            index,
            stop: Some(sender),
            handle,
        })
    }

    ///
    /// Signals the worker to stop after its current request.
    ///
    pub fn stop(&mut self) {
        self.stop.take();
    }

    ///
    /// Whether the worker thread has finished.
    ///
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    ///
    /// Waits for the worker thread to finish.
    ///
    pub fn join(mut self) -> anyhow::Result<()> {
        self.stop();
        self.handle
            .join()
            .map_err(|_| anyhow::anyhow!("Virtual user #{} panicked", self.index))
    }

    ///
    /// Performs the GET request and records its outcome.
    ///
    fn request(context: &Context, path: &str) {
        let start = Instant::now();
        let outcome = Self::get(context, path);
        let latency = start.elapsed();

        context
            .statistics
            .lock()
            .expect("Sync")
            .record(path, latency, outcome);
    }

    ///
    /// Downloads the page, returning the response status code.
    ///
    fn get(context: &Context, path: &str) -> Result<u16, String> {
        let url = context
            .base_url
            .join(path)
            .map_err(|error| error.to_string())?;
        let response = context
            .client
            .get(url)
            .send()
            .map_err(|error| error.to_string())?;
        let status = response.status().as_u16();
        response.bytes().map_err(|error| error.to_string())?;
        Ok(status)
    }
}
