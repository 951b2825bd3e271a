//!
//! The load engine.
//!

pub mod report;
pub mod worker;

use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;
use std::time::Instant;

use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::shape::target::Target;
use crate::shape::Shape;
use crate::statistics::Statistics;
use crate::user::User;

use self::report::Report;
use self::worker::Context;
use self::worker::Worker;

///
/// Creates the virtual user with the given spawn index.
///
pub type UserFactory = Box<dyn Fn(usize) -> Box<dyn User> + Send + Sync>;

///
/// The load engine.
///
/// Polls the traffic shape every tick and spawns or stops virtual users to
/// follow it. Spawn indices are handed out in creation order starting at zero.
///
pub struct Engine {
    /// The request context shared by workers.
    context: Context,
    /// The traffic shape.
    shape: Box<dyn Shape>,
    /// The virtual user factory.
    factory: UserFactory,
    /// The shape polling interval.
    tick_interval: Duration,
    /// The time given to stopped users to finish their in-flight requests.
    stop_grace_period: Duration,
    /// The base seed of the per-user random generators.
    seed: Option<u64>,
    /// Whether the output is suppressed.
    quiet: bool,
}

impl Engine {
    /// The default shape polling interval.
    pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

    /// The default time given to stopped users to finish.
    pub const DEFAULT_STOP_GRACE_PERIOD: Duration = Duration::from_secs(1);

    /// The polling interval of the finished users.
    const JOIN_POLL_INTERVAL: Duration = Duration::from_millis(10);

    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        client: reqwest::blocking::Client,
        base_url: reqwest::Url,
        shape: Box<dyn Shape>,
        factory: UserFactory,
        statistics: Arc<Mutex<Statistics>>,
    ) -> Self {
        Self {
            context: Context {
                client,
                base_url,
                statistics,
            },
            shape,
            factory,
            tick_interval: Self::DEFAULT_TICK_INTERVAL,
            stop_grace_period: Self::DEFAULT_STOP_GRACE_PERIOD,
            seed: None,
            quiet: false,
        }
    }

    ///
    /// Sets the shape polling interval.
    ///
    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    ///
    /// Sets the time given to stopped users to finish their in-flight requests.
    ///
    pub fn with_stop_grace_period(mut self, stop_grace_period: Duration) -> Self {
        self.stop_grace_period = stop_grace_period;
        self
    }

    ///
    /// Makes the virtual users deterministic.
    ///
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    ///
    /// Suppresses the shape change messages.
    ///
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    ///
    /// Runs the load until the shape signals the stop.
    ///
    /// The run duration ends when the shape signals the stop. Users still
    /// waiting for a response after the grace period are detached, and their
    /// outcomes are not recorded.
    ///
    pub fn run(self) -> anyhow::Result<Report> {
        let start = Instant::now();
        let mut running: Vec<Worker> = Vec::new();
        let mut stopped: Vec<Worker> = Vec::new();
        let mut spawned = 0;
        let mut peak_users = 0;
        let mut current: Option<Target> = None;

        while let Some(target) = self.shape.tick(start.elapsed()) {
            if current != Some(target) {
                if !self.quiet {
                    println!(
                        "     {} {target} after {:.1}s",
                        "Shaping".bright_green().bold(),
                        start.elapsed().as_secs_f64(),
                    );
                }
                current = Some(target);
            }

            let batch = self.batch_size(target.spawn_rate);
            if running.len() < target.users {
                for _ in 0..batch.min(target.users - running.len()) {
                    let user = (self.factory)(spawned);
                    running.push(Worker::spawn(
                        spawned,
                        user,
                        self.context.clone(),
                        self.rng(spawned),
                    )?);
                    spawned += 1;
                }
            } else if running.len() > target.users {
                for _ in 0..batch.min(running.len() - target.users) {
                    if let Some(mut worker) = running.pop() {
                        worker.stop();
                        stopped.push(worker);
                    }
                }
            }
            peak_users = peak_users.max(running.len());

            std::thread::sleep(self.tick_interval);
        }

        let elapsed = start.elapsed();
        self.context
            .statistics
            .lock()
            .expect("Sync")
            .finish(elapsed);

        for worker in running.iter_mut() {
            worker.stop();
        }
        let detached = self.join(running.into_iter().chain(stopped).collect())?;
        if detached > 0 && !self.quiet {
            println!(
                "    {} {detached} virtual users waiting for responses",
                "Detached".bright_yellow().bold(),
            );
        }

        Ok(Report {
            spawned,
            peak_users,
            elapsed,
        })
    }

    ///
    /// Joins the stopped workers until the grace period runs out.
    ///
    /// Returns the number of workers left running.
    ///
    fn join(&self, mut workers: Vec<Worker>) -> anyhow::Result<usize> {
        let deadline = Instant::now() + self.stop_grace_period;
        loop {
            let (finished, pending): (Vec<Worker>, Vec<Worker>) =
                workers.into_iter().partition(Worker::is_finished);
            for worker in finished {
                worker.join()?;
            }
            workers = pending;

            if workers.is_empty() || Instant::now() >= deadline {
                break;
            }
            std::thread::sleep(Self::JOIN_POLL_INTERVAL);
        }
        Ok(workers.len())
    }

    ///
    /// The number of users spawned or stopped per tick, at least one.
    ///
    fn batch_size(&self, spawn_rate: f64) -> usize {
        let batch = (spawn_rate * self.tick_interval.as_secs_f64()).ceil();
        if batch.is_finite() && batch >= 1.0 {
            batch as usize
        } else {
            1
        }
    }

    ///
    /// Returns the random generator of the user with the spawn index.
    ///
    fn rng(&self, index: usize) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(index as u64)),
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Read;
    use std::io::Write;
    use std::sync::Arc;
    use std::sync::Mutex;
    use std::time::Duration;
    use std::time::Instant;

    use rand::rngs::StdRng;

    use super::Engine;
    use super::UserFactory;
    use crate::shape::schedule::Schedule;
    use crate::shape::stage::Stage;
    use crate::statistics::Statistics;
    use crate::user::homepage::Homepage;
    use crate::user::step::Step;
    use crate::user::wait_time::WaitTime;
    use crate::user::User;

    struct Idle;

    impl User for Idle {
        fn next_step(&mut self, _rng: &mut StdRng) -> Step {
            Step::idle(Duration::from_secs(3600))
        }
    }

    fn serve_ok() -> reqwest::Url {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Listener binding");
        let address = listener.local_addr().expect("Listener address");
        std::thread::spawn(move || {
            for stream in listener.incoming() {
                let mut stream = match stream {
                    Ok(stream) => stream,
                    Err(_) => continue,
                };
                let mut request = Vec::new();
                let mut buffer = [0u8; 1024];
                while !request.windows(4).any(|window| window == b"\r\n\r\n") {
                    match stream.read(&mut buffer) {
                        Ok(0) | Err(_) => break,
                        Ok(size) => request.extend_from_slice(&buffer[..size]),
                    }
                }
                let _ = stream.write_all(
                    b"HTTP/1.1 200 OK\r\nContent-Length: 2\r\nConnection: close\r\n\r\nok",
                );
            }
        });
        reqwest::Url::parse(format!("http://{address}/").as_str()).expect("Valid URL")
    }

    fn serve_never() -> reqwest::Url {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Listener binding");
        let address = listener.local_addr().expect("Listener address");
        std::thread::spawn(move || {
            let mut streams = Vec::new();
            for stream in listener.incoming().flatten() {
                streams.push(stream);
            }
        });
        reqwest::Url::parse(format!("http://{address}/").as_str()).expect("Valid URL")
    }

    #[test]
    fn in_flight_requests_not_awaited() {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(1))
            .build()
            .expect("Client building");
        let factory: UserFactory = Box::new(|_| {
            Box::new(Homepage::new(WaitTime::Constant(Duration::from_millis(20))))
        });
        let shape = Schedule::new(vec![Stage::new(0.3, 2, 100.0)]).expect("Valid schedule");
        let statistics = Statistics::new(false).wrap();

        let start = Instant::now();
        let report = Engine::new(
            client,
            serve_never(),
            Box::new(shape),
            factory,
            statistics.clone(),
        )
        .with_tick_interval(Duration::from_millis(50))
        .with_stop_grace_period(Duration::from_millis(100))
        .with_quiet(true)
        .run()
        .expect("Engine run");

        assert!(start.elapsed() < Duration::from_millis(900));
        assert!(report.elapsed >= Duration::from_millis(300));
        assert!(report.elapsed < Duration::from_millis(800));

        std::thread::sleep(Duration::from_millis(1500));
        let statistics = statistics.lock().expect("Sync");
        assert!(statistics.get("/").is_none());
    }

    #[test]
    fn spawn_indices_in_creation_order() {
        let indices = Arc::new(Mutex::new(Vec::new()));
        let recorded = indices.clone();
        let factory: UserFactory = Box::new(move |index| {
            recorded.lock().expect("Sync").push(index);
            Box::new(Idle)
        });
        let shape = Schedule::new(vec![Stage::new(1.0, 5, 2.0)]).expect("Valid schedule");
        let statistics = Statistics::new(false).wrap();

        let report = Engine::new(
            reqwest::blocking::Client::new(),
            reqwest::Url::parse("http://127.0.0.1:9/").expect("Valid URL"),
            Box::new(shape),
            factory,
            statistics,
        )
        .with_tick_interval(Duration::from_millis(50))
        .with_quiet(true)
        .run()
        .expect("Engine run");

        assert_eq!(report.spawned, 5);
        assert_eq!(report.peak_users, 5);
        assert_eq!(
            *indices.lock().expect("Sync"),
            (0..5).collect::<Vec<usize>>()
        );
    }

    #[test]
    fn scales_down() {
        let factory: UserFactory = Box::new(|_| Box::new(Idle));
        let shape = Schedule::new(vec![Stage::new(0.2, 4, 100.0), Stage::new(0.4, 1, 100.0)])
            .expect("Valid schedule");

        let report = Engine::new(
            reqwest::blocking::Client::new(),
            reqwest::Url::parse("http://127.0.0.1:9/").expect("Valid URL"),
            Box::new(shape),
            factory,
            Statistics::new(false).wrap(),
        )
        .with_tick_interval(Duration::from_millis(20))
        .with_quiet(true)
        .run()
        .expect("Engine run");

        assert_eq!(report.spawned, 4);
        assert_eq!(report.peak_users, 4);
        assert!(report.elapsed >= Duration::from_millis(400));
    }

    #[test]
    fn requests_recorded() {
        let base_url = serve_ok();
        let factory: UserFactory = Box::new(|_| {
            Box::new(Homepage::new(WaitTime::Constant(Duration::from_millis(20))))
        });
        let shape = Schedule::new(vec![Stage::new(0.5, 2, 100.0)]).expect("Valid schedule");
        let statistics = Statistics::new(false).wrap();

        Engine::new(
            reqwest::blocking::Client::new(),
            base_url,
            Box::new(shape),
            factory,
            statistics.clone(),
        )
        .with_tick_interval(Duration::from_millis(50))
        .with_seed(Some(0))
        .with_quiet(true)
        .run()
        .expect("Engine run");

        let statistics = Statistics::unwrap_arc(statistics).expect("Exclusive statistics");
        let entry = statistics.get("/").expect("Homepage requested");
        assert!(entry.requests > 0);
        assert_eq!(entry.failures, 0);
    }
}
