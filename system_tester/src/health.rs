//!
//! The development server readiness check.
//!

use std::time::Duration;

///
/// The first HTTP response of a ready server.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// The status code.
    pub status: u16,
    /// The body text.
    pub body: String,
}

///
/// The development server readiness check.
///
/// The server is considered ready as soon as it answers with any HTTP response.
///
#[derive(Debug, Clone)]
pub struct HealthCheck {
    /// The HTTP client.
    client: reqwest::blocking::Client,
    /// The maximum number of connection attempts.
    attempts: usize,
    /// The pause after a failed attempt.
    backoff: Duration,
}

impl HealthCheck {
    /// The default number of connection attempts.
    pub const DEFAULT_ATTEMPTS: usize = 5;

    /// The default pause after a failed attempt.
    pub const DEFAULT_BACKOFF: Duration = Duration::from_secs(3);

    /// The request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

    ///
    /// A shortcut constructor.
    ///
    pub fn new(attempts: usize, backoff: Duration) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Self::REQUEST_TIMEOUT)
            .build()
            .map_err(|error| anyhow::anyhow!("HTTP client building: {error}"))?;
        Ok(Self {
            client,
            attempts: attempts.max(1),
            backoff,
        })
    }

    ///
    /// Requests `url` until the server answers or the attempts are exhausted.
    ///
    pub fn wait(&self, url: &str) -> anyhow::Result<Response> {
        let mut last_error = None;
        for attempt in 1..=self.attempts {
            match self.client.get(url).send() {
                Ok(response) => {
                    let status = response.status().as_u16();
                    let body = response
                        .text()
                        .map_err(|error| anyhow::anyhow!("Response {url} reading: {error}"))?;
                    return Ok(Response { status, body });
                }
                Err(error) => {
                    last_error = Some(error);
                    if attempt < self.attempts {
                        std::thread::sleep(self.backoff);
                    }
                }
            }
        }

        anyhow::bail!(
            "Failed to connect to the server at {url} after {} attempts: {}",
            self.attempts,
            last_error
                .map(|error| error.to_string())
                .unwrap_or_default()
        )
    }
}

impl Default for HealthCheck {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ATTEMPTS, Self::DEFAULT_BACKOFF).expect("Always valid")
    }
}

#[cfg(test)]
mod tests {
    use std::io::Read;
    use std::io::Write;
    use std::net::TcpListener;
    use std::time::Duration;
    use std::time::Instant;

    use super::HealthCheck;

    #[test]
    fn ready() {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Binding");
        let address = listener.local_addr().expect("Local address");
        let server = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("Accepting");
            let mut buffer = [0u8; 1024];
            let _ = stream.read(&mut buffer);
            let body = "<h1>Welcome to MkDocs</h1>";
            write!(
                stream,
                "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            )
            .expect("Writing");
        });

        let response = HealthCheck::new(2, Duration::from_millis(10))
            .expect("Client building")
            .wait(format!("http://{address}/").as_str())
            .expect("Server is ready");
        assert_eq!(response.status, 200);
        assert!(response.body.contains("Welcome to MkDocs"));
        server.join().expect("Server thread");
    }

    #[test]
    fn unreachable() {
        let address = {
            let listener = TcpListener::bind("127.0.0.1:0").expect("Binding");
            listener.local_addr().expect("Local address")
        };

        let start = Instant::now();
        let error = HealthCheck::new(3, Duration::from_millis(50))
            .expect("Client building")
            .wait(format!("http://{address}/").as_str())
            .expect_err("Server is down");
        assert!(error.to_string().contains("after 3 attempts"));
        assert!(start.elapsed() >= Duration::from_millis(100));
    }
}
