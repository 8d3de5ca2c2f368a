use crate::Result;

/// Command/response exchange with the modem.
///
/// The transport owns everything below the command level: opening the
/// channel, framing the command string, collecting response lines and
/// detecting the terminal status line. Drivers stay synchronous and issue
/// one exchange per operation; serialization of concurrent access, timing
/// and retries are the transport's concern.
pub trait Transport {
    /// Send a single command and return the response payload lines.
    ///
    /// The returned lines exclude the terminal status line. A rejected
    /// command or a link failure is reported as an error.
    fn send(&mut self, command: &str) -> Result<Vec<String>>;
}
