use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::time::Duration;

use navlink::transport::Transport;
use navlink::{Error, Result};

/// Read deadline for a single response line.
const READ_TIMEOUT: Duration = Duration::from_secs(5);

/// AT command transport over a serial link.
///
/// Writes the command followed by CRLF and collects response lines until
/// the modem's terminal status line: `OK` completes the exchange, an
/// `ERROR` style line reports a rejected command. Command echo and blank
/// lines are dropped. No retries, no command queuing.
pub struct SerialTransport {
    reader: BufReader<Box<dyn serialport::SerialPort>>,
}

impl SerialTransport {
    /// Open the serial device.
    pub fn open(path: &Path, baud_rate: u32) -> Result<Self> {
        let port = serialport::new(path.to_string_lossy(), baud_rate)
            .timeout(READ_TIMEOUT)
            .open()
            .map_err(std::io::Error::from)?;

        Ok(Self {
            reader: BufReader::new(port),
        })
    }
}

impl Transport for SerialTransport {
    fn send(&mut self, command: &str) -> Result<Vec<String>> {
        log::trace!("Send command: {}", command);

        let port = self.reader.get_mut();
        port.write_all(command.as_bytes())?;
        port.write_all(b"\r\n")?;
        port.flush()?;

        let mut response = vec![];

        loop {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(Error::Io(std::io::ErrorKind::UnexpectedEof.into()));
            }

            let line = line.trim();
            if line.is_empty() || line == command {
                continue;
            }

            log::trace!("Response line: {}", line);

            if line == "OK" {
                return Ok(response);
            }
            if line == "ERROR" || line.starts_with("+CME ERROR") || line.starts_with("+CMS ERROR")
            {
                return Err(Error::Command(line.to_owned()));
            }

            response.push(line.to_owned());
        }
    }
}
