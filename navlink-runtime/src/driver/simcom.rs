use crate::core::PositionFix;
use crate::transport::Transport;
use crate::Result;

use super::Cgnsinf;

const GNSS_POWER_ON: &str = "AT+CGNSPWR=1";
const GNSS_POWER_OFF: &str = "AT+CGNSPWR=0";
const GNSS_TRACKING_ON: &str = "AT+CGNSTST=1";
const GNSS_TRACKING_OFF: &str = "AT+CGNSTST=0";
const GNSS_FIX_QUERY: &str = "AT+CGNSINF";

/// GNSS subsystem driver for SIMCom SIM800/SIM868 family modems.
///
/// Issues power control, tracking control and fix query commands over the
/// transport and decodes fix reports with [`Cgnsinf`]. The driver keeps no
/// state between calls; each operation is one command/response exchange.
pub struct SimcomGnss<T> {
    transport: T,
    parser: Cgnsinf,
}

impl<T: Transport> SimcomGnss<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            parser: Cgnsinf,
        }
    }

    /// Power on the GNSS engine.
    pub fn enable(&mut self) -> Result<()> {
        log::debug!("Power on GNSS engine");

        self.transport.send(GNSS_POWER_ON).map(|_| ())
    }

    /// Power off the GNSS engine.
    pub fn disable(&mut self) -> Result<()> {
        log::debug!("Power off GNSS engine");

        self.transport.send(GNSS_POWER_OFF).map(|_| ())
    }

    /// Start forwarding tracking data to the data port.
    pub fn enable_tracking(&mut self) -> Result<()> {
        log::debug!("Enable tracking data output");

        self.transport.send(GNSS_TRACKING_ON).map(|_| ())
    }

    /// Stop forwarding tracking data to the data port.
    pub fn disable_tracking(&mut self) -> Result<()> {
        log::debug!("Disable tracking data output");

        self.transport.send(GNSS_TRACKING_OFF).map(|_| ())
    }

    /// Query the receiver for its current fix.
    ///
    /// Scans the response for the first structurally valid fix report line
    /// and decodes it. Returns `Ok(None)` when no such line is present,
    /// which is a normal outcome when the receiver is powered down or the
    /// command is unsupported.
    pub fn query_fix(&mut self) -> Result<Option<PositionFix>> {
        let response = self.transport.send(GNSS_FIX_QUERY)?;

        Ok(response.iter().find_map(|line| self.parser.decode(line)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    struct MockTransport {
        sent: Vec<String>,
        response: Result<Vec<String>>,
    }

    impl MockTransport {
        fn replying(lines: &[&str]) -> Self {
            Self {
                sent: vec![],
                response: Ok(lines.iter().map(|s| s.to_string()).collect()),
            }
        }

        fn failing(status: &str) -> Self {
            Self {
                sent: vec![],
                response: Err(Error::Command(status.to_owned())),
            }
        }
    }

    impl Transport for MockTransport {
        fn send(&mut self, command: &str) -> Result<Vec<String>> {
            self.sent.push(command.to_owned());

            match &self.response {
                Ok(lines) => Ok(lines.clone()),
                Err(Error::Command(status)) => Err(Error::Command(status.clone())),
                Err(Error::Io(e)) => Err(Error::Io(std::io::Error::from(e.kind()))),
            }
        }
    }

    #[test]
    fn power_commands() {
        let mut driver = SimcomGnss::new(MockTransport::replying(&[]));

        driver.enable().unwrap();
        driver.disable().unwrap();

        assert_eq!(driver.transport.sent, ["AT+CGNSPWR=1", "AT+CGNSPWR=0"]);
    }

    #[test]
    fn tracking_commands() {
        let mut driver = SimcomGnss::new(MockTransport::replying(&[]));

        driver.enable_tracking().unwrap();
        driver.disable_tracking().unwrap();

        assert_eq!(driver.transport.sent, ["AT+CGNSTST=1", "AT+CGNSTST=0"]);
    }

    #[test]
    fn query_fix_picks_report_line() {
        let mut driver = SimcomGnss::new(MockTransport::replying(&[
            "+CPIN: READY",
            "+CGNSINF: 1,1,20230101120000.000,31.230000,121.470000,10.0,0.0,0.0,,,1.2,1.0,0.8,,5,8,,,,45.0,",
            "+CSQ: 24,0",
        ]));

        let fix = driver.query_fix().unwrap().unwrap();

        assert_eq!(driver.transport.sent, ["AT+CGNSINF"]);
        assert_eq!(fix.latitude, Some(31.23));
        assert_eq!(fix.longitude, Some(121.47));
        assert_eq!(fix.signal, Some(45.0));
    }

    #[test]
    fn query_fix_without_report_line() {
        let mut driver = SimcomGnss::new(MockTransport::replying(&["+CPIN: READY"]));

        assert_eq!(driver.query_fix().unwrap(), None);
    }

    #[test]
    fn query_fix_forwards_transport_failure() {
        let mut driver = SimcomGnss::new(MockTransport::failing("+CME ERROR: 100"));

        assert!(driver.query_fix().is_err());
    }
}
