use navlink::{Configurable, GlobalConfig};

#[derive(Clone, Debug)]
pub struct GnssConfig {
    /// Serial device.
    pub device: std::path::PathBuf,
    /// Serial baud rate.
    pub baud_rate: u32,
    /// Fix poll interval in seconds.
    pub interval: u64,
    /// Global configuration.
    pub global: GlobalConfig,
}

impl Configurable for GnssConfig {
    fn global(&self) -> &GlobalConfig {
        &self.global
    }
}
