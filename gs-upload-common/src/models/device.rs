/// Anything that can report a device serial, e.g. an attached test device.
pub trait Device {
    fn serial(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerialDevice {
    pub serial: String,
}

impl SerialDevice {
    pub fn new(serial: impl Into<String>) -> Self {
        Self {
            serial: serial.into(),
        }
    }
}

impl Device for SerialDevice {
    fn serial(&self) -> &str {
        &self.serial
    }
}
