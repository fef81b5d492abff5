//! Where report text goes.

use log::info;

/// Receives finished report blocks at info level
pub trait ReportSink {
    fn info(&mut self, message: &str);
}

/// Forwards report blocks to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl ReportSink for LogSink {
    fn info(&mut self, message: &str) {
        info!("{}", message);
    }
}

/// Keeps report blocks in memory, mostly for tests
#[derive(Debug, Default, Clone)]
pub struct BufferSink {
    pub messages: Vec<String>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything received so far, one block per line group
    pub fn contents(&self) -> String {
        self.messages.join("\n")
    }
}

impl ReportSink for BufferSink {
    fn info(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
