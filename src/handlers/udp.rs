//! UDP handler
//!
//! Sends formatted records as UDP datagrams. The wire protocol this sink
//! targets requires one log line per datagram, so multi-line payloads are
//! split before sending.

use crate::core::{Formatter, Handler, Level, LogRecord, Result};
use crate::formatters::LineFormatter;
use std::net::UdpSocket;

/// Thin wrapper around a connected UDP socket writing one datagram per line.
/// Dropping the writer closes the socket.
pub struct UdpWriter {
    socket: UdpSocket,
}

impl UdpWriter {
    /// Bind an ephemeral local port and connect it to `host:port`.
    pub fn connect(host: &str, port: u16) -> Result<Self> {
        let socket = UdpSocket::bind("0.0.0.0:0")?;
        socket.connect((host, port))?;
        Ok(Self { socket })
    }

    pub fn write_line(&self, line: &str) -> Result<()> {
        self.socket.send(line.as_bytes())?;
        Ok(())
    }
}

pub struct UdpHandler {
    writer: UdpWriter,
    level: Level,
    formatter: Box<dyn Formatter>,
}

impl UdpHandler {
    pub fn new(writer: UdpWriter, level: Level) -> Self {
        Self {
            writer,
            level,
            formatter: Box::new(LineFormatter::new()),
        }
    }
}

impl Handler for UdpHandler {
    fn handle(&mut self, record: &LogRecord) -> Result<()> {
        let payload = self.formatter.format(record);
        for line in payload.lines() {
            self.writer.write_line(line)?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn level(&self) -> Level {
        self.level
    }

    fn set_formatter(&mut self, formatter: Box<dyn Formatter>) {
        self.formatter = formatter;
    }

    fn name(&self) -> &str {
        "udp"
    }
}
