//! Hardware backend using the `serial2` crate.

use std::fmt::Formatter;
use std::path::Path;
use std::time::Duration;

use crate::uart::Uart;

/// The read timeout used when polling the port for a single byte.
const POLL_TIMEOUT: Duration = Duration::from_millis(1);

/// A hardware UART backed by an operating system serial port.
///
/// The operating system does not report how many bytes its receive buffer holds,
/// so [`Uart::peek`] and [`Uart::available`] poll the port for a single byte
/// and park it in a lookahead slot until the next read.
/// As a result, [`Uart::available`] never reports more than one byte.
pub struct SystemUart {
	port: serial2::SerialPort,
	lookahead: Option<u8>,
}

impl SystemUart {
	/// Open an operating system serial port at the given baud rate.
	pub fn open(path: impl AsRef<Path>, baud: u32) -> std::io::Result<Self> {
		let mut port = serial2::SerialPort::open(path, baud)?;
		port.set_read_timeout(POLL_TIMEOUT)?;
		Ok(Self {
			port,
			lookahead: None,
		})
	}

	/// Wrap an already configured serial port.
	///
	/// The read timeout of the port determines how long a poll for one byte may take.
	pub fn new(port: serial2::SerialPort) -> Self {
		Self {
			port,
			lookahead: None,
		}
	}

	/// Consume the backend and get the wrapped serial port back.
	pub fn into_inner(self) -> serial2::SerialPort {
		self.port
	}

	fn poll_byte(&mut self) -> Option<u8> {
		if self.lookahead.is_none() {
			let mut byte = [0];
			self.lookahead = match self.port.read(&mut byte) {
				Ok(0) => None,
				Ok(_) => Some(byte[0]),
				Err(e) if e.kind() == std::io::ErrorKind::TimedOut => None,
				Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => None,
				Err(_e) => {
					debug!("failed to read from serial port: {}", _e);
					None
				},
			};
		}
		self.lookahead
	}
}

impl Uart for SystemUart {
	fn open(&mut self, baud: u32) {
		if let Err(_e) = set_baud_rate(&mut self.port, baud) {
			debug!("failed to set baud rate to {}: {}", baud, _e);
		}
	}

	fn close(&mut self) {
		self.lookahead = None;
		if let Err(_e) = self.port.flush() {
			debug!("failed to flush serial port: {}", _e);
		}
		if let Err(_e) = self.port.discard_input_buffer() {
			debug!("failed to discard serial port input buffer: {}", _e);
		}
	}

	fn read(&mut self) -> Option<u8> {
		self.poll_byte();
		self.lookahead.take()
	}

	fn peek(&mut self) -> Option<u8> {
		self.poll_byte()
	}

	fn available(&mut self) -> usize {
		self.poll_byte();
		usize::from(self.lookahead.is_some())
	}

	fn write(&mut self, data: &[u8]) -> usize {
		match self.port.write_all(data) {
			Ok(()) => data.len(),
			Err(_e) => {
				debug!("failed to write to serial port: {}", _e);
				0
			},
		}
	}
}

fn set_baud_rate(port: &mut serial2::SerialPort, baud_rate: u32) -> std::io::Result<()> {
	let mut settings = port.get_configuration()?;
	settings.set_baud_rate(baud_rate)?;
	port.set_configuration(&settings)?;
	Ok(())
}

impl core::fmt::Debug for SystemUart {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		#[derive(Debug)]
		#[allow(dead_code)] // Dead code analysis ignores derive debug impls, but that is the whole point of this struct.
		enum Raw {
			#[cfg(unix)]
			Fd(std::os::unix::io::RawFd),
			#[cfg(windows)]
			Handle(std::os::windows::io::RawHandle),
		}

		#[cfg(unix)]
		let raw = {
			use std::os::unix::io::AsRawFd;
			Raw::Fd(self.port.as_raw_fd())
		};
		#[cfg(windows)]
		let raw = {
			use std::os::windows::io::AsRawHandle;
			Raw::Handle(self.port.as_raw_handle())
		};
		write!(f, "SystemUart({:?})", raw)
	}
}
