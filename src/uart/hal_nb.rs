//! Software UART adapter for `embedded-hal-nb` serial drivers.

use embedded_hal_nb::serial::{Read, Write};
use heapless::Deque;

use crate::uart::{SoftUart, Uart};

/// Adapter that turns an [`embedded_hal_nb::serial`] driver into a software UART backend.
///
/// Every receive operation first pumps the driver,
/// moving all bytes it has ready into an internal queue of `CAP` bytes.
/// Bytes that arrive while the queue is full are dropped and raise the overflow flag,
/// which [`SoftUart::has_overflowed`] reports and clears.
pub struct BufferedUart<T, const CAP: usize = 16> {
	inner: T,
	rx: Deque<u8, CAP>,
	overflow: bool,
}

impl<T, const CAP: usize> BufferedUart<T, CAP>
where
	T: Read + Write,
{
	/// Wrap a serial driver.
	pub fn new(inner: T) -> Self {
		Self {
			inner,
			rx: Deque::new(),
			overflow: false,
		}
	}

	/// Consume the adapter and get the wrapped driver back.
	pub fn into_inner(self) -> T {
		self.inner
	}

	/// Move every byte the driver has ready into the receive queue.
	fn pump(&mut self) {
		loop {
			match self.inner.read() {
				Ok(byte) => {
					if self.rx.push_back(byte).is_err() {
						self.overflow = true;
					}
				},
				Err(nb::Error::WouldBlock) => break,
				Err(nb::Error::Other(_e)) => {
					debug!("failed to read from serial driver: {:?}", _e);
					break;
				},
			}
		}
	}
}

impl<T, const CAP: usize> Uart for BufferedUart<T, CAP>
where
	T: Read + Write,
{
	/// Does nothing, the wrapped driver owns the line settings.
	fn open(&mut self, _baud: u32) {}

	fn close(&mut self) {
		self.rx.clear();
		self.overflow = false;
		if let Err(_e) = nb::block!(self.inner.flush()) {
			debug!("failed to flush serial driver: {:?}", _e);
		}
	}

	fn read(&mut self) -> Option<u8> {
		self.pump();
		self.rx.pop_front()
	}

	fn peek(&mut self) -> Option<u8> {
		self.pump();
		self.rx.front().copied()
	}

	fn available(&mut self) -> usize {
		self.pump();
		self.rx.len()
	}

	fn write(&mut self, data: &[u8]) -> usize {
		for (sent, &byte) in data.iter().enumerate() {
			if let Err(_e) = nb::block!(self.inner.write(byte)) {
				debug!("failed to write to serial driver: {:?}", _e);
				return sent;
			}
		}
		data.len()
	}
}

impl<T, const CAP: usize> SoftUart for BufferedUart<T, CAP>
where
	T: Read + Write,
{
	fn flush_input(&mut self) {
		self.rx.clear();
		while self.inner.read().is_ok() {}
	}

	fn flush_output(&mut self) {
		if let Err(_e) = nb::block!(self.inner.flush()) {
			debug!("failed to flush serial driver: {:?}", _e);
		}
	}

	/// The adapter has no other receiver to take the line from, so it reports
	/// that it already was the active receiver.
	fn listen(&mut self) -> bool {
		false
	}

	fn is_listening(&self) -> bool {
		true
	}

	fn has_overflowed(&mut self) -> bool {
		self.pump();
		core::mem::take(&mut self.overflow)
	}
}
