use core::fmt;

use crate::uart::Uart;
#[cfg(any(feature = "soft_serial", feature = "alt_soft_serial"))]
use crate::uart::SoftUart;

/// The kind of backend a [`Port`] dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortKind {
	/// A hardware UART.
	Hardware,

	/// A software UART bit-banged from pin change interrupts.
	#[cfg(feature = "soft_serial")]
	SoftSerial,

	/// A software UART driven by the input capture unit of a timer.
	#[cfg(feature = "alt_soft_serial")]
	AltSoftSerial,
}

enum Backend<'a> {
	Hardware(&'a mut dyn Uart),
	#[cfg(feature = "soft_serial")]
	SoftSerial(&'a mut dyn SoftUart),
	#[cfg(feature = "alt_soft_serial")]
	AltSoftSerial(&'a mut dyn SoftUart),
}

/// A serial port with the backend chosen at construction.
///
/// A `Port` borrows one concrete UART driver for its whole lifetime and forwards
/// every operation to it.
/// Operations that only make sense for software UARTs report a fixed answer on
/// hardware backends instead of touching the driver.
///
/// Dropping the port closes the backend.
pub struct Port<'a> {
	backend: Backend<'a>,
}

impl<'a> Port<'a> {
	/// Make a port that dispatches to a hardware UART.
	pub fn hardware(uart: &'a mut dyn Uart) -> Self {
		Self {
			backend: Backend::Hardware(uart),
		}
	}

	/// Make a port that dispatches to a pin change interrupt driven software UART.
	#[cfg(feature = "soft_serial")]
	pub fn soft_serial(uart: &'a mut dyn SoftUart) -> Self {
		Self {
			backend: Backend::SoftSerial(uart),
		}
	}

	/// Make a port that dispatches to an input capture driven software UART.
	#[cfg(feature = "alt_soft_serial")]
	pub fn alt_soft_serial(uart: &'a mut dyn SoftUart) -> Self {
		Self {
			backend: Backend::AltSoftSerial(uart),
		}
	}

	/// Get the kind of backend this port dispatches to.
	pub fn kind(&self) -> PortKind {
		match &self.backend {
			Backend::Hardware(_) => PortKind::Hardware,
			#[cfg(feature = "soft_serial")]
			Backend::SoftSerial(_) => PortKind::SoftSerial,
			#[cfg(feature = "alt_soft_serial")]
			Backend::AltSoftSerial(_) => PortKind::AltSoftSerial,
		}
	}

	/// Open the backend at the given baud rate.
	pub fn open(&mut self, baud: u32) {
		trace!("opening {:?} backend at {} baud", self.kind(), baud);
		match &mut self.backend {
			Backend::Hardware(uart) => uart.open(baud),
			#[cfg(feature = "soft_serial")]
			Backend::SoftSerial(uart) => uart.open(baud),
			#[cfg(feature = "alt_soft_serial")]
			Backend::AltSoftSerial(uart) => uart.open(baud),
		}
	}

	/// Close the backend.
	///
	/// The port also closes the backend when it is dropped,
	/// so calling this is only needed to release the line early.
	pub fn close(&mut self) {
		trace!("closing {:?} backend", self.kind());
		match &mut self.backend {
			Backend::Hardware(uart) => uart.close(),
			#[cfg(feature = "soft_serial")]
			Backend::SoftSerial(uart) => uart.close(),
			#[cfg(feature = "alt_soft_serial")]
			Backend::AltSoftSerial(uart) => uart.close(),
		}
	}

	/// Take the next received byte, if one is waiting.
	pub fn read(&mut self) -> Option<u8> {
		match &mut self.backend {
			Backend::Hardware(uart) => uart.read(),
			#[cfg(feature = "soft_serial")]
			Backend::SoftSerial(uart) => uart.read(),
			#[cfg(feature = "alt_soft_serial")]
			Backend::AltSoftSerial(uart) => uart.read(),
		}
	}

	/// Look at the next received byte without taking it.
	///
	/// A following [`Self::read`] returns the same byte.
	pub fn peek(&mut self) -> Option<u8> {
		match &mut self.backend {
			Backend::Hardware(uart) => uart.peek(),
			#[cfg(feature = "soft_serial")]
			Backend::SoftSerial(uart) => uart.peek(),
			#[cfg(feature = "alt_soft_serial")]
			Backend::AltSoftSerial(uart) => uart.peek(),
		}
	}

	/// Get the number of received bytes that can be taken without blocking.
	pub fn available(&mut self) -> usize {
		match &mut self.backend {
			Backend::Hardware(uart) => uart.available(),
			#[cfg(feature = "soft_serial")]
			Backend::SoftSerial(uart) => uart.available(),
			#[cfg(feature = "alt_soft_serial")]
			Backend::AltSoftSerial(uart) => uart.available(),
		}
	}

	/// Write a buffer of raw bytes.
	///
	/// Returns the number of bytes accepted by the backend.
	pub fn write(&mut self, data: &[u8]) -> usize {
		match &mut self.backend {
			Backend::Hardware(uart) => uart.write(data),
			#[cfg(feature = "soft_serial")]
			Backend::SoftSerial(uart) => uart.write(data),
			#[cfg(feature = "alt_soft_serial")]
			Backend::AltSoftSerial(uart) => uart.write(data),
		}
	}

	/// Write a single byte.
	///
	/// Equivalent to [`Self::write`] with a one byte buffer.
	pub fn write_byte(&mut self, byte: u8) -> usize {
		self.write(&[byte])
	}

	/// Write the UTF-8 bytes of a string.
	///
	/// Returns the number of bytes accepted by the backend.
	pub fn print(&mut self, text: &str) -> usize {
		self.write(text.as_bytes())
	}

	/// Discard all received bytes that have not been read yet.
	///
	/// Does nothing on a hardware backend.
	pub fn flush_input(&mut self) {
		match &mut self.backend {
			Backend::Hardware(_) => (),
			#[cfg(feature = "soft_serial")]
			Backend::SoftSerial(uart) => uart.flush_input(),
			#[cfg(feature = "alt_soft_serial")]
			Backend::AltSoftSerial(uart) => uart.flush_input(),
		}
	}

	/// Wait until all queued bytes have been transmitted.
	///
	/// Does nothing on a hardware backend.
	pub fn flush_output(&mut self) {
		match &mut self.backend {
			Backend::Hardware(_) => (),
			#[cfg(feature = "soft_serial")]
			Backend::SoftSerial(uart) => uart.flush_output(),
			#[cfg(feature = "alt_soft_serial")]
			Backend::AltSoftSerial(uart) => uart.flush_output(),
		}
	}

	/// Make the backend the active receiver.
	///
	/// Only one software UART can sample the line at a time,
	/// so listening here steals the receive interrupt from any other software UART.
	/// Returns false if the backend already was the active receiver.
	///
	/// Hardware backends always receive and report true.
	pub fn listen(&mut self) -> bool {
		let claimed = match &mut self.backend {
			Backend::Hardware(_) => true,
			#[cfg(feature = "soft_serial")]
			Backend::SoftSerial(uart) => uart.listen(),
			#[cfg(feature = "alt_soft_serial")]
			Backend::AltSoftSerial(uart) => uart.listen(),
		};
		trace!("{:?} backend claimed the line: {}", self.kind(), claimed);
		claimed
	}

	/// Check if the backend is the active receiver.
	///
	/// Hardware backends report false.
	pub fn is_listening(&self) -> bool {
		match &self.backend {
			Backend::Hardware(_) => false,
			#[cfg(feature = "soft_serial")]
			Backend::SoftSerial(uart) => uart.is_listening(),
			#[cfg(feature = "alt_soft_serial")]
			Backend::AltSoftSerial(uart) => uart.is_listening(),
		}
	}

	/// Check if received bytes were dropped because the receive buffer was full.
	///
	/// Reading the flag clears it.
	/// Hardware backends report false.
	pub fn has_overflowed(&mut self) -> bool {
		match &mut self.backend {
			Backend::Hardware(_) => false,
			#[cfg(feature = "soft_serial")]
			Backend::SoftSerial(uart) => uart.has_overflowed(),
			#[cfg(feature = "alt_soft_serial")]
			Backend::AltSoftSerial(uart) => uart.has_overflowed(),
		}
	}

	/// Get the version of the backing driver.
	///
	/// Hardware backends report 0.
	pub fn library_version(&self) -> u32 {
		match &self.backend {
			Backend::Hardware(_) => 0,
			#[cfg(feature = "soft_serial")]
			Backend::SoftSerial(uart) => uart.library_version(),
			#[cfg(feature = "alt_soft_serial")]
			Backend::AltSoftSerial(uart) => uart.library_version(),
		}
	}
}

impl Drop for Port<'_> {
	fn drop(&mut self) {
		self.close();
	}
}

impl fmt::Write for Port<'_> {
	fn write_str(&mut self, s: &str) -> fmt::Result {
		if self.print(s) == s.len() {
			Ok(())
		} else {
			Err(fmt::Error)
		}
	}
}

impl fmt::Debug for Port<'_> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_struct("Port")
			.field("kind", &self.kind())
			.finish_non_exhaustive()
	}
}
