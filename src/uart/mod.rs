//! Backend traits implemented by the concrete UART drivers.

#[cfg(feature = "serial2")]
pub mod serial2;

#[cfg(feature = "hal_nb")]
pub mod hal_nb;

/// A byte oriented serial backend.
///
/// Implement this for anything that can move single bytes in and out of a serial line.
/// All functions are non-blocking except [`Uart::write`], which may wait for room in
/// the transmit queue.
pub trait Uart {
	/// Configure the line for the given baud rate and start communicating.
	fn open(&mut self, baud: u32);

	/// Stop communicating and release the line.
	///
	/// A [`Port`](crate::Port) closes its backend again when it is dropped,
	/// so closing an already closed backend must be harmless.
	fn close(&mut self);

	/// Take the next received byte, if one is waiting.
	fn read(&mut self) -> Option<u8>;

	/// Look at the next received byte without taking it.
	fn peek(&mut self) -> Option<u8>;

	/// Get the number of received bytes that can be taken without blocking.
	fn available(&mut self) -> usize;

	/// Queue the given bytes for transmission.
	///
	/// Returns the number of bytes accepted.
	fn write(&mut self, data: &[u8]) -> usize;
}

/// A software UART backend with control over its receive machinery.
///
/// Software UARTs sample the line from interrupts and buffer received bytes themselves,
/// so they expose operations that hardware UARTs have no use for.
/// Every function has a conservative default, so a driver only implements what it supports.
pub trait SoftUart: Uart {
	/// Discard all received bytes that have not been read yet.
	fn flush_input(&mut self) {}

	/// Wait until all queued bytes have been transmitted.
	fn flush_output(&mut self) {}

	/// Make this backend the active receiver.
	///
	/// Returns false if this backend already was the active receiver.
	fn listen(&mut self) -> bool {
		true
	}

	/// Check if this backend is the active receiver.
	fn is_listening(&self) -> bool {
		false
	}

	/// Check if received bytes were dropped because the receive buffer was full.
	///
	/// Reading the flag clears it.
	fn has_overflowed(&mut self) -> bool {
		false
	}

	/// Get the version of the backing driver, or 0 if it does not report one.
	fn library_version(&self) -> u32 {
		0
	}
}
