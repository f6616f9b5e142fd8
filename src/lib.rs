//! One serial port interface over interchangeable UART backends.
//!
//! Driver code that talks over a serial line usually should not care what
//! kind of UART it was handed: an always-on hardware peripheral, a bit-banged
//! software port or a timer-driven software port all move the same bytes.
//! This crate provides [`Port`], a facade that is bound to exactly one
//! already-constructed backend and forwards a fixed set of operations to it.
//!
//! The backend is borrowed, never owned: the caller constructs the concrete
//! UART first, lends it to the facade and keeps it alive for as long as the
//! facade exists. Which kind of backend is bound is decided once, by the
//! constructor used, and never changes afterwards.
//!
//! Operations that only make sense for software-driven ports (claiming the
//! shared receive interrupt, flushing software buffers, overflow detection)
//! answer with a benign default when the facade is bound to a hardware UART,
//! so callers can use the full surface without checking the backend kind.
//!
//! ```
//! use std::collections::VecDeque;
//! use uniserial::{Port, Uart};
//!
//! struct Loopback {
//!     queue: VecDeque<u8>,
//! }
//!
//! impl Uart for Loopback {
//!     fn open(&mut self, _baud: u32) {}
//!     fn close(&mut self) {}
//!     fn read(&mut self) -> Option<u8> {
//!         self.queue.pop_front()
//!     }
//!     fn peek(&mut self) -> Option<u8> {
//!         self.queue.front().copied()
//!     }
//!     fn available(&mut self) -> usize {
//!         self.queue.len()
//!     }
//!     fn write(&mut self, data: &[u8]) -> usize {
//!         self.queue.extend(data.iter().copied());
//!         data.len()
//!     }
//! }
//!
//! let mut uart = Loopback { queue: VecDeque::new() };
//! let mut port = Port::hardware(&mut uart);
//! port.open(9600);
//! assert_eq!(port.write(b"hi"), 2);
//! assert_eq!(port.read(), Some(b'h'));
//! assert_eq!(port.peek(), Some(b'i'));
//! ```
//!
//! # Backends
//!
//! Two ready-made backends ship with the crate:
//!
//! * [`SystemUart`] (feature `serial2`, enabled by default) wraps an
//!   operating-system serial device through the `serial2` crate, for host
//!   tools and tests.
//! * [`BufferedUart`] (feature `hal_nb`) adapts any driver exposing the
//!   `embedded-hal-nb` serial traits, for firmware targets.
//!
//! The `soft_serial` and `alt_soft_serial` features control whether the two
//! software backend kinds exist at all; builds that disable them carry only
//! the hardware code path.

#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

#[macro_use]
mod log;

mod port;
pub mod uart;

pub use port::{Port, PortKind};
pub use uart::{SoftUart, Uart};

#[cfg(feature = "serial2")]
pub use uart::serial2::SystemUart;

#[cfg(feature = "hal_nb")]
pub use uart::hal_nb::BufferedUart;
