#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;

use uniserial::{SoftUart, Uart};

/// One operation as seen by a backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
	Open(u32),
	Close,
	Read,
	Peek,
	Available,
	Write(Vec<u8>),
	FlushInput,
	FlushOutput,
	Listen,
	IsListening,
	HasOverflowed,
	LibraryVersion,
}

/// A hardware style backend that records every call it receives.
#[derive(Default)]
pub struct RecordingUart {
	calls: RefCell<Vec<Call>>,
	pub rx: VecDeque<u8>,
	pub tx: Vec<u8>,
	pub baud: Option<u32>,
	pub closed: usize,
}

impl RecordingUart {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_rx(data: &[u8]) -> Self {
		Self {
			rx: data.iter().copied().collect(),
			..Self::default()
		}
	}

	fn record(&self, call: Call) {
		self.calls.borrow_mut().push(call);
	}

	/// All calls received so far, in order.
	pub fn recorded(&self) -> Vec<Call> {
		self.calls.borrow().clone()
	}
}

impl Uart for RecordingUart {
	fn open(&mut self, baud: u32) {
		self.record(Call::Open(baud));
		self.baud = Some(baud);
	}

	fn close(&mut self) {
		self.record(Call::Close);
		self.closed += 1;
	}

	fn read(&mut self) -> Option<u8> {
		self.record(Call::Read);
		self.rx.pop_front()
	}

	fn peek(&mut self) -> Option<u8> {
		self.record(Call::Peek);
		self.rx.front().copied()
	}

	fn available(&mut self) -> usize {
		self.record(Call::Available);
		self.rx.len()
	}

	fn write(&mut self, data: &[u8]) -> usize {
		self.record(Call::Write(data.to_vec()));
		self.tx.extend_from_slice(data);
		data.len()
	}
}

/// A software style backend that records every call, including the extended surface.
#[derive(Default)]
pub struct RecordingSoftUart {
	pub uart: RecordingUart,
	pub listening: bool,
	pub overflowed: bool,
	pub version: u32,
}

impl RecordingSoftUart {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_rx(data: &[u8]) -> Self {
		Self {
			uart: RecordingUart::with_rx(data),
			..Self::default()
		}
	}

	pub fn recorded(&self) -> Vec<Call> {
		self.uart.recorded()
	}
}

impl Uart for RecordingSoftUart {
	fn open(&mut self, baud: u32) {
		self.uart.open(baud);
	}

	fn close(&mut self) {
		self.uart.close();
	}

	fn read(&mut self) -> Option<u8> {
		self.uart.read()
	}

	fn peek(&mut self) -> Option<u8> {
		self.uart.peek()
	}

	fn available(&mut self) -> usize {
		self.uart.available()
	}

	fn write(&mut self, data: &[u8]) -> usize {
		self.uart.write(data)
	}
}

impl SoftUart for RecordingSoftUart {
	fn flush_input(&mut self) {
		self.uart.record(Call::FlushInput);
		self.uart.rx.clear();
	}

	fn flush_output(&mut self) {
		self.uart.record(Call::FlushOutput);
	}

	fn listen(&mut self) -> bool {
		self.uart.record(Call::Listen);
		!std::mem::replace(&mut self.listening, true)
	}

	fn is_listening(&self) -> bool {
		self.uart.record(Call::IsListening);
		self.listening
	}

	fn has_overflowed(&mut self) -> bool {
		self.uart.record(Call::HasOverflowed);
		std::mem::take(&mut self.overflowed)
	}

	fn library_version(&self) -> u32 {
		self.uart.record(Call::LibraryVersion);
		self.version
	}
}

/// A software style backend that only implements the transport operations,
/// leaving the whole extended surface at its defaults.
#[derive(Default)]
pub struct BareSoftUart {
	pub rx: VecDeque<u8>,
	pub tx: Vec<u8>,
}

impl BareSoftUart {
	pub fn new() -> Self {
		Self::default()
	}
}

impl Uart for BareSoftUart {
	fn open(&mut self, _baud: u32) {}

	fn close(&mut self) {}

	fn read(&mut self) -> Option<u8> {
		self.rx.pop_front()
	}

	fn peek(&mut self) -> Option<u8> {
		self.rx.front().copied()
	}

	fn available(&mut self) -> usize {
		self.rx.len()
	}

	fn write(&mut self, data: &[u8]) -> usize {
		self.tx.extend_from_slice(data);
		data.len()
	}
}

impl SoftUart for BareSoftUart {}
