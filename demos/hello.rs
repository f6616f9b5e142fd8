use std::fmt::Write;
use uniserial::{Port, SystemUart};

fn main() {
	let path = std::env::args()
		.nth(1)
		.unwrap_or_else(|| "/dev/ttyUSB0".into());
	let mut uart = SystemUart::open(&path, 115200)
		.map_err(|e| println!("Failed to open serial port: {}: {}", path, e))
		.unwrap();

	let mut port = Port::hardware(&mut uart);
	port.print("uniserial says hi\r\n");
	for n in 1..=3 {
		write!(port, "line {}\r\n", n).unwrap();
	}
}
