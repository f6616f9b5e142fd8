use std::time::Duration;
use uniserial::{Port, SystemUart};

fn main() {
	let path = std::env::args()
		.nth(1)
		.unwrap_or_else(|| "/dev/ttyUSB0".into());
	let mut uart = SystemUart::open(&path, 9600)
		.map_err(|e| println!("Failed to open serial port: {}: {}", path, e))
		.unwrap();

	let mut port = Port::hardware(&mut uart);
	println!("Echoing bytes on {}", path);
	loop {
		match port.read() {
			Some(byte) => {
				port.write_byte(byte);
			},
			None => std::thread::sleep(Duration::from_millis(2)),
		}
	}
}
