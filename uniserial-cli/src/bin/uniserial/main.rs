use std::io::Write;
use std::path::Path;
use std::time::Duration;

use uniserial::{Port, SystemUart};

mod logging;
mod options;

use options::{Command, Options};

/// How long to wait before polling the port again when no byte was ready.
const POLL_INTERVAL: Duration = Duration::from_millis(5);

/// How long to give the device to answer before draining its reply.
const REPLY_DELAY: Duration = Duration::from_millis(200);

fn main() {
	if let Err(()) = do_main(clap::Parser::parse()) {
		std::process::exit(1);
	}
}

fn do_main(options: Options) -> Result<(), ()> {
	logging::init(module_path!(), options.verbose as i8);
	match &options.command {
		Command::Monitor => {
			let mut uart = open_uart(&options)?;
			let mut port = Port::hardware(&mut uart);
			log::info!("Monitoring {}", options.serial_port.display());
			loop {
				match port.read() {
					Some(byte) => print_byte(byte)?,
					None => std::thread::sleep(POLL_INTERVAL),
				}
			}
		},
		Command::Send { data, line, read_reply } => {
			let mut uart = open_uart(&options)?;
			let mut port = Port::hardware(&mut uart);
			let mut payload = data.clone().into_bytes();
			if *line {
				payload.extend_from_slice(b"\r\n");
			}
			log::debug!("Sending {} bytes", payload.len());
			let sent = port.write(&payload);
			if sent != payload.len() {
				log::error!("Failed to send data: sent {} of {} bytes", sent, payload.len());
				return Err(());
			}
			if *read_reply {
				dump_reply(&mut port)?;
			}
		},
		Command::ShellCompletion { shell, output } => {
			write_shell_completion(*shell, output.as_deref())?;
		},
	}

	Ok(())
}

fn open_uart(options: &Options) -> Result<SystemUart, ()> {
	let uart = SystemUart::open(&options.serial_port, options.baud_rate)
		.map_err(|e| log::error!("Failed to open serial port: {}: {}", options.serial_port.display(), e))?;
	log::debug!(
		"Using serial port {} with baud rate {}",
		options.serial_port.display(),
		options.baud_rate
	);
	Ok(uart)
}

fn dump_reply(port: &mut Port<'_>) -> Result<(), ()> {
	std::thread::sleep(REPLY_DELAY);
	while let Some(byte) = port.read() {
		print_byte(byte)?;
	}
	Ok(())
}

fn print_byte(byte: u8) -> Result<(), ()> {
	let stdout = std::io::stdout();
	let mut stdout = stdout.lock();
	let printable = byte.is_ascii_graphic() || matches!(byte, b' ' | b'\t' | b'\r' | b'\n');
	let result = if printable {
		stdout.write_all(&[byte])
	} else {
		write!(stdout, "\\x{:02X}", byte)
	};
	result
		.and_then(|()| stdout.flush())
		.map_err(|e| log::error!("Failed to write to stdout: {}", e))
}

fn write_shell_completion(shell: clap_complete::Shell, path: Option<&Path>) -> Result<(), ()> {
	use clap::CommandFactory;

	let mut buffer = Vec::with_capacity(4 * 1024);

	let mut command = Options::command();
	clap_complete::generate(shell, &mut command, env!("CARGO_BIN_NAME"), &mut buffer);
	if !buffer.ends_with(b"\n") {
		buffer.push(b'\n');
	}

	let path = path.unwrap_or_else(|| Path::new("-"));
	if path == Path::new("-") {
		log::debug!("Writing shell completion for {} to stdout", shell);
		let stdout = std::io::stdout();
		stdout
			.lock()
			.write_all(&buffer)
			.map_err(|e| log::error!("Failed to write to stdout: {}", e))?;
	} else {
		log::debug!("Writing shell completion for {} to {}", shell, path.display());
		let mut output = std::fs::File::create(path).map_err(|e| log::error!("Failed to create {}: {}", path.display(), e))?;
		output
			.write_all(&buffer)
			.map_err(|e| log::error!("Failed to write to {}: {}", path.display(), e))?;
	}

	Ok(())
}
