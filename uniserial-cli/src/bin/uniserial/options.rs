use std::path::PathBuf;

/// Talk to a serial device through one simple port interface.
#[derive(clap::Parser)]
pub struct Options {
	/// Print more messages. May be given multiple times.
	#[clap(long, short)]
	#[clap(global = true)]
	#[clap(action = clap::ArgAction::Count)]
	pub verbose: u8,

	/// The serial port to use.
	#[clap(long, short)]
	#[clap(global = true)]
	#[cfg_attr(target_os = "windows", clap(default_value = "COM1"))]
	#[cfg_attr(not(target_os = "windows"), clap(default_value = "/dev/ttyUSB0"))]
	pub serial_port: PathBuf,

	/// The baud rate to use.
	#[clap(long, short)]
	#[clap(global = true)]
	#[clap(default_value = "9600")]
	pub baud_rate: u32,

	#[clap(subcommand)]
	pub command: Command,
}

#[derive(clap::Subcommand)]
pub enum Command {
	/// Print every byte received on the serial port.
	///
	/// Bytes that are not printable ASCII are shown as hexadecimal escapes.
	Monitor,

	/// Send data over the serial port.
	Send {
		/// The data to send.
		#[clap(value_name = "DATA")]
		data: String,

		/// Append a carriage return and line feed to the data.
		#[clap(long, short)]
		line: bool,

		/// Wait briefly for a reply and print it.
		#[clap(long, short)]
		read_reply: bool,
	},

	/// Write shell completions to a file or standard output.
	ShellCompletion {
		/// The shell for which to generate completions.
		#[clap(long)]
		shell: clap_complete::Shell,

		/// The file to write the generated completion file to, or "-" for standard output.
		#[clap(long, short)]
		output: Option<PathBuf>,
	},
}
