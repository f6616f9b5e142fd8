pub fn init(root_module: &str, verbosity: i8) {
	use std::io::Write;

	let log_level = match verbosity {
		0 => log::LevelFilter::Info,
		1 => log::LevelFilter::Debug,
		_ => log::LevelFilter::Trace,
	};

	env_logger::Builder::new()
		.format(|buffer, record: &log::Record| {
			let prefix = match record.level() {
				log::Level::Trace => "Trace: ",
				log::Level::Debug => "",
				log::Level::Info => "",
				log::Level::Warn => "Warning: ",
				log::Level::Error => "Error: ",
			};
			writeln!(buffer, "{}{}", prefix, record.args())
		})
		.filter_level(log::LevelFilter::Warn)
		.filter_module(root_module, log_level)
		.filter_module("uniserial", log_level)
		.init();
}
