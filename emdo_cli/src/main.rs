use std::io::Read;
use std::io::Write;
use std::process;

use clap::Parser;
use emdo_cli::EmdoCli;
use emdo_core::AnyEmptyResult;
use emdo_core::AnyResult;
use emdo_core::EmdoError;
use owo_colors::OwoColorize;

fn main() {
	let args = EmdoCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	if args.verbose {
		init_tracing();
	}

	if let Err(e) = run(&args) {
		match e.downcast::<EmdoError>() {
			Ok(err) => {
				let report: miette::Report = (*err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				if use_color {
					eprintln!("{} {e}", "error:".red());
				} else {
					eprintln!("error: {e}");
				}
			}
		}
		process::exit(1);
	}
}

fn run(args: &EmdoCli) -> AnyEmptyResult {
	let input = read_input(args)?;
	// Conversion is fully buffered so a mid-document failure leaves the
	// destination untouched.
	let output = emdo_core::convert(&input, &args.root)?;
	write_output(args, &output)?;

	Ok(())
}

fn read_input(args: &EmdoCli) -> AnyResult<String> {
	match &args.input {
		Some(path) if !args.reads_stdin() => Ok(std::fs::read_to_string(path)?),
		_ => {
			let mut buffer = String::new();
			std::io::stdin().read_to_string(&mut buffer)?;
			Ok(buffer)
		}
	}
}

fn write_output(args: &EmdoCli, output: &str) -> AnyEmptyResult {
	match &args.output {
		Some(path) => std::fs::write(path, output)?,
		None => {
			let stdout = std::io::stdout();
			stdout.lock().write_all(output.as_bytes())?;
		}
	}

	Ok(())
}

fn init_tracing() {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_env("EMDO_LOG")
		.unwrap_or_else(|_| EnvFilter::new("emdo_core=debug"));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}
