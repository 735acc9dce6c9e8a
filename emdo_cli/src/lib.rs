use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
	version,
	about = "Embed source files and named blocks into markdown documents.",
	long_about = "emdo is a literate-documentation preprocessor. It scans a markdown document \
	              for ```embed fences, resolves each directive line to one or more source files \
	              (glob patterns with ** are supported), optionally extracts a named block \
	              delimited by emdo/emdone marker comments, dedents the result, and re-emits it \
	              as a fenced code block annotated with a filename comment.\n\nEmbedded .md \
	              files are converted recursively and spliced in without a code fence.\n\nQuick \
	              start:\n  emdo readme.src.md > readme.md\n  cat doc.md | emdo --root src"
)]
pub struct EmdoCli {
	/// Path to the markdown document to convert. Reads stdin when omitted
	/// or when `-` is given.
	pub input: Option<PathBuf>,

	/// Directory against which embed patterns are resolved.
	#[arg(long, short, default_value = ".")]
	pub root: PathBuf,

	/// Write the converted document to this file instead of stdout. The
	/// file is only written when the whole conversion succeeds.
	#[arg(long, short)]
	pub output: Option<PathBuf>,

	/// Enable verbose logging on stderr. The filter can be overridden with
	/// the `EMDO_LOG` environment variable.
	#[arg(long, short, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored error output.
	#[arg(long, default_value_t = false)]
	pub no_color: bool,
}

impl EmdoCli {
	/// Whether the input should be read from stdin.
	pub fn reads_stdin(&self) -> bool {
		self
			.input
			.as_ref()
			.is_none_or(|path| path.as_os_str() == "-")
	}
}
