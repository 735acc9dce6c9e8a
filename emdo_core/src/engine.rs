use std::collections::HashSet;
use std::path::PathBuf;

use crate::EmdoError;
use crate::EmdoResult;
use crate::dedent::dedent;
use crate::directive::EmbedDirective;
use crate::directive::parse_directive;
use crate::extract::MarkerPair;
use crate::extract::extract_block;
use crate::resolver::FileResolver;
use crate::resolver::ResolvedFile;
use crate::styles::style_for_extension;

/// The exact opening line of an embed fence. Compared untrimmed: leading or
/// trailing whitespace disqualifies the line.
const FENCE_OPENER: &str = "```embed";
/// The exact closing line of an embed fence, also compared untrimmed.
const FENCE_CLOSER: &str = "```";

/// Tracks the set of files currently being expanded so that cyclic inclusion
/// fails instead of recursing forever. One guard instance exists per
/// top-level conversion and is threaded by reference through the recursive
/// calls; it reflects the current call stack only, so repeated sibling
/// inclusion of the same file is legal.
#[derive(Debug, Default)]
pub struct RecursionGuard {
	in_flight: HashSet<String>,
}

impl RecursionGuard {
	pub fn new() -> Self {
		Self::default()
	}

	/// Mark a file as in flight. Fails when the file is already being
	/// expanded somewhere up the call stack.
	pub fn enter(&mut self, path: &str) -> EmdoResult<()> {
		if !self.in_flight.insert(path.to_string()) {
			return Err(EmdoError::CircularEmbedding(path.to_string()));
		}
		Ok(())
	}

	/// Unmark a file. Must be called on every exit path, success or failure.
	pub fn leave(&mut self, path: &str) {
		self.in_flight.remove(path);
	}
}

/// Convert one markdown document, resolving embed patterns relative to
/// `root`. The output is fully buffered: on error nothing is returned and no
/// partial output escapes.
pub fn convert(content: &str, root: impl Into<PathBuf>) -> EmdoResult<String> {
	let resolver = FileResolver::new(root);
	let mut guard = RecursionGuard::new();
	let mut output = String::new();
	process_document(content, &resolver, &mut guard, &mut output)?;

	Ok(output)
}

/// Stream a document line by line, copying everything outside embed fences
/// verbatim and expanding each fence body in place.
///
/// Re-entrant: called recursively when an embedded file is itself a markdown
/// document, sharing the resolver and guard but not line-buffer state.
/// Reaching end of input while inside a fence is fatal and the buffered
/// partial fence is discarded.
pub fn process_document(
	content: &str,
	resolver: &FileResolver,
	guard: &mut RecursionGuard,
	output: &mut String,
) -> EmdoResult<()> {
	let mut in_embed = false;
	let mut buffer: Vec<&str> = Vec::new();

	for line in content.lines() {
		if in_embed {
			if line == FENCE_CLOSER {
				expand_embed(&buffer, resolver, guard, output)?;
				buffer.clear();
				in_embed = false;
			} else {
				buffer.push(line);
			}
		} else if line == FENCE_OPENER {
			in_embed = true;
		} else {
			output.push_str(line);
			output.push('\n');
		}
	}

	if in_embed {
		return Err(EmdoError::UnterminatedEmbed);
	}

	Ok(())
}

/// Expand one embed fence body into formatted code blocks (or spliced
/// sub-documents). Exactly one blank line separates successive files of one
/// pattern and successive directives, never trailing the last one.
fn expand_embed(
	lines: &[&str],
	resolver: &FileResolver,
	guard: &mut RecursionGuard,
	output: &mut String,
) -> EmdoResult<()> {
	let mut directives: Vec<EmbedDirective> = Vec::new();
	for line in lines {
		if let Some(directive) = parse_directive(line)? {
			directives.push(directive);
		}
	}

	tracing::debug!(directives = directives.len(), "expanding embed fence");

	for (index, directive) in directives.iter().enumerate() {
		if index > 0 {
			output.push('\n');
		}

		let files = resolver.resolve(&directive.pattern)?;
		for (file_index, file) in files.iter().enumerate() {
			if file_index > 0 {
				output.push('\n');
			}
			expand_file(file, directive.block_name.as_deref(), resolver, guard, output)?;
		}
	}

	Ok(())
}

/// Expand one resolved file: markdown documents are converted recursively
/// and spliced in without fencing; everything else becomes a fenced code
/// block. The recursion guard brackets the whole expansion so the file is
/// released again on both success and failure.
fn expand_file(
	file: &ResolvedFile,
	block_name: Option<&str>,
	resolver: &FileResolver,
	guard: &mut RecursionGuard,
	output: &mut String,
) -> EmdoResult<()> {
	guard.enter(&file.path)?;

	let result = if file.extension == "md" {
		process_document(&file.content, resolver, guard, output).map_err(|source| {
			EmdoError::EmbeddedDocument {
				path: file.path.clone(),
				source: Box::new(source),
			}
		})
	} else {
		write_code_block(file, block_name, output)
	};

	guard.leave(&file.path);
	result
}

/// Emit one fenced code block: opening fence tagged with the bare extension,
/// the language's comment-wrapped filename, the extracted and dedented
/// content with exactly one trailing newline, then the closing fence.
fn write_code_block(
	file: &ResolvedFile,
	block_name: Option<&str>,
	output: &mut String,
) -> EmdoResult<()> {
	let unsupported = || {
		EmdoError::UnsupportedFileType {
			path: file.path.clone(),
			extension: file.extension.clone(),
		}
	};

	let style = style_for_extension(&file.extension).ok_or_else(unsupported)?;
	let filename_comment = style.filename_comment(&file.path).ok_or_else(unsupported)?;

	let content = match block_name {
		Some(name) => {
			let markers = MarkerPair::new(&style, name).ok_or_else(unsupported)?;
			extract_block(&file.content, &markers, &file.path)?
		}
		None => file.content.clone(),
	};

	let content = dedent(content.trim_matches('\n'));

	output.push_str("```");
	output.push_str(&file.extension);
	output.push('\n');
	output.push_str(&filename_comment);
	output.push('\n');
	output.push_str(&content);
	output.push_str("\n```\n");

	Ok(())
}
