use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum EmdoError {
	#[error(transparent)]
	#[diagnostic(code(emdo::io_error))]
	Io(#[from] std::io::Error),

	#[error("unterminated ```embed code block")]
	#[diagnostic(
		code(emdo::unterminated_embed),
		help("close the embed fence with a line containing only ```")
	)]
	UnterminatedEmbed,

	#[error("invalid format in embed code block: `{0}`")]
	#[diagnostic(
		code(emdo::invalid_directive),
		help("each directive line is `<pattern> [<block name>]` with at most two fields")
	)]
	InvalidDirectiveFormat(String),

	#[error("failed to glob pattern `{pattern}`: {reason}")]
	#[diagnostic(code(emdo::invalid_pattern))]
	InvalidPattern { pattern: String, reason: String },

	#[error("no files match pattern `{0}`")]
	#[diagnostic(
		code(emdo::no_matching_files),
		help("patterns are resolved relative to the root directory and support `**` globs")
	)]
	NoMatchingFiles(String),

	#[error("failed to read file `{path}`: {reason}")]
	#[diagnostic(code(emdo::file_read))]
	FileReadFailure { path: String, reason: String },

	#[error("unsupported file type `{extension}` for `{path}`")]
	#[diagnostic(
		code(emdo::unsupported_file_type),
		help("only extensions present in the comment style table can be embedded")
	)]
	UnsupportedFileType { path: String, extension: String },

	#[error("do mark '{mark}' not found in file {path}")]
	#[diagnostic(code(emdo::do_mark_not_found))]
	DoMarkNotFound { mark: String, path: String },

	#[error("done mark '{mark}' not found in file {path}")]
	#[diagnostic(
		code(emdo::done_mark_not_found),
		help("the begin marker was found but the block is never closed")
	)]
	DoneMarkNotFound { mark: String, path: String },

	#[error("no content found between do mark '{begin}' and done mark '{end}' in file {path}")]
	#[diagnostic(code(emdo::empty_block))]
	EmptyBlock {
		begin: String,
		end: String,
		path: String,
	},

	#[error("circular embedding detected for file {0}")]
	#[diagnostic(
		code(emdo::circular_embedding),
		help("a markdown file transitively embeds itself")
	)]
	CircularEmbedding(String),

	#[error("processing markdown file {path} failed: {source}")]
	#[diagnostic(code(emdo::embedded_document))]
	EmbeddedDocument {
		path: String,
		#[source]
		source: Box<EmdoError>,
	},
}

pub type EmdoResult<T> = Result<T, EmdoError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
