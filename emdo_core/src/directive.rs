use crate::EmdoError;
use crate::EmdoResult;

/// One parsed directive line from inside an embed fence: a file pattern and
/// an optional named block to extract from each matching file.
///
/// The second field is an arbitrary block name (matching the `emdo` /
/// `emdone` markers in the source file), not a fixed keyword, so multiple
/// named blocks in the same file can be embedded independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedDirective {
	/// File name or glob pattern, resolved relative to the root directory.
	pub pattern: String,
	/// Name of the marked block to extract; `None` embeds the whole file.
	pub block_name: Option<String>,
}

/// Parse one raw line from an embed fence. Blank and whitespace-only lines
/// are legal separators and return `Ok(None)`. More than two
/// whitespace-separated fields is a fatal format error naming the line.
pub fn parse_directive(line: &str) -> EmdoResult<Option<EmbedDirective>> {
	let line = line.trim();
	if line.is_empty() {
		return Ok(None);
	}

	let fields: Vec<&str> = line.split_whitespace().collect();
	match fields.as_slice() {
		[pattern] => {
			Ok(Some(EmbedDirective {
				pattern: (*pattern).to_string(),
				block_name: None,
			}))
		}
		[pattern, block_name] => {
			Ok(Some(EmbedDirective {
				pattern: (*pattern).to_string(),
				block_name: Some((*block_name).to_string()),
			}))
		}
		_ => Err(EmdoError::InvalidDirectiveFormat(line.to_string())),
	}
}
