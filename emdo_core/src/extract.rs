use crate::EmdoError;
use crate::EmdoResult;
use crate::styles::CommentStyle;

/// The literal begin/end comment lines that delimit a named block inside a
/// source file, derived from the file's comment style and the block name.
///
/// For a line-comment style the markers are `// emdo name` / `// emdone name`;
/// for a block-comment style they are `/* emdo name */` / `/* emdone name */`.
/// An empty block name produces the bare `emdo` / `emdone` forms with no
/// trailing space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerPair {
	pub begin: String,
	pub end: String,
}

impl MarkerPair {
	/// Build the marker pair for a style. Returns `None` when the style has
	/// neither comment form and markers cannot be constructed.
	pub fn new(style: &CommentStyle, block_name: &str) -> Option<Self> {
		let block_name = block_name.trim();

		if let Some(line) = style.line {
			return Some(Self {
				begin: format!("{line} emdo {block_name}").trim_end().to_string(),
				end: format!("{line} emdone {block_name}").trim_end().to_string(),
			});
		}

		let (start, end) = style.block?;
		let begin_inner = format!("emdo {block_name}").trim_end().to_string();
		let end_inner = format!("emdone {block_name}").trim_end().to_string();

		Some(Self {
			begin: format!("{start} {begin_inner} {end}"),
			end: format!("{start} {end_inner} {end}"),
		})
	}
}

/// Extract the content between a marker pair from `content`.
///
/// Matching is line-anchored: a line is a marker only when its
/// whitespace-trimmed form equals the marker exactly, so marker-like text
/// inside longer comments or string literals is never matched. The marker
/// lines themselves are excluded from the result.
pub fn extract_block(content: &str, markers: &MarkerPair, path: &str) -> EmdoResult<String> {
	let mut in_block = false;
	let mut found_begin = false;
	let mut block_lines: Vec<&str> = Vec::new();

	for line in content.lines() {
		let trimmed = line.trim();

		if in_block {
			if trimmed == markers.end {
				in_block = false;
				break;
			}
			block_lines.push(line);
		} else if trimmed == markers.begin {
			in_block = true;
			found_begin = true;
		}
	}

	if !found_begin {
		return Err(EmdoError::DoMarkNotFound {
			mark: markers.begin.clone(),
			path: path.to_string(),
		});
	}

	if in_block {
		return Err(EmdoError::DoneMarkNotFound {
			mark: markers.end.clone(),
			path: path.to_string(),
		});
	}

	if block_lines.is_empty() {
		return Err(EmdoError::EmptyBlock {
			begin: markers.begin.clone(),
			end: markers.end.clone(),
			path: path.to_string(),
		});
	}

	Ok(block_lines.join("\n"))
}
