/// Remove the common leading-whitespace margin shared by all non-blank lines.
///
/// The margin is the minimum run of leading spaces and tabs (counted in
/// bytes, not normalized against each other) across lines that contain
/// anything other than whitespace. Blank and whitespace-only lines are
/// ignored when computing the margin but still have it stripped when they
/// are long enough. Idempotent by construction: after one pass the margin
/// is zero.
pub fn dedent(text: &str) -> String {
	let lines: Vec<&str> = text.split('\n').collect();
	let mut min_indent: Option<usize> = None;

	for line in &lines {
		let trimmed = line.trim_start_matches([' ', '\t']);
		if trimmed.is_empty() {
			continue;
		}
		let indent = line.len() - trimmed.len();
		min_indent = Some(min_indent.map_or(indent, |min| min.min(indent)));
	}

	let Some(min_indent) = min_indent.filter(|&min| min > 0) else {
		return text.to_string();
	};

	lines
		.iter()
		.map(|line| {
			if line.len() >= min_indent {
				&line[min_indent..]
			} else {
				line
			}
		})
		.collect::<Vec<_>>()
		.join("\n")
}
