use std::path::Path;
use std::path::PathBuf;

use globset::GlobBuilder;
use ignore::WalkBuilder;

use crate::EmdoError;
use crate::EmdoResult;

/// A file matched by a directive pattern, read fully into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFile {
	/// Forward-slash path relative to the resolution root. This is the form
	/// used in filename comments, error messages, and the recursion guard.
	pub path: String,
	/// Bare file extension without the leading dot; empty when the file has
	/// none.
	pub extension: String,
	/// The file content.
	pub content: String,
}

/// Expands directive patterns to sorted sets of files under a fixed root.
///
/// Patterns use recursive glob semantics: `*` stays within one path segment
/// and `**` crosses directory boundaries. The walk deliberately ignores
/// gitignore rules and hidden-file filtering so that pattern resolution sees
/// the raw directory tree.
#[derive(Debug, Clone)]
pub struct FileResolver {
	root: PathBuf,
}

impl FileResolver {
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self { root: root.into() }
	}

	pub fn root(&self) -> &Path {
		&self.root
	}

	/// Resolve a pattern to the lexicographically sorted list of matching
	/// files, each read fully into memory. Zero matches is fatal and the
	/// error names the original pattern, not its normalized form.
	pub fn resolve(&self, pattern: &str) -> EmdoResult<Vec<ResolvedFile>> {
		let normalized = normalize_pattern(pattern);

		let glob = GlobBuilder::new(&normalized)
			.literal_separator(true)
			.build()
			.map_err(|error| {
				EmdoError::InvalidPattern {
					pattern: pattern.to_string(),
					reason: error.to_string(),
				}
			})?;
		let matcher = glob.compile_matcher();

		let walker = WalkBuilder::new(&self.root)
			.hidden(false)
			.ignore(false)
			.git_ignore(false)
			.git_global(false)
			.git_exclude(false)
			.parents(false)
			.follow_links(false)
			.build();

		let mut matches: Vec<String> = Vec::new();

		for entry in walker {
			let entry = match entry {
				Ok(entry) => entry,
				Err(error) => {
					tracing::debug!(%error, "skipping unreadable directory entry");
					continue;
				}
			};

			if !entry.file_type().is_some_and(|kind| kind.is_file()) {
				continue;
			}

			let Ok(relative) = entry.path().strip_prefix(&self.root) else {
				continue;
			};
			let relative = to_forward_slashes(relative);

			if matcher.is_match(&relative) {
				matches.push(relative);
			}
		}

		if matches.is_empty() {
			return Err(EmdoError::NoMatchingFiles(pattern.to_string()));
		}

		// Deterministic multi-file expansion: lexicographic by relative path.
		matches.sort();

		tracing::debug!(pattern, matches = matches.len(), "resolved embed pattern");

		matches
			.into_iter()
			.map(|path| self.read(path))
			.collect()
	}

	fn read(&self, path: String) -> EmdoResult<ResolvedFile> {
		let content = std::fs::read_to_string(self.root.join(&path)).map_err(|error| {
			EmdoError::FileReadFailure {
				path: path.clone(),
				reason: error.to_string(),
			}
		})?;

		let extension = Path::new(&path)
			.extension()
			.map(|ext| ext.to_string_lossy().into_owned())
			.unwrap_or_default();

		Ok(ResolvedFile {
			path,
			extension,
			content,
		})
	}
}

/// Normalize a directive pattern to forward slashes and lexically clean it
/// of `.` and `..` segments. Leading `..` segments are kept as written even
/// though they cannot match anything under the root.
pub fn normalize_pattern(pattern: &str) -> String {
	let pattern = pattern.replace('\\', "/");
	let mut segments: Vec<&str> = Vec::new();

	for segment in pattern.split('/') {
		match segment {
			"" | "." => {}
			".." => {
				if matches!(segments.last(), Some(&"..") | None) {
					segments.push("..");
				} else {
					segments.pop();
				}
			}
			segment => segments.push(segment),
		}
	}

	if segments.is_empty() {
		return ".".to_string();
	}

	segments.join("/")
}

fn to_forward_slashes(path: &Path) -> String {
	path
		.components()
		.map(|component| component.as_os_str().to_string_lossy())
		.collect::<Vec<_>>()
		.join("/")
}
