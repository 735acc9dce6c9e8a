/// Comment syntax for one language. At least one of the two forms is always
/// present for every entry in the static table; the line form is preferred
/// wherever both exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentStyle {
	/// Single-line comment marker, e.g. `//` or `#`.
	pub line: Option<&'static str>,
	/// Block comment delimiters, e.g. `("/*", "*/")`.
	pub block: Option<(&'static str, &'static str)>,
}

impl CommentStyle {
	/// Render the filename comment placed on the first line of an emitted
	/// code block. Returns `None` when the style has neither comment form,
	/// which never happens for table entries.
	pub fn filename_comment(&self, path: &str) -> Option<String> {
		if let Some(line) = self.line {
			return Some(format!("{line} {path}"));
		}

		self
			.block
			.map(|(start, end)| format!("{start} {path} {end}"))
	}
}

const fn line(marker: &'static str) -> CommentStyle {
	CommentStyle {
		line: Some(marker),
		block: None,
	}
}

const fn block(start: &'static str, end: &'static str) -> CommentStyle {
	CommentStyle {
		line: None,
		block: Some((start, end)),
	}
}

const fn both(marker: &'static str, start: &'static str, end: &'static str) -> CommentStyle {
	CommentStyle {
		line: Some(marker),
		block: Some((start, end)),
	}
}

/// Static table mapping bare file extensions (no leading dot) to comment
/// styles. Kept sorted by extension for readability; lookups are a linear
/// scan over a small constant table.
const STYLES: &[(&str, CommentStyle)] = &[
	("ada", line("--")),
	("asm", line(";")),
	("awk", line("#")),
	("bash", line("#")),
	("c", both("//", "/*", "*/")),
	("clj", line(";")),
	("cob", line("*>")),
	("cpp", both("//", "/*", "*/")),
	("cs", both("//", "/*", "*/")),
	("css", block("/*", "*/")),
	("d", both("//", "/*", "*/")),
	("dart", both("//", "/*", "*/")),
	("elm", both("--", "{-", "-}")),
	("erl", line("%")),
	("ex", line("#")),
	("f90", line("!")),
	("fs", both("//", "(*", "*)")),
	("gleam", line("//")),
	("go", both("//", "/*", "*/")),
	("haml", line("-#")),
	("hs", both("--", "{-", "-}")),
	("html", block("<!--", "-->")),
	("java", both("//", "/*", "*/")),
	("jl", both("#", "#=", "=#")),
	("js", both("//", "/*", "*/")),
	("jsx", both("//", "/*", "*/")),
	("kt", both("//", "/*", "*/")),
	("lisp", both(";", "#|", "|#")),
	("logo", line(";")),
	("lua", both("--", "--[[", "]]")),
	("m", both("%", "%{", "%}")),
	("ml", block("(*", "*)")),
	("mm", both("//", "/*", "*/")),
	("mojo", line("#")),
	("nim", both("#", "#[", "]#")),
	("pas", both("//", "{", "}")),
	("php", both("//", "/*", "*/")),
	("pl", line("#")),
	("pro", both("%", "/*", "*/")),
	("py", line("#")),
	("r", line("#")),
	("rb", line("#")),
	("rs", both("//", "/*", "*/")),
	("scala", both("//", "/*", "*/")),
	("scm", both(";", "#|", "|#")),
	("scss", both("//", "/*", "*/")),
	("sh", line("#")),
	("sol", both("//", "/*", "*/")),
	("sql", both("--", "/*", "*/")),
	("swift", both("//", "/*", "*/")),
	("tcl", line("#")),
	("ts", both("//", "/*", "*/")),
	("tsx", both("//", "/*", "*/")),
	("vb", line("'")),
	("vbs", line("'")),
	("wl", block("(*", "*)")),
	("yml", line("#")),
	("zig", both("//", "/*", "*/")),
];

/// Look up the comment style for a bare file extension. A miss is fatal at
/// the call sites: unsupported file types cannot be embedded.
pub fn style_for_extension(extension: &str) -> Option<CommentStyle> {
	STYLES
		.iter()
		.find(|(ext, _)| *ext == extension)
		.map(|(_, style)| *style)
}
