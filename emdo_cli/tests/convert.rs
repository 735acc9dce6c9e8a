mod common;

use emdo_core::AnyEmptyResult;
use predicates::prelude::PredicateBooleanExt;

#[test]
fn passes_plain_documents_through_unchanged() -> AnyEmptyResult {
	let input = "# Title\n\nNo embed fences here.\n";

	let mut cmd = common::emdo_cmd();
	cmd.write_stdin(input)
		.assert()
		.success()
		.stdout(input.to_string());

	Ok(())
}

#[test]
fn expands_an_embed_fence_from_stdin() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("file.go"), "package main\n")?;

	let mut cmd = common::emdo_cmd();
	cmd.arg("--root")
		.arg(tmp.path())
		.write_stdin("```embed\nfile.go\n```\n")
		.assert()
		.success()
		.stdout("```go\n// file.go\npackage main\n```\n");

	Ok(())
}

#[test]
fn converts_an_input_file_argument() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("snippet.py"), "x = 1\n")?;
	std::fs::write(tmp.path().join("doc.md"), "```embed\nsnippet.py\n```\n")?;

	let mut cmd = common::emdo_cmd();
	cmd.arg(tmp.path().join("doc.md"))
		.arg("--root")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout("```py\n# snippet.py\nx = 1\n```\n");

	Ok(())
}

#[test]
fn writes_output_file_on_success() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("file.go"), "package main\n")?;
	let out_path = tmp.path().join("out.md");

	let mut cmd = common::emdo_cmd();
	cmd.arg("--root")
		.arg(tmp.path())
		.arg("--output")
		.arg(&out_path)
		.write_stdin("```embed\nfile.go\n```\n")
		.assert()
		.success();

	let written = std::fs::read_to_string(&out_path)?;
	assert_eq!(written, "```go\n// file.go\npackage main\n```\n");

	Ok(())
}

#[test]
fn leaves_output_file_untouched_on_failure() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let out_path = tmp.path().join("out.md");

	let mut cmd = common::emdo_cmd();
	cmd.arg("--root")
		.arg(tmp.path())
		.arg("--output")
		.arg(&out_path)
		.write_stdin("```embed\nmissing.go\n```\n")
		.assert()
		.failure();

	assert!(!out_path.exists());

	Ok(())
}

#[test]
fn zero_match_error_names_the_pattern() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	let mut cmd = common::emdo_cmd();
	cmd.arg("--root")
		.arg(tmp.path())
		.write_stdin("```embed\nmissing-file.go\n```\n")
		.assert()
		.failure()
		.code(1)
		.stderr(predicates::str::contains("no files match pattern").and(
			predicates::str::contains("missing-file.go"),
		));

	Ok(())
}

#[test]
fn unterminated_fence_reports_and_exits_nonzero() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	let mut cmd = common::emdo_cmd();
	cmd.arg("--root")
		.arg(tmp.path())
		.write_stdin("```embed\nfile.go\n")
		.assert()
		.failure()
		.code(1)
		.stderr(predicates::str::contains("unterminated"));

	Ok(())
}

#[test]
fn circular_embedding_reports_the_file() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("self.md"), "```embed\nself.md\n```\n")?;

	let mut cmd = common::emdo_cmd();
	cmd.arg("--root")
		.arg(tmp.path())
		.write_stdin("```embed\nself.md\n```\n")
		.assert()
		.failure()
		.code(1)
		.stderr(
			predicates::str::contains("circular embedding")
				.and(predicates::str::contains("self.md")),
		);

	Ok(())
}
