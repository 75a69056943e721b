/// Net brace count of a line: `{` occurrences minus `}` occurrences.
///
/// Purely textual. Braces inside string literals and comments count too.
pub fn brace_delta(line: &str) -> i64 {
	line.chars().fold(0, |depth, c| match c {
		'{' => depth + 1,
		'}' => depth - 1,
		_ => depth,
	})
}

/// Remove every brace-delimited block opened by a line containing one of
/// `markers` and at least one `{`.
///
/// The opening line's net brace count seeds the depth. Following lines are
/// consumed, each adjusting the depth by its own net count, up to and
/// including the line where the depth drops to zero or below. An opening
/// line that already balances is removed on its own. A marker line without
/// a `{` is left untouched.
///
/// Braces inside string or comment literals are counted like any other, so
/// a body containing `"}"` ends the block early and leaks its remainder.
pub fn remove_blocks(content: &str, markers: &[String]) -> String {
	let mut kept = Vec::new();
	let mut depth: Option<i64> = None;

	for line in content.split('\n') {
		if let Some(current) = depth {
			let next = current + brace_delta(line);
			depth = (next > 0).then_some(next);
			continue;
		}

		if line.contains('{') && markers.iter().any(|m| line.contains(m.as_str())) {
			let opening = brace_delta(line);
			depth = (opening > 0).then_some(opening);
			continue;
		}

		kept.push(line);
	}

	kept.join("\n")
}

#[cfg(test)]
mod tests {
	use super::*;

	fn markers(names: &[&str]) -> Vec<String> {
		names.iter().map(|s| s.to_string()).collect()
	}

	#[test]
	fn test_brace_delta() {
		assert_eq!(brace_delta("function f() {"), 1);
		assert_eq!(brace_delta("}"), -1);
		assert_eq!(brace_delta("} else {"), 0);
		assert_eq!(brace_delta("const x = { a: { b: 1 } };"), 0);
		assert_eq!(brace_delta("no braces"), 0);
	}

	#[test]
	fn test_removes_nested_function() {
		let content = "\
const a = 1;
const getTimeSinceAdded = (dateString: string) => {
  if (x) {
    for (const y of z) {
      if (y) { return 1; }
    }
  }
  return 0;
};

const b = 2;
";
		let result = remove_blocks(content, &markers(&["const getTimeSinceAdded"]));
		assert_eq!(result, "const a = 1;\n\nconst b = 2;\n");
	}

	#[test]
	fn test_removes_with_any_marker() {
		let content = "a\nfunction helper() {\n  return 1;\n}\nb";
		let result = remove_blocks(content, &markers(&["const helper", "function helper"]));
		assert_eq!(result, "a\nb");
	}

	#[test]
	fn test_removes_every_matching_block() {
		let content = "function f() {\n}\nkeep\nfunction f() {\n}\n";
		let result = remove_blocks(content, &markers(&["function f"]));
		assert_eq!(result, "keep\n");
	}

	#[test]
	fn test_marker_without_brace_is_kept() {
		let content = "function f(\n  a: string,\n) {\n  return a;\n}";
		let result = remove_blocks(content, &markers(&["function f"]));
		assert_eq!(result, content);
	}

	#[test]
	fn test_one_line_block_removed_alone() {
		let content = "const f = () => { return 1; };\nconst next = 2;";
		let result = remove_blocks(content, &markers(&["const f"]));
		assert_eq!(result, "const next = 2;");
	}

	#[test]
	fn test_unterminated_block_consumes_rest() {
		let content = "keep\nfunction f() {\n  if (a) {\n";
		let result = remove_blocks(content, &markers(&["function f"]));
		assert_eq!(result, "keep");
	}

	#[test]
	fn test_brace_in_string_literal_closes_block_early() {
		// The counter is textual: the "}" literal drops depth to zero.
		let content = "\
function f() {
  const s = \"}\";
  return s;
}
after";
		let result = remove_blocks(content, &markers(&["function f"]));
		assert_eq!(result, "  return s;\n}\nafter");
	}

	#[test]
	fn test_no_marker_is_noop() {
		let content = "function g() {\n}\n";
		assert_eq!(remove_blocks(content, &markers(&["function f"])), content);
	}

	#[test]
	fn test_removal_is_idempotent() {
		let content = "x\nfunction f() {\n  y();\n}\nz\n";
		let once = remove_blocks(content, &markers(&["function f"]));
		let twice = remove_blocks(&once, &markers(&["function f"]));
		assert_eq!(once, twice);
	}
}
