use super::block::brace_delta;

/// Rename catch bindings that the catch body never uses.
///
/// Only headers shaped `} catch (<binding>) {` or `} catch(<binding>) {` are
/// considered. A renamed header is normalized to `} catch (_<binding>) {`.
pub fn rename_unused_catch(content: &str, binding: &str) -> String {
	let spaced = format!("}} catch ({binding}) {{");
	let tight = format!("}} catch({binding}) {{");
	let renamed = format!("}} catch (_{binding}) {{");

	let lines: Vec<&str> = content.split('\n').collect();
	let mut out = Vec::with_capacity(lines.len());

	for (i, line) in lines.iter().enumerate() {
		let is_header = line.contains(&spaced) || line.contains(&tight);
		if is_header && !binding_used(&lines[i + 1..], binding) {
			out.push(line.replace(&spaced, &renamed).replace(&tight, &renamed));
		} else {
			out.push(line.to_string());
		}
	}

	out.join("\n")
}

/// Scan a catch body (the lines after its header) for a textual use of
/// `binding`, stopping where the block's braces balance out.
pub fn binding_used(body: &[&str], binding: &str) -> bool {
	let mut depth = 1;

	for line in body {
		depth += brace_delta(line);
		if depth <= 0 {
			return false;
		}
		if references(line, binding) {
			return true;
		}
	}

	false
}

/// Whether a single line looks like it uses `binding`: member access, a
/// `console.error` call, a closing call argument or an `instanceof` check.
/// Comment-only lines never count.
fn references(line: &str, binding: &str) -> bool {
	if !line.contains(binding) || line.trim_start().starts_with("//") {
		return false;
	}

	line.contains("console.error")
		|| line.contains(&format!("{binding}."))
		|| line.contains(&format!("{binding})"))
		|| line.contains(&format!("{binding} instanceof"))
}
