/// Strip every character outside ASCII letters, digits, commas and whitespace,
/// then trim surrounding whitespace.
///
/// The result is a fixed point: `sanitize(&sanitize(x)) == sanitize(x)`.
#[must_use]
pub fn sanitize(input: &str) -> String {
	let filtered: String = input.chars().filter(|ch| is_allowed(*ch)).collect();
	filtered.trim().to_string()
}

fn is_allowed(ch: char) -> bool {
	ch.is_ascii_alphanumeric() || ch == ',' || ch.is_whitespace()
}
