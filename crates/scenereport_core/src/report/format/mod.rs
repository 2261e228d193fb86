use bitflags::Flags;
use owo_colors::OwoColorize;

/// Emphasis applied on top of plain report text.
///
/// With color disabled every method returns its input unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
	color: bool,
}

impl Style {
	/// Style rendering ANSI emphasis when `color` is set.
	pub fn new(color: bool) -> Self {
		Self { color }
	}

	/// Emphasis for ids nothing references.
	pub fn unreferenced(&self, text: &str) -> String {
		if self.color { text.yellow().to_string() } else { text.to_owned() }
	}

	/// Emphasis for references pointing outside the target id range.
	pub fn out_of_range(&self, text: &str) -> String {
		if self.color { text.red().to_string() } else { text.to_owned() }
	}

	/// Emphasis for repeated same-format fields and attributes.
	pub fn duplicate(&self, text: &str) -> String {
		if self.color { text.red().bold().to_string() } else { text.to_owned() }
	}
}

/// Render a float with at most six significant digits and no trailing zeros.
///
/// Decimal exponents below -4 or from 6 up switch to `1.5e+06` notation.
pub fn format_float(value: f64) -> String {
	if !value.is_finite() {
		return value.to_string();
	}
	let scientific = format!("{value:.5e}");
	let rounded = scientific.parse::<f64>().unwrap_or(value);
	if rounded == 0.0 {
		return "0".to_owned();
	}
	let Some((mantissa, exponent)) = scientific.split_once('e') else {
		return rounded.to_string();
	};
	let exponent: i32 = exponent.parse().unwrap_or(0);
	if (-4..6).contains(&exponent) {
		return rounded.to_string();
	}
	let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
	let sign = if exponent < 0 { '-' } else { '+' };
	format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
}

/// Render a scalar as-is and a vector as `{a, b, ...}`.
pub fn format_vector(values: &[f64]) -> String {
	join_vector(values.iter().map(|value| format_float(*value)))
}

pub(crate) fn format_int_vector(values: &[i64]) -> String {
	join_vector(values.iter().map(i64::to_string))
}

fn join_vector(mut items: impl ExactSizeIterator<Item = String>) -> String {
	if items.len() == 1 {
		return items.next().unwrap_or_default();
	}
	let mut out = String::from("{");
	for (index, item) in items.enumerate() {
		if index > 0 {
			out.push_str(", ");
		}
		out.push_str(&item);
	}
	out.push('}');
	out
}

/// Render set flags as comma-joined CamelCase names in declaration order.
pub fn format_flags<F: Flags>(flags: &F) -> String {
	flags.iter_names().map(|(name, _)| camel_case(name)).collect::<Vec<_>>().join(", ")
}

fn camel_case(name: &str) -> String {
	let mut out = String::with_capacity(name.len());
	for word in name.split('_').filter(|word| !word.is_empty()) {
		let mut chars = word.chars();
		if let Some(first) = chars.next() {
			out.push(first.to_ascii_uppercase());
			out.extend(chars.map(|item| item.to_ascii_lowercase()));
		}
	}
	out
}

/// `N noun` with a plural `s` when `N != 1`.
pub(crate) fn plural(count: u64, noun: &str) -> String {
	counted(count, noun, &format!("{noun}s"))
}

/// `N singular` or `N plural`.
pub(crate) fn counted(count: u64, singular: &str, plural: &str) -> String {
	if count == 1 { format!("{count} {singular}") } else { format!("{count} {plural}") }
}

/// ` (flags)` when any flag is set, empty otherwise.
pub(crate) fn flags_suffix<F: Flags>(flags: &F) -> String {
	let names = format_flags(flags);
	if names.is_empty() { names } else { format!(" ({names})") }
}

/// Annotation for how many references a record has.
pub(crate) fn references(count: u64, style: Style) -> String {
	if count == 0 {
		style.unreferenced("(unreferenced)")
	} else {
		format!("(referenced {})", plural(count, "time"))
	}
}

/// Record header line: `<Tag> <id>[ <annotation>][: <name>]`.
pub(crate) fn header(tag: &str, id: u64, annotation: Option<&str>, name: Option<&str>) -> String {
	let mut out = format!("{tag} {id}");
	if let Some(annotation) = annotation {
		out.push_str(&format!(" {annotation}"));
	}
	if let Some(name) = name {
		out.push_str(&format!(": {name}"));
	}
	out
}
