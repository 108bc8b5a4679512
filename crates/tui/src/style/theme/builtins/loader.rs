use anyhow::{Context, Result, anyhow, bail};
use include_dir::{Dir, File};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use crate::style::theme::types::{Theme, ThemeRegistration};

pub(super) struct BuiltinThemes {
	pub(super) registrations: Vec<ThemeRegistration>,
	pub(super) default_theme: Theme,
}

#[derive(Debug, Deserialize)]
struct ThemeFile {
	name: String,
	#[serde(default)]
	aliases: Vec<String>,
	#[serde(default)]
	default: bool,
	styles: ThemeStyles,
}

#[derive(Debug, Deserialize)]
struct ThemeStyles {
	title: StyleSpec,
	prompt: StyleSpec,
	placeholder: StyleSpec,
	border: StyleSpec,
	suggestion: StyleSpec,
	selected: StyleSpec,
	matched: StyleSpec,
	link: StyleSpec,
	path: StyleSpec,
	muted: StyleSpec,
	status: StyleSpec,
	error: StyleSpec,
	backdrop: StyleSpec,
}

impl ThemeStyles {
	fn into_theme(self, context: &str) -> Result<Theme> {
		let style = |spec: &StyleSpec, key: &str| spec.to_style(&format!("{context}.{key}"));
		Ok(Theme {
			title: style(&self.title, "title")?,
			prompt: style(&self.prompt, "prompt")?,
			placeholder: style(&self.placeholder, "placeholder")?,
			border: style(&self.border, "border")?,
			suggestion: style(&self.suggestion, "suggestion")?,
			selected: style(&self.selected, "selected")?,
			matched: style(&self.matched, "matched")?,
			link: style(&self.link, "link")?,
			path: style(&self.path, "path")?,
			muted: style(&self.muted, "muted")?,
			status: style(&self.status, "status")?,
			error: style(&self.error, "error")?,
			backdrop: style(&self.backdrop, "backdrop")?,
		})
	}
}

#[derive(Debug, Default, Deserialize)]
struct StyleSpec {
	#[serde(default)]
	fg: Option<String>,
	#[serde(default)]
	bg: Option<String>,
	#[serde(default)]
	modifiers: Vec<String>,
}

impl StyleSpec {
	fn to_style(&self, context: &str) -> Result<Style> {
		let mut style = Style::new();

		if let Some(fg) = &self.fg {
			let color = parse_color(fg)
				.with_context(|| format!("{context}: invalid foreground colour `{fg}`"))?;
			style = style.fg(color);
		}

		if let Some(bg) = &self.bg {
			let color = parse_color(bg)
				.with_context(|| format!("{context}: invalid background colour `{bg}`"))?;
			style = style.bg(color);
		}

		for modifier in &self.modifiers {
			let value = parse_modifier(modifier)
				.with_context(|| format!("{context}: invalid modifier `{modifier}`"))?;
			style = style.add_modifier(value);
		}

		Ok(style)
	}
}

pub(super) fn load_builtin_themes(dir: &Dir) -> Result<BuiltinThemes> {
	let mut files: Vec<_> = dir.files().collect();
	files.sort_by(|a, b| a.path().cmp(b.path()));

	let mut registrations = Vec::new();
	let mut default_theme: Option<(Theme, String)> = None;
	for file in files {
		let (registration, is_default) = parse_theme_file(file)?;
		if is_default {
			if let Some((_, existing)) = &default_theme {
				bail!(
					"multiple built-in themes are marked as default (`{existing}` and `{}`)",
					registration.name
				);
			}
			default_theme = Some((registration.theme, registration.name.clone()));
		}
		registrations.push(registration);
	}

	let default_theme = default_theme
		.map(|(theme, _)| theme)
		.or_else(|| registrations.first().map(|registration| registration.theme))
		.ok_or_else(|| anyhow!("no built-in theme definitions were found"))?;

	Ok(BuiltinThemes {
		registrations,
		default_theme,
	})
}

fn parse_theme_file(file: &File) -> Result<(ThemeRegistration, bool)> {
	let path = file.path();
	let contents = file
		.contents_utf8()
		.with_context(|| format!("{path:?} is not valid UTF-8"))?;
	parse_theme_source(contents, &format!("{path:?}"))
}

fn parse_theme_source(contents: &str, context: &str) -> Result<(ThemeRegistration, bool)> {
	let parsed: ThemeFile = toml::from_str(contents)
		.with_context(|| format!("failed to parse built-in theme definition in {context}"))?;

	let theme = parsed.styles.into_theme(&format!("{context}.styles"))?;
	let registration = parsed
		.aliases
		.iter()
		.map(|alias| alias.trim())
		.filter(|alias| !alias.is_empty())
		.fold(ThemeRegistration::new(parsed.name, theme), |registration, alias| {
			registration.alias(alias)
		});
	Ok((registration, parsed.default))
}

fn parse_color(input: &str) -> Result<Color> {
	let value = input.trim();

	if let Some(hex) = value.strip_prefix('#') {
		return parse_hex_colour(hex);
	}

	if let Ok(index) = value.parse::<u8>() {
		return Ok(Color::Indexed(index));
	}

	match normalise_key(value).as_str() {
		"reset" | "none" | "default" => Ok(Color::Reset),
		"black" => Ok(Color::Black),
		"red" => Ok(Color::Red),
		"green" => Ok(Color::Green),
		"yellow" => Ok(Color::Yellow),
		"blue" => Ok(Color::Blue),
		"magenta" => Ok(Color::Magenta),
		"cyan" => Ok(Color::Cyan),
		"gray" | "grey" => Ok(Color::Gray),
		"dark_gray" | "dark_grey" => Ok(Color::DarkGray),
		"white" => Ok(Color::White),
		other => bail!("unknown colour `{other}`"),
	}
}

fn parse_hex_colour(hex: &str) -> Result<Color> {
	if hex.len() != 6 || !hex.is_ascii() {
		bail!("hex colours must be 6 characters long");
	}
	let channel = |range: std::ops::Range<usize>| {
		u8::from_str_radix(&hex[range], 16).with_context(|| format!("invalid hex colour `{hex}`"))
	};
	Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

fn parse_modifier(input: &str) -> Result<Modifier> {
	match normalise_key(input).as_str() {
		"bold" => Ok(Modifier::BOLD),
		"dim" => Ok(Modifier::DIM),
		"italic" => Ok(Modifier::ITALIC),
		"underline" | "underlined" => Ok(Modifier::UNDERLINED),
		"reversed" | "reverse" => Ok(Modifier::REVERSED),
		other => bail!("unknown modifier `{other}`"),
	}
}

fn normalise_key(value: &str) -> String {
	value
		.trim()
		.to_ascii_lowercase()
		.chars()
		.map(|ch| match ch {
			'-' | ' ' => '_',
			other => other,
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	const MINIMAL: &str = r##"
name = "mono"
aliases = [" plain ", ""]

[styles]
title = { modifiers = ["bold"] }
prompt = {}
placeholder = { fg = "dark-gray" }
border = { fg = "8" }
suggestion = {}
selected = { modifiers = ["reversed"] }
matched = { modifiers = ["bold"] }
link = { modifiers = ["underlined"] }
path = {}
muted = { modifiers = ["dim"] }
status = {}
error = { fg = "#ff0000" }
backdrop = { bg = "black" }
"##;

	#[test]
	fn minimal_theme_parses() {
		let (registration, is_default) =
			parse_theme_source(MINIMAL, "mono.toml").expect("theme parses");
		assert!(!is_default);
		assert_eq!(registration.name, "mono");
		assert_eq!(registration.aliases, ["plain"]);
		assert_eq!(registration.theme.error.fg, Some(Color::Rgb(255, 0, 0)));
		assert_eq!(registration.theme.border.fg, Some(Color::Indexed(8)));
		assert_eq!(registration.theme.placeholder.fg, Some(Color::DarkGray));
	}

	#[test]
	fn bad_colour_names_the_offending_key() {
		let source = MINIMAL.replace("#ff0000", "#ff00");
		let err = parse_theme_source(&source, "mono.toml").expect_err("invalid colour");
		assert!(format!("{err:#}").contains("styles.error"));
	}

	#[test]
	fn bundled_directory_has_one_default() {
		let builtins =
			load_builtin_themes(&super::super::BUILTIN_THEME_DIR).expect("bundled themes load");
		assert_eq!(builtins.registrations.len(), 2);
	}
}
