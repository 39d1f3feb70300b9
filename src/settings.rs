//! Command-line settings for the two binaries.

use std::path::PathBuf;

use crate::error::SettingsError;
use crate::fixtures::{Point3, TreeGeometry};
use crate::output::OutputMode;
use crate::patterns::PatternKind;

pub const DEFAULT_FPS: u32 = 20;
pub const DEFAULT_LAYOUT_OUTPUT: &str = "willow_tree.json";

#[derive(Debug, Clone, PartialEq)]
pub struct EngineSettings {
    pub layout: PathBuf,
    pub server: String,
    /// Parsed for compatibility; patterns run at `patterns::FRAMES_PER_SECOND`.
    pub fps: u32,
    pub pattern: PatternKind,
    pub output: OutputMode,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            layout: PathBuf::new(),
            server: opc::types::DEFAULT_SERVER.to_string(),
            fps: DEFAULT_FPS,
            pattern: PatternKind::default(),
            output: OutputMode::default(),
        }
    }
}

pub const ENGINE_USAGE: &str = "\
Usage: willow --layout FILE [options]

Options:
  -h, --help               show this help message and exit
  -l, --layout FILE        layout file
  -s, --server HOST:PORT   ip and port of server [default: 127.0.0.1:7890]
  -f, --fps N              frames per second [default: 20]
  -p, --pattern NAME       lava, raver, diagnostic or sparkle [default: lava]
  -o, --output MODE        simulator (one channel) or tree (channel per vine)
                           [default: simulator]";

impl EngineSettings {
    /// Parse arguments (without the program name).
    pub fn parse(args: &[String]) -> Result<Self, SettingsError> {
        let mut settings = Self::default();
        let mut layout = None;
        let mut iter = args.iter();

        while let Some(arg) = iter.next() {
            let (flag, inline) = split_flag(arg);
            match flag {
                "-h" | "--help" => return Err(SettingsError::HelpRequested),
                "-l" | "--layout" => {
                    layout = Some(PathBuf::from(take_value(flag, inline, &mut iter)?));
                }
                "-s" | "--server" => {
                    settings.server = take_value(flag, inline, &mut iter)?;
                }
                "-f" | "--fps" => {
                    let value = take_value(flag, inline, &mut iter)?;
                    settings.fps = parse_number(flag, &value)?;
                }
                "-p" | "--pattern" => {
                    let value = take_value(flag, inline, &mut iter)?;
                    settings.pattern = value
                        .parse()
                        .map_err(|reason| invalid(flag, &value, reason))?;
                }
                "-o" | "--output" => {
                    let value = take_value(flag, inline, &mut iter)?;
                    settings.output = value
                        .parse()
                        .map_err(|reason| invalid(flag, &value, reason))?;
                }
                _ => return Err(SettingsError::UnknownFlag(arg.clone())),
            }
        }

        match layout {
            Some(path) if !path.as_os_str().is_empty() => settings.layout = path,
            _ => return Err(SettingsError::MissingLayout),
        }
        Ok(settings)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSettings {
    pub output: PathBuf,
    pub geometry: TreeGeometry,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_LAYOUT_OUTPUT),
            geometry: TreeGeometry::default(),
        }
    }
}

pub const LAYOUT_USAGE: &str = "\
Usage: willow-layout [options]

Options:
  -h, --help               show this help message and exit
  -o, --output FILE        where to write the layout [default: willow_tree.json]
  -c, --center X,Y,Z       tree center [default: 0,0,3]
  -r, --inner-radius R     trunk to first vine [default: 0.6]
  -d, --vine-spacing D     distance between vines on a branch [default: 0.3]";

impl LayoutSettings {
    pub fn parse(args: &[String]) -> Result<Self, SettingsError> {
        let mut settings = Self::default();
        let mut iter = args.iter();

        while let Some(arg) = iter.next() {
            let (flag, inline) = split_flag(arg);
            match flag {
                "-h" | "--help" => return Err(SettingsError::HelpRequested),
                "-o" | "--output" => {
                    settings.output = PathBuf::from(take_value(flag, inline, &mut iter)?);
                }
                "-c" | "--center" => {
                    let value = take_value(flag, inline, &mut iter)?;
                    settings.geometry.center = parse_point(flag, &value)?;
                }
                "-r" | "--inner-radius" => {
                    let value = take_value(flag, inline, &mut iter)?;
                    settings.geometry.inner_radius = parse_number(flag, &value)?;
                }
                "-d" | "--vine-spacing" => {
                    let value = take_value(flag, inline, &mut iter)?;
                    settings.geometry.vine_spacing = parse_number(flag, &value)?;
                }
                _ => return Err(SettingsError::UnknownFlag(arg.clone())),
            }
        }
        Ok(settings)
    }
}

/// Split `--flag=value` into its parts; other arguments pass through whole.
fn split_flag(arg: &str) -> (&str, Option<&str>) {
    if arg.starts_with("--") {
        if let Some((flag, value)) = arg.split_once('=') {
            return (flag, Some(value));
        }
    }
    (arg, None)
}

fn take_value<'a>(
    flag: &str,
    inline: Option<&str>,
    iter: &mut impl Iterator<Item = &'a String>,
) -> Result<String, SettingsError> {
    if let Some(value) = inline {
        return Ok(value.to_string());
    }
    iter.next()
        .cloned()
        .ok_or_else(|| SettingsError::MissingValue(flag.to_string()))
}

fn invalid(flag: &str, value: &str, reason: impl ToString) -> SettingsError {
    SettingsError::InvalidValue {
        flag: flag.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_number<T>(flag: &str, value: &str) -> Result<T, SettingsError>
where
    T: std::str::FromStr,
    T::Err: ToString,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| invalid(flag, value, e))
}

fn parse_point(flag: &str, value: &str) -> Result<Point3, SettingsError> {
    let parts: Vec<&str> = value.split(',').collect();
    if parts.len() != 3 {
        return Err(invalid(flag, value, "expected X,Y,Z"));
    }
    Ok(Point3::new(
        parse_number(flag, parts[0])?,
        parse_number(flag, parts[1])?,
        parse_number(flag, parts[2])?,
    ))
}
