use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "triview",
    author,
    version,
    about = "Combined-source GLSL triangle viewer",
    arg_required_else_help = false
)]
pub struct Cli {
    #[command(flatten)]
    pub view: ViewArgs,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Parser, Debug)]
pub struct ViewArgs {
    /// Combined shader source file (`#shader vertex` / `#shader fragment` sections).
    #[arg(value_name = "SOURCE", default_value = "res/shaders/basic.shader")]
    pub source: PathBuf,

    /// Window size (e.g. `640x480`).
    #[arg(
        long,
        value_name = "WIDTHxHEIGHT",
        value_parser = parse_surface_size,
        default_value = "640x480"
    )]
    pub size: (u32, u32),

    /// Window title.
    #[arg(long, value_name = "TEXT", default_value = "Hello World")]
    pub title: String,

    /// Clear color as comma-separated RGB components in 0.0-1.0.
    #[arg(
        long,
        value_name = "R,G,B",
        value_parser = parse_clear_color,
        default_value = "0,0,0"
    )]
    pub clear_color: [f64; 3],
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Split the source file and report its stages without opening a window.
    Check(CheckArgs),
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Source file to inspect; defaults to the viewer's source argument.
    #[arg(value_name = "SOURCE")]
    pub source: Option<PathBuf>,
}

pub fn parse() -> Cli {
    Cli::parse()
}

pub fn parse_surface_size(value: &str) -> Result<(u32, u32), String> {
    let trimmed = value.trim();
    let (width, height) = trimmed
        .split_once(['x', 'X'])
        .ok_or_else(|| "expected WxH format, e.g. 640x480".to_string())?;

    let width: u32 = width
        .trim()
        .parse()
        .map_err(|_| format!("invalid width in size specification '{trimmed}'"))?;
    let height: u32 = height
        .trim()
        .parse()
        .map_err(|_| format!("invalid height in size specification '{trimmed}'"))?;

    if width == 0 || height == 0 {
        return Err("window dimensions must be greater than zero".to_string());
    }

    Ok((width, height))
}

pub fn parse_clear_color(value: &str) -> Result<[f64; 3], String> {
    let components: Vec<&str> = value.split(',').map(str::trim).collect();
    if components.len() != 3 {
        return Err("expected three comma-separated components, e.g. 0.1,0.2,0.3".to_string());
    }

    let mut color = [0.0; 3];
    for (slot, component) in color.iter_mut().zip(&components) {
        let parsed: f64 = component
            .parse()
            .map_err(|_| format!("invalid color component '{component}'"))?;
        if !(0.0..=1.0).contains(&parsed) {
            return Err(format!("color component {parsed} is outside 0.0-1.0"));
        }
        *slot = parsed;
    }

    Ok(color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_size_accepts_wxh() {
        assert_eq!(parse_surface_size("640x480").unwrap(), (640, 480));
        assert_eq!(parse_surface_size(" 1920X1080 ").unwrap(), (1920, 1080));
    }

    #[test]
    fn surface_size_rejects_zero_and_garbage() {
        assert!(parse_surface_size("0x480").is_err());
        assert!(parse_surface_size("640").is_err());
        assert!(parse_surface_size("wide x tall").is_err());
    }

    #[test]
    fn clear_color_accepts_rgb_triples() {
        assert_eq!(parse_clear_color("0,0,0").unwrap(), [0.0, 0.0, 0.0]);
        assert_eq!(
            parse_clear_color("0.1, 0.2, 0.3").unwrap(),
            [0.1, 0.2, 0.3]
        );
    }

    #[test]
    fn clear_color_rejects_out_of_range_components() {
        assert!(parse_clear_color("1.5,0,0").is_err());
        assert!(parse_clear_color("0,0").is_err());
        assert!(parse_clear_color("r,g,b").is_err());
    }

    #[test]
    fn cli_defaults_match_the_stock_window() {
        let cli = Cli::parse_from(["triview"]);
        assert_eq!(cli.view.size, (640, 480));
        assert_eq!(cli.view.title, "Hello World");
        assert_eq!(cli.view.source, PathBuf::from("res/shaders/basic.shader"));
        assert!(cli.command.is_none());
    }
}
