//! Plinth CLI - resolve style values from the command line
//!
//! Usage:
//!   plinth length <value>                 Parse a length and resolve it to pixels
//!   plinth percentage <value> [--parent]  Parse a percentage
//!   plinth spacing <value>                Parse a single non-negative spacing
//!   plinth box <value>                    Expand a margin/padding shorthand
//!   plinth size <value> [--parent]        Parse a width/height value
//!   plinth calc <value>                   Parse and evaluate a calc() expression
//!   plinth color <value> [manipulations]  Parse and transform a color
//!
//! Examples:
//!   plinth box "10px calc(1rem + 5px)" --font-size 20
//!   plinth size "calc(100% - 40px)" --parent 800
//!   plinth color "#ff8800" --lighten 10 --json

use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand};
use owo_colors::OwoColorize;
use plinth_common::warning::warn_once;
use plinth_values::{
    CalcExpression, DEFAULT_FONT_SIZE_PX, DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH, Length,
    Percentage, ResolutionContext, Rgb, Size, Spacing, parse_shorthand, split_values,
};
use serde_json::{Value, json};

#[derive(Parser, Debug)]
#[command(name = "plinth", version, about = "Resolve CSS style values to design-tool numbers")]
struct Cli {
    #[command(flatten)]
    context: ContextArgs,

    /// Print JSON instead of text
    #[arg(long, short = 'j', global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

/// Resolution context for relative units.
#[derive(Args, Debug)]
struct ContextArgs {
    /// Viewport width in pixels (for vw)
    #[arg(long, global = true, env = "PLINTH_VIEWPORT_WIDTH", default_value_t = DEFAULT_VIEWPORT_WIDTH)]
    viewport_width: f64,

    /// Viewport height in pixels (for vh)
    #[arg(long, global = true, env = "PLINTH_VIEWPORT_HEIGHT", default_value_t = DEFAULT_VIEWPORT_HEIGHT)]
    viewport_height: f64,

    /// Base font size in pixels (for rem and em)
    #[arg(long, global = true, env = "PLINTH_FONT_SIZE", default_value_t = DEFAULT_FONT_SIZE_PX)]
    font_size: f64,
}

impl ContextArgs {
    fn resolve(&self) -> ResolutionContext {
        ResolutionContext::new(self.viewport_width, self.viewport_height, self.font_size)
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// `<number><px|rem|em|vh|vw>`
    Length {
        /// The style value
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// `<number>%`
    Percentage {
        /// The style value
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Parent size to resolve against
        #[arg(long, default_value_t = 100.0)]
        parent: f64,
    },
    /// A single padding/margin value
    Spacing {
        /// The style value
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// A 1-4 value margin/padding shorthand
    #[command(name = "box")]
    Shorthand {
        /// The style value
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// A width/height value
    Size {
        /// The style value
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Parent size to resolve percentages against
        #[arg(long)]
        parent: Option<f64>,
    },
    /// A calc() expression
    Calc {
        /// The style value
        value: String,
    },
    /// A hex, rgb()/rgba() or named color
    Color(ColorArgs),
}

/// Manipulations are applied in the order the flags are listed here.
#[derive(Args, Debug)]
struct ColorArgs {
    /// The style value
    value: String,
    /// Raise lightness by N percentage points
    #[arg(long)]
    lighten: Option<f64>,
    /// Lower lightness by N percentage points
    #[arg(long)]
    darken: Option<f64>,
    /// Raise saturation by N percentage points
    #[arg(long)]
    saturate: Option<f64>,
    /// Lower saturation by N percentage points
    #[arg(long)]
    desaturate: Option<f64>,
    /// Convert to luma-weighted gray
    #[arg(long)]
    grayscale: bool,
    /// Invert every channel
    #[arg(long)]
    invert: bool,
    /// Mix with another color
    #[arg(long)]
    mix: Option<String>,
    /// Weight of the --mix color, 0 to 1
    #[arg(long, default_value_t = 0.5)]
    weight: f64,
}

/// What a subcommand resolved.
struct Report {
    title: String,
    lines: Vec<(&'static str, String)>,
    json: Value,
    swatch: Option<[u8; 3]>,
}

impl Report {
    fn new(title: impl Into<String>, json: Value) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
            json,
            swatch: None,
        }
    }

    fn line(mut self, label: &'static str, value: impl ToString) -> Self {
        self.lines.push((label, value.to_string()));
        self
    }

    fn print(&self) {
        println!("{}", self.title.bold());
        for (label, value) in &self.lines {
            println!("  {:>10}: {value}", label.dimmed());
        }
        if let Some([r, g, b]) = self.swatch {
            println!("  {:>10}: {}", "swatch".dimmed(), "        ".on_truecolor(r, g, b));
        }
    }
}

/// Report a rejected value and fail.
fn reject<T>(component: &str, value: &str, reason: &str) -> Result<T> {
    warn_once(component, reason);
    bail!("could not resolve {} value '{value}'", component.to_ascii_lowercase())
}

/// The alphabetic suffix of a `<number><unit>` string, if any.
fn unit_suffix(value: &str) -> &str {
    value
        .trim()
        .trim_start_matches(|c: char| c.is_ascii_digit() || matches!(c, '.' | '-' | '+'))
}

fn run(cli: &Cli) -> Result<Report> {
    let ctx = cli.context.resolve();

    match &cli.command {
        Command::Length { value } => length(value, &ctx),
        Command::Percentage { value, parent } => percentage(value, *parent),
        Command::Spacing { value } => spacing(value, &ctx),
        Command::Shorthand { value } => spacing_box(value, &ctx),
        Command::Size { value, parent } => size(value, *parent, &ctx),
        Command::Calc { value } => calc(value, &ctx),
        Command::Color(args) => color(args),
    }
}

fn length(value: &str, ctx: &ResolutionContext) -> Result<Report> {
    let Some(length) = Length::parse(value) else {
        let suffix = unit_suffix(value);
        let reason = if suffix.is_empty() || !suffix.chars().all(|c| c.is_ascii_alphabetic()) {
            format!("'{value}' is not <number><unit>")
        } else {
            format!("unsupported unit '{suffix}'")
        };
        return reject("Length", value, &reason);
    };

    let pixels = length.to_pixels(ctx);
    Ok(Report::new(
        format!("length {length}"),
        json!({ "length": length, "pixels": pixels }),
    )
    .line("value", length.value())
    .line("unit", length.unit())
    .line("pixels", pixels))
}

fn percentage(value: &str, parent: f64) -> Result<Report> {
    let Some(percentage) = Percentage::parse(value) else {
        return reject("Percentage", value, &format!("'{value}' has no trailing '%'"));
    };

    let pixels = percentage.to_pixels(parent);
    Ok(Report::new(
        format!("percentage {percentage}"),
        json!({
            "percentage": percentage,
            "decimal": percentage.to_decimal(),
            "parent": parent,
            "pixels": pixels,
        }),
    )
    .line("decimal", percentage.to_decimal())
    .line("parent", parent)
    .line("pixels", pixels))
}

fn spacing(value: &str, ctx: &ResolutionContext) -> Result<Report> {
    let Some(spacing) = Spacing::parse(value, ctx) else {
        return reject("Spacing", value, &format!("'{value}' is not a length, number or calc()"));
    };

    Ok(
        Report::new(format!("spacing {value}"), json!({ "spacing": spacing }))
            .line("pixels", spacing.to_pixels()),
    )
}

fn spacing_box(value: &str, ctx: &ResolutionContext) -> Result<Report> {
    let tokens = split_values(value);
    let Some(sides) = parse_shorthand(value, ctx) else {
        let reason = tokens
            .iter()
            .find_map(|token| match token.as_str() {
                "auto" | "inherit" | "initial" => Some(format!("shorthand token '{token}' is a keyword")),
                _ if Spacing::parse(token, ctx).is_none() => {
                    Some(format!("shorthand token '{token}' is not a spacing value"))
                }
                _ => None,
            })
            .unwrap_or_else(|| "empty shorthand".to_string());
        return reject("Shorthand", value, &reason);
    };

    Ok(Report::new(
        format!("box {value}"),
        json!({ "tokens": tokens, "box": sides }),
    )
    .line("tokens", tokens.join(" | "))
    .line("top", sides.top)
    .line("right", sides.right)
    .line("bottom", sides.bottom)
    .line("left", sides.left))
}

fn size(value: &str, parent: Option<f64>, ctx: &ResolutionContext) -> Result<Report> {
    let Some(size) = Size::parse(value, ctx) else {
        return reject("Size", value, &format!("'{value}' is not a size"));
    };

    let pixels = parent.and_then(|parent| size.to_pixels(parent));
    let mut report = Report::new(
        format!("size {value}"),
        json!({ "size": size, "pixels": pixels }),
    )
    .line("resolved", size);
    if let Some(pixels) = pixels {
        report = report.line("pixels", pixels);
    }
    Ok(report)
}

fn calc(value: &str, ctx: &ResolutionContext) -> Result<Report> {
    let Some(expr) = CalcExpression::new(value) else {
        return reject("Calc", value, &format!("'{value}' is not wrapped in calc( … )"));
    };

    let operation = expr.parse();
    let pixels = expr.evaluate(ctx);
    let percentage_minus_pixels = expr.percentage_minus_pixels();

    if operation.is_none() && percentage_minus_pixels.is_none() {
        return reject(
            "Calc",
            value,
            &format!("unsupported expression '{}'", expr.content()),
        );
    }

    let mut report = Report::new(
        format!("calc {}", expr.content()),
        json!({
            "operation": operation,
            "pixels": pixels,
            "percentageMinusPixels": percentage_minus_pixels
                .map(|(percentage, px)| json!({ "percentage": percentage, "pixels": px })),
        }),
    );
    if let Some(operation) = operation {
        report = report.line("operation", operation);
    }
    if let Some(pixels) = pixels {
        report = report.line("pixels", pixels);
    }
    if let Some((percentage, px)) = percentage_minus_pixels {
        report = report.line("as size", format!("{percentage} (minus {px}px)"));
    }
    Ok(report)
}

fn color(args: &ColorArgs) -> Result<Report> {
    let Some(mut color) = Rgb::parse(&args.value) else {
        return reject("Color", &args.value, &format!("unknown color '{}'", args.value));
    };

    if let Some(amount) = args.lighten {
        color = color.lighten(amount);
    }
    if let Some(amount) = args.darken {
        color = color.darken(amount);
    }
    if let Some(amount) = args.saturate {
        color = color.saturate(amount);
    }
    if let Some(amount) = args.desaturate {
        color = color.desaturate(amount);
    }
    if args.grayscale {
        color = color.grayscale();
    }
    if args.invert {
        color = color.invert();
    }
    if let Some(other) = &args.mix {
        let Some(other_color) = Rgb::parse(other) else {
            return reject("Color", other, &format!("unknown mix color '{other}'"));
        };
        color = color.mix(other_color, args.weight);
    }

    let hsl = color.to_hsl();
    let mut report = Report::new(
        format!("color {}", args.value),
        json!({
            "rgb": color,
            "hex": color.to_hex(),
            "hsl": hsl,
        }),
    )
    .line("hex", color.to_hex())
    .line("rgb", color.to_rgb_string())
    .line("hsl", hsl);
    report.swatch = Some(color.to_bytes());
    Ok(report)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let report = run(&cli)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report.json)?);
    } else {
        report.print();
    }

    Ok(())
}
