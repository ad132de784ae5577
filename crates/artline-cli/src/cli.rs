//! Command-line interface for the artline utility
//!
//! Provides a CLI to convert ASCII and box-drawing diagrams into SVG.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use regex::Regex;
use serde::Serialize;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::{debug, info_span};

use crate::colorizer::colorize_grid;
use artline::core::logging::init_logging;
use artline::detectors::Recognizer;
use artline::render::SvgRenderer;
use artline::{Diagram, DiagramError, Dialect, Grid, RenderConfig, Renderer};

/// Artline - Convert ASCII diagrams to SVG
#[derive(Parser)]
#[command(name = "artline")]
#[command(about = "A Rust utility to convert ASCII and box-drawing diagrams to SVG")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a diagram to an SVG document
    Convert {
        /// Input file containing the diagram (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file for the SVG document (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Which glyphs count as diagram syntax
        #[arg(long, value_enum, default_value_t = DialectChoice::Ascii)]
        dialect: DialectChoice,

        /// Stroke colour under a light colour scheme
        #[arg(long, default_value = "#000")]
        light_color: String,

        /// Stroke colour under a dark colour scheme
        #[arg(long, default_value = "#FFF")]
        dark_color: String,

        /// Omit the embedded stylesheet
        #[arg(long)]
        no_style: bool,

        /// Only keep input lines matching this regular expression
        #[arg(long, value_name = "REGEX")]
        line_filter: Option<String>,
    },

    /// Show how the input is split into graphics and text
    Inspect {
        /// Input file to analyze (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Which glyphs count as diagram syntax
        #[arg(long, value_enum, default_value_t = DialectChoice::Ascii)]
        dialect: DialectChoice,

        /// When to use colors in output
        #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
        color: ColorChoice,

        /// Print a JSON summary instead of the grid
        #[arg(long)]
        json: bool,
    },

    /// Check that the input is a well-formed diagram
    Validate {
        /// Input file to validate (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Which glyphs count as diagram syntax
        #[arg(long, value_enum, default_value_t = DialectChoice::Ascii)]
        dialect: DialectChoice,
    },

    /// Show supported input dialects
    Dialects {
        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    /// Subcommand name, as recorded on the command span
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Convert { .. } => "convert",
            Commands::Inspect { .. } => "inspect",
            Commands::Validate { .. } => "validate",
            Commands::Dialects { .. } => "dialects",
        }
    }
}

/// Supported input dialects
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum DialectChoice {
    /// `- | / \ + . ' o * ^ v < > ( )`
    #[default]
    Ascii,
    /// `─ │ ┌ ┐ └ ┘ ╭ ╮ ╰ ╯ ┼ ▶ ▼ ● ○`
    Unicode,
}

impl From<DialectChoice> for Dialect {
    fn from(value: DialectChoice) -> Self {
        match value {
            DialectChoice::Ascii => Dialect::Ascii,
            DialectChoice::Unicode => Dialect::Unicode,
        }
    }
}

/// When to colorize output
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Use colors if output is a terminal and NO_COLOR is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Primitive counts reported by `inspect --json`
#[derive(Debug, Default, Serialize, PartialEq, Eq)]
pub struct PrimitiveCounts {
    pub lines: usize,
    pub triangles: usize,
    pub circles: usize,
    pub rounded_corners: usize,
    pub bridges: usize,
    pub text: usize,
}

impl From<&Diagram> for PrimitiveCounts {
    fn from(diagram: &Diagram) -> Self {
        Self {
            lines: diagram.lines().count(),
            triangles: diagram.triangles().count(),
            circles: diagram.circles().count(),
            rounded_corners: diagram.rounded_corners().count(),
            bridges: diagram.bridges().count(),
            text: diagram.text().count(),
        }
    }
}

/// Summary printed by `inspect --json`
#[derive(Debug, Serialize)]
pub struct InspectSummary {
    pub dialect: String,
    pub width: usize,
    pub height: usize,
    pub graphics_cells: usize,
    pub text_cells: usize,
    pub primitives: PrimitiveCounts,
}

impl InspectSummary {
    pub fn new(grid: &Grid, diagram: &Diagram) -> Self {
        Self {
            dialect: grid.dialect().to_string(),
            width: grid.width(),
            height: grid.height(),
            graphics_cells: grid.graphics().len(),
            text_cells: grid.text_cells().len(),
            primitives: PrimitiveCounts::from(diagram),
        }
    }
}

/// Main CLI application
pub struct ArtlineApp {
    recognizer: Recognizer,
}

impl ArtlineApp {
    /// Create a new application instance with every built-in detector
    pub fn new() -> Self {
        Self {
            recognizer: Recognizer::with_default_detectors(),
        }
    }

    /// Run the application with the given CLI arguments
    pub fn run(&mut self, cli: Cli) -> Result<()> {
        // Environment variables take precedence over CLI flags
        let log_level_str = std::env::var("ARTLINE_LOG_LEVEL")
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .or_else(|| Some(cli.log_level.as_str().to_string()));

        let log_format_str = std::env::var("ARTLINE_LOG_FORMAT")
            .ok()
            .or_else(|| Some(cli.log_format.as_str().to_string()));

        if let Err(e) = init_logging(log_level_str.as_deref(), log_format_str.as_deref()) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("Artline v{}", env!("CARGO_PKG_VERSION"));
        }

        let command_span = info_span!("command", name = cli.command.name());
        let _enter = command_span.enter();

        match cli.command {
            Commands::Convert {
                input,
                output,
                dialect,
                light_color,
                dark_color,
                no_style,
                line_filter,
            } => {
                let config = RenderConfig::new(dialect.into())
                    .with_colors(light_color, dark_color)
                    .with_embed_style(!no_style);
                self.convert_command(input, output, &config, line_filter.as_deref(), cli.verbose)
            }
            Commands::Inspect {
                input,
                dialect,
                color,
                json,
            } => self.inspect_command(input, dialect.into(), color, json, cli.verbose),
            Commands::Validate { input, dialect } => {
                self.validate_command(input, dialect.into(), cli.verbose)
            }
            Commands::Dialects { json } => self.dialects_command(json, cli.verbose),
        }
    }

    /// Handle the convert command
    fn convert_command(
        &self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        config: &RenderConfig,
        line_filter: Option<&str>,
        verbose: bool,
    ) -> Result<()> {
        let content = self.read_input(input)?;
        debug!(bytes = content.len(), dialect = %config.dialect, "Read input");

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        let content = match line_filter {
            Some(pattern) => {
                let kept = filter_lines(&content, pattern)?;
                debug!(pattern, lines = kept.lines().count(), "Applied line filter");
                kept
            }
            None => content,
        };

        let svg = self.convert(&content, config)?;
        debug!(bytes = svg.len(), "Converted diagram");

        if verbose {
            eprintln!("Successfully converted diagram to SVG");
        }

        self.write_output(output, &svg)
    }

    /// Recognize and render one diagram
    pub fn convert(&self, content: &str, config: &RenderConfig) -> Result<String> {
        let diagram = self.recognizer.recognize(content, config.dialect)?;
        SvgRenderer::new(config.clone()).render(&diagram)
    }

    /// Handle the inspect command
    fn inspect_command(
        &self,
        input: Option<PathBuf>,
        dialect: Dialect,
        color: ColorChoice,
        json: bool,
        verbose: bool,
    ) -> Result<()> {
        let content = self.read_input(input)?;
        debug!(bytes = content.len(), %dialect, "Read input");

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        let grid = Grid::parse(&content, dialect)?;

        if json {
            let diagram = self.recognizer.recognize_grid(&grid);
            let summary = InspectSummary::new(&grid, &diagram);
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else if self.should_colorize(color) {
            print!("{}", colorize_grid(&grid));
            io::stdout().flush()?;
        } else {
            print!("{}", grid);
            io::stdout().flush()?;
        }

        Ok(())
    }

    /// Handle the validate command
    fn validate_command(&self, input: Option<PathBuf>, dialect: Dialect, verbose: bool) -> Result<()> {
        let content = self.read_input(input)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        match Grid::parse(&content, dialect) {
            Ok(grid) => {
                println!("✓ Valid {} diagram ({}x{})", dialect, grid.width(), grid.height());
                Ok(())
            }
            Err(e) => {
                println!("✗ Invalid {} diagram: {}", dialect, e);
                Err(e.into())
            }
        }
    }

    /// Handle the dialects command
    fn dialects_command(&self, json: bool, verbose: bool) -> Result<()> {
        if verbose {
            eprintln!("Listing supported dialects");
        }

        let described: Vec<(Dialect, &str)> = Dialect::variants()
            .iter()
            .map(|d| (*d, dialect_description(*d)))
            .collect();

        if json {
            let dialects: Vec<serde_json::Value> = described
                .iter()
                .map(|(dialect, description)| {
                    serde_json::json!({
                        "name": dialect.to_string(),
                        "description": description,
                        "default": *dialect == Dialect::default(),
                    })
                })
                .collect();
            let listing = serde_json::json!({
                "supported_dialects": dialects,
                "total": described.len(),
            });
            println!("{}", serde_json::to_string_pretty(&listing)?);
        } else {
            println!("Supported dialects:");
            for (dialect, description) in &described {
                println!("  {:<8} - {}", dialect.to_string(), description);
            }
            println!();
            println!("Total: {} dialects supported", described.len());
        }

        Ok(())
    }

    /// Determine if the grid printed to stdout should be colorized
    fn should_colorize(&self, color: ColorChoice) -> bool {
        match color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                std::env::var("NO_COLOR").is_err()
                    && crossterm::tty::IsTty::is_tty(&std::io::stdout())
            }
        }
    }

    /// Read input from file or stdin
    pub fn read_input(&self, input: Option<PathBuf>) -> Result<String> {
        match input {
            Some(path) if path.to_string_lossy() != "-" => fs::read_to_string(&path)
                .map_err(|e| anyhow!("Failed to read input file '{}': {}", path.display(), e)),
            _ => {
                let mut content = String::new();
                io::stdin()
                    .read_to_string(&mut content)
                    .map_err(DiagramError::from)?;
                Ok(content)
            }
        }
    }

    /// Write output to file or stdout
    pub fn write_output(&self, output: Option<PathBuf>, content: &str) -> Result<()> {
        match output {
            Some(path) if path.to_string_lossy() != "-" => {
                fs::write(&path, content).map_err(|e| {
                    anyhow!("Failed to write output file '{}': {}", path.display(), e)
                })?;
            }
            _ => {
                print!("{}", content);
                io::stdout().flush()?;
            }
        }
        Ok(())
    }
}

impl Default for ArtlineApp {
    fn default() -> Self {
        Self::new()
    }
}

fn dialect_description(dialect: Dialect) -> &'static str {
    match dialect {
        Dialect::Ascii => "ASCII art: - _ | / \\ + . ' o * ^ v < > ( )",
        Dialect::Unicode => "Box drawing: ─ │ ┌ ┐ └ ┘ ╭ ╮ ╰ ╯ ┼ ▶ ▼ ● ○",
    }
}

/// Keep only the input lines that match `pattern`
pub fn filter_lines(content: &str, pattern: &str) -> Result<String> {
    let regex =
        Regex::new(pattern).map_err(|e| anyhow!("Invalid line filter '{}': {}", pattern, e))?;
    let mut kept = String::with_capacity(content.len());
    for line in content.lines().filter(|line| regex.is_match(line)) {
        kept.push_str(line);
        kept.push('\n');
    }
    Ok(kept)
}
