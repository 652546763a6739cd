//! Tutorial walkthrough of the cursor and tree APIs
//!
//! Each [`Part`] renders one short lesson to any `io::Write`. The CLI in
//! `main.rs` is a thin shell around [`run`] and [`list`].

mod parts;

use crate::CollectionError;
use colored::{Color, Colorize};
use std::fmt;
use std::io::{self, Write};
use thiserror::Error;

/// Errors raised while rendering a walkthrough
#[derive(Debug, Error)]
pub enum DemoError {
    /// Output could not be written
    #[error("failed to write demo output: {0}")]
    Io(#[from] io::Error),

    /// A cursor session could not be built
    #[error(transparent)]
    Collection(#[from] CollectionError),

    /// Requested part number does not exist
    #[error("part {requested} isn't available (parts run from 1 to {available})")]
    UnknownPart {
        /// Part number asked for
        requested: usize,
        /// Highest valid part number
        available: usize,
    },
}

/// One lesson of the walkthrough
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    /// Creating and destroying a cursor
    Lifecycle,
    /// Filling a cursor from a source
    Populate,
    /// The three end policies
    Movement,
    /// Peek and index over a flattened tree
    Getters,
}

impl Part {
    /// All parts in walkthrough order
    pub const ALL: [Part; 4] = [Part::Lifecycle, Part::Populate, Part::Movement, Part::Getters];

    /// Look up a part by its 1-based number
    pub fn from_number(number: usize) -> Result<Self, DemoError> {
        number
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index).copied())
            .ok_or(DemoError::UnknownPart {
                requested: number,
                available: Self::ALL.len(),
            })
    }

    /// 1-based part number
    pub fn number(self) -> usize {
        match self {
            Part::Lifecycle => 1,
            Part::Populate => 2,
            Part::Movement => 3,
            Part::Getters => 4,
        }
    }

    /// One-line description used in titles and listings
    pub fn description(self) -> &'static str {
        match self {
            Part::Lifecycle => "Cursor constructor and destructor",
            Part::Populate => "Cursor set data and create from",
            Part::Movement => "Cursor movement and end policies",
            Part::Getters => "Cursor getters over a flattened tree",
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}. {}", self.number(), self.description())
    }
}

/// Values inserted into the tree in the getters lesson
pub const DEFAULT_FLOATS: [f32; 6] = [2.0, 1.0, 0.5, 3.14159, 6.2831, 1.4142];

/// Walkthrough configuration
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// Emit ANSI colors
    pub color: bool,

    /// Values fed to the tree in the getters lesson
    pub floats: Vec<f32>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            color: true,
            floats: DEFAULT_FLOATS.to_vec(),
        }
    }
}

impl DemoConfig {
    /// Enable or disable colored output
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Replace the getters lesson input (empty keeps the defaults)
    pub fn with_floats(mut self, floats: Vec<f32>) -> Self {
        if !floats.is_empty() {
            self.floats = floats;
        }
        self
    }

    fn paint(&self, text: impl fmt::Display, color: Color) -> String {
        let text = text.to_string();
        if self.color {
            text.color(color).to_string()
        } else {
            text
        }
    }
}

/// Kind of tagged message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Note,
    Help,
}

impl Tag {
    fn label(self) -> (&'static str, Color) {
        match self {
            Tag::Note => ("note", Color::BrightCyan),
            Tag::Help => ("help", Color::BrightMagenta),
        }
    }
}

/// Render `part` with its title
pub fn run<W: Write>(part: Part, config: &DemoConfig, out: &mut W) -> Result<(), DemoError> {
    tracing::debug!(part = part.number(), "running walkthrough part");
    write_title(part, config, out)?;
    match part {
        Part::Lifecycle => parts::lifecycle(config, out),
        Part::Populate => parts::populate(config, out),
        Part::Movement => parts::movement(config, out),
        Part::Getters => parts::getters(config, out),
    }
}

/// Render the list of available parts
pub fn list<W: Write>(config: &DemoConfig, out: &mut W) -> Result<(), DemoError> {
    write_tag(
        out,
        config,
        Tag::Help,
        "the cursor walkthrough is split into parts; run one with `citer part <N>`:",
    )?;
    writeln!(out)?;
    for part in Part::ALL {
        writeln!(
            out,
            "  {} {}",
            config.paint(format!("{:02}.", part.number()), Color::BrightCyan),
            part.description()
        )?;
    }
    Ok(())
}

fn write_title<W: Write>(part: Part, config: &DemoConfig, out: &mut W) -> Result<(), DemoError> {
    let title = part.to_string();
    writeln!(out, "{}", config.paint(&title, Color::BrightWhite))?;
    writeln!(out, "{}", "=".repeat(title.chars().count()))?;
    writeln!(out)?;
    Ok(())
}

fn write_tag<W: Write>(
    out: &mut W,
    config: &DemoConfig,
    tag: Tag,
    message: &str,
) -> Result<(), DemoError> {
    let (label, color) = tag.label();
    writeln!(out, "{}: {}", config.paint(label, color), message)?;
    Ok(())
}
