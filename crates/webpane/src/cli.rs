//! Command-line surface for the webpane binary.

use std::{num::ParseIntError, str::FromStr};

use clap::Parser;
use thiserror::Error;

use crate::logs::LogArgs;

/// Initial view rectangle in screen coordinates.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Frame {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// View width.
    pub width: i32,
    /// View height.
    pub height: i32,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            width: 300,
            height: 300,
        }
    }
}

/// Errors from parsing the `--frame` argument.
#[derive(Debug, Error, PartialEq)]
pub enum FrameError {
    /// The argument did not have exactly four comma-separated fields.
    #[error("expected four comma-separated integers (x,y,width,height), got {0} value(s)")]
    FieldCount(usize),

    /// One of the fields was not an integer.
    #[error("invalid integer in frame: {0}")]
    BadInteger(#[from] ParseIntError),
}

impl FromStr for Frame {
    type Err = FrameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 4 {
            return Err(FrameError::FieldCount(parts.len()));
        }
        let mut values = [0i32; 4];
        for (slot, part) in values.iter_mut().zip(&parts) {
            *slot = part.trim().parse()?;
        }
        Ok(Self {
            x: values[0],
            y: values[1],
            width: values[2],
            height: values[3],
        })
    }
}

/// Command-line interface for the `webpane` binary.
#[derive(Parser, Debug)]
#[command(
    name = "webpane",
    about = "Off-screen web view driven by a scripted input session",
    version
)]
pub struct Cli {
    /// Address to load in the view
    #[arg(long, short = 'u', default_value = "https://www.google.com")]
    pub url: String,

    /// Initial view rectangle as x,y,width,height
    #[arg(long, short = 'f', value_name = "X,Y,W,H")]
    pub frame: Option<Frame>,

    /// Logging controls
    #[command(flatten)]
    pub log: LogArgs,
}
