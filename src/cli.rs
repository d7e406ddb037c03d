use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use twolink::ElbowBranch;

/// Command line arguments for the kinematics front-end.
#[derive(Debug, Parser)]
#[command(version, propagate_version = true)]
#[command(about = "Planar two-link arm kinematics", long_about = None)]
pub struct Args {
    /// TOML file holding `length1` and `length2`.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Length of the first segment, overrides the configuration file.
    #[arg(long)]
    pub length1: Option<f64>,
    /// Length of the second segment, overrides the configuration file.
    #[arg(long)]
    pub length2: Option<f64>,
    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,
    /// Level of verbosity.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
    /// Solver to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Solver selection.
#[derive(Debug, Clone, Copy, PartialEq, Subcommand)]
pub enum Command {
    /// Position of the end-effector for the given joint angles in degrees.
    Forward {
        /// Base joint angle, counter-clockwise from the X axis.
        #[arg(allow_negative_numbers = true)]
        angle1: f64,
        /// Elbow joint angle, relative to the first segment.
        #[arg(allow_negative_numbers = true)]
        angle2: f64,
    },
    /// Joint angles that place the end-effector at the given position.
    Inverse {
        /// Target X coordinate.
        #[arg(allow_negative_numbers = true)]
        x: f64,
        /// Target Y coordinate.
        #[arg(allow_negative_numbers = true)]
        y: f64,
        /// Which of the two mirror solutions to return.
        #[arg(long, value_enum, default_value_t = Elbow::Up)]
        elbow: Elbow,
    },
}

/// Elbow branch as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Elbow {
    /// Positive elbow bend.
    Up,
    /// Negative elbow bend.
    Down,
}

impl From<Elbow> for ElbowBranch {
    fn from(value: Elbow) -> Self {
        match value {
            Elbow::Up => ElbowBranch::ElbowUp,
            Elbow::Down => ElbowBranch::ElbowDown,
        }
    }
}
