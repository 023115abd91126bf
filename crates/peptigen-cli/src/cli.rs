use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "peptigen - assemble peptide chain geometry from per-residue XYZ fragments.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assemble a peptide chain from one-letter amino-acid codes and write it as XYZ.
    Assemble(AssembleArgs),
    /// Assemble a chain, then repeatedly rotate its last residue's atoms.
    Rotate(RotateArgs),
    /// List the residue table and the geometry file each code resolves to.
    Residues(ResiduesArgs),
}

/// Arguments for the `assemble` subcommand.
#[derive(Args, Debug)]
pub struct AssembleArgs {
    /// Peptide string of one-letter amino-acid codes (e.g. "VVVVVV").
    #[arg(required = true, value_name = "PEPTIDE")]
    pub peptide: String,

    /// Path for the output XYZ file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    #[command(flatten)]
    pub source: SourceArgs,
}

/// Arguments for the `rotate` subcommand.
#[derive(Args, Debug)]
pub struct RotateArgs {
    /// Peptide string to assemble before rotating.
    #[arg(required = true, value_name = "PEPTIDE")]
    pub peptide: String,

    /// Scaled rotation axis "x,y,z"; its norm is the per-cycle angle in radians.
    #[arg(long, value_name = "X,Y,Z", default_value = "0.5,0.5,-0.5")]
    pub axis: String,

    /// Number of rotation cycles to apply to the last residue's atoms.
    #[arg(long, value_name = "INT", default_value_t = 1000)]
    pub cycles: usize,

    /// Optional path to write the rotated chain as XYZ.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub source: SourceArgs,
}

/// Arguments for the `residues` subcommand.
#[derive(Args, Debug)]
pub struct ResiduesArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

/// Where residue definitions and geometry files come from.
#[derive(Args, Debug)]
pub struct SourceArgs {
    /// Directory containing per-residue geometry files (L-<Name>.xyz).
    #[arg(long, value_name = "DIR")]
    pub geometry_dir: Option<PathBuf>,

    /// TOML file overriding the built-in residue table.
    #[arg(long, value_name = "PATH")]
    pub table: Option<PathBuf>,
}
