use std::path::PathBuf;

use spantree::Frontier;

/// Minimum spanning tree CLI (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "spantree", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Compute the minimum spanning tree of a weight matrix
    Mst(MstArgs),

    /// Check that a weight matrix is a valid, connected adjacency matrix
    Check(CheckArgs),
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, clap::ValueEnum)]
pub enum FrontierArg { Heap, Scan }

impl From<FrontierArg> for Frontier {
    fn from(arg: FrontierArg) -> Self {
        match arg {
            FrontierArg::Heap => Frontier::Heap,
            FrontierArg::Scan => Frontier::Scan,
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct MstArgs {
    /// Input weight matrix (headerless delimited text)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub matrix: PathBuf,

    /// Output tree matrix file, printed to stdout if omitted
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Value delimiter, used for both input and output
    #[arg(short, long, default_value_t = ',')]
    pub delimiter: char,

    /// Frontier ordering strategy
    #[arg(long, value_enum, default_value_t = FrontierArg::Heap)]
    pub frontier: FrontierArg,

    /// Validate the matrix before building the tree
    #[arg(long)]
    pub validate: bool,
}

#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    /// Input weight matrix (headerless delimited text)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub matrix: PathBuf,

    /// Value delimiter
    #[arg(short, long, default_value_t = ',')]
    pub delimiter: char,
}

/// Convert a delimiter argument to the single byte the reader expects.
pub fn delimiter_byte(delimiter: char) -> anyhow::Result<u8> {
    if !delimiter.is_ascii() { anyhow::bail!("delimiter must be a single ASCII character, got {delimiter:?}") }
    Ok(delimiter as u8)
}
