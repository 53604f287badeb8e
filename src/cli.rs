//! Command line input handling

/// Command line arguments
#[derive(clap::Parser)]
#[command(author, version, about, disable_help_subcommand = true)]
pub struct Args {
    /// The input data pattern to benchmark
    #[arg(required_unless_present = "comprehensive")]
    pub data: Option<DataType>,
    /// Use the binary-search variant instead of the linear scan
    #[arg(long)]
    pub optimized: bool,
    /// The number of runs to do
    #[arg(short, long, default_value_t = 100)]
    pub runs: usize,
    /// The size of the slices to sort
    #[arg(short, long, default_value_t = 10_000)]
    pub size: usize,
    /// Run every data pattern and both variants over a fixed set of sizes
    #[arg(long)]
    pub comprehensive: bool,
    /// Seed for the rng
    #[arg(long)]
    pub seed: Option<u64>,
    /// The CSV file to append per-run metrics to
    #[arg(short, long)]
    pub output: Option<std::path::PathBuf>,
}

/// Available input data patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DataType {
    /// Uniformly random values
    Random,
    /// Already in ascending order
    Sorted,
    /// In descending order
    Reverse,
    /// Ascending order disturbed by a few random swaps
    NearlySorted,
    /// Random values drawn from a small pool
    Duplicates,
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(clap::ValueEnum::to_possible_value(self).unwrap().get_name())
    }
}
