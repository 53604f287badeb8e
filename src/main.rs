use clap::Parser as _;
use rand::SeedableRng as _;

mod cli;
mod data;
mod metrics;
mod sorter;


/// Sizes covered by the comprehensive benchmark matrix
const COMPREHENSIVE_SIZES: [usize; 3] = [100, 1_000, 10_000];

/// Program entry point
fn main() {
    let args = cli::Args::parse();

    let mut rng = match args.seed {
        Some(seed) => rand::rngs::StdRng::seed_from_u64(seed),
        None => {
            println!("No seed provided, generating one using system rng");
            rand::rngs::StdRng::from_os_rng()
        }
    };

    if args.comprehensive {
        run_comprehensive(&mut rng, args.output.as_deref());
        return;
    }

    let data = args
        .data
        .expect("a data pattern is required without --comprehensive");

    println!(
        "Benchmarking insertion sort ({variant} variant)",
        variant = variant_label(args.optimized),
    );
    println!(
        "Runs: {runs}, Slice size: {size}, Data type: {data}",
        runs = args.runs,
        size = args.size,
    );

    perform_experiment(
        data,
        args.optimized,
        args.runs,
        args.size,
        &mut rng,
        args.output.as_deref(),
    );
}

/// Perform a time sampling experiment on the configured sorter
///
/// - runs: The number of samples to measure
/// - size: The size of the slices to sort
/// - rng: The rng used for sampling the data
fn perform_experiment(
    data: cli::DataType,
    optimized: bool,
    runs: usize,
    size: usize,
    rng: &mut rand::rngs::StdRng,
    output: Option<&std::path::Path>,
) {
    let mut sorter = sorter::InsertionSorter::new(optimized);
    let mut stats: rolling_stats::Stats<f64> = rolling_stats::Stats::new();

    let bar = indicatif::ProgressBar::new(runs as u64);

    for run in 0..=runs {
        let mut values = data::generate(data, size, rng);

        sorter
            .sort(Some(std::hint::black_box(values.as_mut_slice())))
            .expect("sequence is present");

        debug_assert!(
            sorter::is_sorted(Some(&values)),
            "run {run} was not sorted"
        );

        // Skip the first sample as warmup
        if run != 0 {
            stats.update(sorter.metrics().elapsed_millis());

            if let Some(path) = output {
                export_row(&sorter, path, size, data, optimized);
            }

            bar.inc(1);
        }
    }

    println!("{}", sorter.metrics());
    println!("Stats: {stats:?}");
}

/// Run every data pattern and both variants once per size in
/// [`COMPREHENSIVE_SIZES`]
fn run_comprehensive(rng: &mut rand::rngs::StdRng, output: Option<&std::path::Path>) {
    for size in COMPREHENSIVE_SIZES {
        for &data in <cli::DataType as clap::ValueEnum>::value_variants() {
            for optimized in [false, true] {
                let mut sorter = sorter::InsertionSorter::new(optimized);
                let mut values = data::generate(data, size, rng);

                sorter
                    .sort(Some(std::hint::black_box(values.as_mut_slice())))
                    .expect("sequence is present");

                debug_assert!(
                    sorter::is_sorted(Some(&values)),
                    "{size} {data} was not sorted"
                );

                println!(
                    "{size:>7} {data:<13} {variant}: {summary}",
                    data = data.to_string(),
                    variant = variant_label(optimized),
                    summary = sorter.metrics().compact(),
                );

                if let Some(path) = output {
                    export_row(&sorter, path, size, data, optimized);
                }
            }
        }
    }
}

/// Append the metrics of the last run to the CSV file at `path`
///
/// Export failures are reported and do not abort the benchmark.
fn export_row(
    sorter: &sorter::InsertionSorter,
    path: &std::path::Path,
    size: usize,
    data: cli::DataType,
    optimized: bool,
) {
    let label = format!("{data}_{variant}", variant = variant_label(optimized));

    if let Err(err) = sorter.metrics().export_csv(path, size, &label) {
        eprintln!("Failed to export CSV: {err}");
    }
}

/// Short name of the configured algorithm variant
fn variant_label(optimized: bool) -> &'static str {
    if optimized { "opt" } else { "std" }
}
