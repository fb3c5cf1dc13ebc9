//main.rs
use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use kmeans2d::{DataSet, InitialCentroids, KMeansConfig, MeanMode};

#[derive(Parser)]
#[clap(version = "0.3.0", author = "Stefan L. <stefan.lang@med.lu.se>")]
struct Opts {
    /// Input file, one whitespace separated `x y` pair per line
    #[clap(short, long, default_value = "kmeans-data.txt")]
    file: String,

    /// Number of clusters
    #[clap(short, long)]
    k: usize,

    /// Output file, one `x y label` line per input point
    #[clap(short, long, default_value = "kmeans-output.txt")]
    outfile: String,

    /// Maximum number of assign/update iterations
    #[clap(short, long, default_value_t = kmeans2d::DEFAULT_MAX_ITERATIONS)]
    max_iter: usize,

    /// Initial centroid as "x y"; give it k times. Random points are used otherwise
    #[clap(short, long, allow_hyphen_values = true)]
    centroid: Vec<String>,

    /// Seed for the random centroid choice
    #[clap(short, long)]
    seed: Option<u64>,

    /// Truncate centroid means toward zero (legacy output compatibility)
    #[clap(long)]
    truncate_means: bool,

    /// Treat centroid moves up to this size as converged (default: exact equality)
    #[clap(long)]
    tolerance: Option<f64>,

    /// Lower k to the number of points instead of failing
    #[clap(long)]
    clamp_k: bool,
}

fn main() -> anyhow::Result<()> {
    let env = Env::default().filter_or("RUST_LOG", "info");
    env_logger::init_from_env(env);

    let opts = Opts::parse();

    let ds = DataSet::from_path(&opts.file)
        .with_context(|| format!("Failed to load points from {:?}", opts.file))?;
    println!("Loaded {} points", ds.len());

    let init = if opts.centroid.is_empty() {
        InitialCentroids::Random
    } else {
        InitialCentroids::parse_custom(opts.centroid.as_slice())?
    };

    let mut config = KMeansConfig::new(opts.k)
        .with_max_iterations(opts.max_iter)
        .with_init(init);
    if opts.truncate_means {
        config = config.with_mean_mode(MeanMode::Truncate);
    }
    if let Some(eps) = opts.tolerance {
        config = config.with_tolerance(eps);
    }
    if let Some(seed) = opts.seed {
        config = config.with_seed(seed);
    }
    if opts.clamp_k {
        config.clamp_k(ds.len());
    }
    config.validate(ds.len())?;

    let res = ds.kmeans(&config)?;
    println!(
        "Assigned {} points into {} clusters after {} iterations ({:?})",
        res.labels.len(),
        config.k,
        res.iterations,
        res.termination
    );

    res.write_path(&ds, &opts.outfile)
        .with_context(|| format!("Failed to write {:?}", opts.outfile))?;

    Ok(())
}
