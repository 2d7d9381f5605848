use anyhow::{bail, Context};
use clap::{Arg, ArgAction, ArgMatches, Command};
use log::{error, info};

use std::path::{Path, PathBuf};

use glitchsort::config::{LineOptions, Mode, SortConfig};
use glitchsort::lines::{LineOrder, Sequential};
use glitchsort::weight::Weight;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let matches = Command::new("glitchsort")
        .version(clap::crate_version!())
        .author(clap::crate_authors!())
        .arg(
            Arg::new("input")
                .help("The input images to sort.")
                .required(true)
                .num_args(1..)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .args([
            arg_mode(),
            arg_threshold(),
            arg_black(),
            arg_white(),
            arg_weight(),
            arg_random(),
            arg_seed(),
            arg_rows_only(),
            arg_columns_only(),
            arg_desync(),
            arg_output(),
        ])
        .get_matches();

    if let Err(e) = run(&matches) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let config = config(matches)?;
    // fail before touching any file
    config.passes().context("invalid sort configuration")?;

    let inputs: Vec<&PathBuf> = matches
        .get_many::<PathBuf>("input")
        .map(Iterator::collect)
        .unwrap_or_default();
    let output = matches.get_one::<PathBuf>("output");
    if output.is_some() && inputs.len() > 1 {
        bail!("--output only works with a single input image");
    }

    let mut order = line_order(matches);
    let mut failed = 0;
    for input in &inputs {
        let output = output
            .cloned()
            .unwrap_or_else(|| default_output(input));
        match sort_file(input, &output, &config, order.as_mut()) {
            Ok(()) => info!("{} -> {}", input.display(), output.display()),
            Err(e) => {
                error!("{}: {:#}", input.display(), e);
                failed += 1;
            }
        }
    }
    if failed > 0 {
        bail!("{} of {} images failed", failed, inputs.len());
    }
    Ok(())
}

fn sort_file(
    input: &Path,
    output: &Path,
    config: &SortConfig,
    order: &mut dyn LineOrder,
) -> anyhow::Result<()> {
    let mut image = image::open(input)
        .context("failed to read input image")?
        .to_rgb8();
    glitchsort::sort_image(&mut image, config, order)?;
    image
        .save(output)
        .with_context(|| format!("failed to write {}", output.display()))?;
    Ok(())
}

fn config(matches: &ArgMatches) -> anyhow::Result<SortConfig> {
    let mode = matches
        .get_one::<String>("mode")
        .map(|s| s.parse::<Mode>())
        .transpose()
        .map_err(|s| anyhow::anyhow!("unknown mode `{}`", s))?
        .unwrap_or_default();
    let weight = matches
        .get_one::<String>("weight")
        .map(|s| s.parse::<Weight>())
        .transpose()
        .map_err(|s| anyhow::anyhow!("unknown weight `{}`", s))?
        .unwrap_or_default();
    let defaults = SortConfig::default();
    Ok(SortConfig {
        mode,
        thresholds: matches
            .get_many::<u32>("threshold")
            .map(|values| values.copied().collect())
            .unwrap_or_default(),
        black: matches.get_one::<u32>("black").copied().unwrap_or(defaults.black),
        white: matches.get_one::<u32>("white").copied().unwrap_or(defaults.white),
        weight,
        lines: LineOptions {
            rows: !matches.get_flag("columns_only"),
            columns: !matches.get_flag("rows_only"),
            sync_weights: !matches.get_flag("desync"),
        },
    })
}

#[cfg(feature = "rand")]
fn line_order(matches: &ArgMatches) -> Box<dyn LineOrder> {
    use glitchsort::lines::RandomSkip;
    use rand::{rngs::StdRng, SeedableRng};

    if !matches.get_flag("random") {
        return Box::new(Sequential);
    }
    let rng = match matches.get_one::<u64>("seed") {
        Some(&seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    Box::new(RandomSkip::new(rng))
}

#[cfg(not(feature = "rand"))]
fn line_order(_: &ArgMatches) -> Box<dyn LineOrder> {
    Box::new(Sequential)
}

/// `dir/name.ext` becomes `dir/name_sorted.ext`.
fn default_output(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(std::ffi::OsStr::to_str)
        .unwrap_or("image");
    let extension = input
        .extension()
        .and_then(std::ffi::OsStr::to_str)
        .unwrap_or("png");
    input.with_file_name(format!("{}_sorted.{}", stem, extension))
}

fn arg_mode() -> Arg {
    Arg::new("mode")
        .short('m')
        .long("mode")
        .help("What parts of each line get sorted.")
        .long_help(
            "What parts of each line get sorted.\n\
             \n\
             black: runs of dark pixels\n\
             brightness: whole lines\n\
             white: runs of bright pixels\n\
             both: black runs, then white runs of the result\n\
             custom: runs selected by --threshold",
        )
        .value_parser(["black", "brightness", "white", "both", "custom"])
        .default_value("brightness")
}

fn arg_threshold() -> Arg {
    Arg::new("threshold")
        .short('t')
        .long("threshold")
        .help("Thresholds used by the custom mode.")
        .long_help(
            "Thresholds used by the custom mode, in the range [0;255].\n\
             \n\
             With one value, runs of pixels weighing at least that much are sorted.\n\
             With two values, runs of pixels weighing at least the first and less than the second are sorted.",
        )
        .num_args(1..)
        .value_parser(clap::value_parser!(u32))
        .required_if_eq("mode", "custom")
}

fn arg_black() -> Arg {
    Arg::new("black")
        .long("black")
        .help("Weight at or below which a pixel counts as black.")
        .default_value("60")
        .value_parser(clap::value_parser!(u32))
}

fn arg_white() -> Arg {
    Arg::new("white")
        .long("white")
        .help("Weight at or above which a pixel counts as white.")
        .default_value("150")
        .value_parser(clap::value_parser!(u32))
}

fn arg_weight() -> Arg {
    Arg::new("weight")
        .short('w')
        .long("weight")
        .help("The per pixel weight used to find intervals and sort them.")
        .value_parser(["brightness", "darkness", "lightness", "intensity", "minimum"])
        .default_value("brightness")
}

fn arg_random() -> Arg {
    Arg::new("random")
        .short('r')
        .long("random")
        .help("Randomly select the rows and columns to sort.")
        .long_help(
            "Randomly select the rows and columns to sort.\n\
             \n\
             Each pass jumps ahead by a random amount after every sorted line, the last line is always sorted.",
        )
        .action(ArgAction::SetTrue)
}

fn arg_seed() -> Arg {
    Arg::new("seed")
        .long("seed")
        .help("Seed for --random, makes the selected lines reproducible.")
        .requires("random")
        .value_parser(clap::value_parser!(u64))
}

fn arg_rows_only() -> Arg {
    Arg::new("rows_only")
        .long("rows-only")
        .help("Only sort rows.")
        .conflicts_with("columns_only")
        .action(ArgAction::SetTrue)
}

fn arg_columns_only() -> Arg {
    Arg::new("columns_only")
        .long("columns-only")
        .help("Only sort columns.")
        .action(ArgAction::SetTrue)
}

fn arg_desync() -> Arg {
    Arg::new("desync")
        .long("desync")
        .help("Don't move the weights along with the pixels.")
        .long_help(
            "Don't move the weights along with the pixels.\n\
             \n\
             Later passes then find their intervals on the weights of the unsorted image.",
        )
        .action(ArgAction::SetTrue)
}

fn arg_output() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .help("A file path to save the output image to.")
        .long_help(
            "A file path to save the output image to.\n\
             \n\
             Only valid with a single input. Defaults to the input name with a `_sorted` suffix.",
        )
        .value_parser(clap::value_parser!(PathBuf))
}
