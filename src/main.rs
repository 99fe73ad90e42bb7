use anyhow::Context;
use clap::{ArgAction, Parser};
use nec2eps::nec::{ConvertOptions, Projection, read_drawing, write_eps};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Convert the wire geometry of a NEC antenna description to an EPS drawing
#[derive(Parser, Debug)]
#[command(name = "nec2eps", version)]
struct Cli {
    /// Project onto the X-Y plane
    #[arg(long)]
    xy: bool,

    /// Project onto the Y-Z plane
    #[arg(long)]
    yz: bool,

    /// Project onto the X-Z plane
    #[arg(long)]
    xz: bool,

    /// Output scale factor
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    scale: f64,

    /// NEC input file (standard input if omitted or "-")
    input: Option<PathBuf>,

    /// EPS output file (standard output if omitted or "-")
    output: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn options(&self) -> nec2eps::Result<ConvertOptions> {
        let projection = Projection::from_flags(self.xy, self.yz, self.xz)?;
        let options = ConvertOptions::new(projection).with_scale(self.scale);
        options.validate()?;
        Ok(options)
    }
}

/// A path argument of "-" selects the standard stream
fn file_arg(arg: &Option<PathBuf>) -> Option<&Path> {
    arg.as_deref().filter(|p| *p != Path::new("-"))
}

fn open_input(path: Option<&Path>) -> anyhow::Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Could not open NEC input '{}'", path.display()))?;
            info!("Reading NEC from {}.", path.display());
            Ok(Box::new(BufReader::new(file)))
        }
        None => {
            info!("Reading NEC from standard input.");
            Ok(Box::new(io::stdin().lock()))
        }
    }
}

fn open_output(path: Option<&Path>) -> anyhow::Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Could not create EPS output '{}'", path.display()))?;
            info!("Writing EPS to {}.", path.display());
            Ok(Box::new(BufWriter::new(file)))
        }
        None => {
            info!("Writing EPS to standard output.");
            Ok(Box::new(BufWriter::new(io::stdout().lock())))
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = match cli.options() {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    info!("Using {} projection.", options.projection);

    let input = match open_input(file_arg(&cli.input)) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(2);
        }
    };

    let drawing = match read_drawing(input, &options) {
        Ok(drawing) => drawing,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(3);
        }
    };

    let bounds = drawing.bounds();
    info!(
        "Read {} GW segments, bounding box {} {} {} {} ({} x {}).",
        drawing.len(),
        bounds.min.x,
        bounds.min.y,
        bounds.max.x,
        bounds.max.y,
        bounds.width(),
        bounds.height()
    );

    let written = open_output(file_arg(&cli.output)).and_then(|mut output| {
        write_eps(&drawing, &mut output).context("Could not write EPS output")
    });
    if let Err(e) = written {
        eprintln!("Error: {:#}", e);
        process::exit(4);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nec2eps::Error;

    fn options(args: &[&str]) -> nec2eps::Result<ConvertOptions> {
        let argv = std::iter::once("nec2eps").chain(args.iter().copied());
        Cli::try_parse_from(argv).unwrap().options()
    }

    #[test]
    fn test_options_from_flags() {
        let opts = options(&["--yz", "--scale", "-2.5"]).unwrap();
        assert_eq!(opts.projection, Projection::Yz);
        assert_eq!(opts.scale, -2.5);
        assert_eq!(options(&["--xz"]).unwrap().scale, 1.0);
    }

    #[test]
    fn test_options_require_one_projection() {
        assert!(matches!(options(&[]), Err(Error::Configuration(_))));
        assert!(matches!(options(&["--xy", "--xz"]), Err(Error::Configuration(_))));
    }

    #[test]
    fn test_options_reject_non_finite_scale() {
        for scale in ["nan", "inf", "NaN"] {
            let err = options(&["--xy", "--scale", scale]).unwrap_err();
            assert!(matches!(err, Error::Configuration(_)), "scale {}", scale);
        }
    }

    #[test]
    fn test_dash_selects_standard_stream() {
        assert_eq!(file_arg(&Some(PathBuf::from("-"))), None);
        assert_eq!(file_arg(&None), None);
        assert_eq!(
            file_arg(&Some(PathBuf::from("dipole.nec"))),
            Some(Path::new("dipole.nec"))
        );
    }
}
