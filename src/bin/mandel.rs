extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate mandelbrot;
extern crate num_cpus;

use clap::{App, Arg, ArgMatches};
use mandelbrot::escape::{DEFAULT_MAX_BOUND, DEFAULT_MAX_ITER};
use mandelbrot::{ppm, IterationCap, Renderer, Resolution, Viewport};
use std::str::FromStr;

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_range<T: FromStr + PartialOrd>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const MIN: &str = "min";
const SPAN: &str = "span";
const THREADS: &str = "threads";
const ITERATIONS: &str = "iterations";
const BOUND: &str = "bound";

const MAX_THREADS: usize = 1024;

fn args<'a>(
    default_threads: &'a str,
    default_iterations: &'a str,
    default_bound: &'a str,
) -> ArgMatches<'a> {
    App::new("mandel")
        .version("0.1.0")
        .about("Mandelbrot renderer writing 16-bit PPM images")
        .arg(
            Arg::with_name(OUTPUT)
                .required(true)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output file"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("1920x1080")
                .validator(|s| validate_pair::<usize>(&s, 'x', "Could not parse output image size"))
                .help("Size of output image, WIDTHxHEIGHT"),
        )
        .arg(
            Arg::with_name(MIN)
                .required(false)
                .long(MIN)
                .short("m")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-2.5,-1")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse viewport origin"))
                .help("Corner of the viewport with the smallest real and imaginary parts, RE,IM"),
        )
        .arg(
            Arg::with_name(SPAN)
                .required(false)
                .long(SPAN)
                .short("w")
                .takes_value(true)
                .default_value("3.5")
                .validator(|s| {
                    validate_range(
                        &s,
                        ::std::f64::MIN_POSITIVE,
                        ::std::f64::MAX,
                        "Could not parse viewport span",
                        "Viewport span must be positive",
                    )
                })
                .help("Width of the viewport along the real axis"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .default_value(default_threads)
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        MAX_THREADS,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", MAX_THREADS),
                    )
                })
                .help("Number of threads to use in solver"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value(default_iterations)
                .validator(|s| {
                    validate_range(
                        &s,
                        1u16,
                        u16::max_value(),
                        "Could not parse iteration count",
                        "Iteration count must be between 1 and 65535",
                    )
                })
                .help("Maximum number of iterations per point"),
        )
        .arg(
            Arg::with_name(BOUND)
                .required(false)
                .long(BOUND)
                .short("b")
                .takes_value(true)
                .default_value(default_bound)
                .validator(|s| {
                    validate_range(
                        &s,
                        ::std::f64::MIN_POSITIVE,
                        ::std::f64::MAX,
                        "Could not parse escape bound",
                        "Escape bound must be positive",
                    )
                })
                .help("Squared modulus past which a point has escaped"),
        )
        .get_matches()
}

/// Pulls a value clap has already validated.  Every argument read
/// through here has a validator and either a default or `required`.
fn value<T: FromStr>(matches: &ArgMatches, name: &str) -> T {
    match matches.value_of(name).map(T::from_str) {
        Some(Ok(v)) => v,
        _ => unreachable!("clap validated {}", name),
    }
}

fn pair<T: FromStr>(matches: &ArgMatches, name: &str, separator: char) -> (T, T) {
    match matches.value_of(name).and_then(|s| parse_pair(s, separator)) {
        Some(v) => v,
        None => unreachable!("clap validated {}", name),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let default_threads = num_cpus::get().min(MAX_THREADS).to_string();
    let default_iterations = DEFAULT_MAX_ITER.to_string();
    let default_bound = DEFAULT_MAX_BOUND.to_string();
    let matches = args(&default_threads, &default_iterations, &default_bound);

    let (width, height): (usize, usize) = pair(&matches, SIZE, 'x');
    let (min_real, min_imag): (f64, f64) = pair(&matches, MIN, ',');
    let viewport = Viewport::new(min_real, min_imag, value(&matches, SPAN));
    let resolution = Resolution::new(width, height);
    let cap = IterationCap::new(value(&matches, ITERATIONS), value(&matches, BOUND));
    let threads: usize = value(&matches, THREADS);
    let output = matches.value_of(OUTPUT).unwrap_or_default();

    info!(
        "rendering {}x{} from {},{} across {} with {} iterations on {} threads",
        width, height, min_real, min_imag, viewport.span_real, cap.max_iter, threads
    );

    let result = Renderer::new(viewport, resolution, cap)
        .render(threads)
        .and_then(|buffer| ppm::save(output, &buffer));

    match result {
        Ok(()) => info!("wrote {}", output),
        Err(e) => {
            eprintln!("Render failure: {}", e);
            std::process::exit(1);
        }
    }
}
