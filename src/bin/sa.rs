#[macro_use]
extern crate clap;

use std::io::{self, Read, Write};
use std::mem;
use std::process;
use std::time;

use byteorder::{LittleEndian, WriteBytesExt};
use libc::{getrusage, rusage, RUSAGE_SELF};
use sa3::{suffix_array, Algorithm};

const USAGE: &str = "\
Usage: sa <algorithm> [repeatCnt]

algorithm:  The algorithm to use. One of 'naive', 'nlogn', 'linear'
repeatCnt:  How many times to run the algorithm. Useful for benchmarking.
            Default is 1";

fn main() {
    let matches = clap_app!(sa =>
        (about: "suffix array construction with interchangeable algorithms")
        (@arg ALGORITHM: +required "the algorithm to use, one of 'naive', 'nlogn', 'linear'")
        (@arg REPEAT: "how many times to run the algorithm, for benchmarking")
        (@arg TEXT: -t --text "write the suffix array as decimal text instead of binary")
    )
    .get_matches();

    let algorithm = match matches.value_of("ALGORITHM").unwrap() {
        "naive" => Algorithm::Naive,
        "nlogn" => Algorithm::Doubling,
        "linear" => Algorithm::Skew,
        other => {
            eprintln!("unrecognized algorithm `{}`", other);
            eprintln!("{}", USAGE);
            process::exit(1);
        }
    };
    let repeat = match matches.value_of("REPEAT") {
        None => 1,
        Some(arg) => match arg.parse::<usize>() {
            Ok(cnt) if cnt > 0 => cnt,
            _ => {
                eprintln!("cannot parse repeatCnt `{}`", arg);
                eprintln!("{}", USAGE);
                process::exit(1);
            }
        },
    };

    let mut text = Vec::new();
    let stdin = io::stdin();
    stdin.lock().read_to_end(&mut text).unwrap();
    eprintln!("load {} bytes from stdin", text.len());

    let mut suf = Vec::new();
    let mut times = String::new();
    for _ in 0..repeat {
        let (res, dur) = timeit(|| suffix_array(&text[..], algorithm));
        suf = res;
        times.push_str(format!("{:.3}s ", dur.as_secs_f64()).as_str());
    }
    eprintln!(" time: {}", times);
    eprintln!("  rss: {:.3}MiB", get_peak_rss_kib() as f64 / 1024.0);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    if matches.is_present("TEXT") {
        for (i, &x) in suf.iter().enumerate() {
            if i > 0 {
                out.write_all(b" ").unwrap();
            }
            write!(out, "{}", x).unwrap();
        }
        out.write_all(b"\n").unwrap();
    } else {
        suf.iter().cloned().for_each(|x| out.write_u32::<LittleEndian>(x).unwrap());
    }
}

fn timeit<F, T>(f: F) -> (T, time::Duration)
where
    F: FnOnce() -> T,
{
    let start = time::Instant::now();
    let ret = f();
    let dur = start.elapsed();
    (ret, dur)
}

fn get_peak_rss_kib() -> u64 {
    let mut ru;
    unsafe {
        ru = mem::zeroed::<rusage>();
        getrusage(RUSAGE_SELF, &mut ru as *mut rusage);
    }
    ru.ru_maxrss as u64
}
