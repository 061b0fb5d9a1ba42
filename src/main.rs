use std::process::ExitCode;

use sort_racing::buffer::{AllocError, SeqBuffer};
use sort_racing::fill::{fill, SeedPolicy};
use sort_racing::race::Strategy;
use sort_racing::{Args, Millis};

fn main() -> ExitCode {
    let args: Args = argh::from_env();

    // atoi semantics: anything that fails to parse counts as zero and
    // falls into the non-positive diagnostic below.
    let n: i64 = args.size.parse().unwrap_or(0);
    if n <= 0 {
        println!("n must be a positive int.");
        return ExitCode::FAILURE;
    }
    let n = n as usize;
    println!("The int argument supplied is {n}");

    let policy = match args.seed {
        Some(seed) => SeedPolicy::Fixed(seed),
        None => SeedPolicy::Entropy,
    };

    match race(n, policy, args.dump) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn race(n: usize, policy: SeedPolicy, dump: bool) -> Result<(), AllocError> {
    let mut source = SeqBuffer::try_alloc(n)?;
    fill(source.as_mut_slice(), policy);

    let single = Strategy::Single.race(&source)?;
    println!(
        "Sorting is done in {}ms when ONE thread is used",
        Millis(single.elapsed)
    );

    let forked = Strategy::Forked.race(&source)?;
    println!(
        "Sorting is done in {}ms when TWO threads are used",
        Millis(forked.elapsed)
    );

    if dump {
        print_sorted(forked.sorted.as_slice());
    }
    Ok(())
}

fn print_sorted(vals: &[f64]) {
    let line = vals
        .iter()
        .map(|v| format!("{v:.3}"))
        .collect::<Vec<_>>()
        .join(" ");
    println!("{line}");
}
