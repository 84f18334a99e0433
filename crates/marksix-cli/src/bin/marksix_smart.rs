// marksix-smart: Generate Mark Six smart combinations.
//
// Maps a pool of chosen numbers onto a fixed set of 6-number bets. Without
// numbers or --random, asks for the mode and the numbers on stdin:
//   1  quick pick (random numbers)
//   2  enter the numbers by hand
//
// Usage:
//   marksix-smart [OPTIONS] [NUMBER...]
//
// Options:
//   -t, --type N         Combination type (default: 9)
//   -r, --random         Quick pick instead of entering numbers
//   --seed N             Seed for --random (reproducible picks)
//   --numbers "A B C"    Numbers as a single argument
//   -l, --lang LANG      Output language: zh-HK (default) or en
//   --json               Print the result as JSON
//   --list               List the combination types
//   -v, --verbose        Print the resolved settings to stderr
//   -h, --help           Print help

use std::io::{self, Write};

fn print_help() {
    println!("marksix-smart: Generate Mark Six smart combinations.");
    println!();
    println!("Usage: marksix-smart [OPTIONS] [NUMBER...]");
    println!();
    println!("If NUMBER arguments are given, generates combinations for them.");
    println!("Otherwise asks for the mode (1: random, 2: custom) on stdin.");
    println!();
    println!("Options:");
    println!("  -t, --type N         Combination type (default: 9)");
    println!("  -r, --random         Quick pick instead of entering numbers");
    println!("  --seed N             Seed for --random (reproducible picks)");
    println!("  --numbers \"A B C\"    Numbers as a single argument");
    println!("  -l, --lang LANG      Output language: zh-HK (default) or en");
    println!("                       (also read from MARKSIX_LANG)");
    println!("  --json               Print the result as JSON");
    println!("  --list               List the combination types");
    println!("  -v, --verbose        Print the resolved settings to stderr");
    println!("  -h, --help           Print this help");
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let opts = marksix_cli::parse_args(&args).unwrap_or_else(|e| marksix_cli::fatal(&e));

    if opts.help {
        print_help();
        return;
    }

    let env_lang = std::env::var(marksix_cli::LANG_ENV).ok();
    let (lang, warnings) = marksix_cli::resolve_language(opts.lang.as_deref(), env_lang.as_deref());
    for warning in &warnings {
        marksix_cli::warn(warning);
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if opts.list {
        marksix_cli::list_types(&mut out, lang);
        return;
    }

    let stdin = io::stdin();
    let result = marksix_cli::run(&opts, lang, &mut stdin.lock(), &mut out, &mut io::stderr());
    let _ = out.flush();

    if let Err(msg) = result {
        marksix_cli::fatal_lang(lang, &msg);
    }
}
