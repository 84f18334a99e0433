// marksix-cli: argument parsing, language resolution and the generate session.

use std::io::{BufRead, Write};
use std::process;

use serde::Serialize;

use marksix_core::locale::{self, Language, Message};
use marksix_core::number::{self, Combination, ParseNumbersError};
use marksix_smart::random::{entropy_rng, random_selection, seeded_rng};
use marksix_smart::registry::DEFAULT_TYPE_ID;
use marksix_smart::{CombinationType, describe_lang, generate};

/// Environment variable consulted when no `--lang` is given.
pub const LANG_ENV: &str = "MARKSIX_LANG";

/// How the selection is obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Ask on stdin, as the original console tool does.
    Interactive,
    /// Quick pick.
    Random,
    /// Numbers given on the command line.
    Custom(Vec<u32>),
}

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub type_id: u8,
    pub mode: Mode,
    pub seed: Option<u64>,
    pub lang: Option<String>,
    pub json: bool,
    pub list: bool,
    pub verbose: bool,
    pub help: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            type_id: DEFAULT_TYPE_ID,
            mode: Mode::Interactive,
            seed: None,
            lang: None,
            json: false,
            list: false,
            verbose: false,
            help: false,
        }
    }
}

/// Parse command-line arguments (without the program name).
///
/// Bare tokens are taken as numbers; `--random` wins over them.
pub fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut opts = Options::default();
    let mut random = false;
    let mut numbers: Vec<u32> = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        let next = || {
            args.get(i + 1)
                .cloned()
                .ok_or_else(|| format!("{arg} requires a value"))
        };
        if let Some(val) = arg.strip_prefix("--lang=") {
            opts.lang = Some(val.to_string());
            continue;
        }
        match arg.as_str() {
            "-t" | "--type" => {
                opts.type_id = next()?
                    .parse()
                    .map_err(|_| format!("invalid number for {arg}"))?;
                skip_next = true;
            }
            "-l" | "--lang" => {
                opts.lang = Some(next()?);
                skip_next = true;
            }
            "--seed" => {
                opts.seed = Some(
                    next()?
                        .parse()
                        .map_err(|_| format!("invalid number for {arg}"))?,
                );
                skip_next = true;
            }
            "--numbers" => {
                numbers.extend(number::parse_numbers(&next()?).map_err(|e| e.to_string())?);
                skip_next = true;
            }
            "-r" | "--random" => random = true,
            "--json" => opts.json = true,
            "--list" => opts.list = true,
            "-v" | "--verbose" => opts.verbose = true,
            "-h" | "--help" => opts.help = true,
            s if !s.starts_with('-') => {
                numbers.extend(number::parse_numbers(s).map_err(|e| e.to_string())?);
            }
            _ => return Err(format!("unknown option: {arg}")),
        }
    }

    opts.mode = if random {
        Mode::Random
    } else if !numbers.is_empty() {
        Mode::Custom(numbers)
    } else {
        Mode::Interactive
    };
    Ok(opts)
}

/// Pick the output language.
///
/// Search order:
/// 1. `--lang` argument
/// 2. `MARKSIX_LANG` environment variable
/// 3. Traditional Chinese
///
/// An unrecognized tag is skipped; its warning is returned alongside.
pub fn resolve_language(
    lang_arg: Option<&str>,
    env_value: Option<&str>,
) -> (Language, Vec<String>) {
    let mut warnings = Vec::new();
    for (source, tag) in [("--lang", lang_arg), (LANG_ENV, env_value)] {
        let Some(tag) = tag else { continue };
        match Language::from_tag(tag) {
            Some(lang) => return (lang, warnings),
            None => warnings.push(format!("unsupported language {tag:?} from {source}")),
        }
    }
    (Language::default(), warnings)
}

/// Serializable result for `--json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    #[serde(rename = "type")]
    type_id: u8,
    label: String,
    selection: &'a [u32],
    combinations: &'a [Combination],
}

/// Render the generated combinations as pretty-printed JSON.
pub fn render_json(
    ty: &CombinationType,
    lang: Language,
    selection: &[u32],
    combinations: &[Combination],
) -> Result<String, String> {
    let report = Report {
        type_id: ty.id(),
        label: describe_lang(ty, lang),
        selection,
        combinations,
    };
    serde_json::to_string_pretty(&report).map_err(|e| format!("failed to encode JSON: {e}"))
}

/// Write the selection and the numbered combinations.
pub fn render_text<W: Write>(
    out: &mut W,
    lang: Language,
    selection: &[u32],
    combinations: &[Combination],
) {
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{}{}",
        locale::message(Message::SelectedNumbers, lang),
        number::format_combination(selection)
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", locale::message(Message::GeneratedCombinations, lang));
    for (i, combination) in combinations.iter().enumerate() {
        let _ = writeln!(out, "{}", number::format_indexed(i + 1, combination));
    }
}

fn parse_error_message(err: &ParseNumbersError, lang: Language) -> String {
    match err {
        ParseNumbersError::NotANumber(tok) => {
            locale::fill(locale::message(Message::NotANumber, lang), tok)
        }
    }
}

/// Print `prompt`, flush, and read one line.
///
/// End of input reads as an empty line.
fn ask<R: BufRead, W: Write + ?Sized>(
    input: &mut R,
    prompt: &mut W,
    text: &str,
) -> Result<String, String> {
    let _ = write!(prompt, "{text}");
    let _ = prompt.flush();
    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(|e| format!("failed to read stdin: {e}"))?;
    Ok(line.trim().to_string())
}

/// Run one generate session.
///
/// Results go to `out`. Verbose diagnostics go to `diag`, and so do the
/// interactive prompts in JSON mode, so that `out` stays valid JSON. Errors
/// come back already localized.
pub fn run<R: BufRead, W: Write, D: Write>(
    opts: &Options,
    lang: Language,
    input: &mut R,
    out: &mut W,
    diag: &mut D,
) -> Result<(), String> {
    let ty = CombinationType::by_id(opts.type_id).map_err(|e| e.localized(lang))?;
    let label = describe_lang(ty, lang);

    if opts.verbose {
        let _ = writeln!(diag, "language: {lang}");
        let _ = writeln!(diag, "type: {}", describe_lang(ty, Language::English));
        let mode = match opts.mode {
            Mode::Interactive => "interactive",
            Mode::Random => "random",
            Mode::Custom(_) => "custom",
        };
        match opts.seed {
            Some(seed) => {
                let _ = writeln!(diag, "mode: {mode} (seed {seed})");
            }
            None => {
                let _ = writeln!(diag, "mode: {mode}");
            }
        }
    }

    if !opts.json {
        let _ = writeln!(out, "{} {label}", locale::message(Message::Title, lang));
    }

    let pick = || match opts.seed {
        Some(seed) => random_selection(ty, &mut seeded_rng(seed)),
        None => random_selection(ty, &mut entropy_rng()),
    };

    let selection = match &opts.mode {
        Mode::Random => pick(),
        Mode::Custom(numbers) => numbers.clone(),
        Mode::Interactive => {
            let prompt: &mut dyn Write = if opts.json { &mut *diag } else { &mut *out };
            let mode_prompt = locale::message(Message::ModePrompt, lang);
            let mode = ask(&mut *input, &mut *prompt, mode_prompt)?;
            if mode == "1" {
                pick()
            } else {
                let text = locale::fill(
                    locale::message(Message::NumbersPrompt, lang),
                    ty.input_count(),
                );
                let line = ask(input, prompt, &text)?;
                number::parse_numbers(&line).map_err(|e| parse_error_message(&e, lang))?
            }
        }
    };

    let combinations = generate(&selection, ty).map_err(|e| e.localized(lang))?;

    if opts.json {
        let json = render_json(ty, lang, &selection, &combinations)?;
        let _ = writeln!(out, "{json}");
    } else {
        render_text(out, lang, &selection, &combinations);
    }
    Ok(())
}

/// Write one label per registered type.
pub fn list_types<W: Write>(out: &mut W, lang: Language) {
    for ty in CombinationType::all() {
        let _ = writeln!(out, "{}", describe_lang(ty, lang));
    }
}

/// Print a localized error line and exit with code 1.
pub fn fatal_lang(lang: Language, msg: &str) -> ! {
    eprintln!("{}{msg}", locale::message(Message::ErrorPrefix, lang));
    process::exit(1);
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Print a warning to stderr.
pub fn warn(msg: &str) {
    eprintln!("warning: {msg}");
}
