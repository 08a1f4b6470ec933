use anyhow::{Context, Result, bail};
use rendered_index_config::Config;
use rendered_index_engine::{Expectations, IndexedBuilder, Span, describe_chars};
use std::path::{Path, PathBuf};
use std::{env, fs, process};

mod script;

use script::Op;

#[derive(Debug, PartialEq, Eq)]
struct Args {
    script: PathBuf,
    readback: Option<PathBuf>,
    config: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> Result<Args> {
    let mut script = None;
    let mut readback = None;
    let mut config = None;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--readback" => match iter.next() {
                Some(path) => readback = Some(PathBuf::from(path)),
                None => bail!("--readback needs a file"),
            },
            "--config" => match iter.next() {
                Some(path) => config = Some(PathBuf::from(path)),
                None => bail!("--config needs a file"),
            },
            flag if flag.starts_with("--") => bail!("unknown option '{flag}'"),
            _ if script.is_some() => bail!("unexpected argument '{arg}'"),
            _ => script = Some(PathBuf::from(arg)),
        }
    }

    let Some(script) = script else {
        bail!("no script given");
    };

    Ok(Args {
        script,
        readback,
        config,
    })
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(config_path) = explicit {
        log::info!("Config path: {}", config_path.display());
        return match Config::load_from_path(config_path)? {
            Some(config) => Ok(config),
            None => bail!("config file {} not found", config_path.display()),
        };
    }

    log::info!("Config path: {}", Config::config_path().display());
    match Config::load()? {
        Some(config) => Ok(config),
        None => {
            log::info!("No config file found, using default host profile");
            Ok(Config::default())
        }
    }
}

/// Runs `ops` against a fresh builder, collecting each span and the
/// characters expected at its edges.
fn build(ops: &[Op], config: &Config) -> (IndexedBuilder, Vec<Span>, Expectations) {
    let mut builder = IndexedBuilder::with_widths(config.terminator_widths());
    let mut spans = Vec::with_capacity(ops.len());
    let mut expectations = Expectations::new();

    for op in ops {
        let span = op.apply(&mut builder);
        expectations.record(span, op.text());
        spans.push(span);
    }

    (builder, spans, expectations)
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let raw: Vec<String> = env::args().collect();
    let program = raw.first().map(String::as_str).unwrap_or("rendered-index-cli");
    let args = match parse_args(&raw) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Usage: {program} <script> [--readback <file>] [--config <file>]");
            process::exit(1);
        }
    };
    let config = load_config(args.config.as_deref())?;

    let source = fs::read_to_string(&args.script)
        .with_context(|| format!("failed to read script {}", args.script.display()))?;
    let ops = script::parse(&source)
        .with_context(|| format!("failed to parse script {}", args.script.display()))?;

    let (builder, spans, expectations) = build(&ops, &config);

    for (op, span) in ops.iter().zip(&spans) {
        println!(
            "{:<6} [{}, {}] {:?}",
            op.label(),
            span.start,
            span.end,
            op.text()
        );
    }

    if !builder.pending_line().is_empty() {
        log::warn!(
            "Pending line {:?} is not terminated and is left out of the snapshot",
            builder.pending_line()
        );
    }

    println!("----------------------------------------");
    println!("{}", describe_chars(builder.snapshot()));
    println!("next index: {}", builder.next_index());

    if let Some(readback_path) = &args.readback {
        let readback = fs::read_to_string(readback_path)
            .with_context(|| format!("failed to read readback {}", readback_path.display()))?;

        println!("----------------------------------------");
        println!("{}", describe_chars(&readback));

        for (index, c) in expectations.entries() {
            println!("[{index}] - {c:?}");
        }

        match expectations.verify(&readback, config.readback_options()) {
            Ok(()) => println!("readback matches {} expectations", expectations.len()),
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        }
    }

    Ok(())
}
