// std imports
use std::io::{BufRead, IsTerminal, Write, stderr, stdin, stdout};
use std::process;
use std::sync::Arc;

// third-party imports
use clap::Parser;
use env_logger::{self as logger};
use owo_colors::OwoColorize;

// local imports
use wsmatch::{
    Candidate, ContextOptions, Selector, StyledSink,
    cli::{self, ColorOption},
    config,
    error::*,
};

const WSMATCH_DEBUG_LOG: &str = "WSMATCH_DEBUG_LOG";
const WSMATCH_DEBUG_LOG_STYLE: &str = "WSMATCH_DEBUG_LOG_STYLE";

// ---

fn bootstrap() {
    if std::env::var(WSMATCH_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(logger::Env::new().filter(WSMATCH_DEBUG_LOG).write_style(WSMATCH_DEBUG_LOG_STYLE))
            .format_timestamp_micros()
            .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .format_timestamp_millis()
            .init()
    }
}

fn run(opt: cli::Opt, color: bool) -> Result<()> {
    let settings = config::load(opt.config.clone())?;

    let backend = opt.backend.unwrap_or(settings.backend);
    let options = ContextOptions::new()
        .limits(settings.limits.into())
        .debug(opt.debug || settings.debug)
        .sink(Arc::new(StyledSink::new(stderr(), color)));
    let selector = Selector::new(backend, options).report_unmatched(settings.report_unmatched && !opt.no_report_unmatched);

    let lines = if opt.candidates.is_empty() {
        stdin().lock().lines().collect::<std::io::Result<Vec<_>>>()?
    } else {
        opt.candidates
    };
    let candidates = lines
        .iter()
        .filter(|line| !line.is_empty())
        .map(|line| Candidate::parse(line))
        .collect::<Result<Vec<_>>>()?;

    log::debug!("matching {} candidates with {:?} backend", candidates.len(), backend);
    let selection = selector.select(&opt.filters, &candidates)?;

    let mut out = stdout().lock();
    for candidate in &selection.selected {
        writeln!(out, "{}", candidate.key())?;
    }
    out.flush()?;

    let mut err = stderr().lock();
    for filter in &selection.unmatched_filters {
        if color {
            writeln!(err, "{} filter {:?} matched no packages", "warning:".yellow().bold(), filter)?;
        } else {
            writeln!(err, "warning: filter {:?} matched no packages", filter)?;
        }
    }

    Ok(())
}

fn main() {
    bootstrap();

    let opt = cli::Opt::parse();
    let color = match opt.color {
        ColorOption::Auto => stderr().is_terminal(),
        ColorOption::Always => true,
        ColorOption::Never => false,
    };

    if let Err(err) = run(opt, color) {
        err.log(color);
        process::exit(1);
    }
}
