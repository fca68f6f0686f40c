extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate seqmatch;
extern crate shlex;

use std::env;
use std::fs::File;
use std::io::{self, Write};

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use seqmatch::prelude::*;

fn parse_args() -> Result<SeqMatchOptions, clap::Error> {
    let mut args = Vec::new();

    args.push(env::args().next().unwrap_or_else(|| String::from("sqm")));
    args.extend(
        env::var("SEQMATCH_DEFAULT_OPTIONS")
            .ok()
            .and_then(|val| shlex::split(&val))
            .unwrap_or_default(),
    );
    for arg in env::args().skip(1) {
        args.push(arg);
    }

    Ok(SeqMatchOptions::try_parse_from(args)?.build())
}

fn init_logger(opts: &SeqMatchOptions) -> Result<()> {
    let mut builder = env_logger::builder();
    builder.format_timestamp_nanos();
    if let Some(path) = &opts.log_file {
        let file = File::create(path).wrap_err_with(|| format!("cannot create log file {path}"))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

//------------------------------------------------------------------------------
fn main() {
    let opts = match parse_args() {
        Ok(opts) => opts,
        Err(err) => err.exit(),
    };

    match sqm_main(opts) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(err) => {
            // if downstream pipe is closed, exit silently
            if err
                .downcast_ref::<io::Error>()
                .is_some_and(|err| err.kind() == io::ErrorKind::BrokenPipe)
            {
                std::process::exit(0)
            }
            eprintln!("sqm: {err:#}");
            std::process::exit(2)
        }
    }
}

fn sqm_main(opts: SeqMatchOptions) -> Result<i32> {
    init_logger(&opts)?;

    //------------------------------------------------------------------------------
    // scripting helpers
    if let Some(shell) = opts.shell {
        seqmatch::completions::print(shell);
        return Ok(0);
    }
    if opts.man {
        seqmatch::manpage::generate(&mut io::stdout())?;
        return Ok(0);
    }

    //------------------------------------------------------------------------------
    let output = SeqMatch::run_with(&opts)?;
    let mut stdout = io::stdout().lock();

    //------------------------------------------------------------------------------
    // graph mode
    if let (Some(graph), Some(format)) = (&output.graph, opts.graph) {
        stdout.write_all(render_graph(graph, format)?.as_bytes())?;
        stdout.flush()?;
        return Ok(0);
    }

    //------------------------------------------------------------------------------
    // search reports
    for report in &output.reports {
        debug!("{}: {} occurrences", report.algorithm, report.result.count());
    }
    let rendered = render_reports(&output.reports, opts.format).wrap_err("failed to render the reports")?;
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;

    Ok(if output.found() { 0 } else { 1 })
}
