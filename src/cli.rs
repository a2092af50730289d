// src/cli.rs
use std::{env, path::PathBuf};

use crate::params::Params;
use crate::progress::Progress;
use crate::runner::{self, RunSummary};

pub fn parse() -> Result<Params, Box<dyn std::error::Error>> {
    let mut params = Params::new();
    parse_args(&mut params, env::args().skip(1))?;
    Ok(params)
}

pub async fn run(params: Params) -> Result<RunSummary, Box<dyn std::error::Error>> {
    let mut progress = CliProgress;
    let summary = runner::run(&params, Some(&mut progress)).await?;

    println!(
        "{} record(s) across {} file(s); {} chunk(s) failed",
        summary.records,
        summary.files_written.len(),
        summary.chunks_failed
    );
    for path in &summary.files_written {
        println!("  {}", path.display());
    }
    Ok(summary)
}

fn parse_args<I>(params: &mut Params, mut args: I) -> Result<(), Box<dyn std::error::Error>>
where
    I: Iterator<Item = String>,
{
    while let Some(a) = args.next() {
        match a.as_str() {
            "--start" => {
                let v: u32 = args.next().ok_or("Missing value for --start")?.parse()?;
                if v == 0 { return Err("--start must be at least 1".into()); }
                params.start = v; }
            "--end" => {
                params.end = args.next().ok_or("Missing value for --end")?.parse()?; }
            "--chunk" => {
                let v: u32 = args.next().ok_or("Missing value for --chunk")?.parse()?;
                if v == 0 { return Err("--chunk must be at least 1".into()); }
                params.chunk_size = v; }
            "-o" | "--out" => {
                params.out_dir = PathBuf::from(args.next().ok_or("Missing output directory")?); }
            "--webdriver" => {
                params.webdriver_url = args.next().ok_or("Missing value for --webdriver")?; }
            "--headless" => params.headless = true,
            "--page-size" => {
                let v: u32 = args.next().ok_or("Missing value for --page-size")?.parse()?;
                if v == 0 { return Err("--page-size must be at least 1".into()); }
                params.page_size = v; }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    if params.end < params.start {
        return Err(format!("--end {} is before --start {}", params.end, params.start).into());
    }

    Ok(())
}

/// Prints one line per chunk outcome to stderr; stdout stays machine-friendly.
struct CliProgress;

impl Progress for CliProgress {
    fn begin(&mut self, total_chunks: usize) {
        eprintln!("Starting {} worker chunk(s)", total_chunks);
    }

    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }

    fn chunk_done(&mut self, pages: (u32, u32), path: &std::path::Path, records: usize) {
        eprintln!("Pages {}-{}: {} record(s) -> {}", pages.0, pages.1, records, path.display());
    }

    fn chunk_failed(&mut self, pages: (u32, u32), msg: &str) {
        eprintln!("Pages {}-{}: FAILED ({msg})", pages.0, pages.1);
    }
}
