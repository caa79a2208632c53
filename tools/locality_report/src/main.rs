use std::{error::Error, io::Write, path::PathBuf};

use clap::Parser;
use env_logger::Builder;
use log::info;

use locality_dfs::{file_system::FileSystem, layout::FsLayout};
use locality_ranker::{
    aggregator::bytes_per_host,
    collector::{collect_blocks, collect_blocks_in_range, DEFAULT_MAX_HOSTS_PER_SPLIT},
    locality_ranker::LocalityRanker,
    report::HostsReport,
    split::InputSplit,
};

/// Prints hosts storing the most data of given files.
#[derive(Parser, Debug)]
struct Args {
    /// Path to YAML description of the filesystem.
    #[arg(short, long)]
    layout: PathBuf,

    /// File to query, can be repeated.
    #[arg(short, long = "file", required = true)]
    files: Vec<String>,

    /// Start of the queried range, requires exactly one --file.
    #[arg(long, requires = "length")]
    offset: Option<u64>,

    /// Length of the queried range, requires exactly one --file.
    #[arg(long, requires = "offset")]
    length: Option<u64>,

    /// Maximum number of hosts to report.
    #[arg(short, long, default_value_t = DEFAULT_MAX_HOSTS_PER_SPLIT)]
    max_hosts: usize,

    /// Cut files into splits of this size and report hosts for every split.
    #[arg(long, conflicts_with = "offset")]
    split_size: Option<u64>,

    /// Print JSON instead of a table.
    #[arg(long)]
    json: bool,
}

fn hosts_report(args: &Args, fs: &impl FileSystem) -> Result<HostsReport, Box<dyn Error>> {
    let blocks = match (args.offset, args.length) {
        (Some(offset), Some(length)) => {
            if args.files.len() != 1 {
                return Err("--offset and --length require exactly one --file".into());
            }
            collect_blocks_in_range(&args.files[0], offset, length, fs)?
        }
        _ => collect_blocks(args.files.as_slice(), fs)?,
    };
    info!("collected {} blocks", blocks.len());
    Ok(HostsReport::new(&bytes_per_host(&blocks), args.max_hosts))
}

fn print_hosts(report: &HostsReport) {
    let width = report.hosts.iter().map(|host| host.hostname.len()).max().unwrap_or(0).max(4);
    println!("| {: <width$} | {: >14} |", "host", "bytes", width = width);
    println!("|-{:-<width$}-|----------------|", "", width = width);
    for host in report.hosts.iter() {
        println!("| {: <width$} | {: >14} |", host.hostname, host.bytes, width = width);
    }
}

fn print_splits(splits: &[InputSplit]) {
    let width = splits.iter().map(|split| split.path.len()).max().unwrap_or(0).max(4);
    println!("| {: <width$} | {: >12} | {: >12} | hosts", "file", "offset", "length", width = width);
    println!("|-{:-<width$}-|--------------|--------------|------", "", width = width);
    for split in splits.iter() {
        println!(
            "| {: <width$} | {: >12} | {: >12} | {}",
            split.path,
            split.offset,
            split.length,
            split.hosts.join(", "),
            width = width
        );
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    Builder::from_default_env()
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();

    let args = Args::parse();
    let fs = FsLayout::from_yaml(&args.layout)?.build()?;

    if let Some(split_size) = args.split_size {
        let splits = LocalityRanker::new(args.max_hosts).plan_splits(args.files.as_slice(), split_size, &fs)?;
        if args.json {
            println!("{}", serde_json::to_string_pretty(&splits)?);
        } else {
            print_splits(&splits);
        }
        return Ok(());
    }

    let report = hosts_report(&args, &fs)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_hosts(&report);
    }
    Ok(())
}
