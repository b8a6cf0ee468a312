use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use glob::Pattern;
use mcproto_tools::{
    decode_capture, format_decode_pretty, inspect_capture, varint_hex, DecodeOptions,
    InspectReport,
};
use protocol::{Direction, Phase, Registry};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mcproto-tools",
    version,
    about = "mcproto capture inspection and decoding tools"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the frames in a capture file or directory of captures.
    Inspect {
        /// Capture file or directory.
        capture_path: PathBuf,
        /// Optional glob filter when inspecting a directory.
        #[arg(long)]
        glob: Option<String>,
        /// Sort inspected captures.
        #[arg(long, value_enum)]
        sort: Option<InspectSort>,
        /// Limit the number of inspected captures (after sorting).
        #[arg(long)]
        limit: Option<usize>,
        /// Largest frame accepted, in bytes.
        #[arg(long)]
        max_frame_len: Option<usize>,
        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Decode every packet in a capture.
    Decode {
        /// Capture file holding one direction of a connection.
        capture_file: PathBuf,
        /// Phase of the first frame.
        #[arg(long, value_enum, default_value_t = PhaseArg::Handshake)]
        phase: PhaseArg,
        /// Direction the captured frames travelled.
        #[arg(long, value_enum, default_value_t = DirectionArg::Serverbound)]
        direction: DirectionArg,
        /// Keep the starting phase instead of following Handshake and LoginSuccess.
        #[arg(long)]
        no_follow: bool,
        /// Output format.
        #[arg(long, value_enum, default_value_t = DecodeFormat::Json)]
        format: DecodeFormat,
    },
    /// Show the VarInt encoding of a value.
    Varint {
        #[arg(allow_hyphen_values = true)]
        value: i32,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum InspectSort {
    Size,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DecodeFormat {
    Json,
    Pretty,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PhaseArg {
    Handshake,
    Status,
    Login,
    Play,
}

impl From<PhaseArg> for Phase {
    fn from(arg: PhaseArg) -> Self {
        match arg {
            PhaseArg::Handshake => Self::Handshake,
            PhaseArg::Status => Self::Status,
            PhaseArg::Login => Self::Login,
            PhaseArg::Play => Self::Play,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DirectionArg {
    Serverbound,
    Clientbound,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Serverbound => Self::ServerBound,
            DirectionArg::Clientbound => Self::ClientBound,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Inspect {
            capture_path,
            glob,
            sort,
            limit,
            max_frame_len,
            json,
        } => {
            let mut limits = wire::Limits::default();
            if let Some(max) = max_frame_len {
                limits.max_frame_len = max;
            }
            if capture_path.is_dir() {
                let entries = collect_capture_entries(&capture_path, glob.as_deref())?;
                let mut entries = maybe_sort_entries(entries, sort);
                let limit = limit.or(sort.map(|InspectSort::Size| 10));
                if let Some(limit) = limit {
                    entries.truncate(limit);
                }
                for entry in entries {
                    let bytes = read_capture(&entry.path)?;
                    let report = inspect_capture(&bytes, &limits);
                    println!("== {} ({} bytes) ==", entry.path.display(), entry.size);
                    emit_inspect_report(&report, json)?;
                }
            } else {
                let bytes = read_capture(&capture_path)?;
                emit_inspect_report(&inspect_capture(&bytes, &limits), json)?;
            }
        }
        Command::Decode {
            capture_file,
            phase,
            direction,
            no_follow,
            format,
        } => {
            let bytes = read_capture(&capture_file)?;
            let registry = Registry::standard().context("build packet registry")?;
            let options = DecodeOptions {
                phase: phase.into(),
                direction: direction.into(),
                limits: wire::Limits::default(),
                follow_phases: !no_follow,
            };
            let frames = decode_capture(&bytes, &registry, &options)
                .with_context(|| format!("decode capture {}", capture_file.display()))?;
            match format {
                DecodeFormat::Json => {
                    let json = serde_json::to_string_pretty(&frames).context("serialize json")?;
                    println!("{json}");
                }
                DecodeFormat::Pretty => {
                    print!("{}", format_decode_pretty(&frames));
                }
            }
        }
        Command::Varint { value } => {
            println!("{value}: {}", varint_hex(value));
        }
    }
    Ok(())
}

fn read_capture(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("read capture {}", path.display()))
}

struct CaptureEntry {
    path: PathBuf,
    size: u64,
}

fn collect_capture_entries(dir: &Path, glob: Option<&str>) -> Result<Vec<CaptureEntry>> {
    let mut entries = Vec::new();
    let pattern = match glob {
        Some(value) => Some(Pattern::new(value).context("invalid glob pattern")?),
        None => None,
    };

    for entry in fs::read_dir(dir).with_context(|| format!("read dir {}", dir.display()))? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(pattern) = &pattern {
            let matches_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| pattern.matches(name));
            if !pattern.matches_path(&path) && !matches_name {
                continue;
            }
        }
        let size = entry.metadata()?.len();
        entries.push(CaptureEntry { path, size });
    }
    Ok(entries)
}

fn maybe_sort_entries(
    mut entries: Vec<CaptureEntry>,
    sort: Option<InspectSort>,
) -> Vec<CaptureEntry> {
    if let Some(InspectSort::Size) = sort {
        entries.sort_by(|a, b| b.size.cmp(&a.size).then_with(|| a.path.cmp(&b.path)));
    }
    entries
}

fn emit_inspect_report(report: &InspectReport, json: bool) -> Result<()> {
    if json {
        let json = serde_json::to_string_pretty(report).context("serialize json")?;
        println!("{json}");
        return Ok(());
    }
    println!(
        "{} frames in {} bytes",
        report.frames.len(),
        report.total_bytes
    );
    for frame in &report.frames {
        let id = frame
            .packet_id
            .map(|id| format!("0x{id:02X}"))
            .unwrap_or_else(|| "n/a".to_string());
        println!(
            "  #{:<4} @{:<8} id {id:<5} {} bytes",
            frame.index, frame.offset, frame.length
        );
    }
    if report.trailing_bytes > 0 {
        println!("trailing: {} bytes", report.trailing_bytes);
    }
    if let Some(error) = &report.error {
        println!("stopped: {error}");
    }
    Ok(())
}
