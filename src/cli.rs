use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kubectl-podlog")]
#[command(about = "Copy a pod container's log stream to stdout or a file")]
pub struct Cli {
    /// Pod to read logs from, as <pod> or <namespace>/<pod>
    pub pod: String,

    /// Namespace
    #[arg(short = 'n', long)]
    pub namespace: Option<String>,

    /// Container name (if multi-container pod)
    #[arg(short = 'c', long)]
    pub container: Option<String>,

    /// Keep streaming new log lines until the connection closes
    #[arg(short = 'f', long)]
    pub follow: bool,

    /// Label selector (accepted, not applied to the log request)
    #[arg(short = 'l', long)]
    pub selector: Option<String>,

    /// Context
    #[arg(long)]
    pub context: Option<String>,

    /// Write logs to this file instead of stdout
    #[arg(short = 'o', long, conflicts_with = "discard")]
    pub output: Option<PathBuf>,

    /// Read the stream but throw the bytes away
    #[arg(long)]
    pub discard: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
