//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "marcgen", about = "multilingual reviews corpus generation tool.")]
/// Holds every command that is callable by the `marcgen` command.
pub enum Marcgen {
    #[structopt(about = "Download the source review files")]
    Download(Download),
    #[structopt(about = "Run generation pipeline")]
    Pipeline(Pipeline),
    #[structopt(about = "Print dataset metadata and feature schema")]
    Info,
}

#[derive(Debug, StructOpt)]
/// Download command and parameters.
///
/// ```sh
/// marcgen-download 0.1.0
/// Download the source review files
///
/// USAGE:
///     marcgen download [OPTIONS] <dst>
///
/// FLAGS:
///     -h, --help       Prints help information
///     -V, --version    Prints version information
///
/// OPTIONS:
///     -t <n-tasks>        number of concurrent downloads. Default is 4.
///
/// ARGS:
///     <dst>    download destination
/// ```
pub struct Download {
    #[structopt(parse(from_os_str), help = "download destination")]
    pub dst: PathBuf,
    #[structopt(short = "t", help = "number of concurrent downloads. Default is 4.")]
    pub n_tasks: Option<usize>,
}

#[derive(Debug, StructOpt)]
/// Pipeline command and parameters.
///
/// ```sh
/// marcgen-pipeline 0.1.0
/// Run generation pipeline
///
/// USAGE:
///     marcgen pipeline [OPTIONS] <src> <dst>
///
/// FLAGS:
///     -h, --help       Prints help information
///     -V, --version    Prints version information
///
/// OPTIONS:
///     -l, --lang <lang>    restrict generation to a single language
///
/// ARGS:
///     <src>    source cache (contains dataset_{lang}_{split}.json)
///     <dst>    pipeline result destination
/// ```
pub struct Pipeline {
    #[structopt(
        parse(from_os_str),
        help = "source cache (contains dataset_{lang}_{split}.json)"
    )]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "pipeline result destination")]
    pub dst: PathBuf,
    #[structopt(
        short = "l",
        long = "lang",
        help = "restrict generation to a single language"
    )]
    pub lang: Option<String>,
}
