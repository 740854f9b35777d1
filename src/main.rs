//! # Marcgen
//!
//! Marcgen is the pipeline to obtain a normalized corpus from the
//! Multilingual Amazon Reviews release (de, fr, es, en × dev, test, train).
//!
//! This project can be used both as a tool to download or generate the
//! corpus, or as a lib to integrate downloading and mapping into other
//! projects.
//!
//! ## Getting started
//!
//! ```sh
//! marcgen 0.1.0
//! multilingual reviews corpus generation tool.
//!
//! USAGE:
//!     marcgen <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     download    Download the source review files
//!     help        Prints this message or the help of the given subcommand(s)
//!     info        Print dataset metadata and feature schema
//!     pipeline    Run generation pipeline
//! ```
//!
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

use marcgen::download;
use marcgen::error;
use marcgen::partition;
use marcgen::pipeline::{Pipeline, ReviewsPipeline};
use marcgen::schema;

fn main() -> Result<(), error::Error> {
    env_logger::init();

    let opt = cli::Marcgen::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Marcgen::Download(e) => {
            std::fs::create_dir_all(&e.dst)?;
            let urls = partition::source_urls()?;

            let rt = tokio::runtime::Runtime::new()?;
            let results = rt.block_on(download::prefetch(urls, &e.dst, e.n_tasks.unwrap_or(4)));

            // report eventual download errors
            let mut nb_failed = 0;
            for failure in results.iter().filter(|result| result.is_err()) {
                error!("Error during download:\n {:?}", failure);
                nb_failed += 1;
            }
            if nb_failed > 0 {
                return Err(error::Error::Custom(format!(
                    "{} download(s) failed",
                    nb_failed
                )));
            }
        }

        cli::Marcgen::Pipeline(p) => {
            let p = ReviewsPipeline::new(p.src, p.dst, p.lang);
            p.run()?;
        }

        cli::Marcgen::Info => {
            let info = serde_json::json!({
                "config": schema::config(),
                "info": schema::info(),
            });
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
    };
    Ok(())
}
