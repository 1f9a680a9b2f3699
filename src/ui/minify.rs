use crate::imp::minify;
use crate::imp::RawSource;
use crate::ExitStatus;
use anyhow::{Context, Result};
use std::fs;
use std::io::prelude::*;
use std::path::PathBuf;

#[derive(clap::Args)]
#[clap(about = "Minifies a single file (or standard input) to standard output")]
pub struct Minify {
    /// File to minify; reads standard input when omitted
    file: Option<PathBuf>,
}

impl Minify {
    pub fn run(self, _quiet: bool) -> Result<ExitStatus> {
        let content = match &self.file {
            Some(file) => fs::read_to_string(file)
                .with_context(|| format!("failed to read `{}`", file.display()))?,
            None => {
                let mut content = String::new();
                std::io::stdin()
                    .read_to_string(&mut content)
                    .context("failed to read standard input")?;
                content
            }
        };

        let minified =
            minify::minify(RawSource::new(content), true).context("failed to minify the input")?;
        println!("{}", minified);

        Ok(ExitStatus::Success)
    }
}
