use crate::imp::config::CONFIG;
use crate::imp::save::SaveMode;
use crate::imp::{loader, minify, namelist, save};
use crate::ExitStatus;
use crate::{eprintln_info, eprintln_tagged, eprintln_warning};
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(clap::Args)]
#[clap(about = "Concatenates the named files and prints or saves the bundle")]
pub struct Bundle {
    /// Delimiter-joined list of file names, e.g. `a.js;b.js`
    names: String,

    /// Common path prefix prepended to every file name
    #[clap(short, long)]
    path: Option<String>,

    /// Delimiter separating the file names
    #[clap(short, long)]
    delimiter: Option<char>,

    /// Strip comments and collapse whitespace
    #[clap(short, long)]
    minify: bool,

    /// Write the bundle to this file instead of standard output
    #[clap(short, long)]
    output: Option<PathBuf>,

    /// Append to the output file instead of truncating it
    #[clap(short, long)]
    append: bool,
}

impl Bundle {
    pub fn run(self, quiet: bool) -> Result<ExitStatus> {
        let delimiter = self.delimiter.unwrap_or(CONFIG.bundle.delimiter);
        let path = self.path.unwrap_or_else(|| CONFIG.bundle.path.clone());
        let minificate = self.minify || CONFIG.bundle.minify;

        let names = namelist::split_names(&self.names, delimiter);
        if names.is_empty() {
            if !quiet {
                eprintln_info!("nothing to load");
            }
            return Ok(ExitStatus::Success);
        }

        let loaded = loader::load(&names, &path);
        if !quiet {
            for name in &loaded.skipped {
                eprintln_warning!("skipping unreadable file `{}`", name);
            }
        }

        let minified =
            minify::minify(loaded.source, minificate).context("failed to minify the bundle")?;

        match self.output {
            Some(output) => {
                let mode = if self.append {
                    SaveMode::Append
                } else {
                    SaveMode::Truncate
                };
                save::save(minified.inner(), &output, mode).context("failed to save the bundle")?;
                if !quiet {
                    eprintln_tagged!(
                        "Saved": "{} file(s) to {}",
                        names.len() - loaded.skipped.len(),
                        output.display()
                    );
                }
            }
            None => println!("{}", minified),
        }

        // overall success tracks only the last attempted read, even when
        // earlier files were skipped
        if loaded.last_ok {
            Ok(ExitStatus::Success)
        } else {
            Ok(ExitStatus::Failure)
        }
    }
}
