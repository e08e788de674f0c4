use std::path::Path;

use clap::Parser;
use tubig::{core::TariffBook, prelude::*, settings::Settings};

#[derive(Parser)]
pub struct DefaultsArgs {
    /// Overwrite the existing settings file.
    #[clap(long)]
    pub force: bool,
}

impl DefaultsArgs {
    pub fn run(&self, path: &Path) -> Result {
        ensure!(
            self.force || !path.exists(),
            "`{}` already exists, pass `--force` to overwrite it",
            path.display(),
        );
        let settings = Settings { tariffs: TariffBook::built_in(), ..Settings::default() };
        settings.write_to(path)?;
        info!(path = %path.display(), "written");
        Ok(())
    }
}
