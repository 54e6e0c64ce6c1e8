use clap::Args;
use tracing::info;

use crate::{guard::Announcer, scope::scoped};

#[derive(Args, Default)]
pub struct Guard {
    /// Extra explicit releases before the scope ends. Only the first one
    /// cleans up.
    #[arg(long, default_value_t = 0)]
    releases: usize,

    /// Release the resource before using it. Fails with a use after release.
    #[arg(long)]
    misuse: bool,
}

impl Guard {
    pub fn execute(&self) -> crate::Result<()> {
        scoped(Announcer, |guard| {
            if self.misuse {
                guard.release();
            }

            guard.use_resource()?;

            for n in 0..self.releases {
                info!(n, "explicit release");
                guard.release();
            }

            Ok(())
        })
    }
}
