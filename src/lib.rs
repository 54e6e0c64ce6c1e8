mod cmd;
pub use cmd::Command;

pub mod guard;
pub use guard::{Announcer, Resource, ResourceGuard, UseAfterRelease};

pub mod scope;
pub use scope::scoped;

pub mod stream;

pub type Result<T> = anyhow::Result<T>;

#[derive(clap::Parser)]
#[command(version, author, propagate_version = true)]
pub struct Cli {
    /// Runs the full walkthrough when left out.
    #[command(subcommand)]
    pub command: Option<Command>,
}
