use clap::Subcommand;

mod guard;
use guard::Guard;

mod stream;
use stream::Stream;

#[derive(Subcommand)]
pub enum Command {
    /// Write a text into an in-memory stream and read it back.
    Stream(Stream),
    /// Acquire a resource guard, use it and let it release.
    Guard(Guard),
}

impl Command {
    pub async fn execute(&self) -> crate::Result<()> {
        use Command::*;
        match self {
            Stream(cmd) => cmd.execute().await,
            Guard(cmd) => cmd.execute(),
        }
    }

    /// The whole meetup walkthrough: the stream first, then the guard.
    pub async fn walkthrough() -> crate::Result<()> {
        Stream::default().execute().await?;
        println!();
        Guard::default().execute()
    }
}
