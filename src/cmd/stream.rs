use clap::Args;

use crate::stream::{round_trip, DEFAULT_TEXT};

#[derive(Args)]
pub struct Stream {
    /// Text to write into the stream.
    #[arg(long, default_value = DEFAULT_TEXT)]
    text: String,
}

impl Default for Stream {
    fn default() -> Self {
        Stream {
            text: DEFAULT_TEXT.into(),
        }
    }
}

impl Stream {
    pub async fn execute(&self) -> crate::Result<()> {
        let trip = round_trip(&self.text).await?;

        println!("Before write: {}", trip.before_write);
        println!("After write: {}", trip.after_write);
        println!("Before read: {}", trip.before_read);
        println!("After read: {}", trip.after_read);
        println!("Bytes read: {}", trip.bytes_read);
        println!("Text read: {}", trip.text);

        Ok(())
    }
}
