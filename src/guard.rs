use tracing::{debug, instrument, trace};

/// Something that has to be torn down exactly once. In a real program this
/// would own a file handle, a socket or a native buffer.
pub trait Resource {
    /// Reported back in [`UseAfterRelease`] when the guard is used too late.
    const NAME: &'static str;

    /// The resource's logical action.
    fn act(&mut self);

    /// Frees whatever the resource holds. Only ever called once per guard.
    fn cleanup(&mut self);
}

/// Returned when a guard is used after it was released.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("use after release: {resource}")]
pub struct UseAfterRelease {
    pub resource: &'static str,
}

/// Owns a [`Resource`] and enforces the release-once discipline on it.
///
/// The guard starts out live. The first call to [`release`] runs the
/// resource's cleanup and marks the guard as released, any later call does
/// nothing. Dropping the guard releases it as well, so leaving the owning
/// scope on any path (return, `?`, unwind) frees the resource.
///
/// [`release`]: ResourceGuard::release
#[derive(Debug)]
pub struct ResourceGuard<R: Resource> {
    resource: R,
    /// Goes from `false` to `true` once and never back.
    released: bool,
}

impl<R: Resource> ResourceGuard<R> {
    pub fn new(resource: R) -> Self {
        ResourceGuard {
            resource,
            released: false,
        }
    }

    /// Performs the resource's action, fails if the guard was released.
    #[instrument(skip(self), fields(resource = R::NAME))]
    pub fn use_resource(&mut self) -> Result<(), UseAfterRelease> {
        if self.released {
            debug!("rejected, already released");
            return Err(UseAfterRelease { resource: R::NAME });
        }

        self.resource.act();
        Ok(())
    }

    /// Runs the cleanup on the first call only. Safe to call any number of
    /// times.
    #[instrument(skip(self), fields(resource = R::NAME))]
    pub fn release(&mut self) {
        if self.released {
            trace!("already released");
            return;
        }

        self.resource.cleanup();
        self.released = true;
    }

    pub fn is_released(&self) -> bool {
        self.released
    }
}

impl<R: Resource> Drop for ResourceGuard<R> {
    fn drop(&mut self) {
        self.release();
    }
}

/// The demo resource, it only tells the user what is happening to it.
#[derive(Debug, Default)]
pub struct Announcer;

impl Resource for Announcer {
    const NAME: &'static str = "Announcer";

    fn act(&mut self) {
        println!("Using resource...");
    }

    fn cleanup(&mut self) {
        println!("Releasing resource...");
    }
}
