use tracing::trace;

use crate::guard::{Resource, ResourceGuard, UseAfterRelease};

/// Acquires `resource`, hands the guard to `f` and releases it when `f` is
/// done, no matter how `f` exits.
///
/// `f` may release early on its own, the guard only cleans up once. Errors
/// from `f`, including a [`UseAfterRelease`], are returned unchanged after
/// the release ran.
pub fn scoped<R, T, E, F>(resource: R, f: F) -> Result<T, E>
where
    R: Resource,
    E: From<UseAfterRelease>,
    F: FnOnce(&mut ResourceGuard<R>) -> Result<T, E>,
{
    trace!(resource = R::NAME, "acquire");
    let mut guard = ResourceGuard::new(resource);
    let result = f(&mut guard);
    guard.release();
    trace!(resource = R::NAME, ok = result.is_ok(), "scope exit");
    result
}

#[cfg(test)]
mod tests {
    use std::panic::{self, AssertUnwindSafe};

    use anyhow::bail;

    use super::*;
    use crate::guard::tests::{Event, Recorder};

    #[test]
    fn releases_after_success() {
        let recorder = Recorder::default();
        let out: anyhow::Result<u32> = scoped(recorder.clone(), |guard| {
            guard.use_resource()?;
            Ok(7)
        });

        assert_eq!(out.unwrap(), 7);
        assert_eq!(
            *recorder.events.borrow(),
            vec![Event::Used, Event::Released]
        );
    }

    #[test]
    fn releases_after_error() {
        let recorder = Recorder::default();
        let out: anyhow::Result<()> = scoped(recorder.clone(), |guard| {
            guard.use_resource()?;
            bail!("failed halfway")
        });

        assert_eq!(out.unwrap_err().to_string(), "failed halfway");
        assert_eq!(recorder.count(Event::Released), 1);
    }

    #[test]
    fn use_after_release_propagates() {
        let recorder = Recorder::default();
        let out: Result<(), UseAfterRelease> = scoped(recorder.clone(), |guard| {
            guard.release();
            guard.use_resource()
        });

        assert_eq!(out, Err(UseAfterRelease { resource: "Recorder" }));
        assert_eq!(recorder.count(Event::Used), 0);
        assert_eq!(recorder.count(Event::Released), 1);
    }

    #[test]
    fn early_release_is_not_repeated() {
        let recorder = Recorder::default();
        let out: anyhow::Result<()> = scoped(recorder.clone(), |guard| {
            guard.use_resource()?;
            guard.release();
            guard.release();
            Ok(())
        });

        assert!(out.is_ok());
        assert_eq!(recorder.count(Event::Released), 1);
    }

    #[test]
    fn releases_on_panic() {
        let recorder = Recorder::default();
        let inner = recorder.clone();
        let caught = panic::catch_unwind(AssertUnwindSafe(move || {
            let _: anyhow::Result<()> = scoped(inner, |guard| {
                guard.use_resource()?;
                panic!("boom");
            });
        }));

        assert!(caught.is_err());
        assert_eq!(
            *recorder.events.borrow(),
            vec![Event::Used, Event::Released]
        );
    }
}
