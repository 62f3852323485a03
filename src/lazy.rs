//! Lazy-initialization proxy: defers construction of an expensive target
//! until the first call through the capability interface.

use once_cell::sync::OnceCell;

use crate::intercept::Operation;
use crate::pool::FromDiscriminator;

/// Handle that constructs its target on first use and reuses it afterwards.
///
/// The handle implements [`Operation`] whenever the target does, so callers
/// cannot tell it apart from a target constructed eagerly.
pub struct LazyHandle<T> {
    seed: String,
    cell: OnceCell<T>,
}

impl<T: FromDiscriminator> LazyHandle<T> {
    /// Creates an uninitialized handle; `seed` is fed to
    /// [`FromDiscriminator::from_discriminator`] on first use.
    pub fn new(seed: impl Into<String>) -> Self {
        LazyHandle {
            seed: seed.into(),
            cell: OnceCell::new(),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Returns the target, constructing it if this is the first access.
    pub fn target(&self) -> &T {
        self.cell.get_or_init(|| T::from_discriminator(&self.seed))
    }
}

impl<T> Operation for LazyHandle<T>
where
    T: FromDiscriminator + Operation,
{
    type Output = T::Output;

    fn execute(&self) -> T::Output {
        self.target().execute()
    }
}
