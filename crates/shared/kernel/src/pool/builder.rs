use super::Pool;
use super::error::PoolError;
use private::Sealed;
use std::fmt;
use std::marker::PhantomData;
use tracing::debug;

/// Default upper bound of idle instances kept by a pool.
pub const DEFAULT_MAX_SIZE: usize = 100;

#[derive(Debug, Clone, Copy)]
struct PoolConfig {
    max_size: usize,
    initial_size: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self { max_size: DEFAULT_MAX_SIZE, initial_size: 0 }
    }
}

#[derive(Debug, Default)]
pub struct NoFactory;
pub struct WithFactory<T>(Box<dyn FnMut() -> T>);

impl<T> fmt::Debug for WithFactory<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WithFactory")
    }
}

mod private {
    pub(super) trait Sealed {}
}
impl Sealed for NoFactory {}
impl<T> Sealed for WithFactory<T> {}

#[allow(private_bounds)]
#[derive(Debug)]
pub struct PoolBuilder<T, S: Sealed = NoFactory> {
    state: S,
    config: PoolConfig,
    _marker: PhantomData<fn() -> T>,
}

#[allow(private_bounds)]
impl<T, S: Sealed> PoolBuilder<T, S> {
    #[must_use = "Sets the maximum number of idle instances"]
    pub const fn max_size(mut self, max_size: usize) -> Self {
        self.config.max_size = max_size;
        self
    }

    #[must_use = "Sets the number of instances created up front"]
    pub const fn initial_size(mut self, initial_size: usize) -> Self {
        self.config.initial_size = initial_size;
        self
    }

    fn transition<N: Sealed>(self, state: N) -> PoolBuilder<T, N> {
        PoolBuilder { state, config: self.config, _marker: PhantomData }
    }
}

impl<T> PoolBuilder<T, NoFactory> {
    #[must_use = "Creates a new pool builder with default configuration"]
    pub fn new() -> Self {
        Self { state: NoFactory, config: PoolConfig::default(), _marker: PhantomData }
    }

    #[must_use = "Sets the function creating new pool instances"]
    pub fn factory<F>(self, factory: F) -> PoolBuilder<T, WithFactory<T>>
    where
        F: FnMut() -> T + 'static,
    {
        self.transition(WithFactory(Box::new(factory)))
    }
}

impl<T> Default for PoolBuilder<T, NoFactory> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PoolBuilder<T, WithFactory<T>> {
    /// Creates the pool and fills it with `initial_size` fresh instances.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfiguration`] if `initial_size` exceeds `max_size`.
    pub fn build(self) -> Result<Pool<T>, PoolError> {
        let PoolConfig { max_size, initial_size } = self.config;
        if initial_size > max_size {
            return Err(PoolError::InvalidConfiguration {
                message: format!("initial size {initial_size} exceeds max size {max_size}").into(),
                context: None,
            });
        }

        let mut factory = self.state.0;
        let items = (0..initial_size).map(|_| factory()).collect();
        debug!(max_size, initial_size, "Created object pool");

        Ok(Pool { items, max_size, factory })
    }
}
