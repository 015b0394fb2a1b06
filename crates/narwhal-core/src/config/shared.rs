//! Configuration hand-off between an editing surface and the pipeline

use super::PipelineConfig;
use crate::error::ConfigError;
use std::sync::{Arc, PoisonError, RwLock};

/// Anything that can hand out a configuration snapshot.
///
/// `None` means nothing has been loaded yet.
pub trait ConfigSource {
    fn snapshot(&self) -> Option<PipelineConfig>;
}

impl ConfigSource for PipelineConfig {
    fn snapshot(&self) -> Option<PipelineConfig> {
        Some(self.clone())
    }
}

impl<T: ConfigSource + ?Sized> ConfigSource for &T {
    fn snapshot(&self) -> Option<PipelineConfig> {
        (**self).snapshot()
    }
}

/// Configuration slot shared between threads.
///
/// Writers replace the whole value under the lock; readers clone it out, so a
/// pipeline never observes a half-edited configuration.
#[derive(Debug, Clone, Default)]
pub struct SharedConfig {
    inner: Arc<RwLock<Option<PipelineConfig>>>,
}

impl SharedConfig {
    /// Create an empty slot
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slot holding `config`
    pub fn with_config(config: PipelineConfig) -> Result<Self, ConfigError> {
        let shared = Self::new();
        shared.store(config)?;
        Ok(shared)
    }

    /// Validate and publish a new configuration
    pub fn store(&self, config: PipelineConfig) -> Result<(), ConfigError> {
        config.validate()?;
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = Some(config);
        Ok(())
    }

    /// Edit the current configuration; the edit is published only if it validates
    pub fn update<F>(&self, edit: F) -> Result<(), ConfigError>
    where
        F: FnOnce(&mut PipelineConfig),
    {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let mut next = guard.clone().ok_or(ConfigError::NotLoaded)?;
        edit(&mut next);
        next.validate()?;
        *guard = Some(next);
        Ok(())
    }

    /// Drop the stored configuration
    pub fn clear(&self) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn is_loaded(&self) -> bool {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

impl ConfigSource for SharedConfig {
    fn snapshot(&self) -> Option<PipelineConfig> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
