//! Bitrender global configuration options.

use std::sync::{OnceLock, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Global configuration options for the bitrender crate.
///
/// Retrieve the global [`Config`] with [`global_config`] and modify it with [`global_config_mut`].
///
/// ## Cache Host Endianness
///  > default: [`true`]
///
/// If enabled, the host byte order is probed once and reused for the lifetime of the process, otherwise it is probed on every construction.
/// Rendered output is identical either way.
#[derive(Debug)]
pub struct Config {
    cache_host_endianness: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            cache_host_endianness: true,
        }
    }
}

impl Config {
    /// Get the [cache host endianness](#cache-host-endianness) configuration.
    #[must_use]
    pub fn cache_host_endianness(&self) -> bool {
        self.cache_host_endianness
    }

    /// Set the [cache host endianness](#cache-host-endianness) configuration.
    pub fn set_cache_host_endianness(&mut self, cache_host_endianness: bool) {
        self.cache_host_endianness = cache_host_endianness;
    }
}

static CONFIG: OnceLock<RwLock<Config>> = OnceLock::new();

/// Returns a reference to the global bitrender configuration.
///
/// # Panics
/// This function panics if the underlying lock has been poisoned and might panic if the global config is already held by the current thread.
pub fn global_config() -> RwLockReadGuard<'static, Config> {
    CONFIG
        .get_or_init(|| RwLock::new(Config::default()))
        .read()
        .unwrap()
}

/// Returns a mutable reference to the global bitrender configuration.
///
/// # Panics
/// This function panics if the underlying lock has been poisoned and might panic if the global config is already held by the current thread.
pub fn global_config_mut() -> RwLockWriteGuard<'static, Config> {
    CONFIG
        .get_or_init(|| RwLock::new(Config::default()))
        .write()
        .unwrap()
}
