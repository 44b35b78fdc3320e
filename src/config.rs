//! Runtime configuration.
//!
//! Settings are read from the environment once, on first use:
//!
//! * `DENSEVEC_OPERATION_CHECK`: validate operand lengths before elementwise
//!   operations (default `true`).
//! * `DENSEVEC_THREAD_NUMBER`: default worker count for
//!   [`ParallelExecutor`](crate::parallel::ParallelExecutor).
//! * `DENSEVEC_BLOCK_SIZE`: default block length for the executor.
//!
//! The operation check has a process-wide default ([`set_operation_check`])
//! and a thread-local override for a call region
//! ([`scoped_operation_check`]).

use std::cell::Cell;
use std::env;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

/// Default number of elements per parallel block.
pub const DEFAULT_BLOCK_SIZE: usize = 4096;

const ENV_OPERATION_CHECK: &str = "DENSEVEC_OPERATION_CHECK";
const ENV_THREAD_NUMBER: &str = "DENSEVEC_THREAD_NUMBER";
const ENV_BLOCK_SIZE: &str = "DENSEVEC_BLOCK_SIZE";

/// Snapshot of the environment-derived settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Whether binary elementwise operations validate lengths.
    pub operation_check: bool,
    /// Worker threads used by a default executor.
    pub thread_number: usize,
    /// Elements per block in the parallel executor.
    pub block_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            operation_check: true,
            thread_number: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }
}

impl Config {
    /// Reads the settings from the environment, falling back to defaults for
    /// missing or unparsable values.
    pub fn from_env() -> Self {
        let defaults = Config::default();
        Config {
            operation_check: env_bool(ENV_OPERATION_CHECK).unwrap_or(defaults.operation_check),
            thread_number: env_usize(ENV_THREAD_NUMBER)
                .filter(|&n| n > 0)
                .unwrap_or(defaults.thread_number),
            block_size: env_usize(ENV_BLOCK_SIZE)
                .filter(|&n| n > 0)
                .unwrap_or(defaults.block_size),
        }
    }

    /// The process-wide configuration, read from the environment once.
    pub fn global() -> &'static Config {
        static GLOBAL: OnceLock<Config> = OnceLock::new();
        GLOBAL.get_or_init(Config::from_env)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn env_bool(key: &str) -> Option<bool> {
    env::var(key).ok().as_deref().and_then(parse_bool)
}

fn env_usize(key: &str) -> Option<usize> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

static OPERATION_CHECK: AtomicBool = AtomicBool::new(true);
static OPERATION_CHECK_INIT: OnceLock<()> = OnceLock::new();

thread_local! {
    static OPERATION_CHECK_OVERRIDE: Cell<Option<bool>> = const { Cell::new(None) };
}

fn global_operation_check() -> &'static AtomicBool {
    OPERATION_CHECK_INIT.get_or_init(|| {
        OPERATION_CHECK.store(Config::global().operation_check, Ordering::Relaxed);
    });
    &OPERATION_CHECK
}

/// Whether elementwise operations on the current thread validate lengths.
#[inline]
pub fn operation_check() -> bool {
    OPERATION_CHECK_OVERRIDE
        .with(|cell| cell.get())
        .unwrap_or_else(|| global_operation_check().load(Ordering::Relaxed))
}

/// Sets the process-wide default. Intended to be called once at startup.
pub fn set_operation_check(enabled: bool) {
    global_operation_check().store(enabled, Ordering::Relaxed);
}

/// Restores the previous thread-local setting when dropped.
#[must_use = "the override is reverted as soon as the guard is dropped"]
#[derive(Debug)]
pub struct OperationCheckGuard {
    previous: Option<bool>,
}

impl Drop for OperationCheckGuard {
    fn drop(&mut self) {
        let previous = self.previous;
        OPERATION_CHECK_OVERRIDE.with(|cell| cell.set(previous));
    }
}

/// Overrides the operation check for the current thread until the returned
/// guard is dropped.
///
/// ```
/// use densevec::config;
///
/// {
///     let _unchecked = config::scoped_operation_check(false);
///     assert!(!config::operation_check());
/// }
/// ```
pub fn scoped_operation_check(enabled: bool) -> OperationCheckGuard {
    let previous = OPERATION_CHECK_OVERRIDE.with(|cell| cell.replace(Some(enabled)));
    OperationCheckGuard { previous }
}
