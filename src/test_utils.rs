use std::sync::{Mutex, OnceLock};

/// Global lock for environment variable modifications in tests.
/// Configuration is loaded from the environment, so tests that set or unset
/// variables must serialize against each other.
pub static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

pub fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}
