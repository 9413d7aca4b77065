use std::env;

/// Sets or clears an environment variable and restores it when dropped.
pub struct EnvGuard {
    key: &'static str,
    old: Option<String>,
}

impl EnvGuard {
    pub fn set(key: &'static str, value: &str) -> Self {
        let old = env::var(key).ok();
        env::set_var(key, value);
        Self { key, old }
    }

    pub fn unset(key: &'static str) -> Self {
        let old = env::var(key).ok();
        env::remove_var(key);
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old {
            Some(value) => env::set_var(self.key, value),
            None => env::remove_var(self.key),
        }
    }
}
