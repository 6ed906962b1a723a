//! Process-wide settings.
//!
//! [`Settings`] holds the **reference date** — an optional fixed "today"
//! that stands in for the wall-clock date.  It is a process-wide singleton
//! accessed via a `std::sync::OnceLock`.
//!
//! Thread safety: the reference date is stored behind a `Mutex` so that it
//! can be changed from any thread.  Each test that changes the reference date
//! should restore it when done, most easily via [`ScopedToday`].

use std::sync::{Mutex, OnceLock};

/// Process-wide settings used by the kalenderwoche-rs crates.
///
/// Currently the only setting is the reference date.  When set, clock
/// queries report that date as "today"; when unset, the real local date is
/// used.
pub struct Settings {
    /// The pinned reference date (days since 0001-01-01, serial 1).
    today: Mutex<Option<i32>>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            today: Mutex::new(None),
        })
    }

    /// Return the pinned reference date as a serial number.
    ///
    /// Returns `None` if no reference date has been set.
    pub fn today_serial(&self) -> Option<i32> {
        *self.today.lock().expect("Settings mutex poisoned")
    }

    /// Pin the reference date as a serial number.
    pub fn set_today_serial(&self, serial: i32) {
        *self.today.lock().expect("Settings mutex poisoned") = Some(serial);
    }

    /// Clear the reference date, resetting it to "use the wall clock".
    pub fn reset_today(&self) {
        *self.today.lock().expect("Settings mutex poisoned") = None;
    }
}

/// RAII guard that pins the reference date and restores the previous value
/// on drop.
///
/// Intended for tests that must not leak a pinned "today" into the rest of
/// the process.
pub struct ScopedToday {
    previous: Option<i32>,
}

impl ScopedToday {
    /// Pin the reference date to `serial` for the lifetime of the guard.
    pub fn new(serial: i32) -> Self {
        let previous = Settings::instance().today_serial();
        Settings::instance().set_today_serial(serial);
        ScopedToday { previous }
    }
}

impl Drop for ScopedToday {
    fn drop(&mut self) {
        match self.previous {
            Some(serial) => Settings::instance().set_today_serial(serial),
            None => Settings::instance().reset_today(),
        }
    }
}
