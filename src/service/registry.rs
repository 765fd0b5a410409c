//! Configuration link
//!
//! Holds the currently registered configuration service behind a mutex.

use log::debug;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::config::ConfigurationService;

/// Lock-guarded slot for the active configuration service
#[derive(Default)]
pub struct ConfigurationLink {
    current: Mutex<Option<Arc<dyn ConfigurationService>>>,
}

impl ConfigurationLink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `service`, replacing any previous registration.
    pub fn set(&self, service: Arc<dyn ConfigurationService>) {
        *self.lock() = Some(service);
        debug!("New configuration service registered.");
    }

    /// Clears the slot only if `service` is the one currently registered.
    ///
    /// Returns whether anything was cleared.
    pub fn unset(&self, service: &Arc<dyn ConfigurationService>) -> bool {
        let mut current = self.lock();
        let is_current = current
            .as_ref()
            .is_some_and(|c| std::ptr::addr_eq(Arc::as_ptr(c), Arc::as_ptr(service)));

        if is_current {
            *current = None;
            debug!("Configuration service unregistered.");
        }
        is_current
    }

    /// Returns the registered service, if any.
    pub fn get(&self) -> Option<Arc<dyn ConfigurationService>> {
        self.lock().clone()
    }

    pub fn is_set(&self) -> bool {
        self.lock().is_some()
    }

    fn lock(&self) -> MutexGuard<'_, Option<Arc<dyn ConfigurationService>>> {
        // The slot holds a plain pointer; a panic elsewhere cannot leave it half-written.
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for ConfigurationLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigurationLink")
            .field("is_set", &self.is_set())
            .finish()
    }
}
