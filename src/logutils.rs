//! Loggers named after where they are created.
//!
//! The name is the module path, plus the type name when created for a type. Nothing inspects the
//! call stack: `logger!` picks up `module_path!()` at the call site.
//!
//! ```
//! # #[macro_use] extern crate starks;
//! struct Cheese;
//!
//! fn main() {
//!     let log = logger!(Cheese);
//!     assert!(log.name().ends_with("::Cheese"));
//!     log.info("aged");
//! }
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use log::Level;

lazy_static! {
    static ref LOGGERS: RwLock<HashMap<String, Arc<Logger>>> = Default::default();
}

/// Joins a module path and an optional type name into a logger name.
///
/// Only the last path segment of `type_name` is kept, without generic arguments, so the output
/// of `std::any::type_name` can be passed directly.
pub fn logger_name(module: &str, type_name: Option<&str>) -> String {
    match type_name {
        None => module.to_string(),
        Some(t) => {
            let base = t.split('<').next().unwrap_or(t);
            let short = base.rsplit("::").next().unwrap_or(base);
            format!("{}::{}", module, short)
        },
    }
}

/// Returns the logger for `module` (and `type_name`). Equal names share one `Logger`.
pub fn create_logger(module: &str, type_name: Option<&str>) -> Arc<Logger> {
    let name = logger_name(module, type_name);
    {
        let loggers = LOGGERS.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(l) = loggers.get(&name) {
            return l.clone();
        }
    }
    let mut loggers = LOGGERS.write().unwrap_or_else(PoisonError::into_inner);
    loggers
        .entry(name)
        .or_insert_with_key(|name| {
            debug!("created logger {}", name);
            Arc::new(Logger { name: name.clone() })
        })
        .clone()
}

/// `logger!()` for the current module, `logger!(Type)` for a type in it.
#[macro_export]
macro_rules! logger {
    () => {
        $crate::logutils::create_logger(module_path!(), None)
    };
    ($T:ty) => {
        $crate::logutils::create_logger(module_path!(), Some(::std::any::type_name::<$T>()))
    };
}

/// A named handle on the `log` facade. Records go out with the name as their target.
#[derive(Debug, PartialEq, Eq)]
pub struct Logger {
    name: String,
}
impl Logger {
    pub fn name(&self) -> &str { &self.name }

    pub fn enabled(&self, level: Level) -> bool {
        log_enabled!(target: self.name.as_str(), level)
    }

    pub fn log<D: fmt::Display>(&self, level: Level, msg: D) {
        log!(target: self.name.as_str(), level, "{}", msg);
    }

    pub fn error<D: fmt::Display>(&self, msg: D) { self.log(Level::Error, msg) }
    pub fn warn<D: fmt::Display>(&self, msg: D) { self.log(Level::Warn, msg) }
    pub fn info<D: fmt::Display>(&self, msg: D) { self.log(Level::Info, msg) }
    pub fn debug<D: fmt::Display>(&self, msg: D) { self.log(Level::Debug, msg) }
    pub fn trace<D: fmt::Display>(&self, msg: D) { self.log(Level::Trace, msg) }
}
