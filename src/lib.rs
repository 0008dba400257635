//! Small utilities that keep turning up.
//!
//! The main item is [`DoubleDict`], a dictionary whose values are as unique as its keys, so it can
//! be looked up in both directions. Around it:
//!
//! - [`singleton`]: one instance per process, three ways.
//! - [`iterutils::sort_by`]: sort several lists by one list of keys.
//! - [`logutils`]: loggers named after the module (and type) that made them.
//! - [`perf::timer`]: report how long a block took.

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate itertools;
extern crate once_cell;
extern crate thiserror;

pub mod error;
pub mod key;
#[macro_use]
pub mod double_dict;
pub mod serial;
#[macro_use]
pub mod singleton;
pub mod iterutils;
#[macro_use]
pub mod logutils;
pub mod perf;

pub use error::{Error, Result};
pub use key::{Key, Value};
pub use double_dict::{DoubleDict, Source};
pub use singleton::{Singleton, SingletonCell};
pub use logutils::{create_logger, Logger};
pub use perf::{timer, Timer};
