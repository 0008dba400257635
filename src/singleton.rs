//! At most one instance of a type, process-wide.
//!
//! There are three ways to get one, and they all end up in the same kind of init-once cell:
//!
//! * [`SingletonCell`] is the cell itself, to be put in a `static` and handed around explicitly.
//! * [`Singleton`] is a trait; `impl_singleton!` implements it for a type, giving `Type::instance()`.
//! * `singleton_fn!` wraps a constructor expression into an accessor function. Arguments given on
//!   later calls are ignored, the first instance is always returned.
//!
//! Prefer passing the `&'static T` along to reaching for the global at every use site.

use once_cell::sync::OnceCell;

/// An init-once cell. `get_or_init` runs its closure at most once, even when raced.
///
/// ```
/// use starks::singleton::SingletonCell;
///
/// struct Config { verbose: bool }
/// static CONFIG: SingletonCell<Config> = SingletonCell::new();
///
/// let a = CONFIG.get_or_init(|| Config { verbose: true });
/// let b = CONFIG.get_or_init(|| Config { verbose: false });
/// assert!(b.verbose);
/// assert!(::std::ptr::eq(a, b));
/// ```
pub struct SingletonCell<T> {
    cell: OnceCell<T>,
}
impl<T> SingletonCell<T> {
    pub const fn new() -> Self {
        SingletonCell { cell: OnceCell::new() }
    }

    pub fn get_or_init<F: FnOnce() -> T>(&self, init: F) -> &T {
        self.cell.get_or_init(init)
    }

    /// Returns the instance if it has already been created.
    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

/// A type with exactly one instance. Implement with `impl_singleton!`.
pub trait Singleton: Sync + Send + 'static {
    fn instance() -> &'static Self;
}

/**
 * Implements [`Singleton`] for a type, built on first use from the given expression.
 *
 * # Usage
 *
 * ```
 * # #[macro_use] extern crate starks;
 * use starks::singleton::Singleton;
 *
 * pub struct Registry { pub name: &'static str }
 * impl_singleton!(Registry, Registry { name: "main" });
 *
 * fn main() {
 *     assert_eq!(Registry::instance().name, "main");
 *     assert!(::std::ptr::eq(Registry::instance(), Registry::instance()));
 * }
 * ```
 * */
#[macro_export]
macro_rules! impl_singleton {
    ($T:ty, $init:expr) => {
        impl $crate::singleton::Singleton for $T {
            fn instance() -> &'static Self {
                static INSTANCE: $crate::singleton::SingletonCell<$T> = $crate::singleton::SingletonCell::new();
                INSTANCE.get_or_init(|| $init)
            }
        }
    };
}

/**
 * Declares a function returning the one instance of a type.
 *
 * The arguments of the first call build the instance; later arguments are ignored.
 *
 * ```
 * # #[macro_use] extern crate starks;
 * pub struct Pool { pub size: usize }
 *
 * singleton_fn! {
 *     /// The shared pool.
 *     pub fn pool(size: usize) -> Pool = Pool { size };
 * }
 *
 * fn main() {
 *     assert_eq!(pool(4).size, 4);
 *     assert_eq!(pool(8).size, 4);
 * }
 * ```
 * */
#[macro_export]
macro_rules! singleton_fn {
    ($(#[$attr:meta])* $vis:vis fn $name:ident($($arg:ident: $argty:ty),*) -> $T:ty = $init:expr;) => {
        $(#[$attr])*
        $vis fn $name($($arg: $argty),*) -> &'static $T {
            static INSTANCE: $crate::singleton::SingletonCell<$T> = $crate::singleton::SingletonCell::new();
            INSTANCE.get_or_init(|| $init)
        }
    };
}
