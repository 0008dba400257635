#[macro_use]
extern crate starks;

use starks::iterutils::sort_by;
use starks::perf::{self, TimerSink};
use starks::singleton::{Singleton, SingletonCell};
use starks::DoubleDict;

#[test]
fn co_sort() {
    let sorted = sort_by(vec![vec!["3", "4", "2", "6"], vec!["a", "k", "o", "p"]], &[1, 3, 2, 0], false);
    assert_eq!(sorted, vec![vec!["6", "3", "2", "4"], vec!["p", "a", "o", "k"]]);

    let reversed = sort_by(vec![vec!['w', 'x', 'y', 'z']], &[1, 3, 2, 0], true);
    assert_eq!(reversed, vec![vec!['x', 'y', 'w', 'z']]);
}

pub struct Catalogue(DoubleDict<&'static str, u32>);
impl_singleton!(Catalogue, Catalogue(double_dict!("swiss" => 1, "brie" => 2).unwrap_or_default()));

static SHARED: SingletonCell<Vec<&'static str>> = SingletonCell::new();

#[test]
fn singletons() {
    assert!(::std::ptr::eq(Catalogue::instance(), Catalogue::instance()));
    assert_eq!(Catalogue::instance().0.inverse()[&2], "brie");

    let first = SHARED.get_or_init(|| vec!["first"]);
    let second = SHARED.get_or_init(|| vec!["second"]);
    assert!(::std::ptr::eq(first, second));
    assert_eq!(SHARED.get(), Some(&vec!["first"]));
}

#[test]
fn named_loggers() {
    let log = logger!(Catalogue);
    assert_eq!(log.name(), "utils::Catalogue");
    assert!(::std::sync::Arc::ptr_eq(&log, &starks::create_logger("utils", Some("Catalogue"))));
    assert_eq!(logger!().name(), "utils");
}

#[test]
fn timing_a_map() {
    let dd = perf::timed_with("build", TimerSink::Silent, || {
        DoubleDict::try_from_iter((0..1000u32).map(|i| (i, u64::from(i) * 3))).unwrap()
    });
    let t = perf::timer("inverse").with_sink(TimerSink::Silent);
    let inv = dd.inverse();
    assert_eq!(inv[&2997], 999);
    assert!(t.report().starts_with("(inverse "));
}
