#![cfg(feature = "log")]

use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};

use flex_list::{ArrayList, GrowExact};

struct Capture(Mutex<Vec<String>>);

impl Log for Capture {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Trace
    }

    fn log(&self, record: &Record) {
        if record.target().starts_with("flex_list") {
            if let Ok(mut lines) = self.0.lock() {
                lines.push(record.args().to_string());
            }
        }
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture(Mutex::new(Vec::new()));

// the logger is process-global, so every scenario lives in one test
#[test]
fn log_reallocation_traces() {
    log::set_logger(&CAPTURE).expect("logger already installed");
    log::set_max_level(LevelFilter::Trace);

    let mut list = ArrayList::with_grow(2, GrowExact);
    for value in 0..3 {
        list.add_last(value);
    }
    list.clear();
    list.shrink_to_fit();

    let lines = CAPTURE.0.lock().unwrap().clone();
    assert_eq!(
        lines,
        [
            "ArrayList growing from capacity 2 to 3",
            "ArrayList shrinking from capacity 3 to 0",
        ]
    );
}
