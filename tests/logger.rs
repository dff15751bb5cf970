//! Code written against `Logger` works with the file writer and with any
//! other implementation.

use chrono::{Local, TimeZone};
use dailylog::{
    Level, LevelCode, Logger, ManualClock, RotatingWriter, log_at, log_debug, log_error, log_info,
};
use std::fs;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

#[derive(Default)]
struct Recording {
    lines: Mutex<Vec<(&'static str, String)>>,
}

impl Logger for Recording {
    fn log(&self, level: LevelCode, args: std::fmt::Arguments<'_>) {
        self.lines.lock().unwrap().push((level.label(), args.to_string()));
    }
}

fn start_service(logger: &dyn Logger, port: u16) {
    log_info!(logger, "listening on {port}");
    log_debug!(logger, "workers={}", 4);
    log_at!(logger, Level::Warn, "slow start");
    log_at!(logger, LevelCode(42), "custom");
    log_error!(logger, "bind failed");
}

#[test]
fn default_methods_map_to_levels() {
    let recording = Recording::default();
    start_service(&recording, 8080);

    let lines = recording.lines.lock().unwrap();
    assert_eq!(
        *lines,
        vec![
            ("INFO ", "listening on 8080".to_string()),
            ("DEBUG ", "workers=4".to_string()),
            ("WARN ", "slow start".to_string()),
            ("UNKNOWN ", "custom".to_string()),
            ("ERROR ", "bind failed".to_string()),
        ]
    );
}

#[test]
fn rotating_writer_behind_the_trait() {
    let tmp = TempDir::new().unwrap();
    let clock = Arc::new(ManualClock::new(Local.with_ymd_and_hms(2024, 4, 2, 6, 0, 0).unwrap()));
    let writer = RotatingWriter::builder(tmp.path()).clock(clock).build().unwrap();
    let shared: Arc<dyn Logger> = Arc::new(writer);

    start_service(&shared, 9000);
    shared.flush().unwrap();

    let content = fs::read_to_string(tmp.path().join("2024-04-02.log")).unwrap();
    assert_eq!(
        content,
        "2024/04/02 06:00:00 INFO listening on 9000\n\
         2024/04/02 06:00:00 DEBUG workers=4\n\
         2024/04/02 06:00:00 WARN slow start\n\
         2024/04/02 06:00:00 UNKNOWN custom\n\
         2024/04/02 06:00:00 ERROR bind failed\n"
    );
}
