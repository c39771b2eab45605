use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};

use newrap_core::FnSystem;
use newrap_observers::LogObserver;
use newrap_solvers::{equation::newton, linear::Cramer};

/// Captures formatted messages for the `newrap` target.
struct Capture {
    lines: Mutex<Vec<(Level, String)>>,
}

impl Log for Capture {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.target() == "newrap"
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            self.lines
                .lock()
                .expect("lock poisoned")
                .push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture {
    lines: Mutex::new(Vec::new()),
};

#[test]
fn log_observer_reports_each_iteration() {
    log::set_logger(&CAPTURE).expect("logger is installed once");
    log::set_max_level(LevelFilter::Trace);

    // x + y - 3 and x - 1 are solved exactly in one step.
    let system = FnSystem::new(
        |x: &[f64; 2]| [x[0] + x[1] - 3.0, x[0] - 1.0],
        |_: &[f64; 2]| [[1.0, 1.0], [1.0, 0.0]],
    );

    let solution = newton::solve(
        &system,
        &Cramer::default(),
        [4.0, 4.0],
        &newton::Config::default(),
        LogObserver::new(Level::Info),
    )
    .expect("should solve");
    assert_eq!(solution.iters, 1);

    let lines = CAPTURE.lines.lock().expect("lock poisoned");
    let info: Vec<&str> = lines
        .iter()
        .filter(|(level, _)| *level == Level::Info)
        .map(|(_, line)| line.as_str())
        .collect();

    assert_eq!(
        info,
        vec![
            "Iteration 1, Residual 0.00000000e0",
            "X0 1.0000000000000000 X1 2.0000000000000000",
        ]
    );
}
