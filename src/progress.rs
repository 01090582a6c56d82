//! Progress reporting for module batches
//!
//! Lifecycle operations report through the [`ProgressReporter`] trait so the
//! CLI can show a bar while tests stay quiet.

use indicatif::{ProgressBar, ProgressStyle};

pub trait ProgressReporter {
    /// Show the module currently being processed
    fn start_module(&mut self, module: &str, current: usize, total: usize);

    /// Describe the step running for the current module
    fn step(&mut self, message: &str);

    /// Print a line without breaking the bar
    fn println(&mut self, line: &str);

    /// Mark the current module as done
    fn finish_module(&mut self);

    fn finish(&mut self);
}

/// Progress bar on stderr; hidden automatically when stderr is not a terminal
pub struct InteractiveProgressReporter {
    module_pb: ProgressBar,
    current: String,
}

impl InteractiveProgressReporter {
    pub fn new(total_modules: u64) -> Self {
        let style = ProgressStyle::default_bar()
            .template("{spinner} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let module_pb = ProgressBar::new(total_modules);
        module_pb.set_style(style);

        Self {
            module_pb,
            current: String::new(),
        }
    }
}

impl ProgressReporter for InteractiveProgressReporter {
    fn start_module(&mut self, module: &str, current: usize, total: usize) {
        self.current = format!("({current}/{total}) {module}");
        self.module_pb.set_message(self.current.clone());
    }

    fn step(&mut self, message: &str) {
        self.module_pb.set_message(format!("{}: {message}", self.current));
        self.module_pb.tick();
    }

    fn println(&mut self, line: &str) {
        self.module_pb.suspend(|| println!("{line}"));
    }

    fn finish_module(&mut self) {
        self.module_pb.inc(1);
    }

    fn finish(&mut self) {
        self.module_pb.finish_and_clear();
    }
}

/// Reporter printing only the lines, used by tests and non-batch callers
#[derive(Default)]
pub struct SilentProgressReporter;

impl ProgressReporter for SilentProgressReporter {
    fn start_module(&mut self, _module: &str, _current: usize, _total: usize) {}

    fn step(&mut self, _message: &str) {}

    fn println(&mut self, line: &str) {
        println!("{line}");
    }

    fn finish_module(&mut self) {}

    fn finish(&mut self) {}
}
