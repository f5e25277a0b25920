//! Treatment output port
//!
//! Defines where the treatment narrative goes.

/// Line-oriented sink for treatment narratives
///
/// Implementations live in the presentation layer (console) or in tests.
/// Writing is synchronous and non-fallible; one call per line, in order.
pub trait TreatmentOutput: Send + Sync {
    /// Write one line of narrative
    fn write_line(&self, line: &str);
}

/// No-op output for when the narrative is not needed
pub struct NoOutput;

impl TreatmentOutput for NoOutput {
    fn write_line(&self, _line: &str) {}
}

#[cfg(test)]
pub(crate) mod testing {
    use super::TreatmentOutput;
    use std::sync::Mutex;

    /// Captures every written line
    #[derive(Default)]
    pub struct RecordingOutput {
        lines: Mutex<Vec<String>>,
    }

    impl RecordingOutput {
        pub fn lines(&self) -> Vec<String> {
            self.lines.lock().unwrap().clone()
        }
    }

    impl TreatmentOutput for RecordingOutput {
        fn write_line(&self, line: &str) {
            self.lines.lock().unwrap().push(line.to_string());
        }
    }
}
