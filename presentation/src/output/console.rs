//! Console adapter for treatment narratives

use clinic_application::TreatmentOutput;
use std::io::{self, Stdout, Write};
use std::sync::{Mutex, PoisonError};

/// Writes each narrative line to a terminal (stdout by default)
///
/// Every line is flushed as soon as it is written, so the narrative of
/// already-treated animals is visible even if a later patient fails.
pub struct ConsoleOutput<W: Write + Send = Stdout> {
    writer: Mutex<W>,
}

impl ConsoleOutput<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsoleOutput<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Consume the adapter and return the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> TreatmentOutput for ConsoleOutput<W> {
    fn write_line(&self, line: &str) {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        // A closed stdout must not abort the treatment
        let _ = writeln!(writer, "{}", line).and_then(|_| writer.flush());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_one_line_per_call() {
        let output = ConsoleOutput::new(Vec::new());
        output.write_line("Veterinarian Vince began treating wolf \"Grey\"");
        output.write_line("\"Grey\" makes wild-animal sounds");

        let written = String::from_utf8(output.into_inner()).unwrap();
        assert_eq!(
            written,
            "Veterinarian Vince began treating wolf \"Grey\"\n\"Grey\" makes wild-animal sounds\n"
        );
    }

    #[test]
    fn test_preserves_non_ascii_text() {
        let output = ConsoleOutput::new(Vec::new());
        output.write_line("\"Пушок\" - owner Катя");
        let written = String::from_utf8(output.into_inner()).unwrap();
        assert_eq!(written, "\"Пушок\" - owner Катя\n");
    }
}
