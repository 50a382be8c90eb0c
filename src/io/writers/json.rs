use crate::io::output::OutputWriter;
use crate::pipeline::Recomputation;
use std::io::Write;

/// Writes the full result set as pretty-printed JSON.
pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_recomputation(&mut self, result: &Recomputation) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(result)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
