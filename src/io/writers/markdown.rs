use crate::core::{ClassRecord, METHODS};
use crate::io::output::{OutputWriter, RenderOptions};
use crate::pipeline::{Heatmap, Recomputation};
use std::io::Write;

pub struct MarkdownWriter<W: Write> {
    writer: W,
    options: RenderOptions,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W, options: RenderOptions) -> Self {
        Self { writer, options }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_header(&mut self, result: &Recomputation) -> anyhow::Result<()> {
        let params = &result.params;
        writeln!(self.writer, "# MSC Classification Comparison")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Parameter | Value |")?;
        writeln!(self.writer, "|-----------|-------|")?;
        writeln!(self.writer, "| Reference | {} |", params.source.label())?;
        writeln!(self.writer, "| Minimum support | {} |", params.minimum)?;
        writeln!(self.writer, "| Sorted by | {} |", params.sort)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_table(&mut self, result: &Recomputation) -> anyhow::Result<()> {
        writeln!(self.writer, "## Ranked Classes")?;
        writeln!(self.writer)?;

        if result.table.is_empty() {
            writeln!(
                self.writer,
                "_No classes with support >= {}._",
                result.params.minimum
            )?;
            writeln!(self.writer)?;
            return Ok(());
        }

        let sort = result.params.sort;
        let method_headers: Vec<String> = METHODS
            .iter()
            .map(|m| {
                if *m == sort {
                    format!("**{}**", m.key())
                } else {
                    m.key().to_string()
                }
            })
            .collect();
        writeln!(self.writer, "| msc | p | {} |", method_headers.join(" | "))?;
        writeln!(
            self.writer,
            "|-----|---|{}",
            "---|".repeat(METHODS.len())
        )?;

        let visible = self.options.visible_rows(result.table.len());
        for record in &result.table[..visible] {
            writeln!(self.writer, "{}", record_line(record))?;
        }

        if visible < result.table.len() {
            writeln!(self.writer)?;
            writeln!(
                self.writer,
                "_... {} more of {} rows_",
                result.table.len() - visible,
                result.table.len()
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_heatmap(&mut self, heatmap: &Heatmap) -> anyhow::Result<()> {
        writeln!(self.writer, "## Confusion Matrix")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Labels from {}. Rows are true classes, columns are predicted classes.",
            heatmap.reference_source.label()
        )?;
        writeln!(self.writer)?;

        if heatmap.matrix.is_empty() {
            writeln!(self.writer, "_Empty matrix._")?;
            return Ok(());
        }

        writeln!(self.writer, "| | {} |", heatmap.display_labels.join(" | "))?;
        writeln!(
            self.writer,
            "|---|{}",
            "---:|".repeat(heatmap.display_labels.len())
        )?;
        for (label, row) in heatmap.display_labels.iter().zip(heatmap.matrix.rows()) {
            let cells: Vec<String> = row.iter().map(u64::to_string).collect();
            writeln!(self.writer, "| {} | {} |", label, cells.join(" | "))?;
        }
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "On-diagonal: {} of {} counted observations.",
            heatmap.matrix.diagonal_total(),
            heatmap.matrix.total()
        )?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_recomputation(&mut self, result: &Recomputation) -> anyhow::Result<()> {
        let writers: Vec<fn(&mut Self, &Recomputation) -> anyhow::Result<()>> = vec![
            |w, r| w.write_header(r),
            |w, r| w.write_table(r),
            |w, r| w.write_heatmap(&r.heatmap),
        ];

        writers.iter().try_for_each(|writer| writer(self, result))?;
        self.writer.flush()?;
        Ok(())
    }
}

fn record_line(record: &ClassRecord) -> String {
    let scores: Vec<String> = record
        .scores
        .iter()
        .map(|(_, score)| format!("{score:.3}"))
        .collect();
    format!(
        "| {} | {} | {} |",
        record.code,
        record.support,
        scores.join(" | ")
    )
}
