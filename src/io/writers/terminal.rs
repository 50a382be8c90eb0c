use crate::core::{ClassRecord, METHODS};
use crate::formatting::ColoredFormatter;
use crate::io::output::{OutputWriter, RenderOptions};
use crate::pipeline::{BarSeries, Heatmap, Recomputation};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table};
use std::io::Write;

const BAR_WIDTH: usize = 40;

/// Renders tables, a score bar chart and the heatmap for a terminal.
pub struct TerminalWriter<W: Write> {
    writer: W,
    options: RenderOptions,
    formatter: ColoredFormatter,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, options: RenderOptions) -> Self {
        Self {
            writer,
            options,
            formatter: ColoredFormatter::new(options.formatting),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn new_table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        if !self.options.formatting.use_color() {
            table.force_no_tty();
        }
        table
    }

    fn write_header(&mut self, result: &Recomputation) -> anyhow::Result<()> {
        let params = &result.params;
        writeln!(
            self.writer,
            "{}",
            self.formatter.header("MSC CLASSIFICATION COMPARISON")
        )?;
        writeln!(
            self.writer,
            "Reference: {}  Minimum support: {}  Sorted by: {}",
            params.source.label(),
            params.minimum,
            self.formatter.highlight(params.sort.key())
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_ranked_table(&mut self, result: &Recomputation) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", self.formatter.header("Ranked classes"))?;

        if result.table.is_empty() {
            let message = format!("No classes with support >= {}", result.params.minimum);
            writeln!(self.writer, "{}", self.formatter.warning(&message))?;
            writeln!(self.writer)?;
            return Ok(());
        }

        let sort = result.params.sort;
        let mut table = self.new_table();
        let mut header = vec![Cell::new("msc"), Cell::new("p")];
        header.extend(METHODS.iter().map(|&method| {
            let cell = Cell::new(method.key());
            if method == sort {
                cell.fg(Color::Green).add_attribute(Attribute::Bold)
            } else {
                cell
            }
        }));
        table.set_header(header);

        let visible = self.options.visible_rows(result.table.len());
        for record in &result.table[..visible] {
            table.add_row(record_row(record));
        }

        writeln!(self.writer, "{table}")?;
        self.write_truncation_note(result.table.len(), visible)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_truncation_note(&mut self, total: usize, visible: usize) -> anyhow::Result<()> {
        if visible < total {
            writeln!(
                self.writer,
                "{}",
                self.formatter
                    .dim(&format!("... {} more of {} rows", total - visible, total))
            )?;
        }
        Ok(())
    }

    fn write_sort_series(&mut self, result: &Recomputation) -> anyhow::Result<()> {
        let Some(series) = result
            .chart
            .series
            .iter()
            .find(|s| s.method == result.params.sort)
        else {
            return Ok(());
        };
        if series.points.is_empty() {
            return Ok(());
        }

        let title = format!("{} by msc ({})", result.chart.layout.y_title, series.method);
        writeln!(self.writer, "{}", self.formatter.header(&title))?;
        let visible = self.options.visible_rows(series.points.len());
        for line in bar_lines(series, visible) {
            writeln!(self.writer, "{line}")?;
        }
        self.write_truncation_note(series.points.len(), visible)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_heatmap(&mut self, heatmap: &Heatmap) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "{}",
            self.formatter.header(&format!(
                "Confusion matrix (labels from {}, rows = true, columns = predicted)",
                heatmap.reference_source
            ))
        )?;

        if heatmap.matrix.is_empty() {
            writeln!(self.writer, "{}", self.formatter.warning("(empty)"))?;
            return Ok(());
        }

        let mut table = self.new_table();
        let mut header = vec![Cell::new("")];
        header.extend(heatmap.display_labels.iter().map(Cell::new));
        table.set_header(header);

        for (i, (label, row)) in heatmap
            .display_labels
            .iter()
            .zip(heatmap.matrix.rows())
            .enumerate()
        {
            let mut cells = vec![Cell::new(label).add_attribute(Attribute::Bold)];
            cells.extend(row.iter().enumerate().map(|(j, count)| {
                let cell = Cell::new(count).set_alignment(CellAlignment::Right);
                if i == j && *count > 0 {
                    cell.fg(Color::Green).add_attribute(Attribute::Bold)
                } else {
                    cell
                }
            }));
            table.add_row(cells);
        }

        writeln!(self.writer, "{table}")?;
        writeln!(
            self.writer,
            "On-diagonal: {} of {} counted observations",
            heatmap.matrix.diagonal_total(),
            heatmap.matrix.total()
        )?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_recomputation(&mut self, result: &Recomputation) -> anyhow::Result<()> {
        self.write_header(result)?;
        self.write_ranked_table(result)?;
        self.write_sort_series(result)?;
        self.write_heatmap(&result.heatmap)?;
        self.writer.flush()?;
        Ok(())
    }
}

fn record_row(record: &ClassRecord) -> Vec<Cell> {
    let mut cells = vec![
        Cell::new(&record.code),
        Cell::new(record.support).set_alignment(CellAlignment::Right),
    ];
    cells.extend(
        record
            .scores
            .iter()
            .map(|(_, score)| Cell::new(format!("{score:.3}")).set_alignment(CellAlignment::Right)),
    );
    cells
}

/// Horizontal text bars, one per point, scaled to the [0, 1] score range.
fn bar_lines(series: &BarSeries, visible: usize) -> Vec<String> {
    let code_width = series
        .points
        .iter()
        .map(|p| p.code.len())
        .max()
        .unwrap_or(0);

    series.points[..visible]
        .iter()
        .map(|point| {
            let filled = (point.score.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
            format!(
                "{:>code_width$} {}{} {:.3}",
                point.code,
                "█".repeat(filled),
                " ".repeat(BAR_WIDTH - filled),
                point.score
            )
        })
        .collect()
}
