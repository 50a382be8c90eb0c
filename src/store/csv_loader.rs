//! CSV readers for class-record and count files.
//!
//! Record files carry one row per class with the columns `msc` (code),
//! `p` (support) and one `f<method>` score column per method. Count files
//! carry `true,predicted,count`. Unknown extra columns are ignored.

use crate::core::{
    is_valid_score, parse_whole_number, ClassRecord, CountTriple, Method, MethodScores, SourceKey,
};
use crate::errors::{Error, Result};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const CODE_COLUMN: &str = "msc";
const SUPPORT_COLUMN: &str = "p";

/// Column positions resolved from a record-file header.
struct RecordLayout {
    code: usize,
    support: usize,
    scores: [usize; Method::COUNT],
}

impl RecordLayout {
    fn from_header(header: &StringRecord, source: SourceKey, file: &str) -> Result<Self> {
        let position = |name: &str| header.iter().position(|h| h == name);

        let code = position(CODE_COLUMN)
            .ok_or_else(|| Error::malformed(file, 0, format!("missing column '{CODE_COLUMN}'")))?;
        let support = position(SUPPORT_COLUMN).ok_or_else(|| {
            Error::malformed(file, 0, format!("missing column '{SUPPORT_COLUMN}'"))
        })?;

        let mut scores = [0; Method::COUNT];
        for method in Method::all() {
            scores[method.index()] =
                position(method.column().as_str()).ok_or_else(|| Error::MissingMethodColumn {
                    dataset: source.key().to_string(),
                    method: method.key().to_string(),
                })?;
        }

        Ok(Self {
            code,
            support,
            scores,
        })
    }
}

/// Reads the class records of one reference source from a CSV file.
pub fn read_records(path: &Path, source: SourceKey) -> Result<Vec<ClassRecord>> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    parse_records(file, source, &path.display().to_string())
}

/// Parses class records from any CSV reader. `file` labels error messages.
pub fn parse_records<R: Read>(
    reader: R,
    source: SourceKey,
    file: &str,
) -> Result<Vec<ClassRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let header = reader.headers()?.clone();
    let layout = RecordLayout::from_header(&header, source, file)?;

    let mut records = Vec::new();
    for (idx, row) in reader.records().enumerate() {
        let row_number = idx + 1;
        let row = row.map_err(|e| Error::malformed(file, row_number, e.to_string()))?;
        records.push(parse_record_row(&row, &layout, source, file, row_number)?);
    }

    Ok(records)
}

fn parse_record_row(
    row: &StringRecord,
    layout: &RecordLayout,
    source: SourceKey,
    file: &str,
    row_number: usize,
) -> Result<ClassRecord> {
    let field = |i: usize| row.get(i).unwrap_or("");

    let code = field(layout.code);
    if code.is_empty() {
        return Err(Error::malformed(file, row_number, "empty class code"));
    }

    let support = parse_whole_number(field(layout.support)).map_err(|reason| {
        Error::malformed(file, row_number, format!("invalid support: {reason}"))
    })?;

    let scores = MethodScores::try_from_fn(|method| {
        parse_score(field(layout.scores[method.index()]), method, code, source, file, row_number)
    })?;

    Ok(ClassRecord::new(code, support, scores))
}

fn parse_score(
    raw: &str,
    method: Method,
    code: &str,
    source: SourceKey,
    file: &str,
    row_number: usize,
) -> Result<f64> {
    if raw.is_empty() {
        return Err(Error::MissingMethod {
            dataset: source.key().to_string(),
            code: code.to_string(),
            method: method.key().to_string(),
        });
    }

    let value: f64 = raw.parse().map_err(|_| {
        Error::malformed(
            file,
            row_number,
            format!("invalid score '{raw}' for method '{method}'"),
        )
    })?;

    if !is_valid_score(value) {
        return Err(Error::score_out_of_range(source, code, method, value));
    }

    Ok(value)
}

/// Reads the sparse count triples from a CSV file.
pub fn read_counts(path: &Path) -> Result<Vec<CountTriple>> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    parse_counts(file, &path.display().to_string())
}

/// Parses count triples from any CSV reader. `file` labels error messages.
pub fn parse_counts<R: Read>(reader: R, file: &str) -> Result<Vec<CountTriple>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    reader
        .deserialize::<CountTriple>()
        .enumerate()
        .map(|(idx, row)| row.map_err(|e| Error::malformed(file, idx + 1, e.to_string())))
        .collect()
}
