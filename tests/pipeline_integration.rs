//! End-to-end pipeline tests: CSV files on disk through the recompute
//! coordinator, plus property tests for the ordering and matrix invariants.

use indoc::indoc;
use mscmap::core::{ClassRecord, CountIndex, CountTriple, Method, MethodScores, SourceKey, METHODS};
use mscmap::errors::Error;
use mscmap::pipeline::{
    filter_by_support, format_labels, is_ranked, sort_by_method, ConfusionMatrix,
    HeatmapSettings, Pipeline, RecomputeParams,
};
use mscmap::store::{DataFiles, DatasetStore};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const HEADER: &str =
    "msc,p,fzb1,fmr1,ftiter,frefs,ftitls,ftexts,fref1,fuT1,fuM1,ftiref,fteref,ftite";

fn write_fixture(dir: &Path) -> DataFiles {
    let files = DataFiles {
        zb1: dir.join("zbByMsc.csv"),
        mr1: dir.join("mrByMsc.csv"),
        counts: dir.join("counts.csv"),
    };
    fs::write(
        &files.zb1,
        format!(
            "{HEADER}\n\
             05,300,0.10,0.60,0,0,0,0,0,0,0,0,0,0\n\
             11,250,0.20,0.90,0,0,0,0,0,0,0,0,0,0\n\
             14,100,0.30,0.80,0,0,0,0,0,0,0,0,0,0\n\
             60,220,0.40,0.60,0,0,0,0,0,0,0,0,0,0\n"
        ),
    )
    .unwrap();
    fs::write(
        &files.mr1,
        format!(
            "{HEADER}\n\
             05,50,0.30,0.90,0,0,0,0,0,0,0,0,0,0\n\
             11,500,0.40,0.80,0,0,0,0,0,0,0,0,0,0\n"
        ),
    )
    .unwrap();
    fs::write(
        &files.counts,
        indoc! {"
            true,predicted,count
            05,05,10
            11,60,2
            60,05,5
        "},
    )
    .unwrap();
    files
}

fn loaded_store() -> (TempDir, DatasetStore) {
    let dir = TempDir::new().unwrap();
    let files = write_fixture(dir.path());
    let store = DatasetStore::load(&files).unwrap();
    (dir, store)
}

fn codes(records: &[ClassRecord]) -> Vec<&str> {
    records.iter().map(|r| r.code.as_str()).collect()
}

#[test]
fn test_recompute_from_files() {
    let (_dir, store) = loaded_store();
    let pipeline = Pipeline::new(&store, HeatmapSettings::default());

    let result = pipeline.recompute_raw("zb1", "200", "mr1").unwrap();

    // 14 is below the threshold; 05 and 60 tie on mr1 and keep file order.
    assert_eq!(codes(&result.table), vec!["11", "05", "60"]);
    assert_eq!(result.chart.series.len(), METHODS.len());
    assert_eq!(result.chart.series[1].method, Method::Mr1);
    let mr1_scores: Vec<f64> = result.chart.series[1]
        .points
        .iter()
        .map(|p| p.score)
        .collect();
    assert_eq!(mr1_scores, vec![0.9, 0.6, 0.6]);

    assert_eq!(result.heatmap.matrix.labels().to_vec(), vec!["11", "05", "60"]);
    assert_eq!(
        result.heatmap.matrix.rows().to_vec(),
        vec![vec![0, 0, 2], vec![0, 10, 0], vec![0, 5, 0]]
    );
    assert_eq!(result.heatmap.display_labels, vec!["11*", "05*", "60*"]);
}

#[test]
fn test_heatmap_labels_ignore_table_source() {
    let (_dir, store) = loaded_store();
    let pipeline = Pipeline::new(&store, HeatmapSettings::default());

    let result = pipeline.recompute_raw("mr1", "0", "zb1").unwrap();

    assert_eq!(codes(&result.table), vec!["11", "05"]);
    assert_eq!(
        result.heatmap.matrix.labels().to_vec(),
        vec!["11", "14", "05", "60"]
    );
}

#[test]
fn test_threshold_above_every_support_gives_empty_outputs() {
    let (_dir, store) = loaded_store();
    let pipeline = Pipeline::new(&store, HeatmapSettings::default());

    let result = pipeline.recompute_raw("zb1", "100000", "mr1").unwrap();

    assert!(result.table.is_empty());
    assert!(result.chart.series.iter().all(|s| s.points.is_empty()));
    assert!(result.heatmap.matrix.is_empty());
    assert!(result.heatmap.display_labels.is_empty());
}

#[test]
fn test_minimum_zero_keeps_everything() {
    let (_dir, store) = loaded_store();
    let pipeline = Pipeline::new(&store, HeatmapSettings::default());

    let result = pipeline.recompute_raw("zb1", "0", "zb1").unwrap();
    assert_eq!(codes(&result.table), vec!["60", "14", "11", "05"]);
}

#[test]
fn test_invalid_parameters_produce_no_outputs() {
    let (_dir, store) = loaded_store();
    let pipeline = Pipeline::new(&store, HeatmapSettings::default());

    assert!(matches!(
        pipeline.recompute_raw("zb1", "200", "bogus"),
        Err(Error::InvalidSortKey { .. })
    ));
    assert!(matches!(
        pipeline.recompute_raw("xyz", "200", "mr1"),
        Err(Error::UnknownSource { .. })
    ));
    assert!(matches!(
        pipeline.recompute_raw("zb1", "-1", "mr1"),
        Err(Error::InvalidThreshold { .. })
    ));
    assert!(matches!(
        pipeline.recompute_raw("zb1", "2.5", "mr1"),
        Err(Error::InvalidThreshold { .. })
    ));
}

#[test]
fn test_missing_score_column_fails_load() {
    let dir = TempDir::new().unwrap();
    let files = write_fixture(dir.path());
    fs::write(&files.mr1, "msc,p,fzb1,fmr1\n05,50,0.3,0.9\n").unwrap();

    let err = DatasetStore::load(&files).unwrap_err();
    assert!(matches!(err, Error::MissingMethodColumn { .. }));
}

#[test]
fn test_duplicate_count_pair_fails_load() {
    let dir = TempDir::new().unwrap();
    let files = write_fixture(dir.path());
    fs::write(
        &files.counts,
        "true,predicted,count\n05,05,10\n05,05,4\n",
    )
    .unwrap();

    let err = DatasetStore::load(&files).unwrap_err();
    assert!(matches!(err, Error::DuplicateCount { .. }));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let files = DataFiles {
        zb1: dir.path().join("absent.csv"),
        mr1: dir.path().join("absent.csv"),
        counts: dir.path().join("absent.csv"),
    };
    assert!(matches!(
        DatasetStore::load(&files).unwrap_err(),
        Error::Io { .. }
    ));
}

#[test]
fn test_confusion_matrix_worked_example() {
    let labels: Vec<String> = ["05", "11", "60"].iter().map(|s| s.to_string()).collect();
    let matrix = ConfusionMatrix::from_triples(
        &labels,
        vec![
            CountTriple::new("05", "05", 10),
            CountTriple::new("11", "60", 2),
            CountTriple::new("99", "05", 7),
        ],
    );
    assert_eq!(
        matrix.rows().to_vec(),
        vec![vec![10, 0, 0], vec![0, 0, 2], vec![0, 0, 0]]
    );
    assert_eq!(format_labels(&labels, "*"), vec!["05*", "11*", "60*"]);
}

fn scored_record_strategy(score: impl Strategy<Value = f64>) -> impl Strategy<Value = ClassRecord> {
    ("[0-9]{2}", 0u64..2_000, prop::collection::vec(score, Method::COUNT)).prop_map(
        |(code, support, scores)| {
            ClassRecord::new(code, support, MethodScores::from_fn(|m| scores[m.index()]))
        },
    )
}

fn record_strategy() -> impl Strategy<Value = ClassRecord> {
    scored_record_strategy(0.0f64..=1.0)
}

/// Scores from a small set so equal-score runs show up in most cases.
fn tied_record_strategy() -> impl Strategy<Value = ClassRecord> {
    scored_record_strategy(prop::sample::select(vec![0.0, 0.25, 0.5, 1.0]))
}

fn method_strategy() -> impl Strategy<Value = Method> {
    prop::sample::select(METHODS.to_vec())
}

proptest! {
    #[test]
    fn prop_filtered_rows_meet_minimum(
        records in prop::collection::vec(record_strategy(), 0..40),
        minimum in 0u64..2_500,
    ) {
        let kept = filter_by_support(&records, minimum);
        prop_assert!(kept.iter().all(|r| r.support >= minimum));
        prop_assert_eq!(
            kept.len(),
            records.iter().filter(|r| r.support >= minimum).count()
        );
    }

    #[test]
    fn prop_sorted_rows_are_ranked_and_stable(
        records in prop::collection::vec(tied_record_strategy(), 0..40),
        method in method_strategy(),
    ) {
        let indexed: Vec<ClassRecord> = records
            .iter()
            .enumerate()
            .map(|(i, r)| ClassRecord::new(format!("{i:03}"), r.support, r.scores))
            .collect();
        let sorted = sort_by_method(indexed, method);

        prop_assert!(is_ranked(&sorted, method));
        for pair in sorted.windows(2) {
            if pair[0].score(method) == pair[1].score(method) {
                prop_assert!(pair[0].code < pair[1].code);
            }
        }
    }

    #[test]
    fn prop_ties_keep_input_order_across_methods(
        records in prop::collection::vec(tied_record_strategy(), 2..40),
        method in method_strategy(),
    ) {
        let sorted = sort_by_method(records.clone(), method);
        for score in [0.0, 0.25, 0.5, 1.0] {
            let before: Vec<&ClassRecord> =
                records.iter().filter(|r| r.score(method) == score).collect();
            let after: Vec<&ClassRecord> =
                sorted.iter().filter(|r| r.score(method) == score).collect();
            prop_assert_eq!(before, after);
        }
    }

    #[test]
    fn prop_heatmap_shape_matches_labels(
        zb1 in prop::collection::vec(record_strategy(), 0..25),
        triples in prop::collection::vec(("[0-9]{2}", "[0-9]{2}", 0u64..100), 0..30),
        minimum in 0u64..2_000,
        sort in method_strategy(),
    ) {
        let triples: Vec<CountTriple> = triples
            .into_iter()
            .map(|(t, p, c)| CountTriple::new(t, p, c))
            .collect();
        let store = DatasetStore::from_parts(zb1, Vec::new(), Vec::new()).unwrap();
        let pipeline = Pipeline::new(&store, HeatmapSettings::default());
        let result = pipeline.recompute(RecomputeParams::new(SourceKey::Zb1, minimum, sort));

        let heatmap = &result.heatmap;
        let n = heatmap.matrix.labels().len();
        prop_assert_eq!(heatmap.display_labels.len(), n);
        prop_assert_eq!(heatmap.matrix.rows().len(), n);
        prop_assert!(heatmap.matrix.rows().iter().all(|row| row.len() == n));
        // No counts in the store, so every cell falls back to zero.
        prop_assert_eq!(heatmap.matrix.total(), 0);

        let counts = CountIndex::from_triples(triples);
        let labels = heatmap.matrix.labels();
        let rebuilt = ConfusionMatrix::build(labels, &counts);
        for (i, true_code) in labels.iter().enumerate() {
            for (j, predicted_code) in labels.iter().enumerate() {
                prop_assert_eq!(rebuilt.get(i, j), counts.get(true_code, predicted_code));
            }
        }
    }
}
