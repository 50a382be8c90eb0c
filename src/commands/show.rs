use crate::config::{self, MscmapConfig};
use crate::formatting::FormattingConfig;
use crate::io::{create_writer, OutputFormat, RenderOptions};
use crate::pipeline::{Pipeline, Recomputation, RecomputeParams};
use crate::store::DatasetStore;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::{debug, info};

pub struct ShowConfig {
    pub source: Option<String>,
    pub minimum: Option<String>,
    pub sort: Option<String>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub top: Option<usize>,
    pub config: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
    pub plain: bool,
}

impl ShowConfig {
    /// Raw parameter strings, with unset ones taken from config defaults.
    fn raw_params(&self, defaults: &config::DefaultsConfig) -> (String, String, String) {
        (
            self.source
                .clone()
                .unwrap_or_else(|| defaults.source.key().to_string()),
            self.minimum
                .clone()
                .unwrap_or_else(|| defaults.minimum.to_string()),
            self.sort
                .clone()
                .unwrap_or_else(|| defaults.sort.key().to_string()),
        )
    }

    fn formatting(&self) -> FormattingConfig {
        if self.plain {
            FormattingConfig::plain()
        } else {
            FormattingConfig::from_env()
        }
    }
}

fn resolve_config(show: &ShowConfig) -> Result<MscmapConfig> {
    match &show.config {
        Some(path) => config::load_config_from(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(config::load_config()),
    }
}

/// Validates parameters, loads the datasets and recomputes all three outputs.
///
/// Parameters are validated before any dataset is read, so a bad `--minimum`
/// is reported as such even when the data directory is missing.
pub fn run_show(show: &ShowConfig) -> Result<Recomputation> {
    let cfg = resolve_config(show)?;
    let (source, minimum, sort) = show.raw_params(&cfg.defaults);
    let params = RecomputeParams::parse(&source, &minimum, &sort)?;
    debug!(?params, "Validated parameters");

    let files = cfg.data.files(show.data_dir.as_deref());
    let store = DatasetStore::load(&files)?;
    let pipeline = Pipeline::new(&store, cfg.heatmap.settings());
    Ok(pipeline.recompute(params))
}

pub fn handle_show(show: ShowConfig) -> Result<()> {
    let result = run_show(&show)?;

    let destination: Box<dyn Write> = match &show.output {
        Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
            format!("Failed to create output file {}", path.display())
        })?)),
        None => Box::new(io::stdout()),
    };
    let options = RenderOptions {
        top: show.top,
        formatting: show.formatting(),
    };

    let mut writer = create_writer(show.format, destination, options);
    writer.write_recomputation(&result)?;

    if let Some(path) = &show.output {
        info!(path = %path.display(), "Wrote output");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Method, SourceKey};
    use crate::errors::Error;
    use indoc::indoc;
    use std::fs;
    use tempfile::TempDir;

    fn show_config(data_dir: &std::path::Path) -> ShowConfig {
        ShowConfig {
            source: None,
            minimum: Some("0".into()),
            sort: None,
            format: OutputFormat::Json,
            output: None,
            top: None,
            config: None,
            data_dir: Some(data_dir.to_path_buf()),
            plain: true,
        }
    }

    fn write_data(dir: &std::path::Path) {
        let header =
            "msc,p,fzb1,fmr1,ftiter,frefs,ftitls,ftexts,fref1,fuT1,fuM1,ftiref,fteref,ftite";
        fs::write(
            dir.join("zbByMsc.csv"),
            format!(
                "{header}\n05,300,0.1,0.6,0,0,0,0,0,0,0,0,0,0\n11,250,0.2,0.9,0,0,0,0,0,0,0,0,0,0\n"
            ),
        )
        .unwrap();
        fs::write(
            dir.join("mrByMsc.csv"),
            format!("{header}\n05,50,0.3,0.9,0,0,0,0,0,0,0,0,0,0\n"),
        )
        .unwrap();
        fs::write(
            dir.join("counts.csv"),
            indoc! {"
                true,predicted,count
                05,05,10
                11,05,3
            "},
        )
        .unwrap();
    }

    #[test]
    fn test_run_show_uses_config_defaults_for_unset_params() {
        let dir = TempDir::new().unwrap();
        write_data(dir.path());

        let result = run_show(&show_config(dir.path())).unwrap();
        assert_eq!(result.params, RecomputeParams::new(SourceKey::Zb1, 0, Method::Mr1));
        let codes: Vec<&str> = result.table.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["11", "05"]);
        assert_eq!(result.heatmap.matrix.get(0, 1), 3);
    }

    #[test]
    fn test_invalid_minimum_reported_before_loading() {
        let dir = TempDir::new().unwrap();
        let mut show = show_config(&dir.path().join("missing"));
        show.minimum = Some("lots".into());

        let err = run_show(&show).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::InvalidThreshold { .. })
        ));
    }

    #[test]
    fn test_handle_show_writes_output_file() {
        let dir = TempDir::new().unwrap();
        write_data(dir.path());
        let out = dir.path().join("result.json");

        let mut show = show_config(dir.path());
        show.output = Some(out.clone());
        handle_show(show).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(out).unwrap()).unwrap();
        assert_eq!(value["table"][0]["msc"], "11");
    }
}
