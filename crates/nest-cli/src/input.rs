use anyhow::Context;
use nest_stats::Value;
use std::io::Read;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Inline(String),
    File(PathBuf),
    Stdin,
}

impl InputSource {
    pub fn describe(&self) -> String {
        match self {
            InputSource::Inline(_) => "--data".to_string(),
            InputSource::File(path) => path.display().to_string(),
            InputSource::Stdin => "stdin".to_string(),
        }
    }
}

/// Reads the JSON document named by `src` into a [`Value`] tree.
///
/// `stdin` is only consumed for [`InputSource::Stdin`].
pub fn read_value<R: Read>(src: &InputSource, mut stdin: R) -> anyhow::Result<Value> {
    let text = match src {
        InputSource::Inline(data) => data.clone(),
        InputSource::File(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading input file {}", path.display()))?,
        InputSource::Stdin => {
            let mut buf = String::new();
            stdin
                .read_to_string(&mut buf)
                .context("reading input from stdin")?;
            buf
        }
    };
    let json: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("input from {} is not valid JSON", src.describe()))?;
    log::debug!("loaded {} bytes of JSON from {}", text.len(), src.describe());
    Ok(Value::from(json))
}
