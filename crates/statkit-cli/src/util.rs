use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Read as _, StdoutLock, Write},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use serde::{Serialize, de::DeserializeOwned};

/// Where a command writes its JSON result: stdout, or the `--output` file.
#[derive(Debug)]
pub enum Output {
    Stdout(StdoutLock<'static>),
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    /// Pretty-prints `value` followed by a newline to `output_path`, or to
    /// stdout when no path is given.
    pub fn save_json<T>(value: &T, output_path: Option<PathBuf>) -> anyhow::Result<()>
    where
        T: Serialize + ?Sized,
    {
        let mut output = match output_path {
            Some(path) => Self::create(path)?,
            None => Self::Stdout(io::stdout().lock()),
        };
        output
            .write_json(value)
            .with_context(|| format!("Failed to write JSON to {}", output.name()))?;
        log::info!("Wrote JSON to {}", output.name());
        Ok(())
    }

    fn create(path: PathBuf) -> anyhow::Result<Self> {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Self::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    fn name(&self) -> String {
        match self {
            Self::Stdout(_) => "stdout".to_owned(),
            Self::File { path, .. } => path.display().to_string(),
        }
    }

    fn write_json<T>(&mut self, value: &T) -> anyhow::Result<()>
    where
        T: Serialize + ?Sized,
    {
        serde_json::to_writer_pretty(&mut *self, value)?;
        writeln!(self)?;
        self.flush()?;
        Ok(())
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stdout(writer) => writer.write(buf),
            Self::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stdout(writer) => writer.flush(),
            Self::File { writer, .. } => writer.flush(),
        }
    }
}

/// Deserializes the JSON file at `path`. `kind` names the content in error
/// messages.
pub fn read_json_file<T>(kind: &str, path: &Path) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let file = File::open(path)
        .with_context(|| format!("Failed to open {kind} file: {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse {kind} JSON file: {}", path.display()))
}

/// Like [`read_json_file`], but reads stdin when `path` is `None` or `-`.
pub fn read_json_input<T>(kind: &str, path: Option<&Path>) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    if let Some(path) = path.filter(|path| *path != Path::new("-")) {
        return read_json_file(kind, path);
    }
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .with_context(|| format!("Failed to read {kind} from stdin"))?;
    serde_json::from_str(&input).with_context(|| format!("Failed to parse {kind} JSON from stdin"))
}

/// Reads a JSON array of numbers.
pub fn read_samples(path: Option<&Path>) -> anyhow::Result<Vec<f64>> {
    let samples: Vec<f64> = read_json_input("samples", path)?;
    log::debug!("Read {} samples", samples.len());
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_json_file() {
        let path = std::env::temp_dir().join(format!("statkit-util-{}.json", std::process::id()));
        std::fs::write(&path, "[1.5, 2, -3]").unwrap();
        let samples = read_samples(Some(path.as_path())).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(samples, [1.5, 2.0, -3.0]);

        let err = read_json_file::<Vec<f64>>("samples", Path::new("/nonexistent/statkit.json"))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to open samples file"));
    }

    #[test]
    fn test_save_json_to_file() {
        let path = std::env::temp_dir().join(format!("statkit-out-{}.json", std::process::id()));
        Output::save_json(&[1.0, 2.0], Some(path.clone())).unwrap();
        let written: Vec<f64> = read_json_file("output", &path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(written, [1.0, 2.0]);
    }
}
