use clap::ValueEnum;
use xdgpaths::{PathKind, PathsSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Plain,
    Toml,
    Json,
}

pub fn render(
    snapshot: &PathsSnapshot,
    format: Format,
) -> Result<String, Box<dyn std::error::Error>> {
    let text = match format {
        Format::Plain => snapshot
            .iter()
            .map(|(kind, path)| format!("{}\t{}\n", kind, path.display()))
            .collect(),
        Format::Toml => toml::to_string_pretty(snapshot)?,
        Format::Json => serde_json::to_string_pretty(snapshot)? + "\n",
    };
    Ok(text)
}

pub fn render_one(
    snapshot: &PathsSnapshot,
    kind: PathKind,
    format: Format,
) -> Result<String, Box<dyn std::error::Error>> {
    let path = snapshot.get(kind);
    if format == Format::Plain {
        return Ok(format!("{}\n", path.display()));
    }

    let value = path
        .to_str()
        .ok_or_else(|| format!("{} is not valid UTF-8: {}", kind, path.display()))?;
    let text = match format {
        Format::Toml => {
            let mut table = toml::Table::new();
            table.insert(kind.name().to_string(), value.into());
            toml::to_string(&table)?
        }
        _ => serde_json::json!({ kind.name(): value }).to_string() + "\n",
    };
    Ok(text)
}
