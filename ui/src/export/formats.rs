//! Turns snapshots into file contents. Nothing here touches the platform.

use std::borrow::Cow;

use crate::core::raster::Raster;
use crate::data::SkyData;

use super::ExportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Json,
    Csv,
}

impl ExportFormat {
    pub fn label(self) -> &'static str {
        match self {
            Self::Png => "PNG",
            Self::Json => "JSON",
            Self::Csv => "CSV",
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Json => "application/json",
            Self::Csv => "text/csv",
        }
    }

    fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

/// A finished export, ready to be handed to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub format: ExportFormat,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl Artifact {
    fn new(format: ExportFormat, stem: &str, bytes: Vec<u8>) -> Self {
        Self {
            format,
            file_name: format!("berliner-grau-{stem}.{}", format.extension()),
            bytes,
        }
    }
}

/// The magnified grid at backing resolution, one 20 px square per cell.
pub fn snapshot_png(snapshot: &SkyData) -> Result<Artifact, ExportError> {
    if snapshot.grid.is_empty() {
        return Err(ExportError::EmptyGrid);
    }
    let bytes = Raster::render(&snapshot.grid)
        .encode_png()
        .map_err(ExportError::Encode)?;
    Ok(Artifact::new(ExportFormat::Png, &snapshot.timestamp, bytes))
}

/// The snapshot document exactly as published, pretty-printed.
pub fn snapshot_json(snapshot: &SkyData) -> Result<Artifact, ExportError> {
    let text = serde_json::to_string_pretty(snapshot)?;
    Ok(Artifact::new(
        ExportFormat::Json,
        &snapshot.timestamp,
        text.into_bytes(),
    ))
}

/// One row per archived capture in published order. The file name spans the
/// first and last capture so repeated exports of a grown archive never clash.
pub fn archive_csv(history: &[SkyData]) -> Result<Artifact, ExportError> {
    let (Some(first), Some(last)) = (history.first(), history.last()) else {
        return Err(ExportError::EmptyArchive);
    };
    let stem = format!("archive-{}-to-{}", first.timestamp, last.timestamp);
    Ok(Artifact::new(
        ExportFormat::Csv,
        &stem,
        archive_table(history).into_bytes(),
    ))
}

const COLUMNS: [&str; 8] = [
    "timestamp",
    "hex_color",
    "dominant_color",
    "berlin_grey_index",
    "brightness_percent",
    "mood",
    "temperature_feel",
    "time_of_day_feel",
];

fn archive_table(history: &[SkyData]) -> String {
    let mut table = COLUMNS.join(",");
    table.push('\n');
    for snapshot in history {
        let stats = &snapshot.stats;
        let bgi = stats.greyness.berlin_grey_index.to_string();
        let brightness = stats.brightness_percent.to_string();
        let row: [&str; 8] = [
            &snapshot.timestamp,
            &stats.hex_color,
            &stats.dominant_color,
            &bgi,
            &brightness,
            &stats.mood,
            &stats.temperature_feel,
            &stats.time_of_day_feel,
        ];
        for (i, field) in row.into_iter().enumerate() {
            if i > 0 {
                table.push(',');
            }
            table.push_str(&csv_field(field));
        }
        table.push('\n');
    }
    table
}

/// RFC 4180 quoting: only fields holding a separator, quote or line break.
fn csv_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}
