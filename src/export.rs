use crate::error::Result;
use crate::types::snapshot::MetricsSnapshot;
use rust_xlsxwriter::{DocProperties, Format, Workbook};
use std::fs;
use std::path::{Path, PathBuf};

pub const SHEET_NAME: &str = "DORA Metrics";

/// Writes the snapshot as a one-row sheet: headers in row 0, values in row 1.
pub fn write_xlsx(snapshot: &MetricsSnapshot, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut workbook = Workbook::new();
    let properties = DocProperties::new().set_author("dora");
    workbook.set_properties(&properties);

    let header_format = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, (name, value)) in MetricsSnapshot::COLUMNS
        .iter()
        .zip(snapshot.values())
        .enumerate()
    {
        let col = col as u16;
        worksheet.write_string_with_format(0, col, *name, &header_format)?;
        worksheet.write_number(1, col, value)?;
        worksheet.set_column_width(col, 22)?;
    }

    workbook.save(path)?;
    tracing::info!(path = %path.display(), "wrote spreadsheet");
    Ok(())
}

/// Copies an exported file into `dir`, keeping its file name.
pub fn mirror(path: &Path, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let file_name = path
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("dora_metrics.xlsx"));
    let target = dir.join(file_name);
    fs::copy(path, &target)?;
    tracing::info!(from = %path.display(), to = %target.display(), "mirrored export");
    Ok(target)
}
