use super::{
    error::{MappingCause, OutputError},
    fields::column_names,
    types::{HeaderRecord, RawHeaders},
};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes the header row and one row per record. Missing optional values are
/// empty cells.
pub fn write_records_to<W: Write>(writer: W, records: &[HeaderRecord]) -> Result<(), OutputError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    // Written explicitly so an empty batch still produces the header row.
    csv_writer.write_record(column_names())?;
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes `records` as CSV to `path`, replacing any existing file. Nothing is
/// left at `path` if writing fails.
pub fn write_records(path: &Path, records: &[HeaderRecord]) -> Result<(), OutputError> {
    write_atomically(path, |file| write_records_to(file, records))
}

#[derive(Serialize)]
struct DamagedEntry<'a> {
    cause: String,
    headers: &'a RawHeaders,
}

/// JSON Lines, one `{"cause": ..., "headers": {...}}` object per damaged game.
pub fn write_damaged_report_to<W: Write>(
    mut writer: W,
    damaged: &[RawHeaders],
    causes: &[MappingCause],
) -> Result<(), OutputError> {
    if damaged.len() != causes.len() {
        return Err(OutputError::Misaligned {
            headers: damaged.len(),
            causes: causes.len(),
        });
    }

    for (headers, cause) in damaged.iter().zip(causes) {
        let entry = DamagedEntry {
            cause: cause.to_string(),
            headers,
        };
        serde_json::to_writer(&mut writer, &entry)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_damaged_report(
    path: &Path,
    damaged: &[RawHeaders],
    causes: &[MappingCause],
) -> Result<(), OutputError> {
    write_atomically(path, |file| write_damaged_report_to(file, damaged, causes))
}

fn write_atomically<F>(path: &Path, write: F) -> Result<(), OutputError>
where
    F: FnOnce(&mut BufWriter<&mut NamedTempFile>) -> Result<(), OutputError>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(dir).map_err(|source| OutputError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    {
        let mut buffered = BufWriter::new(&mut temp);
        write(&mut buffered)?;
        buffered.flush()?;
    }

    // The temp file is created owner-only; give the output the mode an
    // overwrite or a plain create would have.
    match fs::metadata(path) {
        Ok(existing) => temp.as_file().set_permissions(existing.permissions())?,
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            set_new_file_permissions(temp.as_file())?
        }
        Err(error) => return Err(error.into()),
    }

    temp.persist(path).map_err(|e| OutputError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;
    Ok(())
}

#[cfg(unix)]
fn set_new_file_permissions(file: &File) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_new_file_permissions(_: &File) -> io::Result<()> {
    Ok(())
}
