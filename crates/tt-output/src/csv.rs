//! CSV output backend.
//!
//! Creates one file per variant in the configured output directory, named
//! by [`export_file_name`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use csv::Writer;
use log::info;

use tt_gen::Timetable;

use crate::filename::export_file_name;
use crate::record::{ExportRecord, HEADERS};
use crate::writer::TimetableWriter;
use crate::OutputResult;

/// Writes each timetable variant to its own CSV file.
pub struct CsvWriter {
    dir:      PathBuf,
    written:  Vec<PathBuf>,
    finished: bool,
}

impl CsvWriter {
    /// Create `dir` (and parents) if needed.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;
        Ok(Self {
            dir:      dir.to_path_buf(),
            written:  Vec::new(),
            finished: false,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Paths of every file written so far, in write order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

/// Write the header and one record per row of `timetable` to `out`.
pub fn write_records<W: io::Write>(out: W, timetable: &Timetable) -> OutputResult<()> {
    let mut w = Writer::from_writer(out);
    w.write_record(HEADERS)?;
    for row in &timetable.rows {
        w.write_record(ExportRecord::from_row(row).fields())?;
    }
    w.flush()?;
    Ok(())
}

impl TimetableWriter for CsvWriter {
    fn write_timetable(&mut self, class_label: &str, timetable: &Timetable) -> OutputResult<()> {
        let path = self.dir.join(export_file_name(class_label, &timetable.label, "csv"));
        write_records(fs::File::create(&path)?, timetable)?;
        info!("wrote {} rows to {}", timetable.len(), path.display());
        self.written.push(path);
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        info!("exported {} file(s) to {}", self.written.len(), self.dir.display());
        Ok(())
    }
}
