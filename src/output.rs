use crate::data::{DataSet, Point};
use crate::error::Result;
use crate::kmeans::KMeansResult;
use log::debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// One output line: both coordinates left-justified to width 7 with two decimals,
/// followed by the 1-based cluster label.
pub fn format_line(point: &Point, label: usize) -> String {
    format!("{:<7.2} {:<7.2} {}", point.x, point.y, label)
}

/// Write every point with the label of its cluster, in input order.
///
/// `labels` holds 0-based cluster indices; they are written 1-based.
pub fn write_assignments<W, I>(writer: &mut W, points: I, labels: &[usize]) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = Point>,
{
    for (point, &label) in points.into_iter().zip(labels) {
        writeln!(writer, "{}", format_line(&point, label + 1))?;
    }
    Ok(())
}

impl KMeansResult {
    /// Write the assignment of every point in `data` to `writer`.
    pub fn write_to<W: Write>(&self, data: &DataSet, writer: &mut W) -> Result<()> {
        write_assignments(writer, data.points(), &self.labels)
    }

    /// Create (or truncate) `path` and write the assignments to it.
    pub fn write_path<P: AsRef<Path>>(&self, data: &DataSet, path: P) -> Result<()> {
        let mut out = BufWriter::new(File::create(&path)?);
        self.write_to(data, &mut out)?;
        out.flush()?;
        debug!("wrote {} assignments to {:?}", self.labels.len(), path.as_ref());
        Ok(())
    }
}
