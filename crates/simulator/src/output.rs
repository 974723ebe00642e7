use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write the mean energy curve, one 5-decimal value per line. An
/// existing file is overwritten.
pub fn write_energies(path: &Path, energies: &[f64]) -> io::Result<()> {
    let file = File::create(path)?;
    let mut w = BufWriter::new(file);
    for e in energies {
        writeln!(w, "{:.5}", e)?;
    }
    w.flush()
}
