// cli/naming.rs — archive and output file names derived from the source path

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::cli::constants::DEC_SUFFIX;
use crate::codec::CodecKind;

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

/// `<source><ext>`, e.g. `data.txt` → `data.txt.bz2`.
pub fn archive_path(source: &Path, codec: CodecKind) -> PathBuf {
    with_suffix(source, codec.extension())
}

/// `<archive>_dec`, e.g. `data.txt.bz2` → `data.txt.bz2_dec`.
pub fn output_path(archive: &Path) -> PathBuf {
    with_suffix(archive, DEC_SUFFIX)
}
