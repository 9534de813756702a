use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

pub(crate) fn create_dir_all(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    std::fs::create_dir_all(path)
        .context(format!("Unable to create directory {}", path.display()))
}

pub(crate) fn write_all(path: impl AsRef<Path>, data: impl AsRef<[u8]>) -> Result<()> {
    let path = path.as_ref();
    let mut f = std::fs::File::create(path)
        .context(format!("Unable to create file {}", path.display()))?;
    f.write_all(data.as_ref())
        .context(format!("Unable to write data to {}", path.display()))
}

pub(crate) fn read_to_string(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).context(format!("Unable to read file {}", path.display()))
}
