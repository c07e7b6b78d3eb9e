use std::{
    io::{BufWriter, Write},
    path::PathBuf,
};

use anyhow::Context;
use fs_err::File;
use serde::Serialize;

/// Serializes `value` into `path`, truncating any existing file.
///
/// The file is closed when this function returns, whether or not serialization succeeded.
/// Nothing is written atomically: a failure part-way leaves a truncated file behind.
pub fn write_json<P: Into<PathBuf>, T: Serialize>(path: P, value: &T) -> anyhow::Result<()> {
    let path = path.into();
    (|| {
        let mut writer = BufWriter::new(File::create(&path)?);
        serde_json::to_writer(&mut writer, value)?;
        writer.flush()?;
        anyhow::Ok(())
    })()
    .with_context(|| format!("While trying to write {path:?}"))
}
