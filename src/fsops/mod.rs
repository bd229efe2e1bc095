//! Filesystem helpers: directory copying and per-file line counts

use anyhow::{Context, Result, bail};
use log::info;
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Name and line count of one processed file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLineCount {
    pub name: String,
    pub lines: usize,
}

/// Copy `src` recursively to `dst`, replacing `dst` if it already exists
pub fn copy_directory(src: &Path, dst: &Path) -> Result<()> {
    if !src.exists() {
        bail!("Source directory does not exist: {}", src.display());
    }
    if dst.exists() {
        fs::remove_dir_all(dst).context(format!(
            "Failed to remove existing target: {}",
            dst.display()
        ))?;
    }

    copy_tree(src, dst)?;
    info!("Copied directory from {} to {}", src.display(), dst.display());
    Ok(())
}

fn copy_tree(src: &Path, dst: &Path) -> Result<()> {
    fs::create_dir_all(dst).context(format!("Failed to create directory: {}", dst.display()))?;

    for entry in
        fs::read_dir(src).context(format!("Failed to read directory: {}", src.display()))?
    {
        let entry = entry?;
        let target = dst.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_tree(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)
                .context(format!("Failed to copy file: {}", entry.path().display()))?;
        }
    }

    Ok(())
}

/// Count lines in every file under `dir` whose name ends with one of
/// `extensions`
///
/// The walk is recursive and depth-first; results appear in visit order.
/// Fails if `dir` does not exist.
pub fn process_files(dir: &Path, extensions: &[String]) -> Result<Vec<FileLineCount>> {
    if !dir.exists() {
        bail!("Directory does not exist: {}", dir.display());
    }

    let mut result = Vec::new();
    visit(dir, extensions, &mut result)?;
    Ok(result)
}

fn visit(dir: &Path, extensions: &[String], out: &mut Vec<FileLineCount>) -> Result<()> {
    for entry in
        fs::read_dir(dir).context(format!("Failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if entry.file_type()?.is_dir() {
            visit(&path, extensions, out)?;
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        if !extensions.iter().any(|ext| name.ends_with(ext.as_str())) {
            continue;
        }

        let file =
            fs::File::open(&path).context(format!("Failed to open file: {}", path.display()))?;
        let lines = BufReader::new(file).lines().map_while(|l| l.ok()).count();
        info!("Processed file: {}, Lines: {}", name, lines);
        out.push(FileLineCount { name, lines });
    }

    Ok(())
}
