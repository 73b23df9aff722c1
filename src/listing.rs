//! Directory enumeration and the table `ls` prints.

use crate::errors::ShellResult;
use std::fmt;
use std::path::Path;
use tokio::fs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::File => write!(f, "file"),
            EntryKind::Directory => write!(f, "folder"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    pub kind: EntryKind,
}

/// List the direct children of `dir` in enumeration order.
///
/// Any failure, including one partway through, discards what was read so far.
pub async fn list(dir: &Path) -> ShellResult<Vec<DirectoryEntry>> {
    let mut entries = Vec::new();
    let mut read_dir = fs::read_dir(dir).await?;

    while let Some(entry) = read_dir.next_entry().await? {
        let file_type = entry.file_type().await?;
        let kind = if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_symlink() {
            // Follow the link for a hint; dangling links count as files
            match fs::metadata(entry.path()).await {
                Ok(meta) if meta.is_dir() => EntryKind::Directory,
                _ => EntryKind::File,
            }
        } else {
            EntryKind::File
        };

        entries.push(DirectoryEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            kind,
        });
    }

    Ok(entries)
}

/// Render entries as a bordered table of index, name and kind.
///
/// Each column is as wide as its widest cell; cells are centered with any odd
/// leftover space going to the right.
pub fn render_table(entries: &[DirectoryEntry]) -> Vec<String> {
    let rows: Vec<[String; 3]> = entries
        .iter()
        .enumerate()
        .map(|(i, e)| [i.to_string(), e.name.clone(), e.kind.to_string()])
        .collect();

    let mut widths = [0usize; 3];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let border = widths
        .iter()
        .fold(String::from("+"), |acc, w| acc + &"-".repeat(*w) + "+");

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(border.clone());
    for row in &rows {
        let line = widths
            .iter()
            .zip(row)
            .fold(String::from("|"), |acc, (w, cell)| acc + &center(cell, *w) + "|");
        lines.push(line);
    }
    lines.push(border);
    lines
}

fn center(cell: &str, width: usize) -> String {
    let padding = width.saturating_sub(cell.chars().count());
    let left = padding / 2;
    let right = padding - left;
    format!("{}{}{}", " ".repeat(left), cell, " ".repeat(right))
}
