// Output-file lock probe and interactive resolution

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use crate::prompt::{LockChoice, Prompter};

/// Probe whether `path` can be opened for writing.
///
/// Opens in append mode, creating the file if absent. This is the same
/// exclusivity check Excel-style applications trip over while they hold
/// the file open.
pub fn is_locked(path: &Path) -> bool {
    OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .is_err()
}

/// Walk the user through a locked output file.
///
/// Returns the path to write to, or None when the user aborts. Save-As
/// opens a save dialog suggesting `<stem>_new.xlsx`; cancelling that
/// sub-dialog aborts the run, while picking a path that is itself locked
/// re-enters the loop. Blocks on user input indefinitely.
pub fn resolve_locked_output(output: PathBuf, prompter: &mut dyn Prompter) -> Option<PathBuf> {
    loop {
        match prompter.lock_conflict(&output) {
            LockChoice::Retry => {
                if !is_locked(&output) {
                    return Some(output);
                }
            }
            LockChoice::SaveAs => {
                let suggested = suggest_alternate(&output);
                match prompter.pick_output(&suggested) {
                    Some(new_output) if !is_locked(&new_output) => return Some(new_output),
                    Some(_still_locked) => {}
                    None => return None,
                }
            }
            LockChoice::Abort => return None,
        }
    }
}

/// `report.xlsx` -> `report_new.xlsx`, next to the original.
fn suggest_alternate(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    path.with_file_name(format!("{stem}_new.xlsx"))
}
