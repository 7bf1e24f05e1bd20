// User dialogs behind a trait so interactive flows can be driven by
// scripted answers in tests.

use std::path::{Path, PathBuf};

/// Outcome of the three-way file-locked dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockChoice {
    /// The user closed the other application; probe the same path again.
    Retry,
    /// Pick a different output path.
    SaveAs,
    /// Give up. The run ends cleanly.
    Abort,
}

/// Synchronous request/response surface for everything the converter asks
/// the user. Each call blocks until the user answers.
pub trait Prompter {
    /// Pick the input file. None = dialog cancelled.
    fn pick_input(&mut self, start_dir: &Path) -> Option<PathBuf>;

    /// Pick the output file, pre-filled with `suggested`. None = cancelled.
    fn pick_output(&mut self, suggested: &Path) -> Option<PathBuf>;

    /// Three-way choice for a locked output file.
    fn lock_conflict(&mut self, path: &Path) -> LockChoice;

    /// Informational notice (conversion finished, nothing to convert).
    fn info(&mut self, title: &str, message: &str);
}

/// Native dialogs via rfd.
pub struct NativePrompter;

impl Prompter for NativePrompter {
    fn pick_input(&mut self, start_dir: &Path) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title("Select input file")
            .set_directory(start_dir)
            .add_filter("Data files", &["csv", "txt", "tsv", "xls"])
            .add_filter("All files", &["*"])
            .pick_file()
    }

    fn pick_output(&mut self, suggested: &Path) -> Option<PathBuf> {
        let mut dlg = rfd::FileDialog::new()
            .set_title("Save output Excel file as")
            .add_filter("Excel files", &["xlsx"])
            .add_filter("All files", &["*"]);
        if let Some(dir) = suggested.parent().filter(|d| !d.as_os_str().is_empty()) {
            dlg = dlg.set_directory(dir);
        }
        if let Some(name) = suggested.file_name() {
            dlg = dlg.set_file_name(name.to_string_lossy());
        }
        dlg.save_file()
    }

    fn lock_conflict(&mut self, path: &Path) -> LockChoice {
        let result = rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Warning)
            .set_title("File In Use")
            .set_description(format!(
                "The file {} is open or locked (possibly in Excel).\n\n\
                 Yes: Close the file manually and retry.\n\
                 No: Save with a new filename.\n\
                 Cancel: Exit.",
                path.display()
            ))
            .set_buttons(rfd::MessageButtons::YesNoCancel)
            .show();

        match result {
            rfd::MessageDialogResult::Yes => LockChoice::Retry,
            rfd::MessageDialogResult::No => LockChoice::SaveAs,
            _ => LockChoice::Abort,
        }
    }

    fn info(&mut self, title: &str, message: &str) {
        rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Info)
            .set_title(title)
            .set_description(message)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }
}
