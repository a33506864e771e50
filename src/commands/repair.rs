//! `ladle repair` command.

use crate::book::RecipeBook;

/// Execute the `repair` command: drop favorites whose recipe is gone.
///
/// # Errors
///
/// Returns an error string when the favorites collection cannot be
/// scanned, or when some orphans could not be removed.
pub fn run(book: &RecipeBook<'_>) -> Result<(), String> {
    let report = book.repair_favorites().map_err(|e| e.to_string())?;

    println!(
        "Scanned {} favorite(s): {} kept, {} orphan(s) removed.",
        report.scanned,
        report.kept,
        report.removed.len()
    );
    for key in &report.removed {
        println!("  removed {key}");
    }

    if report.failed.is_empty() {
        Ok(())
    } else {
        for key in &report.failed {
            eprintln!("could not repair: {key}");
        }
        Err(format!(
            "{} favorite(s) could not be repaired; run `ladle repair` again",
            report.failed.len()
        ))
    }
}
