//! Rendering the shift index as a KWIC listing.

use kwic_core::Line;
use kwic_settings::OutputSettings;
use kwic_storage::LineStorage;

/// One output row per shift, ordered per `output`.
pub fn render(shifts: &LineStorage, output: &OutputSettings) -> Vec<String> {
    let mut rows: Vec<&Line> = shifts.lines().collect();
    if output.sort {
        if output.case_sensitive {
            rows.sort();
        } else {
            rows.sort_by_cached_key(|line| (folded(line), *line));
        }
    }
    rows.into_iter()
        .map(|line| line.join(&output.separator))
        .collect()
}

/// Sort key ignoring case, compared word by word.
fn folded(line: &Line) -> Vec<String> {
    line.iter().map(|w| w.to_lowercase()).collect()
}
