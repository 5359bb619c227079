//! Sections command handler.

use hwtelem_core::Section;

/// Print every section name, one per line.
pub fn execute() {
    for section in Section::all() {
        println!("{section}");
    }
}
