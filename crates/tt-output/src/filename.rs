//! Export file naming.

/// File name for one exported variant: `{class}_{variant}.{ext}`.
///
/// The variant label is lowercased with spaces turned into underscores, so
/// class `"10"` and `"Timetable 1"` give `10_timetable_1.csv`.  Path
/// separators in the class label are replaced so the file always lands in
/// the output directory.
pub fn export_file_name(class_label: &str, variant_label: &str, ext: &str) -> String {
    let class: String = class_label
        .trim()
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    let variant = variant_label.trim().to_lowercase().replace(' ', "_");
    format!("{class}_{variant}.{ext}")
}
