use crate::errors::{AppError, AppResult};
use crate::export::model::{get_headers, rows_to_table};
use crate::export::pdf::PdfManager;
use crate::export::{LuminariaExport, notify_export_success};
use crate::ui::messages::info;
use std::path::Path;

/// Export PDF using PdfManager and the generated table.
pub(crate) fn export_pdf(rows: &[LuminariaExport], path: &Path, title: &str) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let headers = get_headers();
    let data_vec = rows_to_table(rows);

    let problem_count = rows.iter().filter(|r| r.status != "OK").count();
    let summary = vec![
        format!("Total luminarias: {}", rows.len()),
        format!("Luminarias with problems: {}", problem_count),
    ];

    let mut pdf = PdfManager::new();
    pdf.write_table(title, &headers, &data_vec, &summary);

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
