//! Spreadsheet export
//!
//! Flattens a report into one row per labor item, repeating the
//! report-level fields on every row, and writes the rows to an xlsx file.

use super::model::Report;
use rust_xlsxwriter::{Format, Workbook, XlsxError};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Column headers, in sheet order
pub const EXPORT_HEADERS: [&str; 7] = [
    "Número da Obra/OS",
    "Tipo de Obra",
    "Colaboradores",
    "Nomes das Imagens",
    "Código Mão de Obra",
    "Quantidade",
    "Ação",
];

const COLUMN_WIDTHS: [f64; 7] = [20.0, 25.0, 30.0, 40.0, 20.0, 15.0, 15.0];
const SHEET_NAME: &str = "Relatório";
const NOT_APPLICABLE: &str = "N/A";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] XlsxError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Quantity cell: a number for real items, `N/A` for the placeholder row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuantityCell {
    Number(u32),
    NotApplicable,
}

/// One flattened spreadsheet row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub work_order: String,
    pub work_type: String,
    pub collaborators: String,
    pub image_names: String,
    pub code: String,
    pub quantity: QuantityCell,
    pub action: String,
}

/// Flatten a report into rows, one per labor item
pub fn export_rows(report: &Report) -> Vec<ExportRow> {
    let collaborators = report.collaborators.join(", ");
    let image_names = if report.images.is_empty() {
        NOT_APPLICABLE.to_string()
    } else {
        report
            .images
            .iter()
            .map(|i| i.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let common = ExportRow {
        work_order: report.work_order.clone(),
        work_type: report.work_type_label().to_string(),
        collaborators,
        image_names,
        code: NOT_APPLICABLE.to_string(),
        quantity: QuantityCell::NotApplicable,
        action: NOT_APPLICABLE.to_string(),
    };

    if report.labor_items.is_empty() {
        return vec![common];
    }

    report
        .labor_items
        .iter()
        .map(|item| ExportRow {
            code: item.code.clone(),
            quantity: QuantityCell::Number(item.quantity),
            action: item.action.label().to_string(),
            ..common.clone()
        })
        .collect()
}

/// File name for the export, derived from the work order
pub fn export_file_name(work_order: &str) -> String {
    let trimmed = work_order.trim();
    let stem: String = if trimmed.is_empty() {
        "Geral".to_string()
    } else {
        trimmed
            .chars()
            .map(|c| match c {
                '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
                c if c.is_control() => '_',
                c => c,
            })
            .collect()
    };
    format!("Relatorio_OS_{stem}.xlsx")
}

/// Write the report to `dir` as an xlsx workbook and return the file path
pub fn write_xlsx(report: &Report, dir: &Path) -> Result<PathBuf, ExportError> {
    let rows = export_rows(report);
    let path = dir.join(export_file_name(&report.work_order));

    std::fs::create_dir_all(dir)?;

    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, header) in EXPORT_HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }
    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        worksheet.set_column_width(col as u16, *width)?;
    }

    for (idx, row) in rows.iter().enumerate() {
        let r = idx as u32 + 1;
        worksheet.write_string(r, 0, row.work_order.as_str())?;
        worksheet.write_string(r, 1, row.work_type.as_str())?;
        worksheet.write_string(r, 2, row.collaborators.as_str())?;
        worksheet.write_string(r, 3, row.image_names.as_str())?;
        worksheet.write_string(r, 4, row.code.as_str())?;
        match row.quantity {
            QuantityCell::Number(n) => {
                worksheet.write_number(r, 5, f64::from(n))?;
            }
            QuantityCell::NotApplicable => {
                worksheet.write_string(r, 5, NOT_APPLICABLE)?;
            }
        }
        worksheet.write_string(r, 6, row.action.as_str())?;
    }

    workbook.save(&path)?;
    debug!(path = %path.display(), rows = rows.len(), "Wrote xlsx export");

    Ok(path)
}
