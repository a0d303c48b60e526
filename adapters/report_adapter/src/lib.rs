use std::fs;
use std::path::PathBuf;

use tracker_core::ports::{ReportWriter, Result};
use tracker_core::report::ExpenseReport;
use tracker_core::utils::{format_brl, format_km, format_km_per_liter};
use tracker_core::Error;

/// Markdown report writer adapter.
///
/// Renders the statistics of the reports page as a markdown document: the
/// per-vehicle and overall fuel figures, the two fuel time series as
/// tables, and the maintenance totals with their per-vehicle distribution.
pub struct MarkdownReportWriter {
    output_path: PathBuf,
}

impl MarkdownReportWriter {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }
}

impl ReportWriter for MarkdownReportWriter {
    fn write(&self, report: &ExpenseReport) -> Result<()> {
        if let Some(parent) = self.output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.write_error(e))?;
            }
        }
        fs::write(&self.output_path, format_report(report)).map_err(|e| self.write_error(e))
    }
}

impl MarkdownReportWriter {
    fn write_error(&self, source: std::io::Error) -> Error {
        Error::ReportWrite {
            path: self.output_path.display().to_string(),
            source: Box::new(source),
        }
    }
}

/// Formats the full report as markdown.
pub fn format_report(report: &ExpenseReport) -> String {
    let mut output = String::new();
    output.push_str("# Controle de Veículos\n\n");

    output.push_str("## Consumo de Combustível\n\n");
    for stats in &report.fuel.per_vehicle {
        output.push_str(&format!("### {}\n\n", stats.vehicle));
        output.push_str(&format!(
            "- Custo total com combustível: {}\n",
            format_brl(stats.total_cost)
        ));
        output.push_str(&format!(
            "- Quilômetros percorridos: {}\n",
            format_km(stats.total_distance_km)
        ));
        output.push_str(&format!(
            "- Consumo médio: {}\n\n",
            format_km_per_liter(stats.mean_km_per_liter)
        ));
    }
    output.push_str("### Total geral\n\n");
    output.push_str(&format!(
        "- Custo total com combustível: {}\n",
        format_brl(report.fuel.total_cost)
    ));
    output.push_str(&format!(
        "- Quilômetros percorridos: {}\n\n",
        format_km(report.fuel.total_distance_km)
    ));

    if !report.fuel_records.is_empty() {
        output.push_str("### Litros por abastecimento\n\n");
        output.push_str("| Data | Veículo | Litros |\n");
        output.push_str("|------|---------|--------|\n");
        for record in &report.fuel_records {
            output.push_str(&format!(
                "| {} | {} | {:.2} |\n",
                record.date, record.vehicle, record.liters
            ));
        }
        output.push('\n');
    }

    if !report.efficiency.is_empty() {
        output.push_str("### Consumo ao longo do tempo\n\n");
        output.push_str("| Data | Veículo | Distância | Consumo |\n");
        output.push_str("|------|---------|-----------|---------|\n");
        for sample in &report.efficiency {
            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                sample.date,
                sample.vehicle,
                format_km(sample.distance_km),
                format_km_per_liter(sample.km_per_liter)
            ));
        }
        output.push('\n');
    }

    output.push_str("## Manutenção\n\n");
    for stats in &report.maintenance.per_vehicle {
        output.push_str(&format!(
            "- Total gasto ({}): {}\n",
            stats.vehicle,
            format_brl(stats.total_cost)
        ));
    }
    output.push_str(&format!(
        "- Gasto total com manutenção: {}\n",
        format_brl(report.maintenance.total_cost)
    ));

    if !report.maintenance.per_vehicle.is_empty() {
        output.push_str("\n### Distribuição de gastos por veículo\n\n");
        output.push_str("| Veículo | Valor | Participação |\n");
        output.push_str("|---------|-------|--------------|\n");
        for stats in &report.maintenance.per_vehicle {
            output.push_str(&format!(
                "| {} | {} | {:.1}% |\n",
                stats.vehicle,
                format_brl(stats.total_cost),
                stats.share_percent
            ));
        }
    }

    output.push('\n');
    output
}
