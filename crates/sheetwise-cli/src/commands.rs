use anyhow::{Context, Result};
use chrono::Local;
use comfy_table::Table;
use tracing::info;

use sheetwise_ingest::read_workbook;
use sheetwise_model::{FieldSchema, WorkbookResult};
use sheetwise_pipeline::{UuidGenerator, process_workbook};
use sheetwise_validate::SchemaRegistry;

use crate::cli::CheckArgs;
use crate::summary::apply_table_style;

pub fn run_check(args: &CheckArgs) -> Result<WorkbookResult> {
    let workbook = read_workbook(&args.file)
        .with_context(|| format!("read workbook: {}", args.file.display()))?;
    info!(
        file = %args.file.display(),
        sheets = workbook.sheets.len(),
        "workbook decoded"
    );
    let registry = if args.strict {
        // Strict mode mirrors the per-sheet configuration table: only Sheet1
        // carries a schema, everything else is skipped with a diagnostic.
        SchemaRegistry::strict().with_schema("Sheet1", FieldSchema::default_intake())
    } else {
        SchemaRegistry::default()
    };
    let reference = args
        .reference_date
        .unwrap_or_else(|| Local::now().date_naive());
    let mut ids = UuidGenerator;
    Ok(process_workbook(&workbook, &registry, reference, &mut ids))
}

pub fn run_schema() -> Result<()> {
    let schema = FieldSchema::default_intake();
    let mut table = Table::new();
    table.set_header(vec!["Field", "Kind", "Required", "Min (exclusive)", "Business rule"]);
    apply_table_style(&mut table);
    for (name, rule) in schema.iter() {
        table.add_row(vec![
            name.to_string(),
            rule.kind.label().to_string(),
            if rule.required { "yes" } else { "no" }.to_string(),
            rule.min.map(|min| min.to_string()).unwrap_or_default(),
            rule.business_rule
                .map(|rule| rule.message().to_string())
                .unwrap_or_default(),
        ]);
    }
    println!("{table}");
    Ok(())
}
