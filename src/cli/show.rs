// ABOUTME: CLI show and lookup commands - print saved submissions
//
// show reads submitted_form_data, lookup reads submitted_form_data_<id>

use super::OutputFormat;
use crate::components::field_spec;
use crate::models::{FixedField, SubmittedRecord};
use crate::storage::{self, keys, Storage};
use anyhow::{bail, Result};

/// Execute the show command
pub fn execute_show(storage: &dyn Storage, format: OutputFormat) -> Result<()> {
    match storage::load_json::<SubmittedRecord>(storage, keys::SUBMITTED_DATA_KEY) {
        Some(record) => output(&record, format),
        None => {
            println!("No form has been submitted yet.");
            Ok(())
        }
    }
}

/// Execute the lookup command
pub fn execute_lookup(storage: &dyn Storage, form_id: u64, format: OutputFormat) -> Result<()> {
    let Some(record) = storage::load_json::<SubmittedRecord>(storage, &keys::submission_key(form_id))
    else {
        bail!("No submission found for form id {form_id}");
    };
    output(&record, format)
}

fn output(record: &SubmittedRecord, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(record)?),
        OutputFormat::Text => print!("{}", format_text(record)),
    }
    Ok(())
}

/// Human-readable summary of a submission
pub fn format_text(record: &SubmittedRecord) -> String {
    let mut out = format!(
        "Form ID: {}\nShareable link: {}\n\n",
        record.form_id, record.shareable_url
    );

    for field in FixedField::all() {
        let label = field_spec(*field).label;
        let value = record.data.value(*field);
        if value.contains('\n') {
            out.push_str(&format!("{label}:\n"));
            for line in value.lines() {
                out.push_str(&format!("  {line}\n"));
            }
        } else {
            out.push_str(&format!("{label}: {value}\n"));
        }
    }

    if !record.data.fields.is_empty() {
        out.push_str("\nCustom fields:\n");
        for custom in &record.data.fields {
            out.push_str(&format!("  {}: {}\n", custom.label, custom.value));
        }
    }

    out
}
