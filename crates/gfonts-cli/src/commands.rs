use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use gfonts_cli::{AnnotationRequest, AnnotationResult, DEFAULT_DATA_PATH, create_font_annotations};
use gfonts_model::{VARIANT_STYLE_NAMES, variant_column_name};

use crate::cli::AnnotateArgs;
use crate::summary::apply_table_style;

pub fn run_variants() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Code", "Column"]);
    apply_table_style(&mut table);
    for (code, _) in VARIANT_STYLE_NAMES {
        let column = variant_column_name(code).unwrap_or_else(|| code.to_string());
        table.add_row(vec![Cell::new(code), Cell::new(column)]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_annotate(args: &AnnotateArgs) -> Result<AnnotationResult> {
    create_font_annotations(&annotation_request(args))
}

/// Without `--data`, the default snapshot is used unless an API key is given.
fn annotation_request(args: &AnnotateArgs) -> AnnotationRequest {
    let data_path = args
        .data
        .clone()
        .or_else(|| args.api_key.is_none().then(|| PathBuf::from(DEFAULT_DATA_PATH)));
    AnnotationRequest {
        data_path,
        api_key: args.api_key.clone(),
        endpoint: args.endpoint.clone(),
        save_path: args.output.clone(),
        snapshot_path: args.save_snapshot.clone(),
    }
}
