//! LaTeX emission for the line-item table and its self-calculating total.

pub mod script;

use std::{fmt::Write as _, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    errors::{Result, SelfCalcError},
    format::{format_display_price, NumberLocale},
    items::LineItem,
};

pub use script::{checkbox_name, render_total_script};

const PACKAGES: [&str; 6] = ["babel", "xcolor", "booktabs", "xltabular", "lipsum", "hyperref"];
const COLUMN_COUNT: usize = 4;
const HEADER_ROW: &str = r"Nr. & Description & Price & Selected\\";
const TMP_EXTENSION: &str = "tmp";

/// Rendering preferences for the emitted document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentOptions {
    #[serde(default)]
    pub locale: NumberLocale,
}

/// Renders the full document for `items` in their given order.
pub fn render_document(items: &[LineItem], options: &DocumentOptions) -> String {
    let mut doc = String::new();
    push_preamble(&mut doc);
    push_table_head(&mut doc);
    for (idx, item) in items.iter().enumerate() {
        push_row(&mut doc, idx + 1, item, &options.locale);
    }
    push_total_field(&mut doc, items);
    doc.push_str("\\end{xltabular}\\par\n");
    doc.push_str("\\end{Form}\n");
    doc.push_str("\\end{document}\n");
    doc
}

/// Writes the rendered document to `path`.
///
/// The content is staged in a sibling temp file and renamed into place, so
/// `path` either holds the complete document or is left untouched.
pub fn write_document(path: &Path, items: &[LineItem], options: &DocumentOptions) -> Result<()> {
    let rendered = render_document(items, options);
    let tmp = path.with_extension(TMP_EXTENSION);
    if let Err(err) = fs::write(&tmp, rendered.as_bytes()) {
        let _ = fs::remove_file(&tmp);
        return Err(SelfCalcError::io(&tmp, err));
    }
    if let Err(err) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(SelfCalcError::io(path, err));
    }
    tracing::debug!(path = %path.display(), rows = items.len(), "document written");
    Ok(())
}

fn push_preamble(doc: &mut String) {
    doc.push_str("\\documentclass{article}\n");
    for package in PACKAGES {
        let _ = writeln!(doc, "\\usepackage{{{package}}}");
    }
    doc.push_str("\\begin{document}\n");
    doc.push_str("\\begin{Form}\n");
    doc.push_str("\\renewcommand{\\arraystretch}{1.5}\n");
}

fn push_table_head(doc: &mut String) {
    doc.push_str("\\begin{xltabular}{\\linewidth}{rXrc}\n");
    doc.push_str(HEADER_ROW);
    doc.push('\n');
    doc.push_str("\\toprule\n");
    doc.push_str("\\endhead\n");
    let _ = writeln!(
        doc,
        "\\multicolumn{{{COLUMN_COUNT}}}{{r}}{{\\footnotesize\\textit{{Continued\\ldots}}}}\\\\"
    );
    doc.push_str("\\endfoot\n");
    doc.push_str("\\endlastfoot\n");
}

fn push_row(doc: &mut String, row: usize, item: &LineItem, locale: &NumberLocale) {
    let _ = writeln!(
        doc,
        "{row} & {} & {} & \\raisebox{{-2.5pt}}{{\\CheckBox[name={}, height=1.2em, bordercolor=black]{{}}}}\\\\",
        item.description(),
        format_display_price(item.price(), locale),
        checkbox_name(row)
    );
}

fn push_total_field(doc: &mut String, items: &[LineItem]) {
    doc.push_str("\\midrule\n");
    let _ = writeln!(doc, "\\multicolumn{{{COLUMN_COUNT}}}{{r}}{{");
    doc.push_str(
        "\\mbox{\\TextField[name=result,charsize=10pt,width=\\linewidth,readonly,\
         bordercolor=white,backgroundcolor=gray!10,height=1.5em,align=2,\n",
    );
    doc.push_str("calculate = {\n");
    doc.push_str(&render_total_script(items));
    doc.push_str("}]{}}}\n");
}
