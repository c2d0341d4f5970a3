use std::fmt::Write as _;

use crate::{format::format_script_literal, items::LineItem};

/// Form-field name of the checkbox bound to the 1-based `row`.
pub fn checkbox_name(row: usize) -> String {
    format!("cb{row}")
}

/// Renders the `calculate` script of the total field.
///
/// Term `i` reads checkbox `cb{i+1}` and adds the price of `items[i]`, so the
/// accumulation order always matches row order.
pub fn render_total_script(items: &[LineItem]) -> String {
    let mut script = String::from("var erg = 0;\n");
    for (idx, item) in items.iter().enumerate() {
        // Writing into a String cannot fail.
        let _ = writeln!(
            script,
            "if(this.getField('{}').value == 'Yes') erg += {};",
            checkbox_name(idx + 1),
            format_script_literal(item.price())
        );
    }
    script.push_str("event.value = erg.toFixed(2);\n");
    script
}
