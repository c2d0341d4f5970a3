#![allow(dead_code)]

use std::collections::HashSet;

use regex::Regex;
use selfcalc::items::LineItem;

/// A parsed `calculate` script: checkbox names with the amount each adds.
pub struct TotalScript {
    pub terms: Vec<(String, f64)>,
}

impl TotalScript {
    /// Parses the script text the emitter embeds in the total field.
    pub fn parse(script: &str) -> Self {
        let term = Regex::new(
            r"^if\(this\.getField\('(cb\d+)'\)\.value == 'Yes'\) erg \+= ([0-9]+(?:\.[0-9]+)?);$",
        )
        .expect("term regex");
        let lines: Vec<&str> = script.lines().collect();
        assert_eq!(lines.first(), Some(&"var erg = 0;"), "script:\n{script}");
        assert_eq!(
            lines.last(),
            Some(&"event.value = erg.toFixed(2);"),
            "script:\n{script}"
        );
        let terms = lines[1..lines.len() - 1]
            .iter()
            .map(|line| {
                let caps = term
                    .captures(line)
                    .unwrap_or_else(|| panic!("unexpected script line `{line}`"));
                (caps[1].to_string(), caps[2].parse::<f64>().expect("price literal"))
            })
            .collect();
        Self { terms }
    }

    /// Extracts and parses the script from a full rendered document.
    pub fn from_document(doc: &str) -> Self {
        const OPEN: &str = "calculate = {\n";
        let start = doc.find(OPEN).expect("calculate block") + OPEN.len();
        let end = doc[start..].find("}]{}}}").expect("end of total field") + start;
        Self::parse(&doc[start..end])
    }

    /// Evaluates the script the way the viewer does, with `checked` boxes set
    /// to `Yes`.
    pub fn evaluate(&self, checked: &[&str]) -> String {
        let checked: HashSet<&str> = checked.iter().copied().collect();
        let mut erg = 0.0_f64;
        for (name, amount) in &self.terms {
            if checked.contains(name.as_str()) {
                erg += amount;
            }
        }
        format!("{erg:.2}")
    }

    pub fn names(&self) -> Vec<&str> {
        self.terms.iter().map(|(name, _)| name.as_str()).collect()
    }
}

pub fn priced(prices: &[f64]) -> Vec<LineItem> {
    prices
        .iter()
        .enumerate()
        .map(|(idx, price)| {
            LineItem::new(format!("Item {}", idx + 1), *price).expect("valid price")
        })
        .collect()
}
