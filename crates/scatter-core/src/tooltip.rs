// File: crates/scatter-core/src/tooltip.rs
// Summary: Hover tooltip content for one record under the current axis selections.

use std::fmt;

use crate::axis::Attribute;
use crate::dataset::Record;
use crate::format::{format_grouped, format_percent};

#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub title: String,
    pub x_line: String,
    pub y_line: String,
}

impl Tooltip {
    /// X is a percentage only for poverty; age and income are grouped numbers.
    /// Every Y attribute is a percentage.
    pub fn for_record(record: &Record, x: Attribute, y: Attribute) -> Self {
        let xv = record.value(x);
        let x_text = if x == Attribute::Poverty { format_percent(xv) } else { format_grouped(xv) };
        Self {
            title: record.state.clone(),
            x_line: format!("{}: {}", x, x_text),
            y_line: format!("{}: {}", y, format_percent(record.value(y))),
        }
    }

    pub fn lines(&self) -> [&str; 3] {
        [&self.title, &self.x_line, &self.y_line]
    }

    /// Markup shown inside the tooltip box.
    pub fn html(&self) -> String {
        self.lines()
            .iter()
            .map(|l| format!("<div>{}</div>", escape(l)))
            .collect()
    }
}

impl fmt::Display for Tooltip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.title, self.x_line, self.y_line)
    }
}

pub(crate) fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
