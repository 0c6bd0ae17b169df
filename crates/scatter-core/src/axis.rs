// File: crates/scatter-core/src/axis.rs
// Summary: Plotted attributes, axis identities, and the three-way label selector per axis.

use std::fmt;
use std::str::FromStr;

use crate::error::ChartError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisId {
    X,
    Y,
}

impl AxisId {
    pub const fn as_str(&self) -> &'static str {
        match self {
            AxisId::X => "x",
            AxisId::Y => "y",
        }
    }
}

impl fmt::Display for AxisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AxisId {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(AxisId::X),
            "y" => Ok(AxisId::Y),
            _ => Err(ChartError::UnknownAxis(s.to_string())),
        }
    }
}

/// Dataset column that can drive an axis. Each belongs to exactly one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Attribute {
    Poverty,
    Age,
    Income,
    Obesity,
    Smokes,
    Healthcare,
}

impl Attribute {
    pub const ALL: [Attribute; 6] = [
        Attribute::Poverty,
        Attribute::Age,
        Attribute::Income,
        Attribute::Obesity,
        Attribute::Smokes,
        Attribute::Healthcare,
    ];

    /// Column header and `data-name` value.
    pub const fn name(&self) -> &'static str {
        match self {
            Attribute::Poverty => "poverty",
            Attribute::Age => "age",
            Attribute::Income => "income",
            Attribute::Obesity => "obesity",
            Attribute::Smokes => "smokes",
            Attribute::Healthcare => "healthcare",
        }
    }

    pub const fn axis(&self) -> AxisId {
        match self {
            Attribute::Poverty | Attribute::Age | Attribute::Income => AxisId::X,
            Attribute::Obesity | Attribute::Smokes | Attribute::Healthcare => AxisId::Y,
        }
    }

    /// Text shown on the axis-selector label.
    pub const fn title(&self) -> &'static str {
        match self {
            Attribute::Poverty => "In Poverty (%)",
            Attribute::Age => "Age (Median)",
            Attribute::Income => "Household Income (Median)",
            Attribute::Obesity => "Obese (%)",
            Attribute::Smokes => "Smokes (%)",
            Attribute::Healthcare => "Lacks Healthcare (%)",
        }
    }

    /// Vertical offset of the label inside its axis group.
    pub const fn label_offset(&self) -> f64 {
        match self {
            Attribute::Poverty | Attribute::Obesity => -26.0,
            Attribute::Age | Attribute::Smokes => 0.0,
            Attribute::Income | Attribute::Healthcare => 26.0,
        }
    }

    pub const fn default_for(axis: AxisId) -> Self {
        match axis {
            AxisId::X => Attribute::Poverty,
            AxisId::Y => Attribute::Obesity,
        }
    }

    pub fn for_axis(axis: AxisId) -> [Attribute; 3] {
        match axis {
            AxisId::X => [Attribute::Poverty, Attribute::Age, Attribute::Income],
            AxisId::Y => [Attribute::Obesity, Attribute::Smokes, Attribute::Healthcare],
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Attribute {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Attribute::ALL
            .into_iter()
            .find(|a| a.name() == key)
            .ok_or_else(|| ChartError::UnknownAttribute(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisLabel {
    pub attribute: Attribute,
    pub active: bool,
}

impl AxisLabel {
    pub const fn axis(&self) -> AxisId {
        self.attribute.axis()
    }

    /// CSS class list, e.g. `aText active x`.
    pub fn class(&self) -> String {
        let state = if self.active { "active" } else { "inactive" };
        format!("aText {} {}", state, self.axis())
    }
}

/// Three labels for one axis; exactly one is active.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisSelector {
    axis: AxisId,
    labels: [AxisLabel; 3],
}

impl AxisSelector {
    pub fn new(axis: AxisId) -> Self {
        let current = Attribute::default_for(axis);
        let labels = Attribute::for_axis(axis).map(|attribute| AxisLabel {
            attribute,
            active: attribute == current,
        });
        Self { axis, labels }
    }

    pub fn axis(&self) -> AxisId {
        self.axis
    }

    pub fn labels(&self) -> &[AxisLabel; 3] {
        &self.labels
    }

    pub fn active(&self) -> Attribute {
        self.labels
            .iter()
            .find(|l| l.active)
            .map(|l| l.attribute)
            .unwrap_or_else(|| Attribute::default_for(self.axis))
    }

    pub fn is_active(&self, attribute: Attribute) -> bool {
        self.active() == attribute
    }

    /// Make `attribute` the active label. Returns the previously active
    /// attribute, or `None` when `attribute` was already active.
    pub fn activate(&mut self, attribute: Attribute) -> Result<Option<Attribute>, ChartError> {
        if attribute.axis() != self.axis {
            return Err(ChartError::AxisMismatch {
                attribute,
                expected: attribute.axis(),
                requested: self.axis,
            });
        }
        let previous = self.active();
        if previous == attribute {
            return Ok(None);
        }
        for label in &mut self.labels {
            label.active = label.attribute == attribute;
        }
        Ok(Some(previous))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("Income".parse::<Attribute>().unwrap(), Attribute::Income);
        assert_eq!(" y ".parse::<AxisId>().unwrap(), AxisId::Y);
        assert!("weight".parse::<Attribute>().is_err());
        assert!("z".parse::<AxisId>().is_err());
    }

    #[test]
    fn label_class_lists() {
        let sel = AxisSelector::new(AxisId::Y);
        let classes: Vec<String> = sel.labels().iter().map(AxisLabel::class).collect();
        assert_eq!(classes, vec!["aText active y", "aText inactive y", "aText inactive y"]);
    }
}
