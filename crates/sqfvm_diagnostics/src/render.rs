//! Formatting helpers shared by the catalog's wording templates.

use sqfvm_common::ValueType;
use std::fmt;

/// Displays a list of accepted types as `A`, `A or B`, or `A, B or C`.
pub(crate) struct OneOf<'a>(pub &'a [ValueType]);

impl fmt::Display for OneOf<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let last = self.0.len().saturating_sub(1);
        for (i, ty) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(if i == last { " or " } else { ", " })?;
            }
            write!(f, "{ty}")?;
        }
        Ok(())
    }
}

/// Displays a nested array position as `[1][3]`.
pub(crate) struct IndexPath<'a>(pub &'a [usize]);

impl fmt::Display for IndexPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for index in self.0 {
            write!(f, "[{index}]")?;
        }
        Ok(())
    }
}

/// Displays a config class path as `ConfigBin >> CfgVehicles`.
pub(crate) struct ConfigPath<'a>(pub &'a [String]);

impl fmt::Display for ConfigPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" >> ")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

/// Flattens an error and its `source()` chain into `outer: inner: root`.
pub(crate) fn error_chain(error: &dyn std::error::Error) -> String {
    let mut text = error.to_string();
    let mut source = error.source();
    while let Some(inner) = source {
        text.push_str(": ");
        text.push_str(&inner.to_string());
        source = inner.source();
    }
    text
}
