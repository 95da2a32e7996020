//! Ordinal color assignment for slices and legend.

use std::collections::HashMap;

/// Slice fill colors, assigned to distinct names in first-seen order.
pub const SLICE_COLORS: [&str; 9] = [
    "#e41a1c", // red
    "#377eb8", // blue
    "#4daf4a", // green
    "#984ea3", // purple
    "#ff7f00", // orange
    "#ffff33", // yellow
    "#a65628", // brown
    "#f781bf", // pink
    "#999999", // grey
];

/// Ordinal scale from record name to color, recomputed on every update.
#[derive(Clone, Debug, Default)]
pub struct ColorScale {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl ColorScale {
    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let mut scale = ColorScale::default();
        for name in names {
            if !scale.index.contains_key(name) {
                scale.index.insert(name.to_string(), scale.names.len());
                scale.names.push(name.to_string());
            }
        }
        scale
    }

    pub fn color(&self, name: &str) -> &'static str {
        let idx = self.index.get(name).copied().unwrap_or(0);
        SLICE_COLORS[idx % SLICE_COLORS.len()]
    }

    /// Distinct names with their colors, in first-seen order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &'static str)> {
        self.names.iter().map(|n| (n.as_str(), self.color(n)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignment_is_stable_per_distinct_name() {
        let scale = ColorScale::from_names(["rent", "food", "rent", "fun"]);
        assert_eq!(scale.color("rent"), SLICE_COLORS[0]);
        assert_eq!(scale.color("food"), SLICE_COLORS[1]);
        assert_eq!(scale.color("fun"), SLICE_COLORS[2]);
    }

    #[test]
    fn entries_follow_first_seen_order() {
        let scale = ColorScale::from_names(["b", "a", "b", "c"]);
        let names: Vec<&str> = scale.entries().map(|(n, _)| n).collect();
        assert_eq!(names, ["b", "a", "c"]);
    }

    #[test]
    fn palette_cycles_past_nine_names() {
        let names: Vec<String> = (0..12).map(|i| format!("n{}", i)).collect();
        let scale = ColorScale::from_names(names.iter().map(|s| s.as_str()));
        assert_eq!(scale.color("n9"), SLICE_COLORS[0]);
        assert_eq!(scale.color("n10"), SLICE_COLORS[1]);
    }

    #[test]
    fn empty_scale_has_no_entries() {
        let scale = ColorScale::from_names(std::iter::empty::<&str>());
        assert_eq!(scale.entries().count(), 0);
    }
}
