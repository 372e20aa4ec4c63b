//! Column offsets in the week-grid layout.
//!
//! The export positions cells purely through `colspan` widths; a cell's
//! logical column is the sum of the widths of everything before it in
//! its row.

use crate::dom::DomNode;

/// Zero-based logical column index of `cell`: the sum of the colspan
/// widths of its preceding siblings, i.e. the first column the cell
/// occupies.
pub(crate) fn column_index<N: DomNode>(cell: &N) -> usize {
    cell.preceding_siblings()
        .iter()
        .map(|sibling| span_width(sibling.attr("colspan")))
        .sum()
}

/// Width of one cell. Absent, unparsable, and non-positive colspan
/// values all degrade to width 1.
fn span_width(colspan: Option<&str>) -> usize {
    colspan
        .and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|width| *width >= 1)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::testing::FakeNode;

    fn td(colspan: Option<&str>) -> FakeNode {
        match colspan {
            Some(value) => FakeNode::new("td").with_attr("colspan", value),
            None => FakeNode::new("td"),
        }
    }

    #[test]
    fn test_no_preceding_siblings() {
        let cell = FakeNode::new("td");
        assert_eq!(column_index(&cell), 0);
    }

    #[test]
    fn test_sums_colspans() {
        // nearest-first order; [2, 3, 1] in the row reads back [1, 3, 2]
        let cell = FakeNode::new("td").with_preceding(vec![
            td(Some("1")),
            td(Some("3")),
            td(Some("2")),
        ]);
        assert_eq!(column_index(&cell), 6);
    }

    #[test]
    fn test_missing_colspan_counts_one() {
        let cell = FakeNode::new("td").with_preceding(vec![td(None), td(Some("2"))]);
        assert_eq!(column_index(&cell), 3);
    }

    #[test]
    fn test_malformed_colspan_counts_one() {
        let cell = FakeNode::new("td").with_preceding(vec![
            td(Some("x")),
            td(Some("0")),
            td(Some("-3")),
        ]);
        assert_eq!(column_index(&cell), 3);
    }
}
