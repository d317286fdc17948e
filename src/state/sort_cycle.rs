//! Sort direction cycle (pure).
//!
//! A column header reports the direction it currently shows; the next
//! interaction flips it. An unsorted (natural) column sorts ascending first,
//! and from then on the column toggles between ascending and descending.

use crate::model::{SortCriterion, SortHint};

/// Resolve a header interaction into the next active criterion for `field`.
///
/// The cycle is `natural → ASC`, `ascending → DESC`, `descending → ASC`.
/// Token recognition and column-to-field binding happen before this point;
/// by the time a hint reaches here it always produces a criterion.
pub fn resolve(hint: SortHint, field: impl Into<String>) -> SortCriterion {
    match hint {
        SortHint::Natural => SortCriterion::ascending(field),
        SortHint::Ascending => SortCriterion::descending(field),
        SortHint::Descending => SortCriterion::ascending(field),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SortDirection;

    #[test]
    fn natural_goes_ascending() {
        let c = resolve(SortHint::Natural, "name");
        assert_eq!(c.field(), "name");
        assert_eq!(c.direction(), SortDirection::Asc);
    }

    #[test]
    fn ascending_goes_descending() {
        let c = resolve(SortHint::Ascending, "name");
        assert_eq!(c.direction(), SortDirection::Desc);
    }

    #[test]
    fn descending_goes_back_to_ascending() {
        let c = resolve(SortHint::Descending, "name");
        assert_eq!(c.direction(), SortDirection::Asc);
    }

    #[test]
    fn cycle_alternates_after_first_sort() {
        // natural, then repeated clicks: ASC, DESC, ASC, DESC, ...
        let mut hint = SortHint::Natural;
        let mut directions = Vec::new();
        for _ in 0..4 {
            let c = resolve(hint, "age");
            directions.push(c.direction());
            hint = match c.direction() {
                SortDirection::Asc => SortHint::Ascending,
                SortDirection::Desc => SortHint::Descending,
            };
        }
        assert_eq!(
            directions,
            vec![
                SortDirection::Asc,
                SortDirection::Desc,
                SortDirection::Asc,
                SortDirection::Desc
            ]
        );
    }
}
