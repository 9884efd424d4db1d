use std::cmp::Ordering;

use crate::state::{Product, SortMode};

/// What: Order one fetched page according to the selected sort mode.
///
/// Inputs:
/// - `products`: Page to sort in place
/// - `mode`: Selected sort mode
///
/// Output:
/// - `products` reordered; stable, so equal keys keep their input order.
///
/// Details:
/// - Names compare lexicographically; a missing name sorts as `""`.
/// - Grades compare lexicographically. Ungraded products go last for
///   [`SortMode::GradeAsc`] and first for [`SortMode::GradeDesc`].
/// - Only the page is sorted; callers merging pages do not re-sort the
///   accumulated list.
pub fn sort_products(products: &mut [Product], mode: SortMode) {
    match mode {
        SortMode::NameAsc => products.sort_by(|a, b| cmp_names(a, b)),
        SortMode::NameDesc => products.sort_by(|a, b| cmp_names(b, a)),
        SortMode::GradeAsc => {
            products.sort_by(|a, b| grade_key(a, UNGRADED_ASC).cmp(&grade_key(b, UNGRADED_ASC)));
        }
        SortMode::GradeDesc => {
            products.sort_by(|a, b| grade_key(b, UNGRADED_DESC).cmp(&grade_key(a, UNGRADED_DESC)));
        }
    }
}

/// What: Case-insensitive name comparison with a raw tiebreak.
fn cmp_names(a: &Product, b: &Product) -> Ordering {
    let (na, nb) = (a.sort_name(), b.sort_name());
    na.to_lowercase()
        .cmp(&nb.to_lowercase())
        .then_with(|| na.cmp(nb))
}

/// Fill for a missing grade when ascending: after `e`.
const UNGRADED_ASC: char = 'z';
/// Fill for a missing grade when descending: above every letter, so first.
const UNGRADED_DESC: char = '~';

/// What: Grade letter used as sort key, `fill` when ungraded.
fn grade_key(p: &Product, fill: char) -> char {
    p.grade().unwrap_or(fill)
}
