//! Joining helpers that skip blank values.

/// Joins the elements with `delimiter`, skipping empty and
/// whitespace-only entries.
///
/// Returns an empty `String` when every element is blank.
///
/// # Example
///
/// ```
/// use tally_core::text::join_non_blank;
///
/// let joined = join_non_blank(", ", ["London", "", "  ", "Paris"]);
/// assert_eq!(joined, "London, Paris");
/// ```
#[must_use]
pub fn join_non_blank<I, S>(delimiter: &str, elements: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut joined = String::new();

    for element in elements {
        let element = element.as_ref();

        if element.trim().is_empty() {
            continue;
        }

        if !joined.is_empty() {
            joined.push_str(delimiter);
        }

        joined.push_str(element);
    }

    joined
}
