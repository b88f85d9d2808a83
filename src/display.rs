//! Display adapters.

use core::fmt::{self, Write as _};

use crate::forest::Forest;

/// Returns an adapter that formats the forest in the canonical
/// `[id:depth, ...]` form.
///
/// Nodes appear in storage order as `id:depth`, comma separated, inside one
/// pair of brackets; the empty forest is `[]`. Formatting writes straight to
/// the formatter without building intermediate strings. Two forests with
/// equal sequences format identically.
///
/// [`FlatForest`][`crate::FlatForest`] implements [`Display`][`fmt::Display`]
/// through this adapter; the free function exists so any [`Forest`]
/// implementation can be formatted the same way.
///
/// # Examples
///
/// ```
/// use flatforest::{display, FlatForest};
///
/// let forest = FlatForest::from_parts(vec![1, 2, 4], vec![0, 1, 2])?;
///
/// assert_eq!(display(&forest).to_string(), "[1:0, 2:1, 4:2]");
/// assert_eq!(display(&FlatForest::new()).to_string(), "[]");
/// # Ok::<_, flatforest::StructureError>(())
/// ```
#[inline]
#[must_use]
pub fn display<F: Forest + ?Sized>(forest: &F) -> ForestDisplay<'_, F> {
    ForestDisplay { forest }
}

/// Returns an adapter that formats the forest as an indented outline.
///
/// Each node takes one line, indented with `"- "` repeated once per depth
/// level. Lines are separated by `'\n'` with no trailing newline.
///
/// # Examples
///
/// ```
/// use flatforest::{outline, FlatForest};
///
/// let forest = FlatForest::from_parts(vec![1, 2, 3], vec![0, 1, 0])?;
///
/// assert_eq!(outline(&forest).to_string(), "1\n- 2\n3");
/// # Ok::<_, flatforest::StructureError>(())
/// ```
#[inline]
#[must_use]
pub fn outline<F: Forest + ?Sized>(forest: &F) -> Outline<'_, F> {
    Outline { forest }
}

/// Canonical `[id:depth, ...]` formatter.
///
/// See [`display`].
pub struct ForestDisplay<'a, F: ?Sized> {
    /// Forest to format.
    forest: &'a F,
}

impl<F: Forest + ?Sized> fmt::Display for ForestDisplay<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('[')?;
        for index in 0..self.forest.len() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(
                f,
                "{}:{}",
                self.forest.node_id(index),
                self.forest.depth(index)
            )?;
        }
        f.write_char(']')
    }
}

impl<F: Forest + ?Sized> fmt::Debug for ForestDisplay<'_, F> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Indented outline formatter.
///
/// See [`outline`].
pub struct Outline<'a, F: ?Sized> {
    /// Forest to format.
    forest: &'a F,
}

impl<F: Forest + ?Sized> fmt::Display for Outline<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for index in 0..self.forest.len() {
            if index > 0 {
                f.write_char('\n')?;
            }
            for _ in 0..self.forest.depth(index) {
                f.write_str("- ")?;
            }
            write!(f, "{}", self.forest.node_id(index))?;
        }

        Ok(())
    }
}

impl<F: Forest + ?Sized> fmt::Debug for Outline<'_, F> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flat::FlatForest;

    #[test]
    fn bracket_form_lists_pairs() {
        let forest = FlatForest::from_parts(vec![10, -3, 7], vec![0, 1, 2])
            .expect("should never fail: the encoding is valid");
        assert_eq!(display(&forest).to_string(), "[10:0, -3:1, 7:2]");
    }

    #[test]
    fn bracket_form_of_empty_forest() {
        assert_eq!(display(&FlatForest::new()).to_string(), "[]");
    }

    #[test]
    fn outline_indents_by_depth() {
        // 1
        // +- 2
        //    +- 4
        // 9
        let forest = FlatForest::from_parts(vec![1, 2, 4, 9], vec![0, 1, 2, 0])
            .expect("should never fail: the encoding is valid");
        assert_eq!(outline(&forest).to_string(), "1\n- 2\n- - 4\n9");
    }

    #[test]
    fn outline_of_empty_forest_is_empty() {
        assert_eq!(outline(&FlatForest::new()).to_string(), "");
    }
}
