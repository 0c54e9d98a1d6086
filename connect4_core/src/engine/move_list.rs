use crate::logic::board::WIDTH;

/// Fixed-capacity list of playable columns. One slot per column, so move
/// generation never allocates inside the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnList {
    columns: [usize; WIDTH],
    count: usize,
}

impl Default for ColumnList {
    fn default() -> Self {
        Self {
            columns: [0; WIDTH],
            count: 0,
        }
    }
}

impl ColumnList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, column: usize) {
        if let Some(slot) = self.columns.get_mut(self.count) {
            *slot = column;
            self.count += 1;
        } else {
            debug_assert!(false, "ColumnList overflow! Max columns: {WIDTH}");
        }
    }

    pub const fn len(&self) -> usize {
        self.count
    }

    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn as_slice(&self) -> &[usize] {
        self.columns.get(0..self.count).unwrap_or(&[])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.as_slice().iter()
    }
}

pub struct ColumnListIntoIter {
    list: ColumnList,
    index: usize,
}

impl Iterator for ColumnListIntoIter {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let column = self.list.as_slice().get(self.index).copied()?;
        self.index += 1;
        Some(column)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ColumnListIntoIter {}

impl IntoIterator for ColumnList {
    type Item = usize;
    type IntoIter = ColumnListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        ColumnListIntoIter {
            list: self,
            index: 0,
        }
    }
}

impl<'a> IntoIterator for &'a ColumnList {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_iterate() {
        let mut list = ColumnList::new();
        assert!(list.is_empty());
        list.push(3);
        list.push(2);
        assert_eq!(list.len(), 2);
        assert_eq!(list.as_slice(), &[3, 2]);
        assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![3, 2]);
    }

    #[test]
    fn test_fills_to_capacity() {
        let mut list = ColumnList::new();
        for col in 0..WIDTH {
            list.push(col);
        }
        assert_eq!(list.len(), WIDTH);
        assert_eq!(list.into_iter().len(), WIDTH);
    }
}
