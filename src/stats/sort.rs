/// Key/direction state for sortable stat tables
///
/// Tracks which column a table is sorted by and in which direction. Selecting
/// a new key sorts descending (stat tables read best-first); re-selecting the
/// active key flips the direction. Missing values compare as zero, so callers
/// that want nulls pushed to one end must pre-filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Indicator glyph for column headers
    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState<K: Copy + PartialEq> {
    key: Option<K>,
    direction: SortDirection,
}

impl<K: Copy + PartialEq> SortState<K> {
    pub fn new() -> Self {
        Self {
            key: None,
            direction: SortDirection::Descending,
        }
    }

    pub fn key(&self) -> Option<K> {
        self.key
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Select a sort key: a new key starts descending, the active key toggles
    pub fn select(&mut self, key: K) {
        if self.key == Some(key) {
            self.direction = self.direction.flipped();
        } else {
            self.key = Some(key);
            self.direction = SortDirection::Descending;
        }
    }

    /// Sort `items` in place by the active key
    ///
    /// `value` extracts the sortable number for one item under a key; `None`
    /// compares as zero. The underlying sort is stable, so items with equal
    /// keys keep their original relative order. No-op when no key is active.
    pub fn order<T>(&self, items: &mut [T], value: impl Fn(&T, K) -> Option<f64>) {
        let Some(key) = self.key else {
            return;
        };
        items.sort_by(|a, b| {
            let va = value(a, key).unwrap_or(0.0);
            let vb = value(b, key).unwrap_or(0.0);
            match self.direction {
                SortDirection::Ascending => va.total_cmp(&vb),
                SortDirection::Descending => vb.total_cmp(&va),
            }
        });
    }
}
