/// Selectable list with an optional substring filter.
///
/// Selection indexes the visible rows, [`SelectList::selected_item`] maps it
/// back to the underlying item.
#[derive(Debug, Clone)]
pub struct SelectList<T> {
    items: Vec<T>,
    visible: Vec<usize>,
    selected: usize,
    filter: String,
    filtering: bool,
    filter_value: fn(&T) -> String,
}

impl<T> SelectList<T> {
    pub fn new(filter_value: fn(&T) -> String) -> Self {
        Self {
            items: Vec::new(),
            visible: Vec::new(),
            selected: 0,
            filter: String::new(),
            filtering: false,
            filter_value,
        }
    }

    /// Replace the items, clearing the filter and selecting the first row
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.filter.clear();
        self.filtering = false;
        self.refilter();
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Items currently shown, in display order
    pub fn visible(&self) -> impl Iterator<Item = &T> {
        self.visible.iter().map(|&i| &self.items[i])
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&T> {
        self.visible.get(self.selected).map(|&i| &self.items[i])
    }

    pub fn select(&mut self, index: usize) {
        self.selected = index.min(self.visible.len().saturating_sub(1));
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        self.select(self.selected + 1);
    }

    pub fn page_up(&mut self, page: usize) {
        self.selected = self.selected.saturating_sub(page);
    }

    pub fn page_down(&mut self, page: usize) {
        self.select(self.selected + page);
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn is_filtering(&self) -> bool {
        self.filtering
    }

    pub fn is_filter_applied(&self) -> bool {
        !self.filtering && !self.filter.is_empty()
    }

    pub fn start_filter(&mut self) {
        self.filtering = true;
    }

    /// Stop typing but keep the filter applied
    pub fn accept_filter(&mut self) {
        self.filtering = false;
    }

    pub fn clear_filter(&mut self) {
        self.filter.clear();
        self.filtering = false;
        self.refilter();
    }

    pub fn push_filter(&mut self, c: char) {
        self.filter.push(c);
        self.refilter();
    }

    /// Remove the last filter character. Returns `false` when there was
    /// nothing left to remove.
    pub fn pop_filter(&mut self) -> bool {
        let popped = self.filter.pop().is_some();
        self.refilter();
        popped
    }

    fn refilter(&mut self) {
        let needle = self.filter.to_lowercase();
        self.visible = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| {
                needle.is_empty() || (self.filter_value)(item).to_lowercase().contains(&needle)
            })
            .map(|(i, _)| i)
            .collect();
        self.selected = 0;
    }
}
