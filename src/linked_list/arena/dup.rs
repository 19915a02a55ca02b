use super::{error::ListError, iter::Direction, list::List};

impl<T: Clone> List<T> {
    /// Copies the whole list.
    ///
    /// The copy gets the same hooks. Each value goes through the duplicate
    /// hook, or is shared through [`Clone`] when none is set. If the hook
    /// fails, or room for the copy cannot be allocated, whatever was already
    /// copied is handed to the release hook and the error is returned. The
    /// original list is never modified.
    pub fn duplicate(&self) -> Result<List<T>, ListError> {
        let mut copy = List::with_hooks(*self.hooks());
        copy.try_reserve(self.len())?;

        let mut iter = self.get_iterator(Direction::Forward);
        let mut position = 0;
        while let Some(node) = iter.next(self) {
            let value = self
                .hooks()
                .duplicate_value(self.value(node))
                .ok_or_else(|| {
                    tracing::debug!(position, len = self.len(), "duplicate hook failed");
                    ListError::DuplicateCallbackFailure { position }
                })?;
            copy.push_back(value)?;
            position += 1;
        }
        Ok(copy)
    }
}
