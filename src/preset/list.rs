use super::Preset;
use crate::error::BlendError;

/// Ordered, index-addressable preset collection owned by one engine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PresetList {
    presets: Vec<Preset>,
}

impl PresetList {
    /// Empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `preset`. An absent preset is ignored; returns whether
    /// anything was added.
    pub fn add(&mut self, preset: impl Into<Option<Preset>>) -> bool {
        let Some(preset) = preset.into() else {
            return false;
        };
        self.presets.push(preset);
        true
    }

    /// Remove the preset at `index`. Out-of-range indices leave the list
    /// unchanged.
    pub fn remove_at(&mut self, index: usize) -> Option<Preset> {
        (index < self.presets.len()).then(|| self.presets.remove(index))
    }

    /// Preset at `index`.
    pub fn get(&self, index: usize) -> Result<&Preset, BlendError> {
        self.presets.get(index).ok_or(BlendError::InvalidIndex {
            index,
            len: self.presets.len(),
        })
    }

    /// Read-only ordered view.
    #[must_use]
    pub fn as_slice(&self) -> &[Preset] {
        &self.presets
    }

    /// Number of presets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Presets in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Preset> {
        self.presets.iter()
    }
}

impl FromIterator<Preset> for PresetList {
    fn from_iter<I: IntoIterator<Item = Preset>>(iter: I) -> Self {
        Self {
            presets: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PresetList {
    type Item = &'a Preset;
    type IntoIter = std::slice::Iter<'a, Preset>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &PresetList) -> Vec<&str> {
        list.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn add_appends_in_order_and_ignores_none() {
        let mut list = PresetList::new();
        assert!(list.add(Preset::named("a")));
        assert!(!list.add(None::<Preset>));
        assert!(list.add(Some(Preset::named("b"))));
        assert_eq!(names(&list), ["a", "b"]);
    }

    #[test]
    fn remove_out_of_range_is_a_no_op() {
        let mut list: PresetList =
            ["a", "b", "c"].into_iter().map(Preset::named).collect();
        let before = list.clone();

        assert!(list.remove_at(3).is_none());
        assert!(list.remove_at(usize::MAX).is_none());
        assert_eq!(list, before);

        assert_eq!(list.remove_at(1).map(|p| p.name), Some("b".to_owned()));
        assert_eq!(names(&list), ["a", "c"]);
    }

    #[test]
    fn get_reports_invalid_index() {
        let list: PresetList = std::iter::once(Preset::named("a")).collect();
        assert!(list.get(0).is_ok());
        assert!(matches!(
            list.get(1),
            Err(BlendError::InvalidIndex { index: 1, len: 1 })
        ));
    }
}
