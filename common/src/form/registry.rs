use indexmap::IndexMap;

use super::field::{FieldDescriptor, FieldKind};

/// Every input of the form, in document order, with a name lookup.
///
/// Built once from the declared schema and handed to the snapshot reader and
/// writer, so neither has to query the page for inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldRegistry {
    fields: Vec<FieldDescriptor>,
    by_name: IndexMap<String, Vec<usize>>,
}

impl FieldRegistry {
    pub fn new(fields: impl IntoIterator<Item = FieldDescriptor>) -> Self {
        let fields: Vec<FieldDescriptor> = fields.into_iter().collect();
        let mut by_name: IndexMap<String, Vec<usize>> = IndexMap::new();
        for (index, field) in fields.iter().enumerate() {
            by_name.entry(field.name.clone()).or_default().push(index);
        }
        Self { fields, by_name }
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn field(&self, index: usize) -> Option<&FieldDescriptor> {
        self.fields.get(index)
    }

    /// Indices of the inputs named `name`, in document order.
    pub fn indices_of(&self, name: &str) -> &[usize] {
        self.by_name.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn by_name<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a FieldDescriptor> + 'a {
        let indices = self.indices_of(name);
        indices.iter().map(move |&i| &self.fields[i])
    }

    /// Distinct field names in first-seen order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.by_name.keys().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn set_text(&mut self, index: usize, text: impl Into<String>) {
        if let Some(field) = self.fields.get_mut(index) {
            field.text = text.into();
        }
    }

    /// Sets the checked state of one input. Checking a radio unchecks the
    /// other radios of its group.
    pub fn set_checked(&mut self, index: usize, checked: bool) {
        let Some(field) = self.fields.get(index) else {
            return;
        };
        if field.kind == FieldKind::Radio && checked {
            let group = self.indices_of(&field.name).to_vec();
            for i in group {
                if self.fields[i].kind == FieldKind::Radio {
                    self.fields[i].checked = i == index;
                }
            }
        } else {
            self.fields[index].checked = checked;
        }
    }

    /// Restores every input to its schema default.
    pub fn reset(&mut self) {
        self.fields.iter_mut().for_each(FieldDescriptor::reset);
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FieldDescriptor;

    fn registry() -> FieldRegistry {
        FieldRegistry::new([
            FieldDescriptor::text("tag"),
            FieldDescriptor::text("device_name"),
            FieldDescriptor::text("tag"),
            FieldDescriptor::radio("mode", "auto"),
            FieldDescriptor::radio("mode", "manual"),
        ])
    }

    #[test]
    fn groups_indices_by_name() {
        let registry = registry();
        assert_eq!(registry.indices_of("tag"), &[0, 2]);
        assert_eq!(registry.indices_of("missing"), &[] as &[usize]);
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["tag", "device_name", "mode"]);
        assert_eq!(registry.by_name("tag").count(), 2);
    }

    #[test]
    fn checking_a_radio_unchecks_its_group() {
        let mut registry = registry();
        registry.set_checked(3, true);
        registry.set_checked(4, true);
        assert!(!registry.fields()[3].checked);
        assert!(registry.fields()[4].checked);
    }

    #[test]
    fn reset_clears_edits() {
        let mut registry = registry();
        registry.set_text(1, "Gate1");
        registry.reset();
        assert_eq!(registry.fields()[1].text, "");
    }
}
