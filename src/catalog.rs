//! Static name catalogs with case-insensitive lookup

/// A catalog of named entries, stored as a static table sorted by lower case name.
#[derive(Debug)]
pub struct Catalog<T: 'static> {
    entries: &'static [(&'static str, T)],
}

impl<T: 'static> Catalog<T> {
    /// `entries` must be sorted by name and names must be lower case
    pub const fn new(entries: &'static [(&'static str, T)]) -> Self {
        Catalog { entries }
    }

    /// Look up `name`, ignoring case
    pub fn get(&self, name: &str) -> Option<&'static T> {
        self.get_entry(name).map(|(_, v)| v)
    }

    /// Look up `name`, ignoring case, and return the entry with its catalog name
    pub fn get_entry(&self, name: &str) -> Option<(&'static str, &'static T)> {
        let key = name.to_lowercase();
        let entries: &'static [(&'static str, T)] = self.entries;
        entries
            .binary_search_by(|(n, _)| (*n).cmp(key.as_str()))
            .ok()
            .map(|idx| (entries[idx].0, &entries[idx].1))
    }

    /// Sorted names of the catalog
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(n, _)| *n).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static T)> + use<T> {
        let entries: &'static [(&'static str, T)] = self.entries;
        entries.iter().map(|(n, v)| (*n, v))
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table respects the lookup requirements
    #[cfg(test)]
    pub fn is_well_formed(&self) -> bool {
        self.entries.windows(2).all(|w| w[0].0 < w[1].0)
            && self.entries.iter().all(|(n, _)| n.to_lowercase() == *n)
    }
}
