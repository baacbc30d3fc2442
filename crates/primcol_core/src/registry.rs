//! Shareable metadata for `primcol_core` vocabulary tables.
//!
//! Element kinds, container families and schema tags are all **registry-first** vocabularies: a closed enum of
//! stable ids plus a `const` table describing their spellings. This submodule provides the small metadata shape
//! reused by each table, and the spelling lookup they share.
//!
//! ## Notes
//! - These types are `Copy` so tables can live in `const` items.
//! - Metadata is meant for the CLI, docs and diagnostics; emission never consults spellings.
//!
//! ## See also
//! - [`crate::kinds`]
//! - [`crate::families`]
//! - [`crate::schema`]

/// Shared metadata shape for a vocabulary item.
///
/// Every vocabulary needs:
/// - stable identity (`id`)
/// - accepted spellings (`canonical` + `aliases`)
/// - a one-line `description`
///
/// Tables that need extra per-item data (e.g. the Rust type of an element kind) wrap this struct in their own
/// info type.
///
/// ## Examples
/// ```rust
/// use primcol_core::registry::ItemInfo;
///
/// let item = ItemInfo { id: 7u8, canonical: "seven", aliases: &["7"], description: "The number seven." };
/// assert!(item.is_spelled("SEVEN", true));
/// assert!(!item.is_spelled("SEVEN", false));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ItemInfo<Id> {
    pub id: Id,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
}

impl<Id> ItemInfo<Id> {
    /// Check whether `name` is the canonical spelling or one of the aliases.
    ///
    /// ## Parameters
    /// - `name`: candidate spelling.
    /// - `ignore_ascii_case`: whether matching ignores ASCII case.
    pub fn is_spelled(&self, name: &str, ignore_ascii_case: bool) -> bool {
        let eq = |s: &str| {
            if ignore_ascii_case {
                s.eq_ignore_ascii_case(name)
            } else {
                s == name
            }
        };
        eq(self.canonical) || self.aliases.iter().any(|a| eq(a))
    }
}

/// Resolve a spelling against a table of items.
///
/// Canonical spellings win over aliases, so an alias can never shadow another item's canonical name.
///
/// ## Returns
/// - `Some(id)` for the first item spelled `name`.
/// - `None` otherwise.
pub fn resolve<'a, Id, I>(items: I, name: &str, ignore_ascii_case: bool) -> Option<Id>
where
    Id: Copy + 'a,
    I: IntoIterator<Item = &'a ItemInfo<Id>>,
    I::IntoIter: Clone,
{
    let items = items.into_iter();
    let canonical = items.clone().find(|item| {
        if ignore_ascii_case {
            item.canonical.eq_ignore_ascii_case(name)
        } else {
            item.canonical == name
        }
    });
    canonical
        .or_else(|| items.clone().find(|item| item.is_spelled(name, ignore_ascii_case)))
        .map(|item| item.id)
}

/// Build an [`ItemInfo`] in a `const` context.
pub(crate) const fn item<Id>(
    id: Id,
    canonical: &'static str,
    aliases: &'static [&'static str],
    description: &'static str,
) -> ItemInfo<Id> {
    ItemInfo {
        id,
        canonical,
        aliases,
        description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ITEMS: &[ItemInfo<u8>] = &[item(1, "one", &["two"], "First."), item(2, "two", &[], "Second.")];

    #[test]
    fn canonical_beats_alias() {
        assert_eq!(resolve(ITEMS, "two", false), Some(2));
    }

    #[test]
    fn alias_resolves_when_no_canonical_match() {
        const ONLY_ALIAS: &[ItemInfo<u8>] = &[item(1, "one", &["uno"], "First.")];
        assert_eq!(resolve(ONLY_ALIAS, "uno", false), Some(1));
        assert_eq!(resolve(ONLY_ALIAS, "UNO", true), Some(1));
        assert_eq!(resolve(ONLY_ALIAS, "UNO", false), None);
    }
}
