//! Render the vocabulary tables as Markdown.
//!
//! The output is meant for humans (the `primcol kinds` command and generated docs); do not parse it.

use crate::families::FAMILIES;
use crate::kinds::ELEMENT_KINDS;

/// Render the element kind table.
///
/// ## Examples
/// ```rust
/// let table = primcol_core::reference::render_kinds();
/// assert!(table.lines().any(|l| l.starts_with("| `int` ")));
/// ```
pub fn render_kinds() -> String {
    let mut out = String::new();
    out.push_str("| Kind | Aliases | Rust type | Schema | Description |\n");
    out.push_str("|---|---|---|---|---|\n");
    for info in ELEMENT_KINDS {
        out.push_str(&format!(
            "| `{}` | {} | `{}` | `{}` | {} |\n",
            info.item.canonical,
            render_aliases(info.item.aliases),
            info.rust_type,
            info.schema_tag,
            info.item.description,
        ));
    }
    out
}

/// Render the container family table.
pub fn render_families() -> String {
    let mut out = String::new();
    out.push_str("| Family | Aliases | Description |\n");
    out.push_str("|---|---|---|\n");
    for info in FAMILIES {
        out.push_str(&format!(
            "| `{}` | {} | {} |\n",
            info.canonical,
            render_aliases(info.aliases),
            info.description,
        ));
    }
    out
}

fn render_aliases(aliases: &[&str]) -> String {
    if aliases.is_empty() {
        return "-".to_string();
    }
    aliases.iter().map(|a| format!("`{a}`")).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_row_per_kind_plus_header() {
        assert_eq!(render_kinds().lines().count(), ELEMENT_KINDS.len() + 2);
    }

    #[test]
    fn char_row_has_no_aliases() {
        let table = render_kinds();
        let row = table.lines().find(|l| l.starts_with("| `char` ")).expect("char row");
        assert!(row.contains("| - |"), "{row}");
        assert!(row.contains("`string`"), "{row}");
    }
}
