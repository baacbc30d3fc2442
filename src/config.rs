//! Emission settings for the `primcol` command line.

use primcol_core::{ElementKind, Family};

/// Settings for one `emit` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitConfig {
    /// Element kind the values are parsed as
    pub kind: ElementKind,
    /// Capability the built container exposes
    pub family: Family,
    /// Whether printed output ends with a newline
    pub trailing_newline: bool,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            kind: ElementKind::Int,
            family: Family::Indexed,
            trailing_newline: true,
        }
    }
}

impl EmitConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the element kind
    pub fn with_kind(mut self, kind: ElementKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the container family
    pub fn with_family(mut self, family: Family) -> Self {
        self.family = family;
        self
    }

    /// Set whether output ends with a newline
    pub fn with_trailing_newline(mut self, enabled: bool) -> Self {
        self.trailing_newline = enabled;
        self
    }

    /// Apply the trailing-newline setting to rendered output.
    pub fn finish(&self, mut rendered: String) -> String {
        if self.trailing_newline && !rendered.ends_with('\n') {
            rendered.push('\n');
        }
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // Default config tests
    // ========================================

    #[test]
    fn test_default_config_kind() {
        assert_eq!(EmitConfig::default().kind, ElementKind::Int);
    }

    #[test]
    fn test_default_config_family() {
        assert_eq!(EmitConfig::default().family, Family::Indexed);
    }

    #[test]
    fn test_default_config_trailing_newline() {
        assert!(EmitConfig::default().trailing_newline);
    }

    #[test]
    fn test_new_equals_default() {
        assert_eq!(EmitConfig::new(), EmitConfig::default());
    }

    // ========================================
    // Builder tests
    // ========================================

    #[test]
    fn test_with_kind() {
        let config = EmitConfig::new().with_kind(ElementKind::Char);
        assert_eq!(config.kind, ElementKind::Char);
        assert_eq!(config.family, Family::Indexed);
    }

    #[test]
    fn test_with_family() {
        let config = EmitConfig::new().with_family(Family::Bulk);
        assert_eq!(config.family, Family::Bulk);
        assert_eq!(config.kind, ElementKind::Int);
    }

    #[test]
    fn test_chained_builders() {
        let config = EmitConfig::new()
            .with_kind(ElementKind::Double)
            .with_family(Family::Bulk)
            .with_trailing_newline(false);
        assert_eq!(config.kind, ElementKind::Double);
        assert_eq!(config.family, Family::Bulk);
        assert!(!config.trailing_newline);
    }

    // ========================================
    // Output finishing
    // ========================================

    #[test]
    fn test_finish_appends_newline_once() {
        let config = EmitConfig::new();
        assert_eq!(config.finish("[1]".to_string()), "[1]\n");
        assert_eq!(config.finish("[1]\n".to_string()), "[1]\n");
    }

    #[test]
    fn test_finish_without_newline() {
        let config = EmitConfig::new().with_trailing_newline(false);
        assert_eq!(config.finish("[]".to_string()), "[]");
    }
}
