//! The bit-encoded type lattice used throughout binding and emission.

/// The inferred type of a bound expression, encoded as a bit set.
///
/// A well-formed type has exactly one element-kind bit set (`BOOL`, `STRING`,
/// `NUMBER`, or `UNKNOWN` as the fallback) plus any combination of the
/// `LIST`, `MAP`, and `OUTPUT` modifier bits. The lattice is small enough
/// that a single word encodes any state, and composition (`list_of`,
/// `output_of`) is bit union.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundType(u32);

impl BoundType {
    /// The empty bit set. Observed when `element_type` is taken of a value
    /// whose element kind was never established.
    pub const INVALID: BoundType = BoundType(0);

    /// Element kind: boolean.
    pub const BOOL: BoundType = BoundType(1);
    /// Element kind: string.
    pub const STRING: BoundType = BoundType(1 << 1);
    /// Element kind: number (integer or float).
    pub const NUMBER: BoundType = BoundType(1 << 2);
    /// Element kind: statically undetermined.
    pub const UNKNOWN: BoundType = BoundType(1 << 3);

    /// Modifier: the value is a sequence of the element type.
    pub const LIST: BoundType = BoundType(1 << 4);
    /// Modifier: the value is a keyed collection of the element type.
    pub const MAP: BoundType = BoundType(1 << 5);
    /// Modifier: the value is deferred and must be lifted through a
    /// combinator before it can be consumed.
    pub const OUTPUT: BoundType = BoundType(1 << 6);

    const ELEMENT_MASK: u32 =
        Self::BOOL.0 | Self::STRING.0 | Self::NUMBER.0 | Self::UNKNOWN.0;

    /// Whether the `LIST` modifier is set.
    pub fn is_list(self) -> bool {
        self.0 & Self::LIST.0 != 0
    }

    /// This type with the `LIST` modifier set.
    pub fn list_of(self) -> BoundType {
        BoundType(self.0 | Self::LIST.0)
    }

    /// Whether the `MAP` modifier is set.
    pub fn is_map(self) -> bool {
        self.0 & Self::MAP.0 != 0
    }

    /// This type with the `MAP` modifier set.
    pub fn map_of(self) -> BoundType {
        BoundType(self.0 | Self::MAP.0)
    }

    /// Whether the `OUTPUT` modifier is set.
    pub fn is_output(self) -> bool {
        self.0 & Self::OUTPUT.0 != 0
    }

    /// This type with the `OUTPUT` modifier set.
    pub fn output_of(self) -> BoundType {
        BoundType(self.0 | Self::OUTPUT.0)
    }

    /// The element kind with all modifier bits masked off.
    pub fn element_type(self) -> BoundType {
        BoundType(self.0 & Self::ELEMENT_MASK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifiers_compose() {
        let t = BoundType::STRING.list_of();
        assert!(t.is_list());
        assert!(!t.is_map());
        assert!(!t.is_output());
        assert_eq!(t.element_type(), BoundType::STRING);

        let t = BoundType::NUMBER.map_of().output_of();
        assert!(t.is_map());
        assert!(t.is_output());
        assert_eq!(t.element_type(), BoundType::NUMBER);
    }

    #[test]
    fn test_modifiers_are_idempotent() {
        assert_eq!(
            BoundType::BOOL.list_of().list_of(),
            BoundType::BOOL.list_of()
        );
    }

    #[test]
    fn test_element_type_strips_all_modifiers() {
        let t = BoundType::UNKNOWN.list_of().map_of().output_of();
        assert_eq!(t.element_type(), BoundType::UNKNOWN);
    }

    #[test]
    fn test_bare_modifier_has_invalid_element() {
        // A list whose element kind was never established.
        assert_eq!(BoundType::LIST.element_type(), BoundType::INVALID);
    }
}
