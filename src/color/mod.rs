//! Color representation for terminal emulation.
//!
//! `Color` is a tagged value, not a resolved pixel: the engine never maps
//! an indexed or default color down to concrete RGB bytes itself. That
//! resolution (palette lookup, theme, true-color passthrough) is a
//! rendering concern for a display layer built on top of this crate.

/// A cell's foreground or background color.
///
/// Equality is structural: two `Color`s are equal iff they carry the same
/// variant and payload, which is exactly the comparison the region
/// serializer needs to detect attribute changes between adjacent cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// The terminal's configured default foreground/background.
    #[default]
    Default,
    /// One of the 256 indexed palette slots.
    Indexed(u8),
    /// A direct 24-bit color.
    Rgb(u8, u8, u8),
}

#[cfg(test)]
mod tests;
