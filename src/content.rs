//! Card content for the classic four-attribute deck.

use core::fmt;

/// Number of attributes on a classic card.
pub const ATTRIBUTES: usize = 4;

/// Number of levels each attribute can take.
pub const LEVELS: usize = 3;

/// Number of distinct classic contents (3⁴).
pub const UNIVERSE_SIZE: usize = 81;

/// One of the three symbolic levels of an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    /// First level.
    Zero,
    /// Second level.
    One,
    /// Third level.
    Two,
}

impl Level {
    /// All levels in ascending order.
    pub const ALL: [Self; LEVELS] = [Self::Zero, Self::One, Self::Two];

    /// Creates a level, clamping values above 2 down to [`Level::Two`].
    #[must_use]
    pub const fn new(value: u8) -> Self {
        match value {
            0 => Self::Zero,
            1 => Self::One,
            _ => Self::Two,
        }
    }

    /// Returns the numeric value of the level (0, 1 or 2).
    #[must_use]
    pub const fn get(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Content of a classic card: four independent attributes.
///
/// How a level maps to an actual color, shape, count or texture is up to the
/// presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardContent {
    /// Color of the symbols.
    pub color: Level,
    /// Shape of the symbols.
    pub shape: Level,
    /// Number of symbols.
    pub count: Level,
    /// Fill texture of the symbols.
    pub texture: Level,
}

impl CardContent {
    /// Creates content from raw level values. Values above 2 are clamped.
    ///
    /// # Example
    ///
    /// ```
    /// use setrs::{CardContent, Level};
    ///
    /// let content = CardContent::new(0, 1, 2, 7);
    /// assert_eq!(content.count, Level::Two);
    /// assert_eq!(content.texture, Level::Two);
    /// ```
    #[must_use]
    pub const fn new(color: u8, shape: u8, count: u8, texture: u8) -> Self {
        Self {
            color: Level::new(color),
            shape: Level::new(shape),
            count: Level::new(count),
            texture: Level::new(texture),
        }
    }

    /// Decodes the `index`-th content of the classic universe.
    ///
    /// The index is read in base 3 with color as the most significant digit
    /// and texture as the least. Returns `None` once `index` reaches
    /// [`UNIVERSE_SIZE`].
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index >= UNIVERSE_SIZE {
            return None;
        }

        Some(Self::new(
            (index / 27 % 3) as u8,
            (index / 9 % 3) as u8,
            (index / 3 % 3) as u8,
            (index % 3) as u8,
        ))
    }

    /// Returns the attributes in `[color, shape, count, texture]` order.
    #[must_use]
    pub const fn attributes(&self) -> [Level; ATTRIBUTES] {
        [self.color, self.shape, self.count, self.texture]
    }
}

impl fmt::Display for CardContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}; {}; {}; {})",
            self.color, self.shape, self.count, self.texture
        )
    }
}
