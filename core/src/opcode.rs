use std::fmt;

/// A raw 16-bit Chip-8 word, split into the fields instructions draw their operands from.
///
/// ```text
/// [k x y n]    k selects the family, n often the variant within it
/// [_ _ nn ]    immediate byte
/// [_ nnn  ]    12-bit address
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode(pub u16);

impl Opcode {
    /// `(k, x, y, n)`, most significant first.
    pub fn nibbles(self) -> (u8, u8, u8, u8) {
        let [hi, lo] = self.0.to_be_bytes();
        (hi >> 4, hi & 0xF, lo >> 4, lo & 0xF)
    }

    pub fn x(self) -> u8 {
        self.nibbles().1
    }

    pub fn y(self) -> u8 {
        self.nibbles().2
    }

    pub fn n(self) -> u8 {
        self.nibbles().3
    }

    pub fn nn(self) -> u8 {
        self.0.to_be_bytes()[1]
    }

    pub fn nnn(self) -> u16 {
        self.0 & 0x0FFF
    }
}

impl From<u16> for Opcode {
    fn from(word: u16) -> Self {
        Opcode(word)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04X}", self.0)
    }
}
