use palette::Srgb;

/// Ordered list of extracted colors.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Palette {
    colors: Vec<Srgb<u8>>,
}

impl Palette {
    pub fn new(colors: Vec<Srgb<u8>>) -> Self {
        Self { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Srgb<u8>> {
        self.colors.iter()
    }

    /// Each color as an `[r, g, b]` triple, the shape used in responses.
    pub fn to_triples(&self) -> Vec<[u8; 3]> {
        self.colors
            .iter()
            .map(|c| [c.red, c.green, c.blue])
            .collect()
    }

    /// Each color as an upper-case `RRGGBB` string.
    pub fn to_hex_strings(&self) -> Vec<String> {
        self.colors
            .iter()
            .map(|c| format!("{:02X}{:02X}{:02X}", c.red, c.green, c.blue))
            .collect()
    }
}

impl From<Vec<Srgb<u8>>> for Palette {
    fn from(colors: Vec<Srgb<u8>>) -> Self {
        Self::new(colors)
    }
}
