use rand::Rng;
use std::fmt;

/// The text every generated artifact is derived from.
///
/// Dashes are read as spaces so seeds can travel in URLs and on command lines
/// without quoting: `Pulsing-Eye` and `Pulsing Eye` are the same seed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Seed(String);

impl Seed {
    pub fn new(input: &str) -> Self {
        Self(input.replace('-', " "))
    }

    /// A numeric seed for sessions started without one.
    pub fn random() -> Self {
        let value: u32 = rand::rng().random_range(0..1_000_000_000);
        Self(value.to_string())
    }

    /// Reads the `seed` parameter from a query string such as
    /// `?seed=Pulsing-Eye&speed=1`. `+` and `%XX` escapes are decoded.
    pub fn from_query(query: &str) -> Option<Self> {
        query
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == "seed")
            .map(|(_, value)| Self::new(&percent_decode(value)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn percent_decode(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => decoded.push(b' '),
            b'%' if i + 2 < bytes.len() => {
                match (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                    (Some(high), Some(low)) => {
                        decoded.push((high << 4) | low);
                        i += 2;
                    }
                    _ => decoded.push(b'%'),
                }
            }
            byte => decoded.push(byte),
        }
        i += 1;
    }
    String::from_utf8_lossy(&decoded).into_owned()
}

fn hex_value(digit: u8) -> Option<u8> {
    (digit as char).to_digit(16).map(|value| value as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashes_become_spaces() {
        assert_eq!(Seed::new("Pulsing-Eye").as_str(), "Pulsing Eye");
        assert_eq!(Seed::new("a--b").as_str(), "a  b");
        assert_eq!(Seed::new("plain").as_str(), "plain");
    }

    #[test]
    fn random_seeds_are_numeric() {
        let seed = Seed::random();
        assert!(!seed.as_str().is_empty());
        assert!(seed.as_str().chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn reads_seed_from_query() {
        assert_eq!(Seed::from_query("?seed=Octagon"), Some(Seed::new("Octagon")));
        assert_eq!(
            Seed::from_query("x=1&seed=Pulsing-Eye&y=2"),
            Some(Seed::new("Pulsing Eye"))
        );
        assert_eq!(Seed::from_query("seed=hello+world"), Some(Seed::new("hello world")));
        assert_eq!(Seed::from_query("seed=a%20b%2Dc"), Some(Seed::new("a b c")));
        assert_eq!(Seed::from_query("seed=100%"), Some(Seed::new("100%")));
        assert_eq!(Seed::from_query("?other=1"), None);
        assert_eq!(Seed::from_query(""), None);
    }
}
