// Prompt catalog - what the user is asked to say
//
// A prompt is a category chosen by the user plus a word from that category
// and a delivery emotion, both drawn at random.

use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Cypherpunk,
    Freedom,
    Empathy,
    Heroes,
    History,
    Life,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Cypherpunk,
        Category::Freedom,
        Category::Empathy,
        Category::Heroes,
        Category::History,
        Category::Life,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Cypherpunk => "cypherpunk",
            Category::Freedom => "freedom",
            Category::Empathy => "empathy",
            Category::Heroes => "heroes",
            Category::History => "history",
            Category::Life => "life",
        }
    }

    pub fn words(&self) -> &'static [&'static str] {
        match self {
            Category::Cypherpunk => &[
                "Satoshi",
                "Privacy",
                "Cryptography",
                "Sovereign",
                "Trustless",
                "Decentralized",
                "Code",
                "Cipher",
            ],
            Category::Freedom => &[
                "Liberty",
                "Autonomy",
                "Choice",
                "Independent",
                "Unbound",
                "Revolution",
                "Rights",
                "Free",
            ],
            Category::Empathy => &[
                "Compassion",
                "Kindness",
                "Together",
                "Understanding",
                "Connection",
                "Humanity",
                "Love",
                "Care",
            ],
            Category::Heroes => &[
                "Ada", "Turing", "Swartz", "Finney", "Nakamoto", "Lovelace", "Hero", "Pioneer",
            ],
            Category::History => &[
                "Remember", "Forever", "Legacy", "Witness", "Archive", "Monument", "Time", "Echo",
            ],
            Category::Life => &[
                "Hope",
                "Dreams",
                "Wonder",
                "Joy",
                "Resilience",
                "Spirit",
                "Breathe",
                "Alive",
            ],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| format!("unknown category '{}'", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Excited,
    Whispered,
    Powerful,
    Joyful,
    Defiant,
    Reverent,
}

impl Emotion {
    pub const ALL: [Emotion; 6] = [
        Emotion::Excited,
        Emotion::Whispered,
        Emotion::Powerful,
        Emotion::Joyful,
        Emotion::Defiant,
        Emotion::Reverent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Excited => "excited",
            Emotion::Whispered => "whispered",
            Emotion::Powerful => "powerful",
            Emotion::Joyful => "joyful",
            Emotion::Defiant => "defiant",
            Emotion::Reverent => "reverent",
        }
    }

    /// Delivery hint shown next to the word
    pub fn description(&self) -> &'static str {
        match self {
            Emotion::Excited => "like you just won the lottery",
            Emotion::Whispered => "like telling a secret",
            Emotion::Powerful => "like commanding an army",
            Emotion::Joyful => "like reuniting with a loved one",
            Emotion::Defiant => "like standing up to injustice",
            Emotion::Reverent => "like speaking something sacred",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Emotion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Emotion::ALL
            .into_iter()
            .find(|e| e.as_str() == wanted)
            .ok_or_else(|| format!("unknown emotion '{}'", s))
    }
}

/// The assignment a recording is checked against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    pub category: Category,
    pub word: String,
    pub emotion: Emotion,
}

impl Prompt {
    /// Draw a word from `category` and an emotion
    pub fn assign<R: Rng + ?Sized>(category: Category, rng: &mut R) -> Self {
        let word = category
            .words()
            .choose(rng)
            .copied()
            .unwrap_or_default()
            .to_string();
        let emotion = Emotion::ALL
            .choose(rng)
            .copied()
            .unwrap_or(Emotion::Excited);
        Self {
            category,
            word,
            emotion,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_every_category_has_eight_words() {
        for category in Category::ALL {
            assert_eq!(category.words().len(), 8, "{}", category);
        }
    }

    #[test]
    fn test_parse_roundtrip() {
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>(), Ok(category));
        }
        for emotion in Emotion::ALL {
            assert_eq!(emotion.as_str().parse::<Emotion>(), Ok(emotion));
        }
        assert_eq!("  Heroes ".parse::<Category>(), Ok(Category::Heroes));
        assert!("music".parse::<Category>().is_err());
    }

    #[test]
    fn test_assign_is_seeded_and_in_catalog() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        for category in Category::ALL {
            let prompt = Prompt::assign(category, &mut a);
            assert_eq!(prompt, Prompt::assign(category, &mut b));
            assert!(category.words().contains(&prompt.word.as_str()));
        }
    }

    #[test]
    fn test_serde_lowercase() {
        let prompt = Prompt {
            category: Category::Cypherpunk,
            word: "Satoshi".to_string(),
            emotion: Emotion::Whispered,
        };
        let json = serde_json::to_value(&prompt).unwrap();
        assert_eq!(json["category"], "cypherpunk");
        assert_eq!(json["emotion"], "whispered");
    }
}
