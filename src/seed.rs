//! Initial word list generation.
//!
//! At startup the word list is populated from a [`Seed`]. By default this is a batch of
//! [`DEFAULT_SEED_COUNT`] words drawn at random from an embedded vocabulary. A fixed list of
//! words can be configured instead, e.g.:
//!
//! ```json
//! { "seed": { "fixed": [ "a", "b", "c" ] } }
//! ```
//!
//! or a reproducible random batch:
//!
//! ```json
//! { "seed": { "random": { "count": 10, "rng_seed": 42 } } }
//! ```

use crate::error::Error;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

/// Number of words generated when no seed is configured.
pub const DEFAULT_SEED_COUNT: usize = 100;

const VOCABULARY: &[&str] = &[
    "abacus", "acorn", "adage", "aerie", "alcove", "almond", "amber", "anchor", "anvil",
    "apricot", "arbor", "arrow", "aspen", "atlas", "avenue", "badger", "bagel", "ballad",
    "bamboo", "banjo", "barley", "basalt", "beacon", "bellows", "birch", "biscuit", "bishop",
    "blossom", "bramble", "breeze", "bridle", "brook", "bucket", "buffalo", "cabin", "cactus",
    "candle", "canyon", "caravan", "carrot", "castle", "cedar", "cello", "chalk", "chimney",
    "cinder", "citrus", "clover", "cobalt", "comet", "copper", "coral", "cottage", "cricket",
    "crimson", "crystal", "dagger", "daisy", "delta", "desert", "dolphin", "dragon", "drizzle",
    "dune", "eagle", "ember", "emerald", "engine", "falcon", "feather", "fennel", "ferry",
    "fiddle", "fjord", "flannel", "forest", "fossil", "fountain", "galaxy", "garnet", "geyser",
    "ginger", "glacier", "goblet", "granite", "gravel", "harbor", "harvest", "hazel", "hedge",
    "heron", "hickory", "horizon", "iceberg", "igloo", "indigo", "island", "ivory", "jasmine",
    "jigsaw", "juniper", "kayak", "kettle", "kiwi", "lagoon", "lantern", "lattice", "lemon",
    "lilac", "linen", "lobster", "lotus", "magnet", "mango", "maple", "marble", "meadow",
    "meteor", "mirror", "mosaic", "mustard", "nectar", "needle", "nutmeg", "oasis", "obsidian",
    "octave", "olive", "onyx", "orchard", "otter", "paddle", "pebble", "pepper", "pillow",
    "pine", "pistachio", "planet", "plume", "pocket", "prairie", "pumpkin", "quartz", "quill",
    "quiver", "rabbit", "radish", "raven", "reef", "ribbon", "river", "saddle", "saffron",
    "sapphire", "satchel", "scarlet", "sequoia", "shadow", "shovel", "silver", "sparrow",
    "spindle", "spruce", "summit", "tablet", "tango", "thicket", "thistle", "thunder", "timber",
    "topaz", "tulip", "tundra", "umbrella", "valley", "velvet", "violet", "voyage", "walnut",
    "willow", "window", "winter", "yarrow", "zephyr", "zinnia",
];

/// Where the initial word list comes from.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Seed {
    /// `count` words drawn at random, with replacement, from the embedded vocabulary. An
    /// `rng_seed` makes the draw reproducible.
    Random {
        count: usize,
        #[serde(default)]
        rng_seed: Option<u64>,
    },
    /// Exactly these words, in order.
    Fixed(Vec<String>),
}

impl Default for Seed {
    fn default() -> Self {
        Seed::Random {
            count: DEFAULT_SEED_COUNT,
            rng_seed: None,
        }
    }
}

impl Seed {
    /// Check the seed will produce a usable word list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptySeed`] if the seed would produce no words, or a fixed seed contains
    /// an empty word.
    pub fn validate(&self) -> Result<(), Error> {
        match self {
            Seed::Random { count: 0, .. } => Err(Error::EmptySeed),
            Seed::Fixed(words) if words.is_empty() || words.iter().any(String::is_empty) => {
                Err(Error::EmptySeed)
            }
            _ => Ok(()),
        }
    }

    /// Produce the initial word list.
    #[must_use]
    pub fn words(&self) -> Vec<String> {
        match self {
            Seed::Random {
                count,
                rng_seed: Some(rng_seed),
            } => RandomWords::new(StdRng::seed_from_u64(*rng_seed)).take(*count),
            Seed::Random {
                count,
                rng_seed: None,
            } => RandomWords::new(StdRng::from_entropy()).take(*count),
            Seed::Fixed(words) => words.clone(),
        }
    }
}

/// Draws words from the embedded vocabulary.
pub struct RandomWords<R> {
    rng: R,
}

impl<R: Rng> RandomWords<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draw a single word.
    pub fn next_word(&mut self) -> String {
        // NB: unwrap is safe: the vocabulary is a non-empty constant.
        (*VOCABULARY.choose(&mut self.rng).unwrap()).to_string()
    }

    /// Draw `count` words.
    pub fn take(mut self, count: usize) -> Vec<String> {
        std::iter::repeat_with(|| self.next_word())
            .take(count)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{Seed, DEFAULT_SEED_COUNT, VOCABULARY};

    #[test]
    fn default_is_a_hundred_random_words() {
        let words = Seed::default().words();
        assert_eq!(words.len(), DEFAULT_SEED_COUNT);
        assert!(words.iter().all(|w| VOCABULARY.contains(&w.as_str())));
    }

    #[test]
    fn rng_seed_is_reproducible() {
        let seed = Seed::Random {
            count: 20,
            rng_seed: Some(1234),
        };
        assert_eq!(seed.words(), seed.words());
    }

    #[test]
    fn fixed_words_are_kept_in_order() {
        let seed = Seed::Fixed(vec!["a".into(), "b".into(), "c".into()]);
        assert!(seed.validate().is_ok());
        assert_eq!(seed.words(), vec!["a", "b", "c"]);
    }

    #[test]
    fn empty_seeds_are_rejected() {
        let zero = Seed::Random {
            count: 0,
            rng_seed: None,
        };
        assert!(zero.validate().is_err());
        assert!(Seed::Fixed(vec![]).validate().is_err());
        assert!(Seed::Fixed(vec!["a".into(), String::new()]).validate().is_err());
    }

    #[test]
    fn seed_from_json() {
        let seed: Seed = serde_json::from_str(r#"{"fixed":["x","y"]}"#).unwrap();
        assert_eq!(seed, Seed::Fixed(vec!["x".into(), "y".into()]));

        let seed: Seed = serde_json::from_str(r#"{"random":{"count":7}}"#).unwrap();
        assert_eq!(
            seed,
            Seed::Random {
                count: 7,
                rng_seed: None
            }
        );
    }
}
