//! Scoring and bounding the list of outfits.
//!
//! Outfits are not re-ordered by content. The score shown next to each one is
//! cosmetic, drawn from a [`ScoreSource`] when the outfit is surfaced, so
//! callers (and tests) decide where the randomness comes from.

use nonempty::NonEmpty;
use rand::{Rng, SeedableRng, rngs::StdRng, rngs::ThreadRng};

use crate::domain::{MatchScore, OutfitCandidate, Recommendation};

/// At most this many recommendations are returned.
pub const MAX_RECOMMENDATIONS: usize = 10;

/// Somewhere to get presentation scores from.
pub trait ScoreSource {
    /// The next score.
    fn next_score(&mut self) -> MatchScore;
}

impl<S: ScoreSource + ?Sized> ScoreSource for &mut S {
    fn next_score(&mut self) -> MatchScore {
        (**self).next_score()
    }
}

/// Scores drawn uniformly from `[MatchScore::MIN, MatchScore::MAX]`.
#[derive(Debug, Clone)]
pub struct RandomScores<R> {
    rng: R,
}

impl<R: Rng> RandomScores<R> {
    /// Draw scores from the given generator.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomScores<ThreadRng> {
    /// Draw scores from the thread-local generator.
    #[must_use]
    pub fn thread_local() -> Self {
        Self::new(rand::rng())
    }
}

impl RandomScores<StdRng> {
    /// A reproducible sequence of scores.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ScoreSource for RandomScores<R> {
    fn next_score(&mut self) -> MatchScore {
        let value = self.rng.random_range(MatchScore::MIN..=MatchScore::MAX);
        MatchScore::new(value).unwrap_or_else(|_| unreachable!("drawn from the valid range"))
    }
}

/// A fixed sequence of scores, repeated as often as needed.
#[derive(Debug, Clone)]
pub struct FixedScores {
    scores: NonEmpty<MatchScore>,
    next: usize,
}

impl FixedScores {
    /// Cycle through the given scores in order.
    #[must_use]
    pub const fn new(scores: NonEmpty<MatchScore>) -> Self {
        Self { scores, next: 0 }
    }

    /// Always the same score.
    #[must_use]
    pub fn constant(score: MatchScore) -> Self {
        Self::new(NonEmpty::new(score))
    }
}

impl ScoreSource for FixedScores {
    fn next_score(&mut self) -> MatchScore {
        let score = self.scores[self.next % self.scores.len()];
        self.next = self.next.wrapping_add(1);
        score
    }
}

/// Keep the first [`MAX_RECOMMENDATIONS`] outfits, in order, and score each.
///
/// Scores are drawn only for outfits that survive truncation, one per
/// outfit, in order.
pub fn rank<'a, S>(outfits: Vec<OutfitCandidate<'a>>, scores: &mut S) -> Vec<Recommendation<'a>>
where
    S: ScoreSource + ?Sized,
{
    outfits
        .into_iter()
        .take(MAX_RECOMMENDATIONS)
        .map(|outfit| Recommendation {
            outfit,
            match_score: scores.next_score(),
        })
        .collect()
}
