use crate::cards::Card;
use crate::errors::StrategyError;

/// Decision maker plugged into a [`crate::player::Player`].
///
/// The engine validates every answer: discards must be exactly `count`
/// distinct cards from `hand`, and a played card must come from `legal`.
/// Violations are reported as errors rather than corrected.
///
/// # Example Implementation
///
/// ```rust
/// use cribbage_engine::cards::Card;
/// use cribbage_engine::errors::StrategyError;
/// use cribbage_engine::strategy::Strategy;
///
/// struct LowCard;
///
/// impl Strategy for LowCard {
///     fn name(&self) -> &str {
///         "low-card"
///     }
///
///     fn discard(
///         &mut self,
///         hand: &[Card],
///         _seen: &[Card],
///         count: usize,
///     ) -> Result<Vec<Card>, StrategyError> {
///         let mut sorted = hand.to_vec();
///         sorted.sort_by_key(|c| std::cmp::Reverse(c.order()));
///         Ok(sorted.into_iter().take(count).collect())
///     }
///
///     fn play(
///         &mut self,
///         legal: &[Card],
///         _seen: &[Card],
///         _stack: &[Card],
///     ) -> Result<Option<Card>, StrategyError> {
///         Ok(legal.iter().copied().min_by_key(|c| c.value()))
///     }
/// }
/// ```
pub trait Strategy: Send {
    /// Identifier used in logs and match records.
    fn name(&self) -> &str;

    /// Choose `count` cards from `hand` to put in the crib.
    fn discard(
        &mut self,
        hand: &[Card],
        seen: &[Card],
        count: usize,
    ) -> Result<Vec<Card>, StrategyError>;

    /// Choose a card from `legal` to play on `stack`, or `None` to pass.
    /// Only called when `legal` is non-empty.
    fn play(
        &mut self,
        legal: &[Card],
        seen: &[Card],
        stack: &[Card],
    ) -> Result<Option<Card>, StrategyError>;
}

/// Discards the first cards held and always plays the first legal card.
#[derive(Debug, Clone, Default)]
pub struct Sequential;

impl Sequential {
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for Sequential {
    fn name(&self) -> &str {
        "sequential"
    }

    fn discard(
        &mut self,
        hand: &[Card],
        _seen: &[Card],
        count: usize,
    ) -> Result<Vec<Card>, StrategyError> {
        Ok(hand.iter().take(count).copied().collect())
    }

    fn play(
        &mut self,
        legal: &[Card],
        _seen: &[Card],
        _stack: &[Card],
    ) -> Result<Option<Card>, StrategyError> {
        Ok(legal.first().copied())
    }
}
