//! Declarative side effects emitted by reducers.
//!
//! Reducers stay pure: instead of touching persisted storage they return
//! effects describing the work, and the app store applies them after the
//! in-memory transition has settled, within the same dispatch turn.

use crate::storage::TokenStore;

/// Result of folding one action into a state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResult<E> {
    /// Whether the state was modified by this action.
    pub changed: bool,
    /// Effects to run after the reducer pass settles.
    pub effects: Vec<E>,
}

impl<E> Default for DispatchResult<E> {
    fn default() -> Self {
        Self::unchanged()
    }
}

impl<E> DispatchResult<E> {
    /// No state change, no effects.
    #[inline]
    pub fn unchanged() -> Self {
        Self {
            changed: false,
            effects: vec![],
        }
    }

    /// State changed, no effects.
    #[inline]
    pub fn changed() -> Self {
        Self {
            changed: true,
            effects: vec![],
        }
    }

    /// One effect without a state change.
    #[inline]
    pub fn effect(effect: E) -> Self {
        Self {
            changed: false,
            effects: vec![effect],
        }
    }

    /// State changed with one effect.
    #[inline]
    pub fn changed_with(effect: E) -> Self {
        Self {
            changed: true,
            effects: vec![effect],
        }
    }

    /// Combine with the result of another reducer over the same action.
    #[inline]
    pub fn merge(mut self, other: Self) -> Self {
        self.changed |= other.changed;
        self.effects.extend(other.effects);
        self
    }

    /// Returns true if there are effects to run.
    #[inline]
    pub fn has_effects(&self) -> bool {
        !self.effects.is_empty()
    }
}

/// Persistence effects declared by the session reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Write the session token to persisted storage.
    PersistToken(String),
    /// Remove the persisted session token.
    ClearToken,
}

impl Effect {
    /// Apply this effect to the persisted token store.
    ///
    /// Fire-and-forget: a persistence failure is logged and swallowed. The
    /// in-memory transition has already settled and is never unwound.
    pub fn apply(&self, tokens: &mut dyn TokenStore) {
        let outcome = match self {
            Effect::PersistToken(token) => tokens.store(token),
            Effect::ClearToken => tokens.clear(),
        };
        if let Err(err) = outcome {
            tracing::warn!(error = %err, "session token persistence failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryTokenStore;

    #[test]
    fn merge_combines_change_flags_and_effects() {
        let left: DispatchResult<Effect> = DispatchResult::unchanged();
        let right = DispatchResult::changed_with(Effect::ClearToken);

        let merged = left.merge(right);
        assert!(merged.changed);
        assert_eq!(merged.effects, vec![Effect::ClearToken]);
    }

    #[test]
    fn merge_preserves_effect_order() {
        let merged = DispatchResult::effect(Effect::PersistToken("t1".into()))
            .merge(DispatchResult::effect(Effect::ClearToken));
        assert_eq!(
            merged.effects,
            vec![Effect::PersistToken("t1".into()), Effect::ClearToken]
        );
        assert!(merged.has_effects());
    }

    #[test]
    fn persist_and_clear_round_trip_through_store() {
        let mut tokens = MemoryTokenStore::new();

        Effect::PersistToken("t1".into()).apply(&mut tokens);
        assert_eq!(tokens.load().unwrap().as_deref(), Some("t1"));

        Effect::ClearToken.apply(&mut tokens);
        assert_eq!(tokens.load().unwrap(), None);
    }

    #[test]
    fn clearing_an_absent_token_is_fine() {
        let mut tokens = MemoryTokenStore::new();
        Effect::ClearToken.apply(&mut tokens);
        assert_eq!(tokens.load().unwrap(), None);
    }
}
