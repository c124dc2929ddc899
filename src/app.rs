//! The process-scoped application store.
//!
//! `AppStore` is the state-and-dispatch capability handed down to UI
//! layers: they read the current snapshot and dispatch actions, never
//! mutating state directly. It also owns the persisted token store and
//! runs the session store bridge after every reducer pass.

use crate::action::AppAction;
use crate::effect::Effect;
use crate::reducer::reducer;
use crate::state::AppState;
use crate::storage::TokenStore;
use crate::store::{LoggingMiddleware, Middleware, Store};

/// Application store: composed state tree plus the persisted token store.
///
/// Created once at process start and alive for the process lifetime.
pub struct AppStore<P: TokenStore, M: Middleware<AppAction> = LoggingMiddleware> {
    store: Store<AppState, AppAction, Effect>,
    tokens: P,
    middleware: M,
}

impl<P: TokenStore> AppStore<P> {
    /// Create a store over the given token store, logging dispatches.
    pub fn new(tokens: P) -> Self {
        Self::with_middleware(tokens, LoggingMiddleware::new())
    }
}

impl<P: TokenStore, M: Middleware<AppAction>> AppStore<P, M> {
    pub fn with_middleware(tokens: P, middleware: M) -> Self {
        Self {
            store: Store::new(AppState::default(), reducer),
            tokens,
            middleware,
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    /// The persisted token store, as read by the route guard.
    pub fn tokens(&self) -> &P {
        &self.tokens
    }

    pub fn tokens_mut(&mut self) -> &mut P {
        &mut self.tokens
    }

    /// The middleware attached to this store.
    pub fn middleware(&self) -> &M {
        &self.middleware
    }

    /// Dispatch one action and return whether the state changed.
    ///
    /// Runs synchronously to completion: reducer pass first, then the
    /// persistence effects, all within this call. Observers therefore
    /// never see the new session without the token write having been
    /// issued.
    pub fn dispatch(&mut self, action: AppAction) -> bool {
        self.middleware.before(&action);
        let result = self.store.dispatch(action.clone());
        for effect in &result.effects {
            effect.apply(&mut self.tokens);
        }
        self.middleware.after(&action, result.changed);
        result.changed
    }
}
