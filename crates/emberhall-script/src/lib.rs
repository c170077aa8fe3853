//! Script engine collaborator boundary for emberhall.
//!
//! The talkaction engine only needs one thing from the embedded script
//! runtime: invoke a named `onSay` callback with `(actor, words, param)` and
//! coerce whatever comes back to a boolean. This crate models exactly that
//! contract: a registry of hooks, a truthy/falsy [`ScriptValue`], and the
//! bounded reentrancy guard that keeps a scripted command from recursing
//! through the dispatch path without limit.

use std::cell::Cell;

use emberhall_types::{EmberError, Result};

/// Opaque handle binding a speaker into a script call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActorHandle(pub u32);

/// A value returned by a script callback.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptValue {
    /// No return value. Coerces to false.
    Nil,
    Bool(bool),
    Number(f64),
    Str(String),
}

impl ScriptValue {
    /// Truthy/falsy coercion: nil and false are falsy, zero is falsy,
    /// everything else (including empty strings) is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            ScriptValue::Nil => false,
            ScriptValue::Bool(b) => *b,
            ScriptValue::Number(n) => *n != 0.0,
            ScriptValue::Str(_) => true,
        }
    }
}

/// Handle to a registered hook, resolved once at table-load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HookId(usize);

type HookFn = Box<dyn Fn(ActorHandle, &str, &str) -> ScriptValue>;

struct Hook {
    event: String,
    callback: HookFn,
}

/// The embedded script runtime, as seen by the talkaction engine.
///
/// Call depth is a bounded counter mutated around each invocation; the
/// engine is single-threaded, so a `Cell` suffices.
pub struct ScriptEngine {
    hooks: Vec<Hook>,
    depth: Cell<usize>,
    max_depth: usize,
}

impl ScriptEngine {
    /// Default call-stack depth before `reserve` starts failing.
    pub const DEFAULT_MAX_CALL_DEPTH: usize = 16;

    pub fn new() -> Self {
        Self::with_max_depth(Self::DEFAULT_MAX_CALL_DEPTH)
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            hooks: Vec::new(),
            depth: Cell::new(0),
            max_depth,
        }
    }

    /// Register a callback under an event name (e.g. `"onSay"`).
    pub fn register_hook(
        &mut self,
        event: &str,
        callback: impl Fn(ActorHandle, &str, &str) -> ScriptValue + 'static,
    ) -> HookId {
        self.hooks.push(Hook {
            event: event.to_string(),
            callback: Box::new(callback),
        });
        HookId(self.hooks.len() - 1)
    }

    /// The event name a hook was registered under.
    pub fn event_name(&self, hook: HookId) -> Option<&str> {
        self.hooks.get(hook.0).map(|h| h.event.as_str())
    }

    /// Current nested call depth.
    pub fn depth(&self) -> usize {
        self.depth.get()
    }

    /// Acquire a reentrancy slot, or `None` when call depth is exhausted.
    /// The slot is released when dropped, on every exit path.
    pub fn reserve(&self) -> Option<CallSlot<'_>> {
        if self.depth.get() >= self.max_depth {
            return None;
        }
        self.depth.set(self.depth.get() + 1);
        Some(CallSlot { engine: self })
    }

    /// Invoke a hook with the speaker handle and the two string arguments.
    ///
    /// Fails fast with [`EmberError::Script`] when no reentrancy slot is
    /// available or the hook does not exist; the callback is not invoked in
    /// either case.
    pub fn call(
        &self,
        hook: HookId,
        actor: ActorHandle,
        words: &str,
        param: &str,
    ) -> Result<ScriptValue> {
        let _slot = self
            .reserve()
            .ok_or_else(|| EmberError::Script("call stack overflow".into()))?;
        let hook = self
            .hooks
            .get(hook.0)
            .ok_or_else(|| EmberError::Script(format!("unknown hook id {}", hook.0)))?;
        Ok((hook.callback)(actor, words, param))
    }
}

impl Default for ScriptEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// A held reentrancy slot. Dropping it releases the slot unconditionally.
pub struct CallSlot<'a> {
    engine: &'a ScriptEngine,
}

impl Drop for CallSlot<'_> {
    fn drop(&mut self) {
        self.engine.depth.set(self.engine.depth.get() - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn truthiness() {
        assert!(!ScriptValue::Nil.is_truthy());
        assert!(!ScriptValue::Bool(false).is_truthy());
        assert!(ScriptValue::Bool(true).is_truthy());
        assert!(!ScriptValue::Number(0.0).is_truthy());
        assert!(ScriptValue::Number(1.0).is_truthy());
        assert!(ScriptValue::Number(-2.5).is_truthy());
        assert!(ScriptValue::Str(String::new()).is_truthy());
        assert!(ScriptValue::Str("x".into()).is_truthy());
    }

    #[test]
    fn call_invokes_with_arguments() {
        let mut engine = ScriptEngine::new();
        let seen = Rc::new(RefCell::new(None));
        let seen2 = Rc::clone(&seen);
        let hook = engine.register_hook("onSay", move |actor, words, param| {
            *seen2.borrow_mut() = Some((actor, words.to_string(), param.to_string()));
            ScriptValue::Bool(false)
        });
        let v = engine
            .call(hook, ActorHandle(9), "ban", "victim")
            .unwrap();
        assert!(!v.is_truthy());
        assert_eq!(
            *seen.borrow(),
            Some((ActorHandle(9), "ban".to_string(), "victim".to_string()))
        );
    }

    #[test]
    fn slot_released_after_call() {
        let mut engine = ScriptEngine::new();
        let hook = engine.register_hook("onSay", |_, _, _| ScriptValue::Nil);
        assert_eq!(engine.depth(), 0);
        engine.call(hook, ActorHandle(1), "x", "").unwrap();
        assert_eq!(engine.depth(), 0);
    }

    #[test]
    fn reserve_bounds_depth() {
        let engine = ScriptEngine::with_max_depth(2);
        let a = engine.reserve().unwrap();
        let b = engine.reserve().unwrap();
        assert!(engine.reserve().is_none());
        drop(b);
        assert!(engine.reserve().is_some());
        drop(a);
        assert_eq!(engine.depth(), 0);
    }

    #[test]
    fn exhausted_call_fails_without_invoking() {
        let mut engine = ScriptEngine::with_max_depth(1);
        let ran = Rc::new(Cell::new(false));
        let ran2 = Rc::clone(&ran);
        let hook = engine.register_hook("onSay", move |_, _, _| {
            ran2.set(true);
            ScriptValue::Bool(true)
        });
        let _held = engine.reserve().unwrap();
        let err = engine.call(hook, ActorHandle(1), "x", "").unwrap_err();
        assert!(matches!(err, EmberError::Script(_)));
        assert!(!ran.get(), "callback must not run when depth is exhausted");
    }

    #[test]
    fn unknown_hook_is_script_error_and_releases_slot() {
        let engine = ScriptEngine::new();
        let err = engine
            .call(HookId(42), ActorHandle(1), "x", "")
            .unwrap_err();
        assert!(matches!(err, EmberError::Script(_)));
        assert_eq!(engine.depth(), 0);
    }

    #[test]
    fn event_name_round_trip() {
        let mut engine = ScriptEngine::new();
        let hook = engine.register_hook("onSay", |_, _, _| ScriptValue::Nil);
        assert_eq!(engine.event_name(hook), Some("onSay"));
        assert_eq!(engine.event_name(HookId(7)), None);
    }
}
