//! Handler bridge: normalizes native and scripted invocation.

use emberhall_script::ActorHandle;
use emberhall_world::PlayerId;

use crate::dispatch::TalkContext;
use crate::entry::{Handler, HandlerReport, Propagation};

/// Invoke an entry's handler with the matched token and parameter.
///
/// Native handlers run directly. Scripted handlers go through the script
/// engine, which reserves a reentrancy slot around the call; exhausted call
/// depth is reported once and yields a consumed, unsuccessful report with
/// no handler side effects.
pub fn invoke(
    handler: &Handler,
    ctx: &mut TalkContext<'_>,
    speaker: PlayerId,
    words: &str,
    param: &str,
) -> HandlerReport {
    match handler {
        Handler::Native(f) => f(ctx, speaker, words, param),
        Handler::Scripted(hook) => {
            match ctx.scripts.call(*hook, ActorHandle(speaker.0), words, param) {
                Ok(value) => {
                    // Truthy means "let the utterance propagate as speech".
                    let truthy = value.is_truthy();
                    HandlerReport {
                        propagation: if truthy {
                            Propagation::Continue
                        } else {
                            Propagation::Break
                        },
                        succeeded: truthy,
                    }
                },
                Err(e) => {
                    log::error!("talkaction '{words}' script call failed: {e}");
                    HandlerReport::consumed(false)
                },
            }
        },
    }
}
