//! Speech classification.
//!
//! Every chat utterance arrives tagged with how it was spoken. Only plain
//! [`SpeakClass::Say`] utterances are candidates for talkaction dispatch;
//! every other class passes through the engine untouched.

/// How an utterance was spoken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeakClass {
    /// Ordinary speech, audible to nearby actors.
    Say,
    /// Quiet speech with reduced range.
    Whisper,
    /// Shouted speech with extended range.
    Yell,
    /// A message on a public chat channel.
    Channel,
    /// A private message to a single actor.
    Private,
    /// A server-wide broadcast.
    Broadcast,
}

impl SpeakClass {
    /// Whether this class is eligible for talkaction matching.
    pub fn is_say(self) -> bool {
        self == SpeakClass::Say
    }
}
