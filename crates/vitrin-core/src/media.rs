//! Visibility-driven playback gating for the page videos.

/// Visibility rule for playback gating: the element only counts as visible
/// while it intersects the viewport with strictly more than `threshold` of
/// it in view. Sitting exactly on the threshold is not enough. Section
/// reveals deliberately do not use this rule; any intersection at all
/// reveals them.
pub fn visible_above(intersecting: bool, ratio: f64, threshold: f64) -> bool {
    intersecting && ratio > threshold
}

/// Playback discipline for a video watched by a visibility observer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackPolicy {
    /// Start the first time the element becomes visible enough and never
    /// restart afterwards. Pausing on exit still happens once playback has
    /// actually begun. Used by the hero video, whose poster overlay is torn
    /// down on the first successful start.
    PlayOnce,
    /// Play on every entry, pause on every exit.
    WhileVisible,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaCommand {
    Play,
    Pause,
}

/// Decides what a video should do when its visibility crosses the threshold.
/// The gate never touches media elements itself; the owner executes the
/// returned command and reports back with `mark_played` when a start
/// actually succeeded.
#[derive(Debug)]
pub struct MediaGate {
    policy: PlaybackPolicy,
    has_played: bool,
}

impl MediaGate {
    pub fn new(policy: PlaybackPolicy) -> Self {
        Self { policy, has_played: false }
    }

    /// React to the element crossing the visibility threshold in either
    /// direction. Until a start has been confirmed, a `PlayOnce` gate keeps
    /// asking to play on every entry, so a rejected autoplay attempt gets
    /// retried the next time the video scrolls in.
    pub fn on_visibility(&mut self, visible: bool) -> Option<MediaCommand> {
        match (self.policy, visible) {
            (PlaybackPolicy::PlayOnce, true) if !self.has_played => Some(MediaCommand::Play),
            (PlaybackPolicy::PlayOnce, true) => None,
            (PlaybackPolicy::PlayOnce, false) if self.has_played => Some(MediaCommand::Pause),
            (PlaybackPolicy::PlayOnce, false) => None,
            (PlaybackPolicy::WhileVisible, true) => Some(MediaCommand::Play),
            (PlaybackPolicy::WhileVisible, false) => Some(MediaCommand::Pause),
        }
    }

    /// Record that playback genuinely started.
    pub fn mark_played(&mut self) {
        self.has_played = true;
    }

    pub fn has_played(&self) -> bool {
        self.has_played
    }
}
