//! Audio interface
//!
//! Sound cues are fire-and-forget requests; mixing and decoding belong to
//! the host's [`AudioSink`].

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// Collectible picked up
    Collect,
    /// Player died
    Death,
    /// Background music, looped until paused
    Soundtrack,
}

impl SoundCue {
    /// Mix level of the cue before user volume is applied (0.0 - 1.0)
    pub fn base_volume(&self) -> f32 {
        match self {
            SoundCue::Collect => 0.5,
            SoundCue::Death => 0.25,
            SoundCue::Soundtrack => 0.25,
        }
    }

    /// Music plays on the looping music channel instead of as an effect
    pub fn is_music(&self) -> bool {
        matches!(self, SoundCue::Soundtrack)
    }
}

/// Control requests for the music channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MusicCommand {
    Pause,
    Resume,
}

/// Destination for sound cues. Assumed infallible.
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);
    fn music(&mut self, command: MusicCommand);
}

/// Keeps every cue and music command it is asked to play
#[derive(Debug, Default)]
pub struct CueRecorder {
    pub played: Vec<SoundCue>,
    pub music: Vec<MusicCommand>,
}

impl CueRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, cue: SoundCue) -> usize {
        self.played.iter().filter(|&&c| c == cue).count()
    }

    /// Whether the soundtrack would be audible right now
    pub fn music_playing(&self) -> bool {
        self.played.contains(&SoundCue::Soundtrack)
            && self.music.last() != Some(&MusicCommand::Pause)
    }
}

impl AudioSink for CueRecorder {
    fn play(&mut self, cue: SoundCue) {
        self.played.push(cue);
    }

    fn music(&mut self, command: MusicCommand) {
        self.music.push(command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_soundtrack_is_music() {
        assert!(SoundCue::Soundtrack.is_music());
        assert!(!SoundCue::Collect.is_music());
        assert!(!SoundCue::Death.is_music());
    }

    #[test]
    fn test_recorder_tracks_music_state() {
        let mut audio = CueRecorder::new();
        assert!(!audio.music_playing());

        audio.play(SoundCue::Soundtrack);
        assert!(audio.music_playing());
        audio.music(MusicCommand::Pause);
        assert!(!audio.music_playing());
        audio.music(MusicCommand::Resume);
        assert!(audio.music_playing());
    }
}
