//! Room-change detection and screen fade
//!
//! Crossing into a different room runs a two-phase fade: the screen
//! darkens to full black, the tracked room index snaps to the new
//! room, and the screen clears again. A started fade always completes
//! both halves, even if the player walks back mid-transition.

/// Phase of the room-change fade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FadePhase {
    #[default]
    Stable,
    FadingOut,
    FadingIn,
}

/// Fade state machine driven once per frame
#[derive(Debug, Clone)]
pub struct RoomFade {
    pub phase: FadePhase,
    /// Overlay opacity in [0, 1]
    pub fade: f32,
    /// Room the player is considered to be in
    pub current_room: Option<usize>,
    /// Destination latched when the fade starts
    pending_room: Option<usize>,
    /// Fade progress per second, each direction
    pub speed: f32,
}

impl RoomFade {
    pub fn new(start_room: Option<usize>, speed: f32) -> Self {
        Self {
            phase: FadePhase::Stable,
            fade: 0.0,
            current_room: start_room,
            pending_room: None,
            speed,
        }
    }

    pub fn in_transition(&self) -> bool {
        self.phase != FadePhase::Stable
    }

    /// Advance the fade; `derived_room` is the room under the player
    /// this frame (None in corridors, which never trigger a fade)
    pub fn update(&mut self, dt: f32, derived_room: Option<usize>) {
        match self.phase {
            FadePhase::Stable => {
                if derived_room.is_some() && derived_room != self.current_room {
                    self.pending_room = derived_room;
                    self.phase = FadePhase::FadingOut;
                }
            }
            FadePhase::FadingOut => {
                self.fade += self.speed * dt;
                if self.fade >= 1.0 {
                    self.fade = 1.0;
                    self.current_room = self.pending_room.take();
                    self.phase = FadePhase::FadingIn;
                }
            }
            FadePhase::FadingIn => {
                self.fade -= self.speed * dt;
                if self.fade <= 0.0 {
                    self.fade = 0.0;
                    self.phase = FadePhase::Stable;
                }
            }
        }
    }
}
