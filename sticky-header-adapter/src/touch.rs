use sticky_header::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Cancel,
}

/// A pointer event in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub x: f32,
    pub y: f32,
}

impl PointerEvent {
    pub fn new(phase: PointerPhase, x: f32, y: f32) -> Self {
        Self { phase, x, y }
    }

    pub fn down(x: f32, y: f32) -> Self {
        Self::new(PointerPhase::Down, x, y)
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerPhase::Move, x, y)
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self::new(PointerPhase::Up, x, y)
    }
}

/// What the host should do with a pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dispatch {
    /// The event landed on the pinned header; the list must not see it.
    Swallowed,
    /// Normal list handling.
    Forwarded,
}

/// Keeps taps on the pinned header from leaking through to the list underneath.
///
/// The exclusion region is consulted on pointer-down only; the decision then holds for the whole
/// gesture (until up/cancel), so a drag that starts on the header never scrolls the list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TouchGate {
    swallowing: bool,
}

impl TouchGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the current gesture is being swallowed.
    pub fn is_swallowing(&self) -> bool {
        self.swallowing
    }

    pub fn dispatch(&mut self, exclusion: Rect, event: PointerEvent) -> Dispatch {
        if event.phase == PointerPhase::Down {
            self.swallowing = exclusion.contains(to_px(event.x), to_px(event.y));
        }
        let dispatch = if self.swallowing {
            Dispatch::Swallowed
        } else {
            Dispatch::Forwarded
        };
        if matches!(event.phase, PointerPhase::Up | PointerPhase::Cancel) {
            self.swallowing = false;
        }
        dispatch
    }
}

/// Rounds a pointer coordinate to the pixel grid (half up, then truncate).
fn to_px(v: f32) -> i32 {
    (v + 0.5) as i32
}
