//! Scrollbar synchronization.
//!
//! A scrollbar has two views of the same scroll position: the thumb geometry
//! and the enabled state of its up/down buttons. External scroll changes can
//! arrive from anywhere (keys, wheel, programmatic scroll-into-view), so both
//! views are recomputed through a single [`ScrollbarState::update`] call.
//! Updating one without the other leaves a visible frame where the buttons
//! are stale relative to the thumb.

/// Geometry of a scrollable viewport at one instant, in content units
/// (rows for the vertical lists in this crate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollBounds {
    /// Visible extent of the viewport.
    pub client_size: u32,
    /// Total extent of the content.
    pub content_size: u32,
    /// Current scroll offset from the start of the content.
    pub position: u32,
}

impl ScrollBounds {
    pub fn new(client_size: u32, content_size: u32, position: u32) -> Self {
        Self {
            client_size,
            content_size,
            position,
        }
    }

    /// Largest valid scroll offset.
    pub fn max_position(&self) -> u32 {
        self.content_size.saturating_sub(self.client_size)
    }

    /// Whether the content overflows the viewport at all.
    pub fn scrollable(&self) -> bool {
        self.content_size > self.client_size
    }
}

/// Enabled state of the scroll buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonState {
    pub up_enabled: bool,
    pub down_enabled: bool,
}

/// Thumb geometry as fractions of the track, resolution-independent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ThumbMetrics {
    /// Thumb length relative to the track.
    pub size_ratio: f32,
    /// Thumb start offset relative to the track.
    pub offset_ratio: f32,
}

/// Imperative handle keeping thumb geometry and button enablement in step.
///
/// `update` is the only mutator; there is deliberately no way to refresh the
/// buttons or the thumb alone.
#[derive(Debug, Default)]
pub struct ScrollbarState {
    buttons: ButtonState,
    thumb: ThumbMetrics,
}

impl ScrollbarState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute button enablement and thumb geometry from the given bounds,
    /// atomically.
    pub fn update(&mut self, bounds: &ScrollBounds) {
        self.buttons = Self::compute_buttons(bounds);
        self.thumb = Self::compute_thumb(bounds);
    }

    pub fn buttons(&self) -> ButtonState {
        self.buttons
    }

    pub fn thumb(&self) -> ThumbMetrics {
        self.thumb
    }

    fn compute_buttons(bounds: &ScrollBounds) -> ButtonState {
        ButtonState {
            up_enabled: bounds.scrollable() && bounds.position > 0,
            down_enabled: bounds.scrollable() && bounds.position < bounds.max_position(),
        }
    }

    fn compute_thumb(bounds: &ScrollBounds) -> ThumbMetrics {
        if !bounds.scrollable() {
            return ThumbMetrics {
                size_ratio: 1.0,
                offset_ratio: 0.0,
            };
        }
        let size_ratio = bounds.client_size as f32 / bounds.content_size as f32;
        let max = bounds.max_position();
        let offset_ratio = if max == 0 {
            0.0
        } else {
            (bounds.position.min(max) as f32 / max as f32) * (1.0 - size_ratio)
        };
        ThumbMetrics {
            size_ratio,
            offset_ratio,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_disabled_at_bounds() {
        let mut state = ScrollbarState::new();

        state.update(&ScrollBounds::new(5, 20, 0));
        assert_eq!(
            state.buttons(),
            ButtonState { up_enabled: false, down_enabled: true }
        );

        state.update(&ScrollBounds::new(5, 20, 15));
        assert_eq!(
            state.buttons(),
            ButtonState { up_enabled: true, down_enabled: false }
        );

        state.update(&ScrollBounds::new(5, 20, 7));
        assert_eq!(
            state.buttons(),
            ButtonState { up_enabled: true, down_enabled: true }
        );
    }

    #[test]
    fn content_that_fits_disables_everything() {
        let mut state = ScrollbarState::new();
        state.update(&ScrollBounds::new(10, 4, 0));

        assert_eq!(state.buttons(), ButtonState::default());
        assert_eq!(state.thumb().size_ratio, 1.0);
        assert_eq!(state.thumb().offset_ratio, 0.0);
    }

    #[test]
    fn thumb_and_buttons_always_agree() {
        let mut state = ScrollbarState::new();
        let bounds = ScrollBounds::new(5, 50, 45);
        state.update(&bounds);

        // Thumb pinned to the end exactly when the down button disables.
        assert!(!state.buttons().down_enabled);
        let thumb = state.thumb();
        assert!((thumb.offset_ratio + thumb.size_ratio - 1.0).abs() < 1e-6);
    }

    #[test]
    fn thumb_scales_with_viewport_share() {
        let mut state = ScrollbarState::new();
        state.update(&ScrollBounds::new(10, 40, 0));
        assert!((state.thumb().size_ratio - 0.25).abs() < 1e-6);
        assert_eq!(state.thumb().offset_ratio, 0.0);
    }

    #[test]
    fn position_beyond_max_is_clamped_for_thumb() {
        let mut state = ScrollbarState::new();
        state.update(&ScrollBounds::new(5, 20, 99));
        let thumb = state.thumb();
        assert!((thumb.offset_ratio + thumb.size_ratio - 1.0).abs() < 1e-6);
    }
}
