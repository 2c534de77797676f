use crate::{
    core::{
        config::ZoomConfig,
        geo::Point,
        state::ScaleState,
        transform::ZoomTransform,
    },
    input::events::{EventResponse, Transition, ZoomEvent},
    traits::ZoomSurface,
    Result,
};

/// Press-to-zoom state machine bound to one image surface
///
/// Two states, one triggering event: every handled press flips between
/// [`ScaleState::Unscaled`] and [`ScaleState::Magnified`]. The magnified state
/// is anchored at the press point, expressed relative to the image's bounding
/// rectangle at the moment of the press.
pub struct ZoomToggle<S: ZoomSurface> {
    pub enabled: bool,
    surface: S,
    config: ZoomConfig,
    state: ScaleState,
    /// Last transform written to the surface; `None` until the first write
    applied: Option<ZoomTransform>,
    press_count: u64,
}

impl<S: ZoomSurface> ZoomToggle<S> {
    /// Binds the toggle to `surface`. The surface is left untouched until the
    /// first press.
    pub fn new(surface: S, config: ZoomConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            enabled: true,
            surface,
            config,
            state: ScaleState::default(),
            applied: None,
            press_count: 0,
        })
    }

    pub fn state(&self) -> ScaleState {
        self.state
    }

    /// Transform currently written to the surface, if any
    pub fn transform(&self) -> Option<&ZoomTransform> {
        self.applied.as_ref()
    }

    /// Number of presses that toggled the state
    pub fn press_count(&self) -> u64 {
        self.press_count
    }

    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Handles an input event and tells the host what to do with it
    pub fn handle_event(&mut self, event: &ZoomEvent) -> Result<EventResponse> {
        match event {
            ZoomEvent::DragStart => Ok(self.drag_start()),
            ZoomEvent::Press { position, button } => {
                if !self.enabled || (self.config.primary_button_only && !button.is_primary()) {
                    return Ok(EventResponse::ignored());
                }
                let transition = self.press(*position)?;
                Ok(EventResponse::consumed(transition))
            }
        }
    }

    /// Toggles the zoom for a press at viewport coordinates `position`
    pub fn press(&mut self, position: Point) -> Result<Transition> {
        let (next, transform, transition) = match self.state {
            ScaleState::Unscaled => {
                let rect = self.surface.bounding_rect();
                let origin = rect.relative_position(&position);
                (
                    ScaleState::Magnified,
                    ZoomTransform::magnified(self.config.magnification, origin),
                    Transition::Magnified { origin },
                )
            }
            ScaleState::Magnified => (
                ScaleState::Unscaled,
                ZoomTransform::identity(),
                Transition::Unscaled,
            ),
        };

        if let Err(e) = self.surface.apply_transform(&transform) {
            log::warn!("Failed to apply {}: {}", transform.css_transform(), e);
            return Err(e);
        }

        log::debug!(
            "zoom {:?} -> {:?} ({} @ {})",
            self.state,
            next,
            transform.css_transform(),
            transform.css_origin()
        );
        self.state = next;
        self.applied = Some(transform);
        self.press_count += 1;
        Ok(transition)
    }

    /// Native image drag is always suppressed, whatever the state
    pub fn drag_start(&self) -> EventResponse {
        EventResponse::suppressed()
    }

    /// Returns to the unscaled presentation. A surface that was never written
    /// to stays untouched.
    pub fn reset(&mut self) -> Result<()> {
        if self.state == ScaleState::Unscaled {
            return Ok(());
        }
        let transform = ZoomTransform::identity();
        self.surface.apply_transform(&transform)?;
        log::debug!("zoom reset");
        self.state = ScaleState::Unscaled;
        self.applied = Some(transform);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{core::geo::Rect, input::events::MouseButton, ZoomError};

    struct FixedSurface {
        rect: Rect,
        writes: Vec<ZoomTransform>,
        fail: bool,
    }

    impl FixedSurface {
        fn at(left: f64, top: f64) -> Self {
            Self {
                rect: Rect::from_origin_size(left, top, 200.0, 150.0),
                writes: Vec::new(),
                fail: false,
            }
        }
    }

    impl ZoomSurface for FixedSurface {
        fn bounding_rect(&self) -> Rect {
            self.rect
        }

        fn apply_transform(&mut self, transform: &ZoomTransform) -> Result<()> {
            if self.fail {
                return Err(ZoomError::Host("style is read-only".to_string()));
            }
            self.writes.push(*transform);
            Ok(())
        }
    }

    fn toggle_at(left: f64, top: f64) -> ZoomToggle<FixedSurface> {
        ZoomToggle::new(FixedSurface::at(left, top), ZoomConfig::default()).unwrap()
    }

    #[test]
    fn test_new_leaves_surface_untouched() {
        let toggle = toggle_at(0.0, 0.0);
        assert_eq!(toggle.state(), ScaleState::Unscaled);
        assert!(toggle.transform().is_none());
        assert!(toggle.surface().writes.is_empty());
        assert_eq!(toggle.config(), &ZoomConfig::default());
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = ZoomConfig::default().with_magnification(0.5);
        assert!(ZoomToggle::new(FixedSurface::at(0.0, 0.0), config).is_err());
    }

    #[test]
    fn test_press_toggles_and_anchors_at_offset() {
        let mut toggle = toggle_at(20.0, 30.0);

        let transition = toggle.press(Point::new(60.0, 90.0)).unwrap();
        assert_eq!(
            transition,
            Transition::Magnified {
                origin: Point::new(40.0, 60.0)
            }
        );
        assert_eq!(toggle.state(), ScaleState::Magnified);
        assert_eq!(toggle.transform().unwrap().css_origin(), "40px 60px");

        let transition = toggle.press(Point::new(5.0, 5.0)).unwrap();
        assert_eq!(transition, Transition::Unscaled);
        assert_eq!(toggle.transform().unwrap(), &ZoomTransform::identity());
        assert_eq!(toggle.press_count(), 2);
    }

    #[test]
    fn test_non_primary_press_is_ignored() {
        let mut toggle = toggle_at(0.0, 0.0);
        let event = ZoomEvent::Press {
            position: Point::new(10.0, 10.0),
            button: MouseButton::Right,
        };

        let response = toggle.handle_event(&event).unwrap();
        assert_eq!(response, EventResponse::ignored());
        assert_eq!(toggle.state(), ScaleState::Unscaled);
    }

    #[test]
    fn test_any_button_toggles_when_policy_disabled() {
        let config = ZoomConfig {
            primary_button_only: false,
            ..ZoomConfig::default()
        };
        let mut toggle = ZoomToggle::new(FixedSurface::at(0.0, 0.0), config).unwrap();
        let event = ZoomEvent::Press {
            position: Point::new(10.0, 10.0),
            button: MouseButton::Middle,
        };

        let response = toggle.handle_event(&event).unwrap();
        assert!(response.is_handled());
        assert_eq!(toggle.state(), ScaleState::Magnified);
    }

    #[test]
    fn test_disabled_toggle_ignores_presses() {
        let mut toggle = toggle_at(0.0, 0.0);
        toggle.enabled = false;

        let response = toggle
            .handle_event(&ZoomEvent::press(Point::new(1.0, 1.0)))
            .unwrap();
        assert!(!response.is_handled());
        assert_eq!(toggle.press_count(), 0);
    }

    #[test]
    fn test_failed_write_keeps_state() {
        let mut toggle = toggle_at(0.0, 0.0);
        toggle.surface_mut().fail = true;

        assert!(toggle.press(Point::new(10.0, 10.0)).is_err());
        assert_eq!(toggle.state(), ScaleState::Unscaled);
        assert!(toggle.transform().is_none());
        assert_eq!(toggle.press_count(), 0);
    }

    #[test]
    fn test_reset() {
        let mut toggle = toggle_at(0.0, 0.0);
        toggle.reset().unwrap();
        assert!(toggle.surface().writes.is_empty());

        toggle.press(Point::new(10.0, 10.0)).unwrap();
        toggle.reset().unwrap();
        assert_eq!(toggle.state(), ScaleState::Unscaled);
        assert_eq!(toggle.surface().writes.last(), Some(&ZoomTransform::identity()));
    }
}
