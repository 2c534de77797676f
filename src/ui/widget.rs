use crate::{
    core::{
        config::ZoomConfig,
        geo::{Point, Rect as ViewRect},
        state::ScaleState,
        transform::ZoomTransform,
    },
    input::{
        events::{MouseButton, ZoomEvent},
        handler::ZoomToggle,
    },
    traits::ZoomSurface,
    Result,
};
use egui::{Color32, PointerButton, Pos2, Rect, Response, Sense, TextureId, Ui, Vec2};

const PRESS_BUTTONS: [PointerButton; 5] = [
    PointerButton::Primary,
    PointerButton::Secondary,
    PointerButton::Middle,
    PointerButton::Extra1,
    PointerButton::Extra2,
];

fn to_view_rect(rect: Rect) -> ViewRect {
    ViewRect::from_origin_size(
        rect.min.x as f64,
        rect.min.y as f64,
        rect.width() as f64,
        rect.height() as f64,
    )
}

fn to_egui_rect(rect: &ViewRect) -> Rect {
    Rect::from_min_max(
        Pos2::new(rect.min.x as f32, rect.min.y as f32),
        Pos2::new(rect.max.x as f32, rect.max.y as f32),
    )
}

fn to_mouse_button(button: PointerButton) -> MouseButton {
    match button {
        PointerButton::Primary => MouseButton::Left,
        PointerButton::Secondary => MouseButton::Right,
        PointerButton::Middle => MouseButton::Middle,
        PointerButton::Extra1 => MouseButton::Other(3),
        PointerButton::Extra2 => MouseButton::Other(4),
    }
}

/// Image painted by egui, playing the role of the DOM element
///
/// `layout` is the rect allocated this frame; the reported bounding rect is
/// the transformed one, the way `getBoundingClientRect` reports a CSS-scaled
/// element.
#[derive(Debug, Clone, Default)]
pub struct PaintedImage {
    layout: ViewRect,
    transform: ZoomTransform,
}

impl PaintedImage {
    pub fn layout(&self) -> ViewRect {
        self.layout
    }

    /// Area covered by the image once transformed
    pub fn painted_rect(&self) -> ViewRect {
        self.transform.map_rect(&self.layout)
    }
}

impl ZoomSurface for PaintedImage {
    fn bounding_rect(&self) -> ViewRect {
        self.painted_rect()
    }

    fn apply_transform(&mut self, transform: &ZoomTransform) -> Result<()> {
        self.transform = *transform;
        Ok(())
    }
}

/// Press-to-zoom image widget
///
/// Keep one `ZoomView` per image in the app state and call [`ZoomView::show`]
/// every frame. The widget clips the magnified image to its own rect, like a
/// container with `overflow: hidden`.
pub struct ZoomView {
    toggle: ZoomToggle<PaintedImage>,
}

impl ZoomView {
    pub fn new(config: ZoomConfig) -> Result<Self> {
        Ok(Self {
            toggle: ZoomToggle::new(PaintedImage::default(), config)?,
        })
    }

    pub fn state(&self) -> ScaleState {
        self.toggle.state()
    }

    pub fn transform(&self) -> Option<&ZoomTransform> {
        self.toggle.transform()
    }

    pub fn press_count(&self) -> u64 {
        self.toggle.press_count()
    }

    pub fn reset(&mut self) -> Result<()> {
        self.toggle.reset()
    }

    /// Lays out the image at `size`, handles this frame's press and paints it
    pub fn show(&mut self, ui: &mut Ui, texture: TextureId, size: Vec2) -> Response {
        // Claiming drags keeps enclosing scroll areas from panning on press
        let (rect, response) = ui.allocate_exact_size(size, Sense::click_and_drag());
        self.toggle.surface_mut().layout = to_view_rect(rect);

        let press = ui.input(|input| {
            PRESS_BUTTONS
                .iter()
                .copied()
                .find(|button| input.pointer.button_pressed(*button))
                .zip(input.pointer.interact_pos())
        });
        if let Some((button, pos)) = press {
            // Presses landing on a window above this layer belong to that window
            if ui.rect_contains_pointer(rect) {
                let event = ZoomEvent::Press {
                    position: Point::new(pos.x as f64, pos.y as f64),
                    button: to_mouse_button(button),
                };
                if let Err(e) = self.toggle.handle_event(&event) {
                    log::warn!("zoom press failed: {}", e);
                }
            }
        }

        let painted = to_egui_rect(&self.toggle.surface().painted_rect());
        ui.painter_at(rect).image(
            texture,
            painted,
            Rect::from_min_size(Pos2::ZERO, Vec2::splat(1.0)),
            Color32::WHITE,
        );

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_mapping() {
        assert!(to_mouse_button(PointerButton::Primary).is_primary());
        assert_eq!(to_mouse_button(PointerButton::Secondary), MouseButton::Right);
        assert_eq!(to_mouse_button(PointerButton::Extra2), MouseButton::Other(4));
    }

    #[test]
    fn test_painted_image_reports_transformed_rect() {
        let mut image = PaintedImage {
            layout: ViewRect::from_origin_size(10.0, 10.0, 100.0, 50.0),
            ..Default::default()
        };
        assert_eq!(image.bounding_rect(), image.layout());

        image
            .apply_transform(&ZoomTransform::magnified(2.0, Point::new(0.0, 0.0)))
            .unwrap();
        let painted = image.bounding_rect();
        assert_eq!(painted.min, Point::new(10.0, 10.0));
        assert_eq!(painted.size(), Point::new(200.0, 100.0));
    }

    #[test]
    fn test_rect_conversion() {
        let rect = Rect::from_min_size(Pos2::new(8.0, 16.0), Vec2::new(200.0, 100.0));
        let view = to_view_rect(rect);
        assert_eq!(view.left(), 8.0);
        assert_eq!(view.height(), 100.0);
        assert_eq!(to_egui_rect(&view), rect);
    }
}
