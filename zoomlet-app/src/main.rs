use anyhow::Context as _;
use egui::{Color32, ColorImage, TextureHandle, TextureOptions, Vec2};
use std::path::Path;
use zoomlet::{ui::ZoomView, ScaleState, ZoomConfig};

/// Standalone press-to-zoom image viewer
///
/// Usage: `zoomlet-app [IMAGE]`. Without a path a generated checkerboard is shown.
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let (title, image) = match std::env::args().nth(1) {
        Some(path) => {
            let image = load_image(Path::new(&path))?;
            (path, image)
        }
        None => ("checkerboard".to_string(), checkerboard(512, 32)),
    };
    log::info!("showing {} ({}x{})", title, image.size[0], image.size[1]);
    let view = ZoomView::new(ZoomConfig::default())?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_title(format!("Zoomlet - {title}")),
        ..Default::default()
    };

    eframe::run_native(
        "zoomlet-app",
        options,
        Box::new(move |cc| Box::new(ZoomletApp::new(cc, view, image))),
    )
    .map_err(|e| anyhow::anyhow!("viewer failed: {e}"))?;

    Ok(())
}

fn load_image(path: &Path) -> anyhow::Result<ColorImage> {
    let image = image::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?
        .to_rgba8();
    let size = [image.width() as usize, image.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(
        size,
        image.as_raw(),
    ))
}

fn checkerboard(side: usize, cell: usize) -> ColorImage {
    let pixels = (0..side * side)
        .map(|i| {
            let (x, y) = (i % side, i / side);
            if (x / cell + y / cell) % 2 == 0 {
                Color32::from_rgb(40, 90, 160)
            } else {
                Color32::from_rgb(235, 235, 225)
            }
        })
        .collect();
    ColorImage {
        size: [side, side],
        pixels,
    }
}

/// The main application struct
struct ZoomletApp {
    view: ZoomView,
    texture: TextureHandle,
}

impl ZoomletApp {
    fn new(cc: &eframe::CreationContext<'_>, view: ZoomView, image: ColorImage) -> Self {
        let texture = cc
            .egui_ctx
            .load_texture("zoom-image", image, TextureOptions::LINEAR);
        Self { view, texture }
    }

    /// Largest size fitting `available` without upscaling or distorting
    fn fitted_size(&self, available: Vec2) -> Vec2 {
        let image_size = self.texture.size_vec2();
        let fit = (available.x / image_size.x)
            .min(available.y / image_size.y)
            .min(1.0);
        image_size * fit
    }
}

impl eframe::App for ZoomletApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let state = match self.view.state() {
                    ScaleState::Unscaled => "unscaled",
                    ScaleState::Magnified => "magnified",
                };
                ui.label(format!("State: {state}"));
                ui.separator();
                ui.label(format!("Presses: {}", self.view.press_count()));
                ui.separator();
                if ui.button("Reset").clicked() {
                    if let Err(e) = self.view.reset() {
                        log::warn!("reset failed: {}", e);
                    }
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let size = self.fitted_size(ui.available_size());
            ui.vertical_centered(|ui| {
                self.view.show(ui, self.texture.id(), size);
            });
        });
    }
}
