use std::path::{Path, PathBuf};

use eframe::egui::{self, Color32, ColorImage, TextureHandle, TextureOptions, Ui};

/// Warning shown in place of the banner when it cannot be loaded.
pub const BANNER_WARNING: &str = "Banner image not found or could not be loaded.";

/// Decode an image file into pixels egui can upload.
pub fn decode_banner(path: &Path) -> Result<ColorImage, image::ImageError> {
    let rgba = image::open(path)?.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

/// Optional decorative image above the filters. A missing or broken file
/// degrades to a warning and never affects the analytics.
#[derive(Default)]
pub struct Banner {
    path: Option<PathBuf>,
    pending: Option<ColorImage>,
    texture: Option<TextureHandle>,
    pub warning: Option<String>,
}

impl Banner {
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Banner::default();
        };
        match decode_banner(path) {
            Ok(image) => Banner {
                path: Some(path.to_path_buf()),
                pending: Some(image),
                ..Banner::default()
            },
            Err(e) => {
                log::warn!("Banner {}: {e}", path.display());
                Banner {
                    path: Some(path.to_path_buf()),
                    warning: Some(BANNER_WARNING.to_string()),
                    ..Banner::default()
                }
            }
        }
    }

    pub fn show(&mut self, ui: &mut Ui) {
        if let Some(image) = self.pending.take() {
            let name = self
                .path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "banner".to_string());
            self.texture = Some(ui.ctx().load_texture(name, image, TextureOptions::LINEAR));
        }

        if let Some(texture) = &self.texture {
            ui.vertical_centered(|ui: &mut Ui| {
                ui.add(
                    egui::Image::from_texture(egui::load::SizedTexture::from_handle(texture))
                        .max_width(ui.available_width())
                        .max_height(120.0),
                );
            });
            ui.add_space(4.0);
        } else if let Some(warning) = &self.warning {
            ui.colored_label(Color32::YELLOW, warning);
            ui.add_space(4.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_degrades_to_warning() {
        let dir = tempfile::tempdir().unwrap();
        let banner = Banner::load(Some(&dir.path().join("netflix_banner.jpeg")));
        assert_eq!(banner.warning.as_deref(), Some(BANNER_WARNING));
        assert!(banner.pending.is_none());
    }

    #[test]
    fn no_banner_configured() {
        let banner = Banner::load(None);
        assert!(banner.warning.is_none());
        assert!(banner.pending.is_none());
    }

    #[test]
    fn decodes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("banner.png");
        image::RgbaImage::from_pixel(4, 2, image::Rgba([200, 10, 10, 255]))
            .save(&path)
            .unwrap();
        let decoded = decode_banner(&path).unwrap();
        assert_eq!(decoded.size, [4, 2]);
        let banner = Banner::load(Some(&path));
        assert!(banner.pending.is_some());
        assert!(banner.warning.is_none());
    }
}
