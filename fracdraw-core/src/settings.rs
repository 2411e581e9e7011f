//! Clap-free settings for the draw pipeline.

use camino::Utf8PathBuf;
use fracdraw_render::RenderOptions;
use fracdraw_requests::LoadOptions;
use fracdraw_types::glyph;

/// Settings for one draw run.
#[derive(Debug, Clone)]
pub struct DrawSettings {
    pub input: Utf8PathBuf,

    // Input validation
    pub require_csv_extension: bool,

    // Rendering
    pub drawn_glyph: char,

    // Output; `None` means stdout.
    pub output: Option<Utf8PathBuf>,
}

impl Default for DrawSettings {
    fn default() -> Self {
        Self {
            input: Utf8PathBuf::from("requests.csv"),
            require_csv_extension: true,
            drawn_glyph: glyph::DRAWN,
            output: None,
        }
    }
}

impl DrawSettings {
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            require_csv_extension: self.require_csv_extension,
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::with_drawn(self.drawn_glyph)
    }
}
