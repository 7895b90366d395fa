use crate::config::{HexColor, PaletteConfig};
use crate::speed::SpeedLevel;
use gtk::gdk;
use gtk4 as gtk;
use palette::{Srgba, WithAlpha};

/// Fill for `Off` and for any palette entry left unset (#888888).
pub const NEUTRAL_GRAY: Srgba<f64> =
    Srgba::new(136.0 / 255.0, 136.0 / 255.0, 136.0 / 255.0, 1.0);
/// Indicator dot and label text, independent of state.
pub const SECONDARY_NEUTRAL: Srgba<f64> = Srgba::new(0.0, 0.0, 0.0, 1.0);

/// Fill colors for the three running speeds. Fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    low: Srgba<f64>,
    medium: Srgba<f64>,
    high: Srgba<f64>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(NEUTRAL_GRAY, NEUTRAL_GRAY, NEUTRAL_GRAY)
    }
}

impl Palette {
    pub fn new(low: Srgba<f64>, medium: Srgba<f64>, high: Srgba<f64>) -> Self {
        Self { low, medium, high }
    }

    pub fn from_config(cfg: &PaletteConfig) -> Self {
        Self::new(
            Self::resolve(cfg.low),
            Self::resolve(cfg.medium),
            Self::resolve(cfg.high),
        )
    }

    fn resolve(color: Option<HexColor>) -> Srgba<f64> {
        color
            .map(|HexColor(rgb)| rgb.into_format::<f64>().with_alpha(1.0))
            .unwrap_or(NEUTRAL_GRAY)
    }

    pub fn fill_color_for(&self, speed: SpeedLevel) -> Srgba<f64> {
        match speed {
            SpeedLevel::Off => NEUTRAL_GRAY,
            SpeedLevel::Low => self.low,
            SpeedLevel::Medium => self.medium,
            SpeedLevel::High => self.high,
        }
    }
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
.speed-dial-window {
    background-color: @theme_bg_color;
}
.speed-dial-area {
    background: none;
    background-color: transparent;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette::Srgb;

    fn green() -> HexColor {
        HexColor(Srgb::new(0x00, 0xff, 0x00))
    }

    #[test]
    fn test_off_is_gray_regardless_of_palette() {
        let red = Srgba::new(1.0, 0.0, 0.0, 1.0);
        let palette = Palette::new(red, red, red);
        assert_eq!(palette.fill_color_for(SpeedLevel::Off), NEUTRAL_GRAY);
        assert_eq!(Palette::default().fill_color_for(SpeedLevel::Off), NEUTRAL_GRAY);
    }

    #[test]
    fn test_running_speeds_use_palette_entries() {
        let low = Srgba::new(0.1, 0.2, 0.3, 1.0);
        let medium = Srgba::new(0.4, 0.5, 0.6, 1.0);
        let palette = Palette::new(low, medium, NEUTRAL_GRAY);

        assert_eq!(palette.fill_color_for(SpeedLevel::Low), low);
        assert_eq!(palette.fill_color_for(SpeedLevel::Medium), medium);
        assert_eq!(palette.fill_color_for(SpeedLevel::High), NEUTRAL_GRAY);
    }

    #[test]
    fn test_from_config_falls_back_to_gray() {
        let cfg = PaletteConfig {
            low: Some(green()),
            medium: None,
            high: None,
        };
        let palette = Palette::from_config(&cfg);

        assert_eq!(
            palette.fill_color_for(SpeedLevel::Low),
            Srgba::new(0.0, 1.0, 0.0, 1.0)
        );
        assert_eq!(palette.fill_color_for(SpeedLevel::Medium), NEUTRAL_GRAY);
        assert_eq!(palette.fill_color_for(SpeedLevel::High), NEUTRAL_GRAY);
    }

    #[test]
    fn test_explicit_gray_entry_matches_default() {
        let cfg = PaletteConfig {
            low: None,
            medium: Some(HexColor(Srgb::new(0x88, 0x88, 0x88))),
            high: None,
        };
        let palette = Palette::from_config(&cfg);
        let (r, g, b, a) = palette.fill_color_for(SpeedLevel::Medium).into_components();
        let (gr, gg, gb, ga) = NEUTRAL_GRAY.into_components();
        for (got, want) in [(r, gr), (g, gg), (b, gb), (a, ga)] {
            assert!((got - want).abs() < 1e-12);
        }
    }
}
