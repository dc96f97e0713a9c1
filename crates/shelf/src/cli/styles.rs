//! Styles for the shelf CLI.
//!
//! Code asks for styles by meaning (an index, a title, an issued status) and never
//! by color. A [`Palette`] maps those meanings to `console` styles, and there are
//! two of them: one for light terminals and one for dark ones. Which one applies
//! is the user's persisted theme preference (`shelf theme`), not a guess about
//! the terminal.
//!
//! The shared style tokens are:
//!
//!     * Regular text (neutral foreground)
//!     * Muted text (metadata such as timestamps and field labels)
//!     * Index (book positions)
//!     * Title (regular color with added weight)
//!     * Available / Issued (status badges)
//!     * Success, info, warning and error messages
//!
//! Both palettes are built once through `once_cell::sync::Lazy`.

use console::Style;
use once_cell::sync::Lazy;

pub struct Palette {
    pub regular: Style,
    pub muted: Style,
    pub faint: Style,
    pub index: Style,
    pub title: Style,
    pub available: Style,
    pub issued: Style,
    pub success: Style,
    pub info: Style,
    pub warning: Style,
    pub error: Style,
}

pub static LIGHT: Lazy<Palette> = Lazy::new(build_light_palette);
pub static DARK: Lazy<Palette> = Lazy::new(build_dark_palette);

/// The palette for the persisted theme preference.
pub fn palette(dark: bool) -> &'static Palette {
    if dark {
        &DARK
    } else {
        &LIGHT
    }
}

fn build_light_palette() -> Palette {
    let regular = Style::new().black();
    let muted = Style::new().color256(243);
    Palette {
        faint: Style::new().color256(249),
        index: Style::new().color256(136),
        title: regular.clone().bold(),
        available: Style::new().color256(28),
        issued: Style::new().color256(124).bold(),
        success: Style::new().green(),
        info: muted.clone(),
        warning: Style::new().yellow().bold(),
        error: Style::new().red().bold(),
        regular,
        muted,
    }
}

fn build_dark_palette() -> Palette {
    let regular = Style::new().white();
    let muted = Style::new().color256(250);
    Palette {
        faint: Style::new().color256(242),
        index: Style::new().color256(220),
        title: regular.clone().bold(),
        available: Style::new().color256(120),
        issued: Style::new().color256(210).bold(),
        success: Style::new().green(),
        info: muted.clone(),
        warning: Style::new().yellow().bold(),
        error: Style::new().red().bold(),
        regular,
        muted,
    }
}
