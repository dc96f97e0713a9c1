use super::{persistence_warning, CmdMessage, CmdResult};
use crate::cell::PersistentCell;
use crate::error::Result;
use crate::store::KeyValueStore;

/// The theme cell: `true` means dark mode.
pub type ThemeCell<S> = PersistentCell<bool, S>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    Show,
    Light,
    Dark,
    Toggle,
}

fn name(dark: bool) -> &'static str {
    if dark {
        "dark"
    } else {
        "light"
    }
}

pub fn run<S: KeyValueStore>(theme: &mut ThemeCell<S>, action: ThemeAction) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match action {
        ThemeAction::Show => {
            result.add_message(CmdMessage::info(format!("Theme: {}", name(*theme.get()))));
        }
        ThemeAction::Light | ThemeAction::Dark | ThemeAction::Toggle => {
            match action {
                ThemeAction::Light => theme.set(false),
                ThemeAction::Dark => theme.set(true),
                _ => theme.update(|dark| !dark),
            }
            result.add_message(CmdMessage::success(format!(
                "Theme set to {}",
                name(*theme.get())
            )));
            if let Some(warning) = persistence_warning(theme) {
                result.add_message(warning);
            }
        }
    }
    result.dark_mode = Some(*theme.get());
    Ok(result)
}
