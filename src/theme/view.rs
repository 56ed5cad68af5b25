//! Rendering contract of the dark mode switch.
//!
//! While the preference is unknown the switch is replaced by an empty box of
//! the same size, so nothing shifts and no wrong icon flashes once the
//! stored value is known.

use super::Preference;
use crate::utils::xml::{self, XmlWriter};
use anyhow::Result;
use quick_xml::Writer;
use std::io::Cursor;

/// What a consumer draws for a given preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleView {
    /// Neutral box with the switch's footprint
    Placeholder { size: u32 },
    /// The real switch; `checked` means dark
    Switch { checked: bool, size: u32 },
}

impl ToggleView {
    pub const fn from_preference(preference: Preference, size: u32) -> Self {
        match preference.as_dark() {
            None => Self::Placeholder { size },
            Some(checked) => Self::Switch { checked, size },
        }
    }

    pub const fn size(self) -> u32 {
        match self {
            Self::Placeholder { size } | Self::Switch { size, .. } => size,
        }
    }

    /// HTML markup of the view.
    pub fn to_html(self) -> Result<String> {
        let size = self.size();
        let box_class = format!("w-[{size}px] h-[{size}px]");
        let style = format!("width:{size}px;height:{size}px");

        let mut writer: XmlWriter = Writer::new(Cursor::new(Vec::new()));
        match self {
            Self::Placeholder { .. } => {
                xml::write_start(
                    &mut writer,
                    "span",
                    &[
                        ("class", box_class.as_str()),
                        ("style", style.as_str()),
                        ("aria-hidden", "true"),
                    ],
                )?;
                xml::write_end(&mut writer, "span")?;
            }
            Self::Switch { checked, .. } => {
                let class = format!("{box_class} dark-mode-switch");
                let style = format!("{style};color:var(--accent-color)");
                let (pressed, icon) = if checked { ("true", "moon") } else { ("false", "sun") };
                xml::write_start(
                    &mut writer,
                    "button",
                    &[
                        ("type", "button"),
                        ("class", class.as_str()),
                        ("style", style.as_str()),
                        ("aria-label", "Toggle dark mode"),
                        ("aria-pressed", pressed),
                    ],
                )?;
                xml::write_start(&mut writer, "span", &[("data-icon", icon)])?;
                xml::write_end(&mut writer, "span")?;
                xml::write_end(&mut writer, "button")?;
            }
        }
        Ok(xml::finish(writer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_renders_placeholder() {
        let view = ToggleView::from_preference(Preference::Unknown, 30);
        assert_eq!(view, ToggleView::Placeholder { size: 30 });

        let html = view.to_html().unwrap();
        assert_eq!(
            html,
            r#"<span class="w-[30px] h-[30px]" style="width:30px;height:30px" aria-hidden="true"></span>"#
        );
    }

    #[test]
    fn test_resolved_renders_switch() {
        assert_eq!(
            ToggleView::from_preference(Preference::Dark, 30),
            ToggleView::Switch { checked: true, size: 30 }
        );
        assert_eq!(
            ToggleView::from_preference(Preference::Light, 30),
            ToggleView::Switch { checked: false, size: 30 }
        );
    }

    #[test]
    fn test_switch_html() {
        let html = ToggleView::Switch { checked: true, size: 30 }.to_html().unwrap();
        assert!(html.starts_with("<button"));
        assert!(html.contains(r#"aria-pressed="true""#));
        assert!(html.contains(r#"data-icon="moon""#));
        assert!(html.contains("color:var(--accent-color)"));
    }

    #[test]
    fn test_placeholder_and_switch_share_footprint() {
        for preference in [Preference::Unknown, Preference::Light, Preference::Dark] {
            let view = ToggleView::from_preference(preference, 24);
            assert_eq!(view.size(), 24);
            assert!(view.to_html().unwrap().contains("width:24px;height:24px"));
        }
    }
}
