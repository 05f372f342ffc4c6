//! Layout computation
//!
//! Turns a [`SessionView`] into a [`DisplayList`] using the widget
//! configuration. All positions are in pixels.

use super::display_list::*;
use crate::config::WidgetConfig;
use crate::session::{Bias, SessionView};
use crate::theory::{KeySignature, Scale};

/// Main layout engine for computing display lists
#[derive(Clone, Debug, Default)]
pub struct LayoutEngine {
    config: WidgetConfig,
}

impl LayoutEngine {
    pub fn new(config: WidgetConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Compute the display list for a view
    pub fn compute_layout(&self, view: &SessionView) -> DisplayList {
        let text = &self.config.text;
        let buttons = self.buttons();

        match view {
            SessionView::Prompt => DisplayList {
                mode: ViewMode::Prompt,
                headline: None,
                scale: None,
                staff: None,
                prompt: text.prompt.clone(),
                buttons,
            },
            SessionView::Results {
                root,
                scale,
                key_signature,
            } => DisplayList {
                mode: ViewMode::Results,
                headline: Some(text.headline(&root.to_string())),
                scale: Some(self.layout_scale(scale)),
                staff: Some(self.layout_staff(key_signature)),
                prompt: text.retry_prompt.clone(),
                buttons,
            },
        }
    }

    fn buttons(&self) -> Vec<RenderButton> {
        let text = &self.config.text;
        Bias::ALL
            .iter()
            .map(|&bias| RenderButton {
                label: match bias {
                    Bias::Sharps => text.sharps_button.clone(),
                    Bias::Flats => text.flats_button.clone(),
                },
                bias,
            })
            .collect()
    }

    fn layout_scale(&self, scale: &Scale) -> RenderScale {
        RenderScale {
            caption: self.config.text.scale_caption.clone(),
            cells: scale
                .notes()
                .iter()
                .enumerate()
                .map(|(i, note)| RenderScaleCell {
                    degree: i + 1,
                    text: note.to_string(),
                })
                .collect(),
        }
    }

    fn layout_staff(&self, key_signature: &KeySignature) -> RenderStaff {
        let staff = &self.config.staff;
        RenderStaff {
            caption: self.config.text.key_signature_caption.clone(),
            clef_src: staff.clef_src.clone(),
            clef_width: staff.clef_width,
            width: staff.width,
            height: staff.height(),
            line_ys: staff.line_ys(),
            font_size: staff.glyph_font_size,
            accidentals: key_signature
                .entries()
                .iter()
                .map(|entry| RenderAccidental {
                    letter: entry.letter,
                    text: entry.glyph.clone(),
                    x: staff.accidental_x(entry.index),
                    y: entry.staff_offset as f32,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Letter;

    fn results(root: &str) -> DisplayList {
        let view = SessionView::for_root(Some(root.parse().unwrap()));
        LayoutEngine::default().compute_layout(&view)
    }

    #[test]
    fn test_prompt_layout() {
        let display = LayoutEngine::default().compute_layout(&SessionView::Prompt);
        assert_eq!(display.mode, ViewMode::Prompt);
        assert_eq!(
            display.prompt,
            "What key should you use for your next musical project?"
        );
        assert!(display.scale.is_none());
        assert!(display.staff.is_none());
        let labels: Vec<&str> = display.buttons.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["I like sharps!", "I like flats!"]);
    }

    #[test]
    fn test_results_layout() {
        let display = results("E♭♭");
        assert_eq!(display.mode, ViewMode::Results);
        assert_eq!(
            display.headline.as_deref(),
            Some("You should use the key of E𝄫 major!")
        );
        assert_eq!(display.prompt, "Or try a different scale?");

        let cells = &display.scale.as_ref().unwrap().cells;
        assert_eq!(cells.len(), 8);
        assert_eq!(cells[0].text, "E𝄫");
        assert_eq!(cells[7].text, "E𝄫");
        assert_eq!(cells[7].degree, 8);
    }

    #[test]
    fn test_staff_positions() {
        let display = results("F");
        let staff = display.staff.unwrap();
        assert_eq!(staff.line_ys.len(), 5);
        assert_eq!(staff.accidentals.len(), 7);

        let first = &staff.accidentals[0];
        assert_eq!(first.letter, Letter::B);
        assert_eq!(first.text, "♭");
        assert_eq!((first.x, first.y), (45.0, 16.0));

        let last = &staff.accidentals[6];
        assert_eq!(last.letter, Letter::F);
        assert_eq!((last.x, last.y), (165.0, 31.0));
    }

    #[test]
    fn test_display_list_json_shape() {
        let json = serde_json::to_value(results("G")).unwrap();
        assert_eq!(json["mode"], "results");
        assert_eq!(json["buttons"][1]["bias"], "flats");
        assert_eq!(json["staff"]["clefSrc"], "treble_clef.png");
        assert_eq!(json["staff"]["accidentals"][0]["text"], "♯");
    }
}
