//! The page drawn over the backdrop: a title, a row of cards and a contact
//! form.

use lakeside_config::{CardConfig, PageConfig};
use lakeside_core::CellMetrics;
use lakeside_ui::{Acknowledge, PointerEvent, Tilt, TiltCard, TransformTarget};
use ratatui::layout::{Constraint, Layout, Margin, Rect};

/// Class marking a card that tilts under the pointer.
pub const TILT_CARD_CLASS: &str = "tilt-card";
/// Class marking the wrapper inside a tilt card that receives the transform.
pub const TILT_INNER_CLASS: &str = "tilt-inner";

const CARD_HEIGHT: u16 = 7;
const FORM_HEIGHT: u16 = 7;
const FORM_WIDTH: u16 = 56;

/// Inner wrapper of a tilt card; holds the transform currently applied.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InnerWrapper {
    pub transform: Tilt,
}

impl TransformTarget for InnerWrapper {
    fn set_transform(&mut self, tilt: Tilt) {
        self.transform = tilt;
    }
}

#[derive(Debug, Clone)]
pub struct Card {
    pub title: String,
    pub body: String,
    pub area: Rect,
    /// Present only for cards carrying both tilt markers.
    pub tilt: Option<TiltCard<InnerWrapper>>,
}

impl Card {
    fn from_config(config: &CardConfig) -> Self {
        let tilt = if !config.has_class(TILT_CARD_CLASS) {
            None
        } else if !config.inner_has_class(TILT_INNER_CLASS) {
            log::debug!("card {:?} has no {TILT_INNER_CLASS} wrapper, tilt disabled", config.title);
            None
        } else {
            Some(TiltCard::new(Default::default(), InnerWrapper::default()))
        };
        Self {
            title: config.title.clone(),
            body: config.body.clone(),
            area: Rect::default(),
            tilt,
        }
    }

    /// Transform currently applied to the inner wrapper.
    pub fn transform(&self) -> Tilt {
        self.tilt
            .as_ref()
            .map(|card| card.inner().transform)
            .unwrap_or(Tilt::NEUTRAL)
    }
}

/// One text input of the contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: &'static str,
    pub value: String,
}

/// Contact form state: three fields and which one has focus.
#[derive(Debug, Clone)]
pub struct ContactForm {
    id: String,
    pub fields: [Field; 3],
    pub focus: Option<usize>,
    pub area: Rect,
}

impl ContactForm {
    pub fn new(id: impl Into<String>) -> Self {
        let field = |label| Field {
            label,
            value: String::new(),
        };
        Self {
            id: id.into(),
            fields: [field("Name"), field("Email"), field("Message")],
            focus: None,
            area: Rect::default(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            None => Some(0),
            Some(i) if i + 1 < self.fields.len() => Some(i + 1),
            Some(_) => None,
        };
    }

    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            None => Some(self.fields.len() - 1),
            Some(0) => None,
            Some(i) => Some(i - 1),
        };
    }

    pub fn blur(&mut self) {
        self.focus = None;
    }

    pub fn push(&mut self, ch: char) {
        if let Some(i) = self.focus {
            self.fields[i].value.push(ch);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(i) = self.focus {
            self.fields[i].value.pop();
        }
    }

    /// Default submit action: discard the entered values.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
        self.focus = None;
    }
}

/// One-shot message box, dismissed by the next key press.
#[derive(Debug, Clone, Default)]
pub struct Alert {
    message: Option<String>,
    shown: usize,
}

impl Alert {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// How many messages have been raised so far.
    pub fn shown(&self) -> usize {
        self.shown
    }

    pub fn dismiss(&mut self) -> bool {
        self.message.take().is_some()
    }
}

impl Acknowledge for Alert {
    fn acknowledge(&mut self, message: &str) {
        self.message = Some(message.to_string());
        self.shown += 1;
    }
}

/// Page layout and element state.
#[derive(Debug, Clone)]
pub struct Page {
    pub title: String,
    pub cards: Vec<Card>,
    pub form: Option<ContactForm>,
    pub title_area: Rect,
    pub help_area: Rect,
}

impl Page {
    pub fn new(config: &PageConfig) -> Self {
        Self {
            title: config.title.clone(),
            cards: config.cards.iter().map(Card::from_config).collect(),
            form: config.form().map(ContactForm::new),
            title_area: Rect::default(),
            help_area: Rect::default(),
        }
    }

    /// Look up the form by id.
    pub fn form_by_id(&self, id: &str) -> Option<&ContactForm> {
        self.form.as_ref().filter(|form| form.id() == id)
    }

    /// Place every element inside `area`.
    pub fn layout(&mut self, area: Rect, metrics: CellMetrics) {
        let [_, title, _, cards, _, form_row, _, help] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(CARD_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(FORM_HEIGHT),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);
        self.title_area = title;
        self.help_area = help;

        if !self.cards.is_empty() {
            let row = cards.inner(Margin::new(2, 0));
            let columns = Layout::horizontal(vec![Constraint::Fill(1); self.cards.len()])
                .spacing(2)
                .split(row);
            for (card, column) in self.cards.iter_mut().zip(columns.iter()) {
                card.area = *column;
                if let Some(tilt) = card.tilt.as_mut() {
                    tilt.set_bounds(metrics.rect(*column));
                }
            }
        }

        if let Some(form) = self.form.as_mut() {
            let [_, centered, _] = Layout::horizontal([
                Constraint::Fill(1),
                Constraint::Length(FORM_WIDTH.min(form_row.width)),
                Constraint::Fill(1),
            ])
            .areas(form_row);
            form.area = centered;
        }
    }

    /// Logical-pixel bounds of every card, in card order.
    pub fn card_bounds(&self) -> Vec<lakeside_core::Rect> {
        self.cards
            .iter()
            .map(|card| {
                card.tilt
                    .as_ref()
                    .map(|tilt| tilt.bounds())
                    .unwrap_or_default()
            })
            .collect()
    }

    /// Deliver a pointer event to card `index`; cards without the tilt
    /// markers ignore it.
    pub fn pointer(&mut self, index: usize, event: PointerEvent) {
        if let Some(tilt) = self.cards.get_mut(index).and_then(|card| card.tilt.as_mut()) {
            tilt.handle(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lakeside_core::Point;

    fn page() -> Page {
        let mut page = Page::new(&PageConfig::default());
        page.layout(Rect::new(0, 0, 120, 40), CellMetrics::default());
        page
    }

    #[test]
    fn test_default_page_elements() {
        let page = page();
        assert_eq!(page.cards.len(), 3);
        assert!(page.cards.iter().all(|card| card.tilt.is_some()));
        assert!(page.form_by_id("contact-form").is_some());
        assert!(page.form_by_id("other").is_none());
    }

    #[test]
    fn test_cards_laid_out_side_by_side() {
        let page = page();
        let areas: Vec<Rect> = page.cards.iter().map(|c| c.area).collect();
        assert!(areas.iter().all(|a| a.height == CARD_HEIGHT && a.y == 3));
        assert!(areas[0].right() <= areas[1].x);
        assert!(areas[1].right() <= areas[2].x);
        let bounds = page.card_bounds();
        assert_eq!(bounds[0].x, areas[0].x as f64 * 8.0);
        assert_eq!(bounds[0].height, CARD_HEIGHT as f64 * 16.0);
    }

    #[test]
    fn test_card_without_inner_marker_does_not_tilt() {
        let config = PageConfig {
            cards: vec![CardConfig {
                title: "Plain".into(),
                body: String::new(),
                classes: vec![TILT_CARD_CLASS.into()],
                inner_classes: vec![],
            }],
            ..Default::default()
        };
        let mut page = Page::new(&config);
        page.layout(Rect::new(0, 0, 80, 30), CellMetrics::default());
        assert!(page.cards[0].tilt.is_none());
        page.pointer(0, PointerEvent::Move(Point::new(0.0, 0.0)));
        assert!(page.cards[0].transform().is_neutral());
    }

    #[test]
    fn test_pointer_tilts_card() {
        let mut page = page();
        let bounds = page.card_bounds()[1];
        page.pointer(1, PointerEvent::Move(Point::new(bounds.x, bounds.y)));
        let tilt = page.cards[1].transform();
        assert!(tilt.rotate_x > 0.0 && tilt.rotate_y < 0.0);
        page.pointer(1, PointerEvent::Leave);
        assert!(page.cards[1].transform().is_neutral());
    }

    #[test]
    fn test_form_focus_and_typing() {
        let mut form = ContactForm::new("contact-form");
        form.push('x');
        assert!(form.fields.iter().all(|f| f.value.is_empty()));

        form.focus_next();
        form.push('h');
        form.push('i');
        form.focus_next();
        form.push('@');
        form.backspace();
        assert_eq!(form.fields[0].value, "hi");
        assert_eq!(form.fields[1].value, "");

        form.focus_prev();
        form.focus_prev();
        assert_eq!(form.focus, None);
        form.focus_prev();
        assert_eq!(form.focus, Some(2));

        form.reset();
        assert_eq!(form.fields[0].value, "");
        assert_eq!(form.focus, None);
    }

    #[test]
    fn test_alert_is_one_shot() {
        let mut alert = Alert::default();
        assert!(!alert.dismiss());
        alert.acknowledge("hello");
        assert_eq!(alert.message(), Some("hello"));
        assert!(alert.dismiss());
        assert_eq!(alert.message(), None);
        assert_eq!(alert.shown(), 1);
    }
}
