//! Application state, event handling and rendering.

use std::io;
use std::time::{Duration, Instant};

use lakeside_config::Config;
use lakeside_core::{CellMetrics, EventSource, HostEvent, KeyInput, Paint};
use lakeside_scene::{Animator, DisplayList, SceneWidget};
use lakeside_ui::{CONTACT_FORM_ID, FormInterceptor, PointerRouter, SubmitEvent};
use rand::{SeedableRng, rngs::StdRng};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Alignment, Constraint, Flex, Layout, Margin, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Wrap},
};

use crate::page::{Alert, Card, ContactForm, Page};

/// Degrees of tilt that shift a card's inner wrapper by one cell.
const DEGREES_PER_CELL: f64 = 4.0;

/// The main application: the animated backdrop plus the page on top of it.
#[derive(Debug)]
pub struct App<R = StdRng> {
    /// Is the application running?
    running: bool,
    animator: Animator<DisplayList, R>,
    page: Page,
    /// Wired only when the page has the contact form.
    interceptor: Option<FormInterceptor>,
    router: PointerRouter,
    alert: Alert,
    metrics: CellMetrics,
    background: Paint,
    frame_duration: Duration,
    /// Terminal area in cells.
    area: Rect,
}

impl App {
    /// Construct the app for a terminal of `columns` x `rows` cells.
    pub fn new(config: &Config, columns: u16, rows: u16) -> Self {
        Self::with_rng(config, columns, rows, StdRng::from_entropy())
    }
}

impl<R: rand::Rng> App<R> {
    /// Construct the app with an explicit random source.
    pub fn with_rng(config: &Config, columns: u16, rows: u16, rng: R) -> Self {
        let metrics = config.cell_metrics();
        let surface = DisplayList::new(metrics.viewport(columns, rows));
        let page = Page::new(&config.page);

        let interceptor = match page.form_by_id(CONTACT_FORM_ID) {
            Some(_) => Some(FormInterceptor::new(CONTACT_FORM_ID)),
            None => {
                log::debug!("no #{CONTACT_FORM_ID} on the page, submissions are not intercepted");
                None
            }
        };

        let mut app = Self {
            running: false,
            animator: Animator::new(surface, rng),
            page,
            interceptor,
            router: PointerRouter::new(),
            alert: Alert::default(),
            metrics,
            background: config.background(),
            frame_duration: config.frame_duration(),
            area: Rect::new(0, 0, columns, rows),
        };
        app.page.layout(app.area, app.metrics);
        app
    }

    /// Run the application's main loop: one animation tick and one draw per
    /// frame, waiting for input in between.
    pub fn run<E: EventSource>(
        mut self,
        mut terminal: DefaultTerminal,
        events: &mut E,
    ) -> color_eyre::Result<()> {
        self.running = true;
        let mut next_frame = Instant::now();
        while self.running {
            let now = Instant::now();
            if now >= next_frame {
                self.animator.tick();
                terminal.draw(|frame| self.render(frame))?;
                next_frame += self.frame_duration;
                if next_frame < now {
                    // Fell behind; skip the missed frames instead of bursting.
                    next_frame = now + self.frame_duration;
                }
            }
            let timeout = next_frame.saturating_duration_since(Instant::now());
            self.pump(events, timeout)?;
        }
        log::info!("quit after {} frames", self.animator.ticks());
        Ok(())
    }

    /// Wait up to `timeout` for one event and handle it. Returns whether an
    /// event arrived.
    pub fn pump<E: EventSource>(&mut self, events: &mut E, timeout: Duration) -> io::Result<bool> {
        match events.next_event(timeout)? {
            Some(event) => {
                self.handle_event(event);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn handle_event(&mut self, event: HostEvent) {
        match event {
            HostEvent::Resized { columns, rows } => self.on_resize(columns, rows),
            HostEvent::Key(key) => self.on_key(key),
            HostEvent::PointerMoved { column, row } => self.on_pointer(column, row),
        }
    }

    fn on_resize(&mut self, columns: u16, rows: u16) {
        let size = self.metrics.viewport(columns, rows);
        log::debug!("resize to {columns}x{rows} cells ({}x{} px)", size.width, size.height);
        self.animator.resize(size);
        self.area = Rect::new(0, 0, columns, rows);
        if let Some((index, leave)) = self.router.reset() {
            self.page.pointer(index, leave);
        }
        self.page.layout(self.area, self.metrics);
    }

    fn on_pointer(&mut self, column: u16, row: u16) {
        let pointer = self.metrics.cell_center(column, row);
        let bounds = self.page.card_bounds();
        for (index, event) in self.router.route(pointer, &bounds) {
            self.page.pointer(index, event);
        }
    }

    fn on_key(&mut self, key: KeyInput) {
        if key == KeyInput::Interrupt {
            self.quit();
            return;
        }
        if self.alert.dismiss() {
            return;
        }

        let focused = self.page.form.as_ref().is_some_and(|form| form.focus.is_some());
        match (focused, key) {
            (_, KeyInput::Tab) => self.with_form(ContactForm::focus_next),
            (_, KeyInput::BackTab) => self.with_form(ContactForm::focus_prev),
            (true, KeyInput::Esc) => self.with_form(ContactForm::blur),
            (true, KeyInput::Char(ch)) => self.with_form(|form| form.push(ch)),
            (true, KeyInput::Backspace) => self.with_form(ContactForm::backspace),
            (_, KeyInput::Enter) => self.submit_form(),
            (false, KeyInput::Esc | KeyInput::Char('q')) => self.quit(),
            _ => {}
        }
    }

    fn with_form(&mut self, f: impl FnOnce(&mut ContactForm)) {
        if let Some(form) = self.page.form.as_mut() {
            f(form);
        }
    }

    /// Submit the page's form. The default action (clearing the form) only
    /// runs if no handler prevented it.
    fn submit_form(&mut self) {
        let Some(form) = self.page.form.as_mut() else {
            return;
        };
        let mut event = SubmitEvent::new(form.id());
        if let Some(interceptor) = &self.interceptor {
            interceptor.handle(&mut event, &mut self.alert);
        }
        if event.default_prevented() {
            log::debug!(
                "submit of #{} intercepted ({} so far)",
                form.id(),
                self.alert.shown()
            );
        } else {
            log::info!("submit of #{} went through, clearing form", form.id());
            form.reset();
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }

    /// Renders the backdrop, then the page over it.
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(
            SceneWidget::new(self.animator.surface(), self.background),
            area,
        );

        let panel = Style::new().bg(self.background.to_color());

        let title = Paragraph::new(self.page.title.as_str())
            .style(Style::new().bold().fg(Color::White))
            .alignment(Alignment::Center);
        frame.render_widget(title, self.page.title_area);

        for card in &self.page.cards {
            self.render_card(frame, card, panel);
        }
        if let Some(form) = &self.page.form {
            self.render_form(frame, form, panel);
        }

        let help = Line::from(vec![
            "Esc".bold().fg(Color::Cyan),
            " quit  ".dark_gray(),
            "Tab".bold().fg(Color::Cyan),
            " next field  ".dark_gray(),
            "Enter".bold().fg(Color::Cyan),
            " send".dark_gray(),
        ])
        .centered();
        frame.render_widget(help, self.page.help_area);

        if let Some(message) = self.alert.message() {
            render_alert(frame, area, message);
        }
    }

    fn render_card(&self, frame: &mut Frame, card: &Card, panel: Style) {
        let tilt = card.transform();
        let border = if tilt.is_neutral() {
            Style::new().fg(Color::Gray)
        } else {
            Style::new().fg(Color::Cyan)
        };
        let block = Block::bordered()
            .title(card.title.as_str())
            .border_style(border)
            .style(panel);
        let inner = block.inner(card.area);
        frame.render_widget(block, card.area);

        let (dx, dy) = tilt.cell_offset(DEGREES_PER_CELL);
        let wrapper = shift_within(inner.inner(Margin::new(1, 0)), inner, dx, dy);
        let mut lines = vec![Line::from(card.body.as_str())];
        if card.tilt.is_some() {
            lines.push(Line::from(tilt.to_string()).dark_gray());
        }
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), wrapper);
    }

    fn render_form(&self, frame: &mut Frame, form: &ContactForm, panel: Style) {
        let block = Block::bordered()
            .title(" Contact ")
            .border_style(Style::new().fg(Color::Gray))
            .style(panel);
        let inner = block.inner(form.area);
        frame.render_widget(block, form.area);

        let mut lines: Vec<Line> = form
            .fields
            .iter()
            .enumerate()
            .map(|(i, field)| {
                let focused = form.focus == Some(i);
                let label = Span::styled(
                    format!("{:>8}: ", field.label),
                    Style::new().fg(Color::Gray),
                );
                let mut value = field.value.clone();
                if focused {
                    value.push('_');
                }
                let style = if focused {
                    Style::new().fg(Color::White).add_modifier(Modifier::UNDERLINED)
                } else {
                    Style::new().fg(Color::White)
                };
                Line::from(vec![label, Span::styled(value, style)])
            })
            .collect();
        lines.push(Line::default());
        lines.push(Line::from("[ Send ]".bold().fg(Color::Cyan)).centered());
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

/// Move `rect` by `(dx, dy)` cells without leaving `limit`.
fn shift_within(rect: Rect, limit: Rect, dx: i16, dy: i16) -> Rect {
    let max_x = limit.right().saturating_sub(rect.width).max(limit.x);
    let max_y = limit.bottom().saturating_sub(rect.height).max(limit.y);
    let x = (rect.x as i32 + dx as i32).clamp(limit.x as i32, max_x as i32) as u16;
    let y = (rect.y as i32 + dy as i32).clamp(limit.y as i32, max_y as i32) as u16;
    Rect::new(x, y, rect.width, rect.height).intersection(limit)
}

fn render_alert(frame: &mut Frame, area: Rect, message: &str) {
    let width = (message.chars().count() as u16 + 6).min(area.width);
    let [row] = Layout::vertical([Constraint::Length(5)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);

    let text = vec![
        Line::from(message).bold(),
        Line::from("press any key".dark_gray()),
    ];
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::bordered().title(" Message ").style(Style::new().bg(Color::Black)));
    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
}

#[cfg(test)]
mod tests {
    use super::*;
    use lakeside_core::Size;
    use lakeside_ui::SUBMIT_ACKNOWLEDGEMENT;
    use ratatui::{Terminal, backend::TestBackend};
    use std::collections::VecDeque;

    /// Replays a fixed list of events.
    struct Scripted(VecDeque<HostEvent>);

    impl EventSource for Scripted {
        fn next_event(&mut self, _timeout: Duration) -> io::Result<Option<HostEvent>> {
            Ok(self.0.pop_front())
        }
    }

    fn app(config: &Config) -> App<StdRng> {
        App::with_rng(config, 100, 40, StdRng::seed_from_u64(42))
    }

    fn key(app: &mut App<StdRng>, key: KeyInput) {
        app.handle_event(HostEvent::Key(key));
    }

    fn type_text(app: &mut App<StdRng>, text: &str) {
        for ch in text.chars() {
            key(app, KeyInput::Char(ch));
        }
    }

    #[test]
    fn test_initial_surface_matches_viewport() {
        let app = app(&Config::default());
        assert_eq!(app.animator.size(), Size::new(800.0, 640.0));
    }

    #[test]
    fn test_resize_tracks_viewport_exactly() {
        let mut app = app(&Config::default());
        let mut events = Scripted(VecDeque::from([HostEvent::Resized {
            columns: 57,
            rows: 23,
        }]));
        assert!(app.pump(&mut events, Duration::ZERO).unwrap());
        assert_eq!(app.animator.size(), Size::new(57.0 * 8.0, 23.0 * 16.0));
        assert_eq!(app.area, Rect::new(0, 0, 57, 23));
        assert!(!app.pump(&mut events, Duration::ZERO).unwrap());
    }

    #[test]
    fn test_submit_is_intercepted_and_acknowledged_once() {
        let mut app = app(&Config::default());
        key(&mut app, KeyInput::Tab);
        type_text(&mut app, "Ada");
        key(&mut app, KeyInput::Enter);

        assert_eq!(app.alert.message(), Some(SUBMIT_ACKNOWLEDGEMENT));
        assert_eq!(app.alert.shown(), 1);
        // Default action suppressed: the entered values are still there.
        let form = app.page.form.as_ref().unwrap();
        assert_eq!(form.fields[0].value, "Ada");

        // First key closes the message and does nothing else.
        key(&mut app, KeyInput::Char('x'));
        assert_eq!(app.alert.message(), None);
        assert_eq!(app.page.form.as_ref().unwrap().fields[0].value, "Ada");

        key(&mut app, KeyInput::Enter);
        assert_eq!(app.alert.shown(), 2);
    }

    #[test]
    fn test_other_form_gets_default_action() {
        let mut config = Config::default();
        config.page.form_id = "newsletter".to_string();
        let mut app = app(&config);
        assert!(app.interceptor.is_none());

        key(&mut app, KeyInput::Tab);
        type_text(&mut app, "Ada");
        key(&mut app, KeyInput::Enter);

        assert_eq!(app.alert.shown(), 0);
        assert_eq!(app.page.form.as_ref().unwrap().fields[0].value, "");
    }

    #[test]
    fn test_missing_elements_are_a_no_op() {
        let mut config = Config::default();
        config.page.form_id = String::new();
        config.page.cards.clear();
        let mut app = app(&config);

        key(&mut app, KeyInput::Tab);
        key(&mut app, KeyInput::Enter);
        app.handle_event(HostEvent::PointerMoved { column: 10, row: 5 });
        app.animator.tick();

        assert!(!app.running);
        assert_eq!(app.alert.shown(), 0);
        assert!(!app.animator.surface().shapes().is_empty());
    }

    #[test]
    fn test_pointer_tilts_and_leave_resets() {
        let mut app = app(&Config::default());
        let card = app.page.cards[0].area;

        app.handle_event(HostEvent::PointerMoved {
            column: card.x,
            row: card.y,
        });
        let tilt = app.page.cards[0].transform();
        assert!(tilt.rotate_x > 0.0);
        assert!(tilt.rotate_y < 0.0);

        app.handle_event(HostEvent::PointerMoved { column: 0, row: 0 });
        assert!(app.page.cards[0].transform().is_neutral());
    }

    #[test]
    fn test_resize_releases_hovered_card() {
        let mut app = app(&Config::default());
        let card = app.page.cards[2].area;
        app.handle_event(HostEvent::PointerMoved {
            column: card.right() - 1,
            row: card.bottom() - 1,
        });
        assert!(!app.page.cards[2].transform().is_neutral());

        app.handle_event(HostEvent::Resized {
            columns: 80,
            rows: 30,
        });
        assert!(app.page.cards[2].transform().is_neutral());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app(&Config::default());
        app.running = true;
        key(&mut app, KeyInput::Tab);
        key(&mut app, KeyInput::Char('q'));
        assert!(app.running, "q types into a focused field");
        key(&mut app, KeyInput::Esc);
        assert!(app.running, "Esc first leaves the field");
        key(&mut app, KeyInput::Esc);
        assert!(!app.running);

        app.running = true;
        key(&mut app, KeyInput::Tab);
        key(&mut app, KeyInput::Interrupt);
        assert!(!app.running);
    }

    #[test]
    fn test_interrupt_quits_while_message_is_open() {
        let mut app = app(&Config::default());
        app.running = true;
        key(&mut app, KeyInput::Enter);
        assert!(app.alert.message().is_some());

        key(&mut app, KeyInput::Interrupt);
        assert!(!app.running);
    }

    #[test]
    fn test_enter_sends_without_focused_field() {
        let mut app = app(&Config::default());
        assert_eq!(app.page.form.as_ref().unwrap().focus, None);
        key(&mut app, KeyInput::Enter);
        assert_eq!(app.alert.message(), Some(SUBMIT_ACKNOWLEDGEMENT));
        assert_eq!(app.alert.shown(), 1);
    }

    #[test]
    fn test_render_draws_page_over_scene() {
        let mut app = app(&Config::default());
        app.animator.tick();
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Lakeside"));
        assert!(text.contains("Contact"));
        assert!(text.contains("rotateX(0deg)"));
        assert!(text.contains("▀"));
    }

    #[test]
    fn test_render_shows_acknowledgement() {
        let mut app = app(&Config::default());
        key(&mut app, KeyInput::Tab);
        key(&mut app, KeyInput::Enter);
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains(SUBMIT_ACKNOWLEDGEMENT));
    }

    #[test]
    fn test_shift_within_clamps() {
        let limit = Rect::new(10, 10, 20, 5);
        let rect = Rect::new(11, 10, 18, 5);
        assert_eq!(shift_within(rect, limit, 1, 0), Rect::new(12, 10, 18, 5));
        assert_eq!(shift_within(rect, limit, 5, -3), Rect::new(12, 10, 18, 5));
        assert_eq!(shift_within(rect, limit, -5, 2), Rect::new(10, 10, 18, 5));
    }
}
