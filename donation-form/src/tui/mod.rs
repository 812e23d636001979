//! Headless terminal rendition of the donation registration page.
//!
//! Layout:
//! - Centered window titled "Clothing Donation Registration"
//! - Left banner panel with key help
//! - Form panel: hand-over mode radio, name, e-mail, clothing type, crisis region,
//!   pickup address + postal code (pickup only) or the office note (office only)
//! - Message line colored by tone, then the button row:
//!   [ Check registration ] [ Register ] [ Cancel ]
//!
//! The form panel state (`FormScreen`) is the `Document` the controller works on.
//! A successful registration navigates to `confirm.html`, which this adapter
//! renders as the confirmation page.
//!
//! Note: Logging is file-only in TUI mode (stdout logging is disabled) to avoid corrupting the terminal UI.

use crate::config::{FormConfig, CONFIRM_LOCATION};
use crate::form::confirmation::{load_submission, summary_rows};
use crate::form::memory::{MemorySessionStore, RecordingNavigator};
use crate::form::{
    CheckOutcome, Document, FieldError, FieldId, FormController, MessageTone, Section,
    SubmitOutcome,
};
use crate::models::options::ChoiceOption;
use crate::models::Mode;
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use log::{error, info};
use ratatui::backend::{CrosstermBackend, TestBackend};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

const BANNER: &str = r#"   _____
  /     \
 |  (o)  |
  \_____/
  KLEIDER
  SPENDE"#;

const OFFICE_NOTE: &str =
    "Please bring your donation to our office during opening hours. No address needed.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Form,
    Confirmation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ButtonFocus {
    Check,
    Register,
    Cancel,
}

impl ButtonFocus {
    fn label(&self) -> &'static str {
        match self {
            ButtonFocus::Check => "Check registration",
            ButtonFocus::Register => "Register",
            ButtonFocus::Cancel => "Cancel",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FocusTarget {
    Mode,
    Field(FieldId),
    Button(ButtonFocus),
}

#[derive(Debug, Clone, Default)]
struct TextInput {
    value: String,
    /// Cursor position in characters.
    cursor: usize,
}

impl TextInput {
    fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.chars().count();
    }

    fn byte_index(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn handle_key(&mut self, code: KeyCode) -> bool {
        let len = self.value.chars().count();
        match code {
            KeyCode::Char(c) => {
                let idx = self.byte_index();
                self.value.insert(idx, c);
                self.cursor += 1;
                true
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let idx = self.byte_index();
                    self.value.remove(idx);
                }
                true
            }
            KeyCode::Delete => {
                if self.cursor < len {
                    let idx = self.byte_index();
                    self.value.remove(idx);
                }
                true
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                true
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(len);
                true
            }
            KeyCode::Home => {
                self.cursor = 0;
                true
            }
            KeyCode::End => {
                self.cursor = len;
                true
            }
            _ => false,
        }
    }
}

/// A select element: nothing selected reads as the empty string.
#[derive(Debug, Clone)]
struct ChoiceInput {
    options: Vec<ChoiceOption>,
    selected: Option<usize>,
}

impl ChoiceInput {
    fn new(options: Vec<ChoiceOption>) -> Self {
        Self {
            options,
            selected: None,
        }
    }

    fn value(&self) -> String {
        self.selected
            .and_then(|i| self.options.get(i))
            .map(|o| o.value.clone())
            .unwrap_or_default()
    }

    fn display(&self) -> &str {
        self.selected
            .and_then(|i| self.options.get(i))
            .map(|o| o.label.as_str())
            .unwrap_or("-- please select --")
    }

    fn select_value(&mut self, value: &str) {
        self.selected = self.options.iter().position(|o| o.value == value);
    }

    // Cycle order: none -> first -> ... -> last -> none
    fn next(&mut self) {
        self.selected = match self.selected {
            None if !self.options.is_empty() => Some(0),
            Some(i) if i + 1 < self.options.len() => Some(i + 1),
            _ => None,
        };
    }

    fn prev(&mut self) {
        self.selected = match self.selected {
            None => self.options.len().checked_sub(1),
            Some(0) => None,
            Some(i) => Some(i - 1),
        };
    }
}

/// The form panel; implements `Document` for the controller.
#[derive(Debug, Clone)]
pub struct FormScreen {
    mode: Mode,
    name: TextInput,
    email: TextInput,
    clothing_type: ChoiceInput,
    crisis: ChoiceInput,
    address: TextInput,
    postcode: TextInput,
    pickup_visible: bool,
    office_info_visible: bool,
    message: Option<(String, MessageTone)>,
    focus: FocusTarget,
    error_fields: Vec<FieldId>,
}

impl FormScreen {
    pub fn new(config: &FormConfig) -> Self {
        Self {
            mode: Mode::Pickup,
            name: TextInput::default(),
            email: TextInput::default(),
            clothing_type: ChoiceInput::new(config.clothing_types.clone()),
            crisis: ChoiceInput::new(config.crisis_regions.clone()),
            address: TextInput::default(),
            postcode: TextInput::default(),
            pickup_visible: true,
            office_info_visible: false,
            message: None,
            focus: FocusTarget::Field(FieldId::Name),
            error_fields: Vec::new(),
        }
    }

    fn text_input_mut(&mut self, field: FieldId) -> Option<&mut TextInput> {
        match field {
            FieldId::Name => Some(&mut self.name),
            FieldId::Email => Some(&mut self.email),
            FieldId::Address => Some(&mut self.address),
            FieldId::Postcode => Some(&mut self.postcode),
            FieldId::ClothingType | FieldId::Crisis => None,
        }
    }

    fn choice_mut(&mut self, field: FieldId) -> Option<&mut ChoiceInput> {
        match field {
            FieldId::ClothingType => Some(&mut self.clothing_type),
            FieldId::Crisis => Some(&mut self.crisis),
            _ => None,
        }
    }

    /// Focusable elements in document order; hidden fields are skipped.
    fn focus_order(&self) -> Vec<FocusTarget> {
        let mut order = vec![
            FocusTarget::Field(FieldId::Name),
            FocusTarget::Field(FieldId::Email),
            FocusTarget::Mode,
            FocusTarget::Field(FieldId::ClothingType),
            FocusTarget::Field(FieldId::Crisis),
        ];
        if self.pickup_visible {
            order.push(FocusTarget::Field(FieldId::Address));
            order.push(FocusTarget::Field(FieldId::Postcode));
        }
        order.push(FocusTarget::Button(ButtonFocus::Check));
        order.push(FocusTarget::Button(ButtonFocus::Register));
        order.push(FocusTarget::Button(ButtonFocus::Cancel));
        order
    }

    fn move_focus(&mut self, forward: bool) {
        let order = self.focus_order();
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            (current + 1) % order.len()
        } else {
            (current + order.len() - 1) % order.len()
        };
        self.focus = order[next];
    }
}

impl Document for FormScreen {
    fn selected_mode(&self) -> Option<String> {
        Some(self.mode.as_id().to_string())
    }

    fn field_value(&self, field: FieldId) -> Option<String> {
        let value = match field {
            FieldId::Name => self.name.value.clone(),
            FieldId::Email => self.email.value.clone(),
            FieldId::ClothingType => self.clothing_type.value(),
            FieldId::Crisis => self.crisis.value(),
            FieldId::Address => self.address.value.clone(),
            FieldId::Postcode => self.postcode.value.clone(),
        };
        Some(value)
    }

    fn set_section_visible(&mut self, section: Section, visible: bool) {
        match section {
            Section::PickupFields => self.pickup_visible = visible,
            Section::OfficeInfo => self.office_info_visible = visible,
        }
        // Focus must not stay on a field that just disappeared.
        if !self.focus_order().contains(&self.focus) {
            self.focus = FocusTarget::Mode;
        }
    }

    fn set_message(&mut self, text: &str, tone: MessageTone) {
        self.message = Some((text.to_string(), tone));
    }

    fn clear_message(&mut self) {
        self.message = None;
    }

    fn focus_first_field(&mut self) {
        if let Some(first) = self.focus_order().first() {
            self.focus = *first;
        }
    }
}

type TuiController = FormController<FormScreen, MemorySessionStore, RecordingNavigator>;

struct TuiApp {
    controller: TuiController,
    config: FormConfig,
    page: Page,
    quit: bool,
}

impl TuiApp {
    fn new(config: FormConfig) -> Self {
        let controller = FormController::attach(
            FormScreen::new(&config),
            MemorySessionStore::new(),
            RecordingNavigator::new(),
            &config,
        );
        Self {
            controller,
            config,
            page: Page::Form,
            quit: false,
        }
    }

    fn screen(&self) -> &FormScreen {
        self.controller.document()
    }

    fn screen_mut(&mut self) -> &mut FormScreen {
        self.controller.document_mut()
    }
}

pub fn run(config: FormConfig) -> Result<()> {
    info!("[PHASE: tui] [STEP: start] Starting donation form TUI");

    let mut terminal = setup_terminal()?;
    install_panic_restore();
    let result = run_loop(&mut terminal, config);
    restore_terminal(&mut terminal)?;

    result
}

fn new_smoke_app(config: &FormConfig, target: &str) -> TuiApp {
    // Smoke-only: seeded state for deterministic page rendering in CI/tooling.
    let mut app = TuiApp::new(config.clone());
    match target {
        "office" => {
            app.screen_mut().mode = Mode::Office;
            app.controller.on_mode_change();
        }
        "errors" => {
            app.screen_mut().postcode.set("2011");
            activate(&mut app, ButtonFocus::Check);
        }
        "confirm" => {
            fill_sample(app.screen_mut());
            activate(&mut app, ButtonFocus::Register);
        }
        _ => {}
    }
    app
}

fn fill_sample(screen: &mut FormScreen) {
    screen.mode = Mode::Pickup;
    screen.name.set("Erika Mustermann");
    screen.email.set("erika@example.org");
    screen.clothing_type.select_value("coats");
    screen.crisis.select_value("regionA");
    screen.address.set("Main St 1");
    screen.postcode.set("10999");
}

/// Non-interactive smoke mode: render a single frame and exit.
/// Targets: form|office|errors|confirm
pub fn smoke(config: &FormConfig, target: &str) -> Result<()> {
    info!(
        "[PHASE: tui] [STEP: smoke] Rendering single-frame TUI smoke target={}",
        target
    );

    let t = target.trim().to_ascii_lowercase();
    let app = new_smoke_app(config, t.as_str());

    // In-memory backend: no raw mode / alternate screen.
    let backend = TestBackend::new(100, 30);
    let mut terminal = Terminal::new(backend)?;
    terminal.draw(|f| draw(f.size(), f, &app))?;

    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    or_release(enter_alternate_screen(), release_terminal)
}

fn enter_alternate_screen() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Runs `release` when `step` failed, then hands the result back.
fn or_release<T>(step: Result<T>, release: impl FnOnce()) -> Result<T> {
    if step.is_err() {
        release();
    }
    step
}

/// Best-effort reset of raw mode and the alternate screen, safe to call from a panic hook.
fn release_terminal() {
    let _ = disable_raw_mode();
    let _ = io::stdout().execute(LeaveAlternateScreen);
}

/// A panic inside the event loop must not leave the shell in raw mode.
fn install_panic_restore() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        release_terminal();
        previous(info);
    }));
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, config: FormConfig) -> Result<()> {
    let tick_rate = Duration::from_millis(100);
    let mut last_tick = Instant::now();
    let mut app = TuiApp::new(config);

    while !app.quit {
        terminal.draw(|f| draw(f.size(), f, &app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_millis(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(&mut app, key.code);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }
    }

    Ok(())
}

fn handle_key(app: &mut TuiApp, code: KeyCode) {
    if app.page == Page::Confirmation {
        if matches!(code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q')) {
            app.quit = true;
        }
        return;
    }

    match code {
        KeyCode::Esc => {
            app.quit = true;
            return;
        }
        KeyCode::Tab | KeyCode::Down => {
            app.screen_mut().move_focus(true);
            return;
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.screen_mut().move_focus(false);
            return;
        }
        _ => {}
    }

    let focus = app.screen().focus;
    match focus {
        FocusTarget::Mode => {
            if matches!(code, KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')) {
                let screen = app.screen_mut();
                screen.mode = screen.mode.toggle();
                screen.error_fields.clear();
                app.controller.on_mode_change();
            }
        }
        FocusTarget::Field(field @ (FieldId::ClothingType | FieldId::Crisis)) => {
            if let Some(choice) = app.screen_mut().choice_mut(field) {
                match code {
                    KeyCode::Left => choice.prev(),
                    KeyCode::Right | KeyCode::Char(' ') => choice.next(),
                    _ => {}
                }
            }
        }
        FocusTarget::Field(field) => {
            if code == KeyCode::Enter {
                app.screen_mut().move_focus(true);
            } else if let Some(input) = app.screen_mut().text_input_mut(field) {
                input.handle_key(code);
            }
        }
        FocusTarget::Button(button) => match code {
            KeyCode::Left | KeyCode::Right => {
                let next = match (button, code) {
                    (ButtonFocus::Check, KeyCode::Right) => ButtonFocus::Register,
                    (ButtonFocus::Register, KeyCode::Right) => ButtonFocus::Cancel,
                    (ButtonFocus::Cancel, KeyCode::Right) => ButtonFocus::Check,
                    (ButtonFocus::Check, _) => ButtonFocus::Cancel,
                    (ButtonFocus::Register, _) => ButtonFocus::Check,
                    (ButtonFocus::Cancel, _) => ButtonFocus::Register,
                };
                app.screen_mut().focus = FocusTarget::Button(next);
            }
            KeyCode::Enter => activate(app, button),
            _ => {}
        },
    }
}

fn activate(app: &mut TuiApp, button: ButtonFocus) {
    match button {
        ButtonFocus::Check => {
            let errors = match app.controller.on_validate_clicked() {
                CheckOutcome::Valid => Vec::new(),
                CheckOutcome::Invalid(errors) => errors,
            };
            mark_errors(app.screen_mut(), &errors);
        }
        ButtonFocus::Register => match app.controller.on_submit() {
            Ok(SubmitOutcome::Rejected(errors)) => mark_errors(app.screen_mut(), &errors),
            Ok(SubmitOutcome::Submitted(_)) => {
                app.screen_mut().error_fields.clear();
                follow_navigation(app);
            }
            Err(e) => {
                error!("[PHASE: tui] [STEP: submit] Registration failed: {:#}", e);
                app.screen_mut().set_message(
                    &format!("Registration could not be saved: {}", e),
                    MessageTone::Warning,
                );
            }
        },
        ButtonFocus::Cancel => app.quit = true,
    }
}

fn mark_errors(screen: &mut FormScreen, errors: &[FieldError]) {
    screen.error_fields = errors.iter().map(FieldError::field).collect();
}

fn follow_navigation(app: &mut TuiApp) {
    if app.controller.navigator().current() == Some(CONFIRM_LOCATION) {
        info!("[PHASE: tui] [STEP: navigate] Showing {}", CONFIRM_LOCATION);
        app.page = Page::Confirmation;
    }
}

fn draw(area: Rect, f: &mut ratatui::Frame<'_>, app: &TuiApp) {
    let window_area = centered_window(area, 96, 28);

    let outer_block = Block::default()
        .borders(Borders::ALL)
        .title("Clothing Donation Registration");
    f.render_widget(outer_block, window_area);

    // Inner layout: banner + content, message, buttons row
    let inner = window_area.inner(&ratatui::layout::Margin {
        vertical: 1,
        horizontal: 1,
    });
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Min(0),
                Constraint::Length(3),
                Constraint::Length(1),
            ]
            .as_ref(),
        )
        .split(inner);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(0)].as_ref())
        .split(rows[0]);

    let mut banner_lines: Vec<Line> = BANNER.lines().map(Line::from).collect();
    banner_lines.push(Line::from(""));
    banner_lines.push(Line::from("Tab/Up/Down  move"));
    banner_lines.push(Line::from("Left/Right   choose"));
    banner_lines.push(Line::from("Enter        press"));
    banner_lines.push(Line::from("Esc          quit"));
    let banner = Paragraph::new(Text::from(banner_lines))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false });
    f.render_widget(banner, cols[0]);

    match app.page {
        Page::Form => {
            draw_form(f, cols[1], app.screen());
            draw_message(f, rows[1], app.screen());
            draw_buttons(f, rows[2], app.screen());
        }
        Page::Confirmation => draw_confirmation(f, cols[1], app),
    }
}

fn centered_window(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width.saturating_sub(2)).max(60).min(area.width);
    let h = height.min(area.height.saturating_sub(2)).max(20).min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect {
        x,
        y,
        width: w,
        height: h,
    }
}

fn field_line(label: &str, value: &str, focused: bool, in_error: bool) -> Line<'static> {
    let label_style = if in_error {
        let (r, g, b) = MessageTone::Warning.rgb();
        Style::default().fg(Color::Rgb(r, g, b)).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let value_style = if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::styled(format!("{:<16}", format!("{}:", label)), label_style),
        Span::styled(format!("[{}]", value), value_style),
    ])
}

fn draw_form(f: &mut ratatui::Frame<'_>, area: Rect, screen: &FormScreen) {
    let focused = |target: FocusTarget| screen.focus == target;
    let in_error = |field: FieldId| screen.error_fields.contains(&field);
    let text_line = |field: FieldId, input: &TextInput| {
        field_line(
            field.label(),
            &input.value,
            focused(FocusTarget::Field(field)),
            in_error(field),
        )
    };

    let radio = |mode: Mode| {
        let mark = if screen.mode == mode { "(x)" } else { "( )" };
        format!("{} {}", mark, mode.as_str())
    };
    let mode_style = if focused(FocusTarget::Mode) {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };

    let mut lines = vec![
        text_line(FieldId::Name, &screen.name),
        text_line(FieldId::Email, &screen.email),
        Line::from(""),
        Line::from(vec![
            Span::raw(format!("{:<16}", "Hand-over:")),
            Span::styled(
                format!("{}   {}", radio(Mode::Pickup), radio(Mode::Office)),
                mode_style,
            ),
        ]),
        Line::from(""),
        field_line(
            FieldId::ClothingType.label(),
            screen.clothing_type.display(),
            focused(FocusTarget::Field(FieldId::ClothingType)),
            in_error(FieldId::ClothingType),
        ),
        field_line(
            FieldId::Crisis.label(),
            screen.crisis.display(),
            focused(FocusTarget::Field(FieldId::Crisis)),
            in_error(FieldId::Crisis),
        ),
        Line::from(""),
    ];

    if screen.pickup_visible {
        lines.push(text_line(FieldId::Address, &screen.address));
        lines.push(text_line(FieldId::Postcode, &screen.postcode));
    }
    if screen.office_info_visible {
        lines.push(Line::from(Span::styled(
            OFFICE_NOTE,
            Style::default().add_modifier(Modifier::ITALIC),
        )));
    }

    let p = Paragraph::new(Text::from(lines))
        .block(Block::default().borders(Borders::ALL).title("Registration"))
        .wrap(Wrap { trim: false });
    f.render_widget(p, area);
}

fn draw_message(f: &mut ratatui::Frame<'_>, area: Rect, screen: &FormScreen) {
    let Some((text, tone)) = &screen.message else {
        return;
    };
    let (r, g, b) = tone.rgb();
    let p = Paragraph::new(Text::from(text.clone()))
        .style(Style::default().fg(Color::Rgb(r, g, b)))
        .wrap(Wrap { trim: true });
    f.render_widget(p, area);
}

fn draw_buttons(f: &mut ratatui::Frame<'_>, area: Rect, screen: &FormScreen) {
    let mut spans = Vec::new();
    for (i, button) in [ButtonFocus::Check, ButtonFocus::Register, ButtonFocus::Cancel]
        .into_iter()
        .enumerate()
    {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(button_text(
            button.label(),
            screen.focus == FocusTarget::Button(button),
        ));
    }

    let p = Paragraph::new(Text::from(Line::from(spans))).alignment(Alignment::Right);
    f.render_widget(p, area);
}

fn button_text(label: &str, focused: bool) -> Span<'static> {
    let style = if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    Span::styled(format!("[ {} ]", label), style)
}

fn draw_confirmation(f: &mut ratatui::Frame<'_>, area: Rect, app: &TuiApp) {
    let mut lines = Vec::new();
    match load_submission(app.controller.store()) {
        Ok(Some(record)) => {
            lines.push(Line::from("Thank you! Your donation is registered."));
            lines.push(Line::from(""));
            for (label, value) in summary_rows(&record, &app.config) {
                let shown = if value.is_empty() { "-".to_string() } else { value };
                lines.push(Line::from(format!("{:<16}{}", format!("{}:", label), shown)));
            }
        }
        Ok(None) => lines.push(Line::from("No registration found in this session.")),
        Err(e) => lines.push(Line::from(format!("Registration could not be read: {}", e))),
    }
    lines.push(Line::from(""));
    lines.push(Line::from("Press Enter to exit."));

    let p = Paragraph::new(Text::from(lines))
        .block(Block::default().borders(Borders::ALL).title("Confirmation"))
        .wrap(Wrap { trim: false });
    f.render_widget(p, area);
}
