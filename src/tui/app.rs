//! Kanban board interface.
//!
//! This module implements the three-column board view plus the two popup
//! dialogs: task details (read/edit view, nothing written back) and task
//! creation. The column projection is rebuilt from the store on every
//! change; the store itself is the only owner of task state.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};

use crate::error::StoreError;
use crate::fields::{format_status, Status};
use crate::store::TaskStore;
use crate::tui::{
    colors::{DARK_GREEN, GOLD, STEEL_BLUE},
    enums::AppState,
    task_form::{TaskForm, DESCRIPTION_FIELD, STATUS_FIELD, TITLE_FIELD},
    utils::centered_rect,
};

/// Main application state for the board UI.
pub struct App {
    store: TaskStore,
    state: AppState,
    selected_column: usize,
    selected_card: usize,
    column_scroll_offsets: [usize; 3],
    form: TaskForm,
    status_message: String,

    // Task ids organised into the three status columns, rebuilt from the
    // store after every mutation.
    columns: [Vec<u64>; 3],
}

impl App {
    /// Create a new App bound to an already-hydrated store.
    pub fn new(store: TaskStore) -> Self {
        let mut app = App {
            store,
            state: AppState::Board,
            selected_column: 0,
            selected_card: 0,
            column_scroll_offsets: [0; 3],
            form: TaskForm::new(),
            status_message: String::new(),
            columns: Default::default(),
        };

        app.update_columns();
        app
    }

    /// Rebuild the column projection from the store.
    ///
    /// Full clear-and-rebuild: every column is emptied and repopulated in
    /// store order, so grouping is by status and order within a column is
    /// insertion order.
    fn update_columns(&mut self) {
        for (i, column) in self.columns.iter_mut().enumerate() {
            column.clear();
            self.column_scroll_offsets[i] = 0;
        }

        for task in self.store.tasks() {
            self.columns[task.status.column_index()].push(task.id);
        }

        self.clamp_selection();
    }

    /// Ensure selected column and card indices are valid.
    fn clamp_selection(&mut self) {
        if self.selected_column >= self.columns.len() {
            self.selected_column = 0;
        }

        let column_len = self.columns[self.selected_column].len();
        if column_len == 0 {
            self.selected_card = 0;
            self.column_scroll_offsets[self.selected_column] = 0;
        } else if self.selected_card >= column_len {
            self.selected_card = column_len - 1;
        }
    }

    /// ID of the card currently under the selection, if the column has any.
    fn selected_task_id(&self) -> Option<u64> {
        self.columns[self.selected_column]
            .get(self.selected_card)
            .copied()
    }

    /// Accent color for a column.
    fn column_color(status: Status) -> Color {
        match status {
            Status::Todo => STEEL_BLUE,
            Status::Doing => GOLD,
            Status::Done => DARK_GREEN,
        }
    }

    /// Set a status message to display in the status bar.
    fn set_status_message(&mut self, msg: String) {
        self.status_message = msg;
    }

    /// Clear the current status message.
    fn clear_status_message(&mut self) {
        self.status_message.clear();
    }

    /// Open the detail dialog for the selected card.
    fn open_selected_task(&mut self) {
        if let Some(task) = self.selected_task_id().and_then(|id| self.store.get(id)) {
            self.form = TaskForm::from_task(task);
            self.state = AppState::TaskDetail;
        }
    }

    /// Open the create dialog with a blank form.
    fn open_add_dialog(&mut self) {
        self.form = TaskForm::new();
        self.state = AppState::AddTask;
    }

    /// Close whichever dialog is open, discarding form contents.
    fn close_dialog(&mut self) {
        self.form.reset();
        self.state = AppState::Board;
    }

    /// Submit the create form.
    ///
    /// On success the task is appended and persisted, the columns are
    /// rebuilt, the form is reset and the dialog closes. On failure the
    /// dialog stays open with an inline message and nothing is mutated.
    fn submit_new_task(&mut self) {
        let result = self.store.create(
            &self.form.title.value,
            &self.form.description.value,
            self.form.selected_status(),
        );

        match result {
            Ok(id) => {
                self.update_columns();
                self.form.reset();
                self.state = AppState::Board;
                self.set_status_message(format!("Task #{id} created"));
            }
            Err(StoreError::EmptyTitle) => {
                self.set_status_message("Title is required".to_string());
            }
            Err(e) => {
                self.set_status_message(format!("Error: {e}"));
            }
        }
    }

    /// Handle keyboard input, dispatching on the current state.
    ///
    /// Returns true if the application should quit.
    fn handle_input(&mut self) -> io::Result<bool> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                let should_quit = match self.state {
                    AppState::Board => self.handle_board_input(key.code, key.modifiers),
                    AppState::TaskDetail => self.handle_detail_input(key.code),
                    AppState::AddTask => self.handle_add_input(key.code),
                };
                if should_quit {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    /// Handle keyboard input on the board itself.
    fn handle_board_input(&mut self, key: KeyCode, modifiers: KeyModifiers) -> bool {
        self.clear_status_message();

        match key {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::Char('q') | KeyCode::Esc => return true,

            // Column navigation
            KeyCode::Left | KeyCode::Char('h') => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                    self.clamp_selection();
                }
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if self.selected_column < self.columns.len() - 1 {
                    self.selected_column += 1;
                    self.clamp_selection();
                }
            }

            // Card navigation within a column
            KeyCode::Up | KeyCode::Char('k') => {
                if self.selected_card > 0 {
                    self.selected_card -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let column_len = self.columns[self.selected_column].len();
                if column_len > 0 && self.selected_card < column_len - 1 {
                    self.selected_card += 1;
                }
            }

            KeyCode::Enter => self.open_selected_task(),
            KeyCode::Char('a') => self.open_add_dialog(),

            _ => {}
        }
        false
    }

    /// Handle keyboard input in the detail dialog.
    ///
    /// The fields accept edits, but closing discards them: no save action
    /// is wired and the store is never touched from this dialog.
    fn handle_detail_input(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Esc | KeyCode::Enter => self.close_dialog(),
            KeyCode::Tab | KeyCode::Down => self.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.form.prev_field(),
            KeyCode::Left => self.form.handle_left_right(false),
            KeyCode::Right => self.form.handle_left_right(true),
            KeyCode::Backspace => self.form.handle_backspace(),
            KeyCode::Delete => self.form.handle_delete(),
            KeyCode::Char(c) => self.form.handle_char(c),
            _ => {}
        }
        false
    }

    /// Handle keyboard input in the create dialog.
    fn handle_add_input(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Esc => {
                self.close_dialog();
                self.clear_status_message();
            }
            KeyCode::Enter => self.submit_new_task(),
            KeyCode::Tab | KeyCode::Down => self.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.form.prev_field(),
            KeyCode::Left => self.form.handle_left_right(false),
            KeyCode::Right => self.form.handle_left_right(true),
            KeyCode::Backspace => self.form.handle_backspace(),
            KeyCode::Delete => self.form.handle_delete(),
            KeyCode::Char(c) => self.form.handle_char(c),
            _ => {}
        }
        false
    }

    /// Main render function.
    fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Board
                Constraint::Length(1), // Status bar
            ])
            .split(f.area());

        self.render_header(f, chunks[0]);
        self.render_board(f, chunks[1]);
        self.render_status_bar(f, chunks[2]);

        match self.state {
            AppState::Board => {}
            AppState::TaskDetail => self.render_form_popup(f, "Task Details"),
            AppState::AddTask => self.render_form_popup(f, "New Task"),
        }
    }

    /// Render the header.
    fn render_header(&self, f: &mut Frame, area: Rect) {
        let header_text = vec![Line::from(vec![
            Span::styled("TASK BOARD", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(
                format!("{} tasks", self.store.tasks().len()),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::ITALIC),
            ),
        ])];

        let header_block = Paragraph::new(header_text)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center);
        f.render_widget(header_block, area);
    }

    /// Render the three status columns.
    fn render_board(&mut self, f: &mut Frame, area: Rect) {
        let columns_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(33),
                Constraint::Percentage(34),
                Constraint::Percentage(33),
            ])
            .split(area);

        for (i, &column_area) in columns_layout.iter().enumerate() {
            self.render_column(f, column_area, i, Status::ALL[i]);
        }
    }

    /// Render a single column with its cards.
    fn render_column(&mut self, f: &mut Frame, area: Rect, column_index: usize, status: Status) {
        let is_selected = column_index == self.selected_column;
        let accent = Self::column_color(status);

        let border_style = if is_selected {
            Style::default().fg(accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(
                "{} ({})",
                format_status(status),
                self.columns[column_index].len()
            ))
            .border_style(border_style);

        let inner = block.inner(area);
        f.render_widget(block, area);

        let cards = &self.columns[column_index];
        if cards.is_empty() {
            return;
        }

        let card_height = 3;
        let available_height = inner.height as usize;
        let visible_cards = available_height / card_height;

        // Keep the selected card visible in its column.
        let scroll_offset = if is_selected && visible_cards > 0 {
            let start_visible = self.column_scroll_offsets[column_index];
            let end_visible = start_visible + visible_cards;

            if self.selected_card < start_visible {
                self.column_scroll_offsets[column_index] = self.selected_card;
                self.selected_card
            } else if self.selected_card >= end_visible {
                let new_offset = self.selected_card - visible_cards + 1;
                self.column_scroll_offsets[column_index] = new_offset;
                new_offset
            } else {
                start_visible
            }
        } else {
            self.column_scroll_offsets[column_index]
        };

        let mut current_y = 0;
        let mut rendered_cards = 0;

        for (card_index, &task_id) in cards.iter().enumerate().skip(scroll_offset) {
            if let Some(task) = self.store.get(task_id) {
                if current_y + card_height > available_height {
                    break;
                }

                let is_this_card_selected = is_selected && card_index == self.selected_card;

                let card_area = Rect {
                    x: inner.x,
                    y: inner.y + current_y as u16,
                    width: inner.width,
                    height: card_height as u16,
                };

                let style = if is_this_card_selected {
                    Style::default()
                        .bg(accent)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().bg(Color::DarkGray)
                };

                let card = Paragraph::new(format!("#{} {}", task.id, task.title))
                    .block(Block::default().borders(Borders::ALL))
                    .style(style)
                    .wrap(Wrap { trim: true });
                f.render_widget(card, card_area);

                current_y += card_height;
                rendered_cards += 1;
            }
        }

        // Scroll indicators
        if scroll_offset > 0 {
            let indicator = Paragraph::new(format!("▲ +{} above", scroll_offset))
                .style(Style::default().fg(Color::Cyan));
            f.render_widget(
                indicator,
                Rect {
                    x: inner.x,
                    y: inner.y,
                    width: inner.width,
                    height: 1,
                },
            );
        }

        let remaining = cards.len() - scroll_offset - rendered_cards;
        if remaining > 0 && inner.height > 0 {
            let indicator = Paragraph::new(format!("▼ +{} below", remaining))
                .style(Style::default().fg(Color::Cyan));
            f.render_widget(
                indicator,
                Rect {
                    x: inner.x,
                    y: inner.y + inner.height - 1,
                    width: inner.width,
                    height: 1,
                },
            );
        }
    }

    /// Render the popup dialog shared by the detail and create views.
    fn render_form_popup(&mut self, f: &mut Frame, title: &str) {
        let popup_area = centered_rect(60, 60, f.area());
        f.render_widget(Clear, popup_area);

        let popup_block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_alignment(Alignment::Center)
            .border_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));

        let inner = popup_block.inner(popup_area);
        f.render_widget(popup_block, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(4),    // Description
                Constraint::Length(3), // Status
                Constraint::Length(1), // Instructions
            ])
            .split(inner);

        let field_style = |field: usize| {
            if self.form.current_field == field {
                Style::default().fg(GOLD)
            } else {
                Style::default()
            }
        };

        let title_input = Paragraph::new(self.form.title.value.as_str()).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Title *")
                .border_style(field_style(TITLE_FIELD)),
        );
        f.render_widget(title_input, chunks[0]);

        let desc_input = Paragraph::new(self.form.description.value.as_str())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Description")
                    .border_style(field_style(DESCRIPTION_FIELD)),
            )
            .wrap(Wrap { trim: true });
        f.render_widget(desc_input, chunks[1]);

        let status_selector =
            Paragraph::new(format!("< {} >", format_status(self.form.selected_status()))).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Status")
                    .border_style(field_style(STATUS_FIELD)),
            );
        f.render_widget(status_selector, chunks[2]);

        let instructions = match self.state {
            AppState::AddTask => "Tab: Next field  Enter: Create  Esc: Cancel",
            _ => "Tab: Next field  Esc: Close",
        };
        let instructions = Paragraph::new(instructions)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        f.render_widget(instructions, chunks[3]);
    }

    /// Render the status bar.
    fn render_status_bar(&self, f: &mut Frame, area: Rect) {
        let status_text = if !self.status_message.is_empty() {
            self.status_message.clone()
        } else {
            match self.state {
                AppState::Board => {
                    "a: Add task | Enter: Details | Arrows: Navigate | q: Quit".to_string()
                }
                AppState::TaskDetail => "Task Details".to_string(),
                AppState::AddTask => "Add New Task".to_string(),
            }
        };

        let accent = Self::column_color(Status::ALL[self.selected_column]);
        let text_color = match accent {
            GOLD => Color::Rgb(20, 20, 20),
            _ => Color::White,
        };

        let status = Paragraph::new(status_text)
            .style(Style::default().bg(accent).fg(text_color))
            .alignment(Alignment::Left);

        f.render_widget(status, area);
    }

    /// Main event loop.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.handle_input()? {
                break;
            }
        }
        Ok(())
    }
}
