use crate::clock::Clock;
use crate::diagnostics::LogRecorder;
use crate::help::Help;
use crate::page::{Page, PageWidget};
use crate::theme::BASE_STYLE;
use crate::view::CalendarView;
use crossterm::event::{read, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::Backend, buffer::Buffer, layout::Rect, widgets::Widget, Terminal};
use std::io::{self, Write};

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct App<C> {
    view: CalendarView<Page, LogRecorder, C>,
    state: AppState,
}

impl<C: Clock> App<C> {
    pub(crate) fn new(view: CalendarView<Page, LogRecorder, C>) -> App<C> {
        App {
            view,
            state: AppState::Calendar,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.draw(terminal)?;
            self.handle_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if let Some(KeyEvent {
            code, modifiers, ..
        }) = read()?.as_key_press_event()
        {
            if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                self.state = AppState::Quitting;
            } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                self.beep()?;
            }
        }
        // else: Redraw on resize, and we might as well redraw on other stuff
        // too
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key or tried to move
    // past the ends of the calendar
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match self.state {
            AppState::Calendar => match key {
                KeyCode::Char('h' | 'p') | KeyCode::Left | KeyCode::PageUp => {
                    self.view.previous_month().is_ok()
                }
                KeyCode::Char('l' | 'n') | KeyCode::Right | KeyCode::PageDown => {
                    self.view.next_month().is_ok()
                }
                KeyCode::Char('0') | KeyCode::Home => {
                    self.view.jump_to_today();
                    true
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.state = AppState::Quitting;
                    true
                }
                KeyCode::Char('?') => {
                    self.state = AppState::Helping;
                    true
                }
                _ => {
                    log::debug!("Ignoring unbound key {key:?}");
                    false
                }
            },
            AppState::Helping => {
                self.state = AppState::Calendar;
                true
            }
            AppState::Quitting => false,
        }
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quitting(&self) -> bool {
        self.state == AppState::Quitting
    }
}

impl<C: Clock> Widget for &App<C> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        PageWidget(self.view.surface()).render(area, buf);
        if self.state == AppState::Helping {
            Help(BASE_STYLE).render(area, buf);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum AppState {
    Calendar,
    Helping,
    Quitting,
}
