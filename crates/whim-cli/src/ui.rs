//! Interactive screen for whim
//!
//! Options editor on the left, wheel on the right. The spin animation is
//! advanced by the app's tick, one frame per tick, so the tick rate is the
//! frame delay.

use crate::sound::SpinSound;
use rand::rngs::StdRng;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders},
};
use whim_core::{MAX_OPTIONS, MIN_OPTIONS, SpinEvent, SpinState, Wheel};
use whim_tui::{
    Theme,
    app::AppState,
    input::Action,
    widgets::{InputBox, WheelWidget},
};

/// Editing width used for input scroll bookkeeping
const INPUT_WIDTH: u16 = 24;

/// Which control has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    /// The option-count control
    Count,
    /// One of the option label fields
    Option(usize),
}

/// State of the interactive wheel screen
pub struct WheelScreen {
    /// One text input per option label
    inputs: Vec<InputBox>,
    /// Current option list, rebuilt on every edit
    wheel: Wheel,
    spin: SpinState,
    focus: Focus,
    rng: StdRng,
    theme: Theme,
    sound: SpinSound,
    frame_count: usize,
}

impl WheelScreen {
    pub fn new(
        options: Vec<String>,
        rng: StdRng,
        theme: Theme,
        sound: SpinSound,
        frame_count: usize,
    ) -> anyhow::Result<Self> {
        let wheel = Wheel::new(options)?;
        let inputs = wheel
            .options()
            .iter()
            .map(|label| InputBox::new(label.as_str()))
            .collect();
        Ok(Self {
            inputs,
            wheel,
            spin: SpinState::new(),
            focus: Focus::Count,
            rng,
            theme,
            sound,
            frame_count,
        })
    }

    fn count(&self) -> usize {
        self.inputs.len()
    }

    /// Rebuild the wheel from the current inputs and drop any stale winner
    fn rebuild_wheel(&mut self) {
        let labels: Vec<String> = self
            .inputs
            .iter()
            .map(|input| input.content().to_string())
            .collect();
        // inputs.len() stays within 2..=8, so this only fails if the clamp
        // is broken; keep the previous wheel in that case.
        if let Ok(wheel) = Wheel::new(labels) {
            self.wheel = wheel;
        }
        self.spin.clear_winner();
    }

    /// Change the option count, clamped to 2..=8. New options get their
    /// 1-based index as the default label; shrinking truncates.
    fn set_count(&mut self, count: usize) {
        let count = count.clamp(MIN_OPTIONS, MAX_OPTIONS);
        while self.inputs.len() < count {
            self.inputs.push(InputBox::new((self.inputs.len() + 1).to_string()));
        }
        self.inputs.truncate(count);
        if let Focus::Option(i) = self.focus {
            if i >= count {
                self.focus = Focus::Option(count - 1);
            }
        }
        self.rebuild_wheel();
        self.update_focus();
    }

    fn update_focus(&mut self) {
        for (i, input) in self.inputs.iter_mut().enumerate() {
            input.set_focused(self.focus == Focus::Option(i));
        }
    }

    fn focus_down(&mut self) {
        self.focus = match self.focus {
            Focus::Count => Focus::Option(0),
            Focus::Option(i) if i + 1 < self.count() => Focus::Option(i + 1),
            Focus::Option(_) => Focus::Count,
        };
        self.update_focus();
    }

    fn focus_up(&mut self) {
        self.focus = match self.focus {
            Focus::Count => Focus::Option(self.count() - 1),
            Focus::Option(0) => Focus::Count,
            Focus::Option(i) => Focus::Option(i - 1),
        };
        self.update_focus();
    }

    fn start_spin(&mut self) {
        if self.spin.start(&mut self.rng, self.frame_count) {
            self.sound.play();
        }
    }

    /// Route an action to whichever control has focus
    fn handle_focused(&mut self, action: Action) {
        match self.focus {
            Focus::Count => match action {
                Action::Left | Action::Char('-') => self.set_count(self.count() - 1),
                Action::Right | Action::Char('+') | Action::Char('=') => {
                    self.set_count(self.count() + 1)
                }
                Action::Char(c) if c.is_ascii_digit() => {
                    if let Some(d) = c.to_digit(10) {
                        self.set_count(d as usize);
                    }
                }
                _ => {}
            },
            Focus::Option(i) => {
                if let Some(input) = self.inputs.get_mut(i) {
                    if input.handle_action(&action, INPUT_WIDTH) {
                        self.rebuild_wheel();
                    }
                }
            }
        }
    }

    fn render_editor(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Options ")
            .borders(Borders::ALL)
            .border_style(self.theme.border_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.width < 8 || inner.height < 3 {
            return;
        }
        let buf = frame.buffer_mut();

        // Count control
        let count_style = if self.focus == Focus::Count {
            self.theme.accent_bold()
        } else {
            self.theme.base_style()
        };
        let count_line = format!("Options  ◂ {} ▸", self.count());
        buf.set_stringn(inner.x, inner.y, &count_line, inner.width as usize, count_style);

        // One row per option
        for (i, input) in self.inputs.iter().enumerate() {
            let y = inner.y + 2 + i as u16;
            if y + 2 >= inner.y + inner.height {
                break;
            }
            let prefix_style = if self.focus == Focus::Option(i) {
                self.theme.accent_style()
            } else {
                self.theme.dim_style()
            };
            buf.set_stringn(inner.x, y, format!("{:>2} ", i + 1), 3, prefix_style);
            let field = Rect::new(inner.x + 3, y, inner.width.saturating_sub(3), 1);
            input.render_line(field, buf, &self.theme);
        }

        // Key help
        let help_y = inner.y + inner.height - 1;
        buf.set_stringn(
            inner.x,
            help_y,
            "enter spin · ^r reset · ^q quit",
            inner.width as usize,
            self.theme.dim_style(),
        );
    }

    fn render_wheel(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Wheel ")
            .borders(Borders::ALL)
            .border_style(self.theme.border_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.height < 2 {
            return;
        }

        let wheel_area = Rect {
            height: inner.height - 1,
            ..inner
        };
        let widget = WheelWidget::new(&self.wheel, &self.theme)
            .rotation(self.spin.angle())
            .highlight(self.spin.winner());
        frame.render_widget(widget, wheel_area);

        // Status line under the wheel
        let buf = frame.buffer_mut();
        let status_y = inner.y + inner.height - 1;
        if self.spin.is_spinning() {
            buf.set_stringn(
                inner.x,
                status_y,
                "Spinning…",
                inner.width as usize,
                self.theme.dim_style(),
            );
        } else if let Some(winner) = self.spin.winner() {
            let label = self.wheel.options().get(winner).map_or("?", String::as_str);
            buf.set_stringn(
                inner.x,
                status_y,
                format!("Selected: {label}"),
                inner.width as usize,
                self.theme.success_style(),
            );
        } else {
            buf.set_stringn(
                inner.x,
                status_y,
                "Press Enter to spin",
                inner.width as usize,
                self.theme.dim_style(),
            );
        }
    }
}

impl AppState for WheelScreen {
    fn handle_action(&mut self, action: Action) -> bool {
        match action {
            Action::Quit | Action::Interrupt => return false,
            // A spin runs all its frames; only quit interrupts it.
            _ if self.spin.is_spinning() => {}
            Action::Submit | Action::Spin => self.start_spin(),
            Action::Reset => {
                self.spin.reset();
                self.sound.stop();
            }
            Action::Down | Action::Tab => self.focus_down(),
            Action::Up | Action::BackTab => self.focus_up(),
            Action::Escape | Action::Unknown => {}
            other => self.handle_focused(other),
        }
        true
    }

    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(32), Constraint::Min(24)])
            .split(frame.area());

        self.render_editor(frame, chunks[0]);
        self.render_wheel(frame, chunks[1]);
    }

    fn tick(&mut self) {
        if let SpinEvent::Finished(winner) = self.spin.tick(&self.wheel) {
            self.sound.stop();
            tracing::debug!(winner, "wheel landed");
        }
    }
}
