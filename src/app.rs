use color_eyre::eyre::Result;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{layout::Position, prelude::Rect};
use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::Cmd,
        msg::Msg,
        raw_msg::RawMsg,
        state::AppState,
        token::Token,
        translator::translate_raw_to_domain,
        update::update,
    },
    infrastructure::{config::Config, tui},
    presentation::components::Components,
};

/// Host runner: owns the terminal and the component tree, pumps raw events
/// through the translate/update cycle and renders the resulting state.
pub struct AppRunner {
    pub config: Config,
    pub tick_rate: f64,
    pub frame_rate: f64,
    state: AppState,
    components: Components,
}

impl AppRunner {
    pub fn new(config: Config, tick_rate: f64, frame_rate: f64) -> Result<Self> {
        let state = AppState::new(config.clone());
        Ok(Self {
            config,
            tick_rate,
            frame_rate,
            state,
            components: Components::new(),
        })
    }

    /// Current application state (for tests and diagnostics).
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run one raw message through the translate/update cycle.
    pub fn dispatch(&mut self, raw: RawMsg) -> Vec<Cmd> {
        let mut pending = vec![];
        for msg in translate_raw_to_domain(raw, &self.state) {
            let (next, cmds) = update(msg, self.state.clone());
            self.state = next;
            pending.extend(cmds);
        }
        pending
    }

    pub async fn run(&mut self) -> Result<()> {
        let (raw_tx, mut raw_rx) = mpsc::unbounded_channel();

        let mut tui = tui::Tui::new()?
            .tick_rate(self.tick_rate)
            .frame_rate(self.frame_rate)
            .mouse(true);
        tui.enter()?;

        loop {
            if let Some(e) = tui.next().await {
                match e {
                    tui::Event::Quit => raw_tx.send(RawMsg::Quit)?,
                    tui::Event::Tick => raw_tx.send(RawMsg::Tick)?,
                    tui::Event::Render => self.render(&mut tui)?,
                    tui::Event::Resize(w, h) => raw_tx.send(RawMsg::Resize(w, h))?,
                    tui::Event::Key(key) => raw_tx.send(RawMsg::Key(key))?,
                    tui::Event::Mouse(mouse) => {
                        if let Some(token) = Self::click_token(&tui, mouse)? {
                            raw_tx.send(RawMsg::Token(token))?;
                        }
                    }
                    tui::Event::Error => raw_tx.send(RawMsg::Error(String::from(
                        "terminal event stream error",
                    )))?,
                    _ => {}
                }
            }

            while let Ok(raw) = raw_rx.try_recv() {
                if !raw.is_frequent() {
                    log::debug!("{raw:?}");
                }
                for cmd in self.dispatch(raw) {
                    self.execute(&mut tui, cmd)?;
                }
            }

            if self.state.system.should_suspend {
                tui.suspend()?;
                let (next, _) = update(Msg::Resume, self.state.clone());
                self.state = next;
                tui = tui::Tui::new()?
                    .tick_rate(self.tick_rate)
                    .frame_rate(self.frame_rate)
                    .mouse(true);
                tui.enter()?;
            } else if self.state.system.should_quit {
                tui.stop()?;
                break;
            }
        }
        tui.exit()?;
        Ok(())
    }

    fn execute(&mut self, tui: &mut tui::Tui, cmd: Cmd) -> Result<()> {
        match cmd {
            Cmd::Resize { width, height } => {
                tui.resize(Rect::new(0, 0, width, height))?;
                self.render(tui)?;
            }
        }
        Ok(())
    }

    fn render(&mut self, tui: &mut tui::Tui) -> Result<()> {
        let state = &self.state;
        let components = &mut self.components;
        tui.draw(|frame| components.render(frame, state))?;
        Ok(())
    }

    /// Resolve a left-button press on the keypad into a token. The layout
    /// is a pure function of the terminal size, so the hit-test recomputes
    /// the exact rectangles the last frame was rendered with.
    fn click_token(tui: &tui::Tui, mouse: MouseEvent) -> Result<Option<Token>> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(None);
        }
        let size = tui.size()?;
        let area = Rect::new(0, 0, size.width, size.height);
        Ok(Components::hit_test(
            area,
            Position::new(mouse.column, mouse.row),
        ))
    }
}
