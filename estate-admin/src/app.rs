//! The dashboard: every list screen plus the console driving them.

use std::collections::BTreeMap;

use crate::config::AdminConfig;
use crate::console::{Command, HELP};
use crate::dataset::DataFile;
use crate::prefs::{PrefsError, PrefsStore};
use crate::screen::{AnyScreen, ListScreen, ScreenKind};

/// Response to one console line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    pub output: String,
    pub quit: bool,
}

impl Reply {
    fn text(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            quit: false,
        }
    }
}

/// All list screens, with one of them current.
pub struct AdminApp {
    screens: BTreeMap<ScreenKind, Box<dyn AnyScreen>>,
    current: ScreenKind,
}

impl std::fmt::Debug for AdminApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminApp")
            .field("screens", &self.screens.keys().collect::<Vec<_>>())
            .field("current", &self.current)
            .finish()
    }
}

fn boxed<T: tabula::TableRow>(
    kind: ScreenKind,
    rows: Vec<T>,
    prefs: &PrefsStore,
    config: &AdminConfig,
) -> (ScreenKind, Box<dyn AnyScreen>) {
    (kind, Box::new(ListScreen::new(kind, rows, prefs.clone(), config)))
}

impl AdminApp {
    /// Build every screen over the loaded data.
    pub fn new(data: DataFile, prefs: PrefsStore, config: &AdminConfig) -> Self {
        let screens = BTreeMap::from([
            boxed(ScreenKind::Contacts, data.contacts, &prefs, config),
            boxed(ScreenKind::Properties, data.properties, &prefs, config),
            boxed(ScreenKind::Leases, data.leases, &prefs, config),
            boxed(ScreenKind::Reservations, data.reservations, &prefs, config),
            boxed(ScreenKind::Maintenance, data.maintenance, &prefs, config),
            boxed(ScreenKind::Tasks, data.tasks, &prefs, config),
            boxed(ScreenKind::Banks, data.banks, &prefs, config),
            boxed(ScreenKind::Keys, data.keys, &prefs, config),
            boxed(ScreenKind::Files, data.files, &prefs, config),
        ]);
        Self {
            screens,
            current: config.start_screen,
        }
    }

    pub fn current(&self) -> ScreenKind {
        self.current
    }

    pub fn screen(&self, kind: ScreenKind) -> Option<&dyn AnyScreen> {
        self.screens.get(&kind).map(|s| s.as_ref())
    }

    /// Open the startup screen and render it.
    pub async fn start(&mut self) -> Result<String, PrefsError> {
        self.switch_to(self.current).await?;
        Ok(self.render())
    }

    /// Make `kind` current, applying its stored preferences.
    pub async fn switch_to(&mut self, kind: ScreenKind) -> Result<(), PrefsError> {
        if let Some(screen) = self.screens.get_mut(&kind) {
            screen.open().await?;
            self.current = kind;
        }
        Ok(())
    }

    /// Render the current screen.
    pub fn render(&self) -> String {
        self.screen(self.current)
            .map(|s| s.render())
            .unwrap_or_default()
    }

    fn list_screens(&self) -> String {
        self.screens
            .iter()
            .map(|(kind, screen)| {
                let marker = if *kind == self.current { '*' } else { ' ' };
                format!(
                    "{} {:<14} {:>5} rows  {:>3} selected",
                    marker,
                    kind.route(),
                    screen.len(),
                    screen.selected_count()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Run one console line against the current screen.
    pub async fn handle_line(&mut self, line: &str) -> Result<Reply, PrefsError> {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => return Ok(Reply::text(e.to_string())),
        };

        match command {
            Command::Act(action) => {
                let Some(screen) = self.screens.get_mut(&self.current) else {
                    return Ok(Reply::default());
                };
                let outcome = screen.execute(&action);
                screen.pump().await?;
                log::debug!("{}: {:?} -> {:?}", self.current, action, outcome);

                let output = match (outcome.changed, outcome.message) {
                    (true, Some(message)) => format!("{}\n{}", message, screen.render()),
                    (true, None) => screen.render(),
                    (false, Some(message)) => message,
                    (false, None) => "nothing to do".to_string(),
                };
                Ok(Reply::text(output))
            }
            Command::View(mode) => {
                if let Some(screen) = self.screens.get_mut(&self.current) {
                    screen.set_view_mode(mode).await?;
                }
                Ok(Reply::text(self.render()))
            }
            Command::Screen(kind) => {
                self.switch_to(kind).await?;
                Ok(Reply::text(self.render()))
            }
            Command::Screens => Ok(Reply::text(self.list_screens())),
            Command::Show => Ok(Reply::text(self.render())),
            Command::Help => Ok(Reply::text(HELP)),
            Command::Quit => Ok(Reply {
                output: String::new(),
                quit: true,
            }),
        }
    }
}
