use std::sync::Arc;

use tracing::debug;

use super::{HeaderComponent, HomeComponent, SearchbarComponent, SidenavComponent};
use crate::api::ApiService;

pub const APP_TITLE: &str = "SoupMate";

/// Pages reachable from the side navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
}

impl Route {
    pub const ALL: [Route; 1] = [Route::Home];

    pub fn resolve(path: &str) -> Option<Self> {
        match path.trim_matches('/') {
            "" | "home" => Some(Route::Home),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
        }
    }
}

/// One line of user input, interpreted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Health,
    ToggleMenu,
    Navigate(String),
    Help,
    Quit,
    Search(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed {
            "/health" => Command::Health,
            "/menu" => Command::ToggleMenu,
            "/help" => Command::Help,
            "/quit" | "/exit" => Command::Quit,
            _ => match trimmed.strip_prefix("/go") {
                Some(path) if path.is_empty() || path.starts_with(' ') => {
                    Command::Navigate(path.trim().to_string())
                }
                _ => Command::Search(line.to_string()),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub const HELP: &str = "\
/health      ask the backend whether it is up
/menu        open or close the side navigation
/go <page>   switch page (home)
/quit, /exit  leave
anything else is sent as a question
";

/// Root of the page: header, side navigation and the routed content
pub struct App {
    header: HeaderComponent,
    sidenav: SidenavComponent,
    home: HomeComponent,
    searchbar: SearchbarComponent,
    route: Route,
    notice: Option<String>,
}

impl App {
    pub fn new(api: Arc<dyn ApiService>) -> Self {
        Self {
            header: HeaderComponent::new(APP_TITLE),
            sidenav: SidenavComponent::new(),
            home: HomeComponent::new(api.clone()),
            searchbar: SearchbarComponent::new(api),
            route: Route::Home,
            notice: None,
        }
    }

    pub fn home(&self) -> &HomeComponent {
        &self.home
    }

    pub fn searchbar(&self) -> &SearchbarComponent {
        &self.searchbar
    }

    pub fn sidenav(&self) -> &SidenavComponent {
        &self.sidenav
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub async fn dispatch(&mut self, command: Command) -> Flow {
        debug!("Dispatching {:?}", command);
        self.notice = None;
        match command {
            Command::Health => self.home.check().await,
            Command::ToggleMenu => self.sidenav.toggle(),
            Command::Navigate(path) => match Route::resolve(&path) {
                Some(route) => self.route = route,
                None => self.notice = Some(format!("Unbekannte Seite: {}", path)),
            },
            Command::Help => self.notice = Some(HELP.to_string()),
            Command::Quit => return Flow::Quit,
            Command::Search(query) => {
                self.searchbar.set_query(query);
                self.searchbar.on_search().await;
            }
        }
        Flow::Continue
    }

    pub fn render(&self) -> String {
        let labels: Vec<&str> = Route::ALL.iter().map(Route::label).collect();
        let mut out = self.header.render();
        out.push_str(&self.sidenav.render(&labels));
        match self.route {
            Route::Home => {
                out.push_str(&self.home.render());
                out.push_str(&self.searchbar.render());
            }
        }
        if let Some(notice) = &self.notice {
            out.push_str(notice);
            if !notice.ends_with('\n') {
                out.push('\n');
            }
        }
        out
    }
}
