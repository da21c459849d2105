/// Top bar with the application title
#[derive(Debug)]
pub struct HeaderComponent {
    title: String,
}

impl HeaderComponent {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn render(&self) -> String {
        format!("== {} ==\n", self.title)
    }
}
