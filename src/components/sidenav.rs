/// Collapsible side navigation
#[derive(Debug, Default)]
pub struct SidenavComponent {
    pub is_open: bool,
}

impl SidenavComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn render(&self, entries: &[&str]) -> String {
        if !self.is_open {
            return "[☰]\n".to_string();
        }
        let mut out = String::from("[✕]\n");
        for entry in entries {
            out.push_str("  · ");
            out.push_str(entry);
            out.push('\n');
        }
        out
    }
}
