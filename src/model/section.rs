/// A top-level portfolio section. The order of `ALL` is the menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Experience,
    Projects,
    Skills,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Experience,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }

    /// Lowercase hotkey that jumps to this section.
    pub fn hotkey(self) -> char {
        match self {
            Section::Home => 'h',
            Section::About => 'a',
            Section::Experience => 'e',
            Section::Projects => 'p',
            Section::Skills => 's',
            Section::Contact => 'c',
        }
    }

    /// Position in `ALL`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Section at `index`, wrapping past the end.
    pub fn at(index: usize) -> Section {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Case-insensitive hotkey lookup.
    pub fn from_hotkey(c: char) -> Option<Section> {
        let c = c.to_ascii_lowercase();
        Self::ALL.into_iter().find(|s| s.hotkey() == c)
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}
