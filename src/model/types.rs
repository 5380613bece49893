//! Core type definitions for the application

/// Catalog category a search is restricted to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    All,
    Tracks,
    Software,
    Ebooks,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::All,
        Category::Tracks,
        Category::Software,
        Category::Ebooks,
    ];

    /// Filter token understood by the search endpoint
    pub fn entity_token(self) -> &'static str {
        match self {
            Category::All => "",
            Category::Tracks => "musicTrack",
            Category::Software => "software",
            Category::Ebooks => "ebook",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Tracks => "Music",
            Category::Software => "Software",
            Category::Ebooks => "E-books",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Category::All => Category::Tracks,
            Category::Tracks => Category::Software,
            Category::Software => Category::Ebooks,
            Category::Ebooks => Category::All,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Category::All => Category::Ebooks,
            Category::Tracks => Category::All,
            Category::Software => Category::Tracks,
            Category::Ebooks => Category::Software,
        }
    }
}

/// Which section of the UI is currently active/focused
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ActiveSection {
    #[default]
    Search,
    Results,
}

impl ActiveSection {
    pub fn next(self) -> Self {
        match self {
            ActiveSection::Search => ActiveSection::Results,
            ActiveSection::Results => ActiveSection::Search,
        }
    }
}

/// How the result set is laid out
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    List,
    /// Paged tiles, one artwork slot per tile
    Grid,
}

/// UI state for the application
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub active_section: ActiveSection,
    pub search_query: String,
    pub category: Category,
    pub display_mode: DisplayMode,
    /// Index into the result list; in grid mode it also picks the page
    pub selected: usize,
    /// Index of the result shown in the detail overlay
    pub detail_index: Option<usize>,
    pub error_message: Option<String>,
    pub show_help_popup: bool,
}
