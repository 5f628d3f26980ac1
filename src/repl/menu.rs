//! Numbered menu and keyword synonyms.

/// A menu action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    List,
    Details,
    Mass,
    Distance,
    MoonCount,
    Membership,
    Ask,
}

/// Result of reading one menu line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInput {
    /// Blank line; redisplay the menu.
    Empty,
    Choice(MenuChoice),
    Invalid,
}

pub const MENU_TITLE: &str = "Solar System Planets";

pub const MENU_PROMPT: &str = "Choose an option (number or words): ";

pub const INVALID_OPTION_MESSAGE: &str =
    "Invalid option. Choose a number from the menu, or type a keyword like 'list'.";

/// Menu choices in display order, with their labels and keyword synonyms.
const MENU_ENTRIES: &[(MenuChoice, &str, &[&str])] = &[
    (
        MenuChoice::List,
        "List planets",
        &["list", "list planets", "planets", "show planets"],
    ),
    (
        MenuChoice::Details,
        "Planet details",
        &["details", "planet details", "about", "everything"],
    ),
    (
        MenuChoice::Mass,
        "Planet mass",
        &["mass", "planet mass", "how massive"],
    ),
    (
        MenuChoice::Distance,
        "Planet distance from Sun",
        &["distance", "dist", "how far", "from the sun"],
    ),
    (
        MenuChoice::MoonCount,
        "Moon count",
        &["moons", "moon count", "how many moons"],
    ),
    (
        MenuChoice::Membership,
        "Check if a name is a planet in the list",
        &["check", "exists", "is it a planet", "in the list"],
    ),
    (
        MenuChoice::Ask,
        "Ask a question",
        &["ask", "question", "query", "free text"],
    ),
    (MenuChoice::Exit, "Exit", &["exit", "quit", "q", "x"]),
];

impl MenuChoice {
    /// Menu number shown to the user.
    pub fn number(&self) -> u8 {
        match self {
            MenuChoice::Exit => 0,
            MenuChoice::List => 1,
            MenuChoice::Details => 2,
            MenuChoice::Mass => 3,
            MenuChoice::Distance => 4,
            MenuChoice::MoonCount => 5,
            MenuChoice::Membership => 6,
            MenuChoice::Ask => 7,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        MENU_ENTRIES
            .iter()
            .map(|(choice, _, _)| *choice)
            .find(|choice| choice.number() == number)
    }

    /// Prompt for the follow-up value this choice needs, if any.
    pub fn prompt(&self) -> Option<&'static str> {
        match self {
            MenuChoice::Details | MenuChoice::Mass | MenuChoice::Distance | MenuChoice::MoonCount => {
                Some("Enter planet name: ")
            }
            MenuChoice::Membership => Some("Enter name to check: "),
            MenuChoice::Ask => Some("Ask your question: "),
            MenuChoice::Exit | MenuChoice::List => None,
        }
    }
}

/// Interpret one line typed at the menu prompt.
///
/// Accepts a menu number or a keyword synonym, case-insensitively. Digit
/// strings that are not menu numbers are invalid.
pub fn parse_menu_input(raw: &str) -> MenuInput {
    let value = raw.trim().to_lowercase();

    if value.is_empty() {
        return MenuInput::Empty;
    }

    if value.chars().all(|c| c.is_ascii_digit()) {
        return value
            .parse::<u8>()
            .ok()
            .and_then(MenuChoice::from_number)
            .map_or(MenuInput::Invalid, MenuInput::Choice);
    }

    MENU_ENTRIES
        .iter()
        .find(|(_, _, keywords)| keywords.contains(&value.as_str()))
        .map_or(MenuInput::Invalid, |(choice, _, _)| MenuInput::Choice(*choice))
}

/// The menu as printed before each prompt.
pub fn menu_text() -> String {
    let mut text = format!("\n{}\n", MENU_TITLE);
    for (choice, label, _) in MENU_ENTRIES {
        text.push_str(&format!("{}) {}\n", choice.number(), label));
    }
    text
}

/// Every keyword synonym, for completion.
pub fn menu_keywords() -> impl Iterator<Item = &'static str> {
    MENU_ENTRIES
        .iter()
        .flat_map(|(_, _, keywords)| keywords.iter().copied())
}
