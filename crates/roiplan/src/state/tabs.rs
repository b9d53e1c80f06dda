/// Tab identifiers for the TUI application.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabId {
    Parameters,
    Results,
    Breakdown,
}

impl TabId {
    pub const ALL: [TabId; 3] = [TabId::Parameters, TabId::Results, TabId::Breakdown];

    pub fn name(&self) -> &'static str {
        match self {
            TabId::Parameters => "Parameters",
            TabId::Results => "Results",
            TabId::Breakdown => "Breakdown",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            TabId::Parameters => 0,
            TabId::Results => 1,
            TabId::Breakdown => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(TabId::Parameters),
            1 => Some(TabId::Results),
            2 => Some(TabId::Breakdown),
            _ => None,
        }
    }
}
