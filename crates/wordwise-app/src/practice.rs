use std::fmt;

/// One card of the pronunciation deck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PracticeWord {
    pub word: &'static str,
    pub phonetic: &'static str,
    pub meaning: &'static str,
}

impl fmt::Display for PracticeWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  {}\n  {}", self.word, self.phonetic, self.meaning)
    }
}

pub const DECK: [PracticeWord; 5] = [
    PracticeWord {
        word: "Ephemeral",
        phonetic: "/ɪˈfem.ər.əl/",
        meaning: "Lasting for a very short time",
    },
    PracticeWord {
        word: "Quinoa",
        phonetic: "/ˈkiːn.wɑː/",
        meaning: "Edible grain-like crop",
    },
    PracticeWord {
        word: "Worcestershire",
        phonetic: "/ˈwʊs.tə.ʃə/",
        meaning: "Type of sauce",
    },
    PracticeWord {
        word: "Anemone",
        phonetic: "/əˈnem.ə.ni/",
        meaning: "Flowering plant",
    },
    PracticeWord {
        word: "Squirrel",
        phonetic: "/ˈskwɜː.rəl/",
        meaning: "Small rodent",
    },
];

/// Position in `DECK`; wraps back to the first card after the last
#[derive(Debug, Default, Clone)]
pub struct PracticeDeck {
    index: usize,
}

impl PracticeDeck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &'static PracticeWord {
        &DECK[self.index]
    }

    pub fn advance(&mut self) -> &'static PracticeWord {
        self.index = (self.index + 1) % DECK.len();
        self.current()
    }
}
