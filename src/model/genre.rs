use std::{fmt, str::FromStr};

/// Fixed genre vocabulary offered by the venue and artist forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Genre {
    Alternative,
    Blues,
    Classical,
    Country,
    Electronic,
    Folk,
    Funk,
    HipHop,
    HeavyMetal,
    Instrumental,
    Jazz,
    MusicalTheatre,
    Pop,
    Punk,
    RnB,
    Reggae,
    RockNRoll,
    Soul,
    Other,
}

impl Genre {
    /// Every genre in the order the forms list them.
    pub const ALL: [Genre; 19] = [
        Genre::Alternative,
        Genre::Blues,
        Genre::Classical,
        Genre::Country,
        Genre::Electronic,
        Genre::Folk,
        Genre::Funk,
        Genre::HipHop,
        Genre::HeavyMetal,
        Genre::Instrumental,
        Genre::Jazz,
        Genre::MusicalTheatre,
        Genre::Pop,
        Genre::Punk,
        Genre::RnB,
        Genre::Reggae,
        Genre::RockNRoll,
        Genre::Soul,
        Genre::Other,
    ];

    /// Display name, which is also the value persisted in the genres column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Alternative => "Alternative",
            Genre::Blues => "Blues",
            Genre::Classical => "Classical",
            Genre::Country => "Country",
            Genre::Electronic => "Electronic",
            Genre::Folk => "Folk",
            Genre::Funk => "Funk",
            Genre::HipHop => "Hip-Hop",
            Genre::HeavyMetal => "Heavy Metal",
            Genre::Instrumental => "Instrumental",
            Genre::Jazz => "Jazz",
            Genre::MusicalTheatre => "Musical Theatre",
            Genre::Pop => "Pop",
            Genre::Punk => "Punk",
            Genre::RnB => "R&B",
            Genre::Reggae => "Reggae",
            Genre::RockNRoll => "Rock n Roll",
            Genre::Soul => "Soul",
            Genre::Other => "Other",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownGenre(pub String);

impl FromStr for Genre {
    type Err = UnknownGenre;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genre::ALL
            .iter()
            .find(|genre| genre.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownGenre(s.to_string()))
    }
}
