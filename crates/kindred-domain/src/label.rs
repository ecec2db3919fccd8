//! Kinship labels - English names for relationships

use crate::{Gender, Relationship};

/// The nine near relatives of the 3x3 base table
///
/// Each relative carries a (neutral, male, female) triple of terms. A slot
/// is empty where English has no word for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseRelative {
    /// `(0, 0)`
    Itself,
    /// `(0, 1)`
    Child,
    /// `(0, 2)`
    Grandchild,
    /// `(1, 0)`
    Parent,
    /// `(1, 1)`
    Sibling,
    /// `(1, 2)`
    NieceOrNephew,
    /// `(2, 0)`
    Grandparent,
    /// `(2, 1)`
    AuntOrUncle,
    /// `(2, 2)`
    Cousin,
}

/// Base relatives indexed by `[up][down]`
const BASE_RELATIVES: [[BaseRelative; 3]; 3] = {
    use BaseRelative::*;
    [
        [Itself, Child, Grandchild],
        [Parent, Sibling, NieceOrNephew],
        [Grandparent, AuntOrUncle, Cousin],
    ]
};

type Terms = (Option<&'static str>, Option<&'static str>, Option<&'static str>);

impl BaseRelative {
    /// Look up the base relative for offsets inside the 3x3 table
    pub fn from_offsets(up: i32, down: i32) -> Option<Self> {
        if (0..3).contains(&up) && (0..3).contains(&down) {
            Some(BASE_RELATIVES[up as usize][down as usize])
        } else {
            None
        }
    }

    /// The (neutral, male, female) terms
    pub fn terms(&self) -> Terms {
        match self {
            BaseRelative::Itself => (Some("self"), None, None),
            BaseRelative::Child => (Some("child"), Some("son"), Some("daughter")),
            BaseRelative::Grandchild => {
                (Some("grandchild"), Some("grandson"), Some("granddaughter"))
            }
            BaseRelative::Parent => (Some("parent"), Some("father"), Some("mother")),
            BaseRelative::Sibling => (Some("sibling"), Some("brother"), Some("sister")),
            BaseRelative::NieceOrNephew => (None, Some("nephew"), Some("niece")),
            BaseRelative::Grandparent => {
                (Some("grandparent"), Some("grandfather"), Some("grandmother"))
            }
            BaseRelative::AuntOrUncle => (None, Some("uncle"), Some("aunt")),
            BaseRelative::Cousin => (Some("cousin"), None, None),
        }
    }

    /// The gendered term, or the neutral one
    ///
    /// With an unknown gender and no neutral word the result is the
    /// disjunction "female or male", e.g. "niece or nephew".
    pub fn label(&self, gender: Option<Gender>) -> String {
        let (neutral, male, female) = self.terms();
        let gendered = match gender {
            Some(Gender::Male) => male,
            Some(Gender::Female) => female,
            None => None,
        };

        match (gendered.or(neutral), female, male) {
            (Some(term), _, _) => term.to_string(),
            (None, Some(female), Some(male)) => format!("{} or {}", female, male),
            // every table row has a neutral term or both gendered ones
            (None, _, _) => String::new(),
        }
    }
}

impl Relationship {
    /// Render the English kinship term for the second person
    ///
    /// `gender` is the second person's gender; `None` produces neutral or
    /// "X or Y" wording. Rules are tried in order, so `(1, 1)` is a sibling
    /// and never a cousin.
    ///
    /// ```
    /// use kindred_domain::{Gender, Relationship};
    ///
    /// assert_eq!(Relationship::new(2, 1).label(Some(Gender::Female)), "aunt");
    /// assert_eq!(Relationship::new(3, 4).label(None), "2nd cousin once removed");
    /// assert_eq!(Relationship::half(1, 1).label(Some(Gender::Male)), "half brother");
    /// ```
    pub fn label(&self, gender: Option<Gender>) -> String {
        use BaseRelative as R;

        let (up, down) = (self.up, self.down);
        if self.is_unrelated() {
            return "unrelated".to_string();
        }

        let words = if let Some(base) = R::from_offsets(up, down) {
            vec![base.label(gender)]
        } else if up == 0 {
            vec![great(down - 2), R::Grandchild.label(gender)]
        } else if up == 1 {
            vec![great(down - 3), "grand".to_string(), R::NieceOrNephew.label(gender)]
        } else if down == 0 {
            vec![great(up - 2), R::Grandparent.label(gender)]
        } else if down == 1 {
            let grand = if up > 3 { "grand" } else { "" };
            vec![great((up - 3).max(1)), grand.to_string(), R::AuntOrUncle.label(gender)]
        } else {
            let degree = (up.min(down) - 1) as u32;
            vec![ordinal(degree), R::Cousin.label(gender), removed((up - down).unsigned_abs())]
        };

        let label = words
            .into_iter()
            .filter(|word| !word.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        if self.half && !self.is_self() {
            format!("half {}", label)
        } else {
            label
        }
    }
}

/// Prefix for `n` extra generations: "", "great", "great great", "3rd great", ...
fn great(n: i32) -> String {
    match n {
        n if n <= 0 => String::new(),
        1 => "great".to_string(),
        2 => "great great".to_string(),
        n => format!("{} great", ordinal(n as u32)),
    }
}

/// Removal suffix for cousins of different generations
fn removed(n: u32) -> String {
    match n {
        0 => String::new(),
        1 => "once removed".to_string(),
        2 => "twice removed".to_string(),
        3 => "thrice removed".to_string(),
        n => format!("{} times removed", n),
    }
}

/// English ordinal for a number: 1st, 2nd, 3rd, 4th, 11th, 21st, ...
pub fn ordinal(n: u32) -> String {
    let suffix = if (11..=13).contains(&(n % 100)) {
        "th"
    } else {
        match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        }
    };
    format!("{}{}", n, suffix)
}
