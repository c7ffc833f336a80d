use std::fmt;

/// Qualification area of a trainer.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Specialization {
    Powerlifting,
    Yoga,
    Swimming,
}

impl Specialization {
    pub fn label(&self) -> &'static str {
        match self {
            Specialization::Powerlifting => "strength training",
            Specialization::Yoga => "yoga",
            Specialization::Swimming => "swimming",
        }
    }
}

impl fmt::Display for Specialization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
