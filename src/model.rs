/// The multiplicity of values a parameter may record during a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// Precisely one value.
    Single,
    /// Any number of repetitions, but no fewer than the minimum.
    AtLeast(usize),
}

impl Cardinality {
    pub(crate) fn is_multi(&self) -> bool {
        matches!(self, Cardinality::AtLeast(_))
    }
}

impl std::fmt::Display for Cardinality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
