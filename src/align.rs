use speedy::{Readable, Writable};

/// Where the mesh bounds are placed on one axis relative to the origin.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Readable, Writable)]
pub enum Align {
    #[default]
    None,
    Start,
    Center,
    End,
}

impl Align {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Folds an optional signed alignment value into an [`Align`].
///
/// A missing value always yields [`Align::None`], so an axis that is not
/// mentioned in a document loses any alignment it had before. Otherwise only
/// the sign matters: negative aligns to the start, positive to the end and
/// zero to the center.
pub fn fold_alignment(value: Option<i32>) -> Align {
    match value {
        None => Align::None,
        Some(v) if v < 0 => Align::Start,
        Some(v) if v > 0 => Align::End,
        Some(_) => Align::Center,
    }
}
