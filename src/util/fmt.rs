use std::fmt::{self, Debug, Display, Formatter};

/// Writes the items of an iterator in set notation, `#{a, b, c}`, without collecting them first.
///
/// The iterator is cloned for every write, so the same value can be formatted more than once.
pub struct SetNotation<I>(pub I);

impl<I: Iterator + Clone> SetNotation<I> {
    fn write_with(
        &self,
        f: &mut Formatter<'_>,
        mut write_item: impl FnMut(&mut Formatter<'_>, I::Item) -> fmt::Result,
    ) -> fmt::Result {
        write!(f, "#{{")?;
        for (index, item) in self.0.clone().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write_item(f, item)?;
        }
        write!(f, "}}")
    }
}

impl<I> Debug for SetNotation<I>
where
    I: Iterator + Clone,
    I::Item: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_with(f, |f, item| write!(f, "{item:?}"))
    }
}

impl<I> Display for SetNotation<I>
where
    I: Iterator + Clone,
    I::Item: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_with(f, |f, item| write!(f, "{item}"))
    }
}
