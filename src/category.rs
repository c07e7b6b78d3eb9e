use strum::{Display, EnumIter, IntoStaticStr};

/// The two statistic groups scraped from every source.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Batting,
    Pitching,
}

impl Category {
    /// Lowercase name, as embedded in the stat page URLs.
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}
