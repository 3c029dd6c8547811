//! External interrupt signals.

/// Named events delivered to every buddy from outside the tick loop.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
pub enum Signal {
    /// Work has been assigned.
    #[strum(serialize = "interrupt.work")]
    Work,
    /// Work has ended.
    #[strum(serialize = "interrupt.break")]
    Break,
}

impl Signal {
    /// Value `has_work` takes when this signal arrives.
    pub fn has_work(self) -> bool {
        matches!(self, Signal::Work)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn names_round_trip() {
        for signal in Signal::iter() {
            assert_eq!(Signal::from_str(signal.as_ref()).unwrap(), signal);
        }
        assert_eq!(Signal::Work.to_string(), "interrupt.work");
        assert_eq!(Signal::from_str("interrupt.break").unwrap(), Signal::Break);
        assert!(Signal::from_str("interrupt.lunch").is_err());
    }
}
