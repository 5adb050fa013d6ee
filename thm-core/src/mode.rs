use crate::aggregate::MonthAggregate;
use crate::record::DailyRecord;
use anyhow::bail;
use std::fmt;
use std::str::FromStr;

/// Which temperature field drives cell colour: the view state of a heatmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Max,
    Min,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::Max => Mode::Min,
            Mode::Min => Mode::Max,
        }
    }

    /// Form value used by the mode radio inputs.
    pub fn value(self) -> &'static str {
        match self {
            Mode::Max => "max",
            Mode::Min => "min",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Max => "Max Temperatures",
            Mode::Min => "Min Temperatures",
        }
    }

    pub fn select(self, aggregate: &MonthAggregate) -> Option<f64> {
        match self {
            Mode::Max => aggregate.max_temperature,
            Mode::Min => aggregate.min_temperature,
        }
    }

    pub fn field(self, record: &DailyRecord) -> Option<f64> {
        match self {
            Mode::Max => record.max_temperature,
            Mode::Min => record.min_temperature,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "max" => Ok(Mode::Max),
            "min" => Ok(Mode::Min),
            other => bail!("unknown temperature mode `{}`", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_is_identity() {
        assert_eq!(Mode::Max.toggled(), Mode::Min);
        assert_eq!(Mode::Max.toggled().toggled(), Mode::Max);
        assert_eq!(Mode::Min.toggled().toggled(), Mode::Min);
    }

    #[test]
    fn test_default_is_max() {
        assert_eq!(Mode::default(), Mode::Max);
    }

    #[test]
    fn test_parse_round_trips_form_value() {
        for mode in [Mode::Max, Mode::Min] {
            assert_eq!(mode.value().parse::<Mode>().unwrap(), mode);
        }
        assert!("avg".parse::<Mode>().is_err());
    }

    #[test]
    fn test_select_field() {
        let aggregate = MonthAggregate {
            max_temperature: Some(15.0),
            min_temperature: None,
        };
        assert_eq!(Mode::Max.select(&aggregate), Some(15.0));
        assert_eq!(Mode::Min.select(&aggregate), None);
    }
}
