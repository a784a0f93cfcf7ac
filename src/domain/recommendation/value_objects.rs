use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Flavor of recommendation the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    /// Drawn from the user's favorites
    Similar,
    /// Time of day
    Mood,
    /// Season of the year
    Time,
    /// Upcoming holiday
    Event,
}

impl RecommendationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Similar => "similar",
            Self::Mood => "mood",
            Self::Time => "time",
            Self::Event => "event",
        }
    }
}

impl std::fmt::Display for RecommendationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RecommendationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "similar" => Ok(Self::Similar),
            "mood" => Ok(Self::Mood),
            "time" => Ok(Self::Time),
            "event" => Ok(Self::Event),
            other => Err(format!("Unknown recommendation kind: {}", other)),
        }
    }
}

/// Time-of-day bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPart {
    /// 00:00 - 05:59
    EarlyMorning,
    /// 06:00 - 11:59
    Morning,
    /// 12:00 - 17:59
    Afternoon,
    /// 18:00 - 23:59
    Evening,
}

impl DayPart {
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            0..=5 => Self::EarlyMorning,
            6..=11 => Self::Morning,
            12..=17 => Self::Afternoon,
            _ => Self::Evening,
        }
    }

    pub fn at(now: NaiveDateTime) -> Self {
        Self::from_hour(now.hour())
    }

    pub fn genre(&self) -> &'static str {
        match self {
            Self::EarlyMorning => "slice-of-life",
            Self::Morning => "adventure",
            Self::Afternoon => "comedy",
            Self::Evening => "romance",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::EarlyMorning => "🌅 Morning Calm",
            Self::Morning => "⚡ Morning Energy",
            Self::Afternoon => "😄 Afternoon Joy",
            Self::Evening => "🌙 Evening Relaxation",
        }
    }
}

/// Calendar-month bucket (northern hemisphere seasons)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeasonBucket {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl SeasonBucket {
    /// `month` is 1-12
    pub fn from_month(month: u32) -> Self {
        match month {
            3..=5 => Self::Spring,
            6..=8 => Self::Summer,
            9..=11 => Self::Autumn,
            _ => Self::Winter,
        }
    }

    pub fn at(now: NaiveDateTime) -> Self {
        Self::from_month(now.month())
    }

    pub fn genre(&self) -> &'static str {
        match self {
            Self::Spring => "school",
            Self::Summer => "sports",
            Self::Autumn => "supernatural",
            Self::Winter => "fantasy",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Spring => "🌸 Spring Selection",
            Self::Summer => "☀️ Summer Vibes",
            Self::Autumn => "🍂 Autumn Picks",
            Self::Winter => "❄️ Winter Collection",
        }
    }
}

/// Fixed-date holidays the event recommendation looks ahead to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Holiday {
    Valentine,
    Halloween,
    Christmas,
}

impl Holiday {
    /// Checked in this order; the first one in range wins
    pub fn all() -> [Self; 3] {
        [Self::Valentine, Self::Halloween, Self::Christmas]
    }

    fn month_day(&self) -> (u32, u32) {
        match self {
            Self::Valentine => (2, 14),
            Self::Halloween => (10, 31),
            Self::Christmas => (12, 25),
        }
    }

    /// How many days ahead the holiday starts to count
    pub fn lookahead_days(&self) -> i64 {
        match self {
            Self::Valentine | Self::Halloween => 7,
            Self::Christmas => 14,
        }
    }

    pub fn genre(&self) -> &'static str {
        match self {
            Self::Valentine => "romance",
            Self::Halloween => "horror",
            Self::Christmas => "slice-of-life",
        }
    }

    /// Whole days (rounded up) from `now` to midnight of this year's holiday.
    /// Zero or negative once the holiday has started.
    pub fn days_until(&self, now: NaiveDateTime) -> i64 {
        let (month, day) = self.month_day();
        let Some(date) = NaiveDate::from_ymd_opt(now.year(), month, day) else {
            return i64::MIN;
        };
        let Some(midnight) = date.and_hms_opt(0, 0, 0) else {
            return i64::MIN;
        };

        let seconds = (midnight - now).num_seconds();
        let whole = seconds.div_euclid(86_400);
        if seconds.rem_euclid(86_400) > 0 {
            whole + 1
        } else {
            whole
        }
    }

    pub fn is_upcoming(&self, now: NaiveDateTime) -> bool {
        let days = self.days_until(now);
        days > 0 && days <= self.lookahead_days()
    }
}

/// One viewed recommendation, kept for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationInteraction {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub timestamp: DateTime<Utc>,
    pub viewed: bool,
}

impl RecommendationInteraction {
    pub fn viewed(kind: RecommendationKind) -> Self {
        Self {
            kind,
            timestamp: Utc::now(),
            viewed: true,
        }
    }
}
