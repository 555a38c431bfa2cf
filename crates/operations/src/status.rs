//! Status-to-presentation classification.
//!
//! Every view colors trains, stations and alerts by a shared severity tier.
//! The mapping lives in data ([`StatusTable`]), one table per entity type.
//! Unrecognized codes never fail: they fall back to the table's default
//! (muted) presentation.

// =============================================================================
// Tier & icon
// =============================================================================

/// Severity tier used uniformly for coloring regardless of entity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusTier {
    Success,
    Warning,
    Danger,
    /// Neutral fallback for anything outside a table's closed set.
    Muted,
}

/// Icon identifier attached to a status presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusIcon {
    CheckCircle,
    Clock,
    XCircle,
    Activity,
    Wrench,
    AlertTriangle,
    Info,
}

impl StatusIcon {
    /// Short text glyph used where the UI renders icons inline with labels.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::CheckCircle => "[+]",
            Self::Clock => "[~]",
            Self::XCircle => "[x]",
            Self::Activity => "[-]",
            Self::Wrench => "[#]",
            Self::AlertTriangle => "[!]",
            Self::Info => "[i]",
        }
    }
}

/// Result of classifying a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    pub tier: StatusTier,
    pub icon: StatusIcon,
}

impl Presentation {
    pub const fn new(tier: StatusTier, icon: StatusIcon) -> Self {
        Self { tier, icon }
    }
}

// =============================================================================
// Mapping table
// =============================================================================

/// Total mapping from status codes to presentations with an explicit default.
#[derive(Debug)]
pub struct StatusTable {
    entries: &'static [(&'static str, Presentation)],
    fallback: Presentation,
}

impl StatusTable {
    pub const fn new(
        entries: &'static [(&'static str, Presentation)],
        fallback: Presentation,
    ) -> Self {
        Self { entries, fallback }
    }

    /// Classify a raw status code. Pure; unknown codes yield the fallback.
    pub fn classify(&self, code: &str) -> Presentation {
        self.entries
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, p)| *p)
            .unwrap_or(self.fallback)
    }

    /// Status codes this table recognizes, in declaration order.
    pub fn codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(c, _)| *c)
    }
}

const NEUTRAL: Presentation = Presentation::new(StatusTier::Muted, StatusIcon::Activity);

pub static TRAIN_STATUS_TABLE: StatusTable = StatusTable::new(
    &[
        ("on-time", Presentation::new(StatusTier::Success, StatusIcon::CheckCircle)),
        ("delayed", Presentation::new(StatusTier::Warning, StatusIcon::Clock)),
        ("critical", Presentation::new(StatusTier::Danger, StatusIcon::XCircle)),
    ],
    NEUTRAL,
);

pub static STATION_STATUS_TABLE: StatusTable = StatusTable::new(
    &[
        ("normal", Presentation::new(StatusTier::Success, StatusIcon::CheckCircle)),
        ("busy", Presentation::new(StatusTier::Warning, StatusIcon::Activity)),
        ("maintenance", Presentation::new(StatusTier::Danger, StatusIcon::Wrench)),
    ],
    NEUTRAL,
);

pub static ALERT_SEVERITY_TABLE: StatusTable = StatusTable::new(
    &[
        ("critical", Presentation::new(StatusTier::Danger, StatusIcon::AlertTriangle)),
        ("warning", Presentation::new(StatusTier::Warning, StatusIcon::AlertTriangle)),
        ("info", Presentation::new(StatusTier::Muted, StatusIcon::Info)),
    ],
    NEUTRAL,
);

pub fn classify_train_status(code: &str) -> Presentation {
    TRAIN_STATUS_TABLE.classify(code)
}

pub fn classify_station_status(code: &str) -> Presentation {
    STATION_STATUS_TABLE.classify(code)
}

pub fn classify_alert_severity(code: &str) -> Presentation {
    ALERT_SEVERITY_TABLE.classify(code)
}

// =============================================================================
// Typed statuses
// =============================================================================

/// Capitalizes the first character of a status code for display ("on-time" -> "On-time").
pub fn capitalized(code: &str) -> String {
    let mut chars = code.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrainStatus {
    OnTime,
    Delayed,
    Critical,
}

impl TrainStatus {
    pub const ALL: [TrainStatus; 3] = [Self::OnTime, Self::Delayed, Self::Critical];

    pub fn code(self) -> &'static str {
        match self {
            Self::OnTime => "on-time",
            Self::Delayed => "delayed",
            Self::Critical => "critical",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }

    pub fn label(self) -> String {
        capitalized(self.code())
    }

    pub fn presentation(self) -> Presentation {
        TRAIN_STATUS_TABLE.classify(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StationStatus {
    Normal,
    Busy,
    Maintenance,
}

impl StationStatus {
    pub const ALL: [StationStatus; 3] = [Self::Normal, Self::Busy, Self::Maintenance];

    pub fn code(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Busy => "busy",
            Self::Maintenance => "maintenance",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }

    pub fn label(self) -> String {
        capitalized(self.code())
    }

    pub fn presentation(self) -> Presentation {
        STATION_STATUS_TABLE.classify(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertSeverity {
    Critical,
    Warning,
    Info,
}

impl AlertSeverity {
    pub const ALL: [AlertSeverity; 3] = [Self::Critical, Self::Warning, Self::Info];

    pub fn code(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }

    pub fn label(self) -> String {
        capitalized(self.code())
    }

    pub fn presentation(self) -> Presentation {
        ALERT_SEVERITY_TABLE.classify(self.code())
    }
}
