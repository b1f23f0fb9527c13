use super::ContentType;

/// Crawl-date window for the raw-data listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    #[default]
    Today,
    Week,
    Month,
}

impl Period {
    pub fn code(&self) -> &'static str {
        match self {
            Period::Today => "today",
            Period::Week => "week",
            Period::Month => "month",
        }
    }

    pub fn label(&self) -> String {
        match self {
            Period::Today => t!("raw.period_today").to_string(),
            Period::Week => t!("raw.period_week").to_string(),
            Period::Month => t!("raw.period_month").to_string(),
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Period::Today => Period::Week,
            Period::Week => Period::Month,
            Period::Month => Period::Today,
        }
    }
}

/// Type + period filter sent to `/api/content/raw`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawFilter {
    /// `None` means all types.
    pub content_type: Option<ContentType>,
    pub period: Period,
}

impl RawFilter {
    pub fn type_code(&self) -> &'static str {
        self.content_type.map(|ct| ct.code()).unwrap_or("all")
    }

    pub fn type_label(&self) -> String {
        match self.content_type {
            Some(ct) => ct.label(),
            None => t!("raw.all_types").to_string(),
        }
    }

    /// Step the type filter: all → novel → … → entertainment → all.
    pub fn cycle_type(&mut self) {
        self.content_type = match self.content_type {
            None => Some(ContentType::ALL[0]),
            Some(ct) => {
                let idx = ContentType::ALL.iter().position(|c| *c == ct).unwrap_or(0);
                ContentType::ALL.get(idx + 1).copied()
            }
        };
    }

    pub fn cycle_period(&mut self) {
        self.period = self.period.next();
    }
}
