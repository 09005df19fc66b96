//! Pieces shared by routines and schedules: the weekday bitmask, the icon category and
//! the `HH:mm` time format.

use chrono::{NaiveTime, Weekday};

use crate::{
    model::plan::{DayOfWeekDto, PlanCategoryDto},
    server::{error::AppError, util::validate},
};

/// `HH:mm`, used for plan times on the wire.
const TIME_FORMAT: &str = "%H:%M";

/// Set of weekdays stored as a 7-bit mask, Monday is bit 0 and Sunday bit 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaysOfWeek(u8);

impl DaysOfWeek {
    const VALID_BITS: u8 = 0b0111_1111;

    /// Builds the mask from a list of weekdays; duplicates collapse.
    ///
    /// # Returns
    /// - `Ok(DaysOfWeek)` - At least one weekday was given
    /// - `Err(AppError::Validation)` - The list was empty
    pub fn from_weekdays(days: impl IntoIterator<Item = Weekday>) -> Result<Self, AppError> {
        let bits = days
            .into_iter()
            .fold(0u8, |bits, day| bits | Self::bit(day));

        if bits == 0 {
            return Err(AppError::validation("daysOfWeek must not be empty"));
        }
        Ok(Self(bits))
    }

    /// Builds the mask from request weekdays.
    pub fn from_dto(days: Vec<DayOfWeekDto>) -> Result<Self, AppError> {
        Self::from_weekdays(days.into_iter().map(weekday_from_dto))
    }

    /// Reads a stored mask, rejecting anything above bit 6.
    pub fn from_bits(bits: u8) -> Option<Self> {
        (bits & !Self::VALID_BITS == 0).then_some(Self(bits))
    }

    /// Reads a mask from its database column.
    pub fn from_column(value: i16) -> Option<Self> {
        u8::try_from(value).ok().and_then(Self::from_bits)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn contains(self, day: Weekday) -> bool {
        self.0 & Self::bit(day) != 0
    }

    /// Contained weekdays, Monday first.
    pub fn weekdays(self) -> Vec<Weekday> {
        [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ]
        .into_iter()
        .filter(|day| self.contains(*day))
        .collect()
    }

    pub fn into_dto(self) -> Vec<DayOfWeekDto> {
        self.weekdays().into_iter().map(weekday_into_dto).collect()
    }

    fn bit(day: Weekday) -> u8 {
        1 << day.num_days_from_monday()
    }
}

fn weekday_from_dto(day: DayOfWeekDto) -> Weekday {
    match day {
        DayOfWeekDto::Monday => Weekday::Mon,
        DayOfWeekDto::Tuesday => Weekday::Tue,
        DayOfWeekDto::Wednesday => Weekday::Wed,
        DayOfWeekDto::Thursday => Weekday::Thu,
        DayOfWeekDto::Friday => Weekday::Fri,
        DayOfWeekDto::Saturday => Weekday::Sat,
        DayOfWeekDto::Sunday => Weekday::Sun,
    }
}

fn weekday_into_dto(day: Weekday) -> DayOfWeekDto {
    match day {
        Weekday::Mon => DayOfWeekDto::Monday,
        Weekday::Tue => DayOfWeekDto::Tuesday,
        Weekday::Wed => DayOfWeekDto::Wednesday,
        Weekday::Thu => DayOfWeekDto::Thursday,
        Weekday::Fri => DayOfWeekDto::Friday,
        Weekday::Sat => DayOfWeekDto::Saturday,
        Weekday::Sun => DayOfWeekDto::Sunday,
    }
}

/// Icon category of a plan, stored by its wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanCategory {
    Computer,
    Food,
    Pencil,
    RedBook,
    YellowBook,
    Sleep,
    Power,
    People,
    Medicine,
    Talk,
    Heart,
    Vehicle,
}

impl PlanCategory {
    const ALL: [PlanCategory; 12] = [
        Self::Computer,
        Self::Food,
        Self::Pencil,
        Self::RedBook,
        Self::YellowBook,
        Self::Sleep,
        Self::Power,
        Self::People,
        Self::Medicine,
        Self::Talk,
        Self::Heart,
        Self::Vehicle,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Computer => "COMPUTER",
            Self::Food => "FOOD",
            Self::Pencil => "PENCIL",
            Self::RedBook => "RED_BOOK",
            Self::YellowBook => "YELLOW_BOOK",
            Self::Sleep => "SLEEP",
            Self::Power => "POWER",
            Self::People => "PEOPLE",
            Self::Medicine => "MEDICINE",
            Self::Talk => "TALK",
            Self::Heart => "HEART",
            Self::Vehicle => "VEHICLE",
        }
    }

    /// Reads a stored category name.
    pub fn from_stored(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.as_str() == value)
    }

    /// Reads an optional category column; `what` names the row in the error.
    ///
    /// # Returns
    /// - `Err(AppError::InternalError)` - The column holds an unknown name
    pub fn from_column(value: Option<String>, what: &str) -> Result<Option<Self>, AppError> {
        value
            .map(|name| {
                Self::from_stored(&name).ok_or_else(|| {
                    AppError::InternalError(format!("{what} has unknown category {name}"))
                })
            })
            .transpose()
    }

    pub fn from_dto(dto: PlanCategoryDto) -> Self {
        match dto {
            PlanCategoryDto::Computer => Self::Computer,
            PlanCategoryDto::Food => Self::Food,
            PlanCategoryDto::Pencil => Self::Pencil,
            PlanCategoryDto::RedBook => Self::RedBook,
            PlanCategoryDto::YellowBook => Self::YellowBook,
            PlanCategoryDto::Sleep => Self::Sleep,
            PlanCategoryDto::Power => Self::Power,
            PlanCategoryDto::People => Self::People,
            PlanCategoryDto::Medicine => Self::Medicine,
            PlanCategoryDto::Talk => Self::Talk,
            PlanCategoryDto::Heart => Self::Heart,
            PlanCategoryDto::Vehicle => Self::Vehicle,
        }
    }

    pub fn into_dto(self) -> PlanCategoryDto {
        match self {
            Self::Computer => PlanCategoryDto::Computer,
            Self::Food => PlanCategoryDto::Food,
            Self::Pencil => PlanCategoryDto::Pencil,
            Self::RedBook => PlanCategoryDto::RedBook,
            Self::YellowBook => PlanCategoryDto::YellowBook,
            Self::Sleep => PlanCategoryDto::Sleep,
            Self::Power => PlanCategoryDto::Power,
            Self::People => PlanCategoryDto::People,
            Self::Medicine => PlanCategoryDto::Medicine,
            Self::Talk => PlanCategoryDto::Talk,
            Self::Heart => PlanCategoryDto::Heart,
            Self::Vehicle => PlanCategoryDto::Vehicle,
        }
    }
}

pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// Parses an optional `HH:mm` request field.
pub fn parse_time(time: Option<&str>) -> Result<Option<NaiveTime>, AppError> {
    time.map(|time| NaiveTime::parse_from_str(time, TIME_FORMAT))
        .transpose()
        .map_err(|_| AppError::validation("time must be formatted as HH:mm"))
}

/// Checks an optional `#RRGGBB` request field.
pub fn check_color(color: Option<&str>) -> Result<(), AppError> {
    match color {
        Some(color) if !validate::is_hex_color(color) => {
            Err(AppError::validation("color must be formatted as #RRGGBB"))
        }
        _ => Ok(()),
    }
}
