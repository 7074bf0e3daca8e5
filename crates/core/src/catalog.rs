//! Unit catalog offered per plan
//!
//! Listing a unit here is advisory only. The backend decides whether a
//! conversion is allowed and answers 402 when it is not.

use std::fmt;

use crate::state::Plan;

/// Length units, Free tier
pub const FREE_LENGTH: &[&str] = &["mm", "cm", "m", "km"];
/// Length units added by Pro
pub const PRO_LENGTH: &[&str] = &["in", "ft", "yd", "mi", "nm", "um"];
/// Mass units, Free tier
pub const FREE_MASS: &[&str] = &["mg", "g", "kg"];
/// Mass units added by Pro
pub const PRO_MASS: &[&str] = &["oz", "lb", "ton"];
/// Temperature units (all plans)
pub const TEMPERATURE: &[&str] = &["C", "F", "K"];
/// Area units (Pro only)
pub const PRO_AREA: &[&str] = &["cm2", "m2", "km2", "ft2", "acre"];
/// Volume units (Pro only)
pub const PRO_VOLUME: &[&str] = &["ml", "l", "m3", "ft3", "gal"];
/// Time units (Pro only)
pub const PRO_TIME: &[&str] = &["ms", "s", "min", "h", "day"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitCategory {
    Length,
    Mass,
    Temperature,
    Area,
    Volume,
    Time,
}

impl UnitCategory {
    pub const ALL: [UnitCategory; 6] = [
        UnitCategory::Length,
        UnitCategory::Mass,
        UnitCategory::Temperature,
        UnitCategory::Area,
        UnitCategory::Volume,
        UnitCategory::Time,
    ];

    /// Units of this category offered on `plan`.
    pub fn units(self, plan: Plan) -> Vec<&'static str> {
        let pro = plan == Plan::Pro;
        let (free, extra): (&[&str], &[&str]) = match self {
            UnitCategory::Length => (FREE_LENGTH, PRO_LENGTH),
            UnitCategory::Mass => (FREE_MASS, PRO_MASS),
            UnitCategory::Temperature => (TEMPERATURE, &[]),
            UnitCategory::Area => (&[], PRO_AREA),
            UnitCategory::Volume => (&[], PRO_VOLUME),
            UnitCategory::Time => (&[], PRO_TIME),
        };
        let mut units = free.to_vec();
        if pro {
            units.extend_from_slice(extra);
        }
        units
    }
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UnitCategory::Length => "length",
            UnitCategory::Mass => "mass",
            UnitCategory::Temperature => "temperature",
            UnitCategory::Area => "area",
            UnitCategory::Volume => "volume",
            UnitCategory::Time => "time",
        };
        f.write_str(name)
    }
}

/// The units a plan may pick from, grouped by category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitCatalog {
    pub plan: Plan,
    pub categories: Vec<(UnitCategory, Vec<&'static str>)>,
}

impl UnitCatalog {
    /// Builds the catalog for `plan`. Categories with no units are omitted.
    pub fn for_plan(plan: Plan) -> Self {
        let categories = UnitCategory::ALL
            .iter()
            .map(|c| (*c, c.units(plan)))
            .filter(|(_, units)| !units.is_empty())
            .collect();
        Self { plan, categories }
    }

    /// All offered units in category order, without duplicates.
    pub fn all_units(&self) -> Vec<&'static str> {
        let mut seen = Vec::new();
        for (_, units) in &self.categories {
            for unit in units {
                if !seen.contains(unit) {
                    seen.push(*unit);
                }
            }
        }
        seen
    }

    pub fn offers(&self, unit: &str) -> bool {
        self.category_of(unit).is_some()
    }

    pub fn category_of(&self, unit: &str) -> Option<UnitCategory> {
        self.categories
            .iter()
            .find(|(_, units)| units.iter().any(|u| *u == unit))
            .map(|(c, _)| *c)
    }
}
