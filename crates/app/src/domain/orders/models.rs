//! Order Models

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Raised when a stored or submitted value is not one of the known variants.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind}: {value}")]
pub struct UnknownValue {
    pub kind: &'static str,
    pub value: String,
}

/// Cities the store delivers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Hurghada,
    Cairo,
    Alexandria,
    Giza,
    SharmElSheikh,
    Luxor,
    Aswan,
    PortSaid,
    Suez,
    Mansoura,
    Tanta,
    Ismailia,
    Faiyum,
    Zagazig,
    Damietta,
    Minya,
    Sohag,
    BeniSuef,
    Qena,
    MarsaAlam,
    ElGouna,
    Dahab,
    Safaga,
}

impl City {
    /// Every serviceable city, in the order the checkout form lists them.
    pub const ALL: [Self; 23] = [
        Self::Hurghada,
        Self::Cairo,
        Self::Alexandria,
        Self::Giza,
        Self::SharmElSheikh,
        Self::Luxor,
        Self::Aswan,
        Self::PortSaid,
        Self::Suez,
        Self::Mansoura,
        Self::Tanta,
        Self::Ismailia,
        Self::Faiyum,
        Self::Zagazig,
        Self::Damietta,
        Self::Minya,
        Self::Sohag,
        Self::BeniSuef,
        Self::Qena,
        Self::MarsaAlam,
        Self::ElGouna,
        Self::Dahab,
        Self::Safaga,
    ];

    /// Display and storage name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hurghada => "Hurghada",
            Self::Cairo => "Cairo",
            Self::Alexandria => "Alexandria",
            Self::Giza => "Giza",
            Self::SharmElSheikh => "Sharm El Sheikh",
            Self::Luxor => "Luxor",
            Self::Aswan => "Aswan",
            Self::PortSaid => "Port Said",
            Self::Suez => "Suez",
            Self::Mansoura => "Mansoura",
            Self::Tanta => "Tanta",
            Self::Ismailia => "Ismailia",
            Self::Faiyum => "Faiyum",
            Self::Zagazig => "Zagazig",
            Self::Damietta => "Damietta",
            Self::Minya => "Minya",
            Self::Sohag => "Sohag",
            Self::BeniSuef => "Beni Suef",
            Self::Qena => "Qena",
            Self::MarsaAlam => "Marsa Alam",
            Self::ElGouna => "El Gouna",
            Self::Dahab => "Dahab",
            Self::Safaga => "Safaga",
        }
    }
}

impl FromStr for City {
    type Err = UnknownValue;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|city| city.as_str() == value)
            .ok_or_else(|| UnknownValue {
                kind: "city",
                value: value.to_string(),
            })
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Delivery time window chosen at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeliveryPeriod {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl DeliveryPeriod {
    pub const ALL: [Self; 4] = [Self::Morning, Self::Afternoon, Self::Evening, Self::Night];

    /// Storage value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
            Self::Night => "night",
        }
    }

    /// Human readable window.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Morning => "Morning (9:00 AM - 12:00 PM)",
            Self::Afternoon => "Afternoon (12:00 PM - 4:00 PM)",
            Self::Evening => "Evening (4:00 PM - 8:00 PM)",
            Self::Night => "Night (8:00 PM - 11:00 PM)",
        }
    }
}

impl FromStr for DeliveryPeriod {
    type Err = UnknownValue;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|period| period.as_str() == value)
            .ok_or_else(|| UnknownValue {
                kind: "delivery period",
                value: value.to_string(),
            })
    }
}

/// Fulfilment status. New orders start as [`OrderStatus::Pending`].
///
/// Any status may be set from any other; the dashboard does not enforce a workflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [Self; 6] = [
        Self::Pending,
        Self::Confirmed,
        Self::Processing,
        Self::Shipped,
        Self::Delivered,
        Self::Cancelled,
    ];

    /// Storage value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::Processing => "PROCESSING",
            Self::Shipped => "SHIPPED",
            Self::Delivered => "DELIVERED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl FromStr for OrderStatus {
    type Err = UnknownValue;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| UnknownValue {
                kind: "order status",
                value: value.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cities_parse_from_display_names() {
        assert_eq!("Sharm El Sheikh".parse(), Ok(City::SharmElSheikh), "multi-word city");
        assert_eq!("Hurghada".parse(), Ok(City::Hurghada), "single-word city");
    }

    #[test]
    fn unknown_city_is_rejected() {
        let result = "Atlantis".parse::<City>();

        assert_eq!(
            result,
            Err(UnknownValue {
                kind: "city",
                value: "Atlantis".to_string()
            }),
            "unknown city should be rejected"
        );
    }

    #[test]
    fn city_names_are_unique() {
        let mut names: Vec<&str> = City::ALL.iter().map(|city| city.as_str()).collect();

        names.sort_unstable();
        names.dedup();

        assert_eq!(names.len(), City::ALL.len(), "city names should be unique");
    }

    #[test]
    fn delivery_periods_have_labels() {
        assert_eq!(
            DeliveryPeriod::Night.label(),
            "Night (8:00 PM - 11:00 PM)",
            "night label mismatch"
        );
        assert_eq!("evening".parse(), Ok(DeliveryPeriod::Evening), "evening should parse");
    }

    #[test]
    fn statuses_are_upper_case() {
        for status in OrderStatus::ALL {
            assert_eq!(
                status.as_str().parse(),
                Ok(status),
                "{status:?} should parse back"
            );
        }

        assert!("pending".parse::<OrderStatus>().is_err(), "lower case is not a status");
    }
}
